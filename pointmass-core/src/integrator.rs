use crate::error::PhysicsError;
use crate::world::World;
use log::trace;

/// Step the world forward by dt.
///
/// Two phases: every registered generator adds its force, then every particle
/// integrates (semi-implicit Euler with drag) and clears its accumulator.
/// No particle integrates before the force phase has finished.
pub fn step(world: &mut World, dt: f32) -> Result<(), PhysicsError> {
    world
        .registry
        .update_forces(dt, &mut world.particles, &mut world.generators)?;

    for (_, particle) in world.particles.iter_mut() {
        particle.integrate(dt);
    }

    world.time += dt;
    trace!("stepped to t = {}", world.time);
    Ok(())
}
