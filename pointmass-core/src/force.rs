//! The force-generator contract.

use crate::particle::Particle;

/// Something that can add a force to a particle each step.
///
/// Implementations only call [`Particle::add_force`]; they never integrate
/// and must not depend on the order in which other generators acting on the
/// same particle run. One generator may serve many particles.
pub trait ForceGenerator {
    fn update_force(&mut self, particle: &mut Particle, dt: f32);
}

/// Closures work as ad hoc generators
impl<F> ForceGenerator for F
where
    F: FnMut(&mut Particle, f32),
{
    fn update_force(&mut self, particle: &mut Particle, dt: f32) {
        self(particle, dt)
    }
}
