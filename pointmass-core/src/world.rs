use crate::arena::{Arena, GeneratorHandle, ParticleHandle};
use crate::error::PhysicsError;
use crate::force::ForceGenerator;
use crate::integrator;
use crate::particle::Particle;
use crate::registry::ForceRegistry;
use log::debug;
use std::fmt;

/// The physics world: owns particles and force generators and the registry
/// that links them.
pub struct World {
    pub(crate) particles: Arena<Particle>,
    pub(crate) generators: Arena<Box<dyn ForceGenerator>>,
    pub(crate) registry: ForceRegistry,
    pub(crate) time: f32,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("particles", &self.particles.len())
            .field("generators", &self.generators.len())
            .field("registry", &self.registry.len())
            .field("time", &self.time)
            .finish()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            particles: Arena::new(),
            generators: Arena::new(),
            registry: ForceRegistry::new(),
            time: 0.0,
        }
    }

    pub fn add_particle(&mut self, particle: Particle) -> ParticleHandle {
        let handle = ParticleHandle(self.particles.insert(particle));
        debug!("added {}", handle);
        handle
    }

    /// Remove a particle together with every association naming it
    pub fn remove_particle(&mut self, handle: ParticleHandle) -> Option<Particle> {
        let particle = self.particles.remove(handle.0)?;
        let dropped = self.registry.remove_particle(handle);
        debug!("removed {} and {} registry entries", handle, dropped);
        Some(particle)
    }

    pub fn particle(&self, handle: ParticleHandle) -> Option<&Particle> {
        self.particles.get(handle.0)
    }

    pub fn particle_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle> {
        self.particles.get_mut(handle.0)
    }

    /// Live particles in storage order
    pub fn particles(&self) -> impl Iterator<Item = (ParticleHandle, &Particle)> {
        self.particles
            .iter()
            .map(|(index, particle)| (ParticleHandle(index), particle))
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn add_generator<G>(&mut self, generator: G) -> GeneratorHandle
    where
        G: ForceGenerator + 'static,
    {
        let handle = GeneratorHandle(self.generators.insert(Box::new(generator)));
        debug!("added {}", handle);
        handle
    }

    /// Remove a generator together with every association naming it
    pub fn remove_generator(&mut self, handle: GeneratorHandle) -> Option<Box<dyn ForceGenerator>> {
        let generator = self.generators.remove(handle.0)?;
        let dropped = self.registry.remove_generator(handle);
        debug!("removed {} and {} registry entries", handle, dropped);
        Some(generator)
    }

    pub fn has_generator(&self, handle: GeneratorHandle) -> bool {
        self.generators.contains(handle.0)
    }

    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Make `generator` act on `particle` every step.
    ///
    /// Both handles must be live. Registering the same pair twice applies the
    /// force twice.
    pub fn register(
        &mut self,
        particle: ParticleHandle,
        generator: GeneratorHandle,
    ) -> Result<(), PhysicsError> {
        if !self.particles.contains(particle.0) {
            return Err(PhysicsError::StaleParticle(particle));
        }
        if !self.generators.contains(generator.0) {
            return Err(PhysicsError::StaleGenerator(generator));
        }
        self.registry.add_entry(particle, generator);
        Ok(())
    }

    /// Remove one association. Returns false when the pair was not registered.
    pub fn unregister(&mut self, particle: ParticleHandle, generator: GeneratorHandle) -> bool {
        self.registry.remove_entry(particle, generator)
    }

    pub fn registry(&self) -> &ForceRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ForceRegistry {
        &mut self.registry
    }

    /// Run only the force phase: every registered generator adds its force
    pub fn update_forces(&mut self, dt: f32) -> Result<(), PhysicsError> {
        self.registry
            .update_forces(dt, &mut self.particles, &mut self.generators)
    }

    /// Elapsed simulation time
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance the world by one step of `dt`
    pub fn step(&mut self, dt: f32) -> Result<(), PhysicsError> {
        integrator::step(self, dt)
    }

    /// Advance the world by `steps` steps of `dt`
    pub fn run(&mut self, dt: f32, steps: usize) -> Result<(), PhysicsError> {
        for _ in 0..steps {
            self.step(dt)?;
        }
        Ok(())
    }
}
