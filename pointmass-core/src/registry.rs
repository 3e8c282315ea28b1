//! Associations between particles and the force generators acting on them.

use crate::arena::{Arena, GeneratorHandle, ParticleHandle};
use crate::error::PhysicsError;
use crate::force::ForceGenerator;
use crate::particle::Particle;
use log::debug;

/// One (particle, generator) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryEntry {
    pub particle: ParticleHandle,
    pub generator: GeneratorHandle,
}

/// Ordered list of associations.
///
/// The registry does not own particles or generators, it only stores
/// handles into the arenas passed to [`update_forces`](Self::update_forces).
/// Entries are applied in registration order. Duplicate entries are kept and
/// each one applies its force.
#[derive(Debug, Default, Clone)]
pub struct ForceRegistry {
    entries: Vec<RegistryEntry>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, particle: ParticleHandle, generator: GeneratorHandle) {
        debug!("registering {} with {}", particle, generator);
        self.entries.push(RegistryEntry {
            particle,
            generator,
        });
    }

    /// Remove the first entry matching both handles. Returns whether an
    /// entry was removed; a missing pair is not an error.
    pub fn remove_entry(&mut self, particle: ParticleHandle, generator: GeneratorHandle) -> bool {
        let target = RegistryEntry {
            particle,
            generator,
        };
        match self.entries.iter().position(|entry| *entry == target) {
            Some(i) => {
                self.entries.remove(i);
                debug!("unregistered {} from {}", particle, generator);
                true
            }
            None => false,
        }
    }

    /// Drop every entry that names `particle`
    pub fn remove_particle(&mut self, particle: ParticleHandle) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.particle != particle);
        before - self.entries.len()
    }

    /// Drop every entry that names `generator`
    pub fn remove_generator(&mut self, generator: GeneratorHandle) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.generator != generator);
        before - self.entries.len()
    }

    /// Forget all associations. Particles and generators are untouched.
    pub fn clear(&mut self) {
        debug!("clearing {} registry entries", self.entries.len());
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Ask every generator to apply its force to its particle.
    ///
    /// All handles are checked before any force is applied, so a stale handle
    /// leaves every accumulator as it was.
    pub fn update_forces(
        &self,
        dt: f32,
        particles: &mut Arena<Particle>,
        generators: &mut Arena<Box<dyn ForceGenerator>>,
    ) -> Result<(), PhysicsError> {
        for entry in &self.entries {
            if !particles.contains(entry.particle.0) {
                return Err(PhysicsError::StaleParticle(entry.particle));
            }
            if !generators.contains(entry.generator.0) {
                return Err(PhysicsError::StaleGenerator(entry.generator));
            }
        }

        for entry in &self.entries {
            let particle = particles
                .get_mut(entry.particle.0)
                .ok_or(PhysicsError::StaleParticle(entry.particle))?;
            let generator = generators
                .get_mut(entry.generator.0)
                .ok_or(PhysicsError::StaleGenerator(entry.generator))?;
            generator.update_force(particle, dt);
        }

        Ok(())
    }
}
