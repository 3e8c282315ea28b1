//! Uniform gravitational field.

use crate::force::ForceGenerator;
use crate::particle::Particle;
use crate::vector::Vector2;

/// Standard gravity, pointing down the negative y axis
pub const DEFAULT_GRAVITY: Vector2 = Vector2::new(0.0, -9.81);

/// Applies `gravity * mass` to every particle with finite mass, so all of
/// them fall with the same acceleration regardless of mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityForceGenerator {
    gravity: Vector2,
}

impl Default for GravityForceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl GravityForceGenerator {
    pub fn new(gravity: Vector2) -> Self {
        Self { gravity }
    }

    pub fn gravity(&self) -> Vector2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.gravity = gravity;
    }
}

impl ForceGenerator for GravityForceGenerator {
    fn update_force(&mut self, particle: &mut Particle, _dt: f32) {
        // Infinite mass particles have no weight to apply
        let Ok(mass) = particle.mass() else {
            return;
        };
        particle.add_force(self.gravity * mass);
    }
}
