//! Point mass with a force accumulator, advanced by semi-implicit Euler.

use crate::error::PhysicsError;
use crate::vector::Vector2;

/// Drag applied when none is given
pub const DEFAULT_DRAG: f32 = 0.9995;

/// Mass used by [`Particle::default`], in kg
pub const DEFAULT_MASS: f32 = 10.0;

/// A particle in the physics simulation.
///
/// Mass is stored as its inverse so integration can multiply instead of
/// divide. An inverse mass of zero means infinite mass: the particle never
/// moves and force generators that need a finite mass skip it.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Vector2,
    velocity: Vector2,
    acceleration: Vector2,
    force_accum: Vector2,
    drag: f32,
    inverse_mass: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vector2::ZERO,
            velocity: Vector2::ZERO,
            acceleration: Vector2::ZERO,
            force_accum: Vector2::ZERO,
            drag: DEFAULT_DRAG,
            inverse_mass: 1.0 / DEFAULT_MASS,
        }
    }
}

impl Particle {
    /// Create a particle with default drag and the given mass.
    ///
    /// Fails with [`PhysicsError::InvalidMass`] unless `mass > 0`.
    pub fn new(
        position: Vector2,
        velocity: Vector2,
        acceleration: Vector2,
        mass: f32,
    ) -> Result<Self, PhysicsError> {
        let mut particle = Self {
            position,
            velocity,
            acceleration,
            ..Self::default()
        };
        particle.set_mass(mass)?;
        Ok(particle)
    }

    /// A particle with infinite mass resting at `position`
    pub fn immovable(position: Vector2) -> Self {
        Self {
            position,
            inverse_mass: 0.0,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Constant acceleration applied on top of accumulated forces
    pub fn acceleration(&self) -> Vector2 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vector2) {
        self.acceleration = acceleration;
    }

    /// Sum of the forces added since the last integration
    pub fn force_accumulator(&self) -> Vector2 {
        self.force_accum
    }

    pub fn drag(&self) -> f32 {
        self.drag
    }

    /// Set the per-second velocity retention factor. 1.0 disables damping.
    pub fn set_drag(&mut self, drag: f32) -> Result<(), PhysicsError> {
        if !(drag > 0.0 && drag <= 1.0) {
            return Err(PhysicsError::InvalidDrag(drag));
        }
        self.drag = drag;
        Ok(())
    }

    /// Set the mass. Non-positive (or NaN) masses are rejected and leave the
    /// particle unchanged.
    pub fn set_mass(&mut self, mass: f32) -> Result<(), PhysicsError> {
        if !(mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        self.inverse_mass = 1.0 / mass;
        Ok(())
    }

    /// Mass in kg, or [`PhysicsError::InfiniteMass`] for an immovable particle
    pub fn mass(&self) -> Result<f32, PhysicsError> {
        if !self.has_finite_mass() {
            return Err(PhysicsError::InfiniteMass);
        }
        Ok(1.0 / self.inverse_mass)
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    /// Set the inverse mass directly. Zero makes the particle immovable.
    /// No validation is done here.
    pub fn set_inverse_mass(&mut self, inverse_mass: f32) {
        self.inverse_mass = inverse_mass;
    }

    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > 0.0
    }

    /// `0.5 * m * |v|^2`
    pub fn kinetic_energy(&self) -> Result<f32, PhysicsError> {
        Ok(0.5 * self.mass()? * self.velocity.square_magnitude())
    }

    pub fn add_force(&mut self, force: Vector2) {
        self.force_accum += force;
    }

    pub fn clear_forces(&mut self) {
        self.force_accum.clear();
    }

    /// Advance the particle by `dt` seconds and clear the force accumulator.
    ///
    /// Position moves with the velocity from the start of the step, then the
    /// velocity picks up `acceleration + force * inverse_mass` and is damped
    /// by `drag^dt`. Immovable particles keep their position and velocity;
    /// only their accumulator is cleared. `dt` is not validated, callers pass
    /// a positive step.
    pub fn integrate(&mut self, dt: f32) {
        if self.inverse_mass <= 0.0 {
            self.clear_forces();
            return;
        }

        self.position.add_scaled_vector(self.velocity, dt);

        let mut resulting_acc = self.acceleration;
        resulting_acc.add_scaled_vector(self.force_accum, self.inverse_mass);
        self.velocity.add_scaled_vector(resulting_acc, dt);

        self.velocity *= self.drag.powf(dt);

        self.clear_forces();
    }
}
