//! Error types for the physics core and the scenario layer.

use crate::arena::{GeneratorHandle, ParticleHandle};
use thiserror::Error;

/// Failures raised by particles, vectors and the force registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("mass must be positive, got {0}")]
    InvalidMass(f32),

    #[error("particle has infinite mass")]
    InfiniteMass,

    #[error("drag must be in (0, 1], got {0}")]
    InvalidDrag(f32),

    #[error("vector has zero length")]
    ZeroLength,

    #[error("{0} does not refer to a live particle")]
    StaleParticle(ParticleHandle),

    #[error("{0} does not refer to a live force generator")]
    StaleGenerator(GeneratorHandle),
}

/// Failures while loading or building a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("particle '{0}' not found")]
    UnknownParticle(String),

    #[error("force generator '{0}' not found")]
    UnknownGenerator(String),

    #[error("particle '{0}' is declared more than once")]
    DuplicateParticle(String),

    #[error("force generator '{0}' is declared more than once")]
    DuplicateGenerator(String),

    #[error("particle '{name}': {source}")]
    InvalidParticle {
        name: String,
        #[source]
        source: PhysicsError,
    },

    #[error(transparent)]
    Physics(#[from] PhysicsError),
}
