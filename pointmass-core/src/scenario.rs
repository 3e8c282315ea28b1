//! Scenario files: a TOML description of particles, force generators and the
//! associations between them.
//!
//! ```toml
//! [simulate]
//! dt = 0.01
//! steps = 100
//!
//! [[particles]]
//! name = "ball"
//! position = [0.0, 10.0]
//! velocity = [1.0, 0.0]
//! mass = 2.0               # default 10.0
//! drag = 0.999             # default 0.9995
//! immovable = false        # true gives the particle infinite mass
//!
//! [[generators]]
//! name = "earth"
//! kind = "gravity"
//! gravity = [0.0, -9.81]   # default (0, -9.81)
//!
//! [[forces]]
//! particle = "ball"
//! generator = "earth"
//! ```

use crate::error::ScenarioError;
use crate::gravity::DEFAULT_GRAVITY;
use crate::particle::{DEFAULT_DRAG, DEFAULT_MASS};
use crate::vector::Vector2;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level scenario document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub simulate: SimulateConfig,
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
    #[serde(default)]
    pub generators: Vec<GeneratorConfig>,
    #[serde(default)]
    pub forces: Vec<ForceConfig>,
}

/// Fixed step size and number of steps to run
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulateConfig {
    pub dt: f32,
    pub steps: usize,
}

/// Initial state of one particle
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParticleConfig {
    pub name: String,
    #[serde(default)]
    pub position: Vector2,
    #[serde(default)]
    pub velocity: Vector2,
    #[serde(default)]
    pub acceleration: Vector2,
    #[serde(default = "default_mass")]
    pub mass: f32,
    #[serde(default = "default_drag")]
    pub drag: f32,
    #[serde(default)]
    pub immovable: bool,
}

/// A named force generator, selected by `kind`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum GeneratorConfig {
    Gravity {
        name: String,
        #[serde(default = "default_gravity")]
        gravity: Vector2,
    },
}

impl GeneratorConfig {
    pub fn name(&self) -> &str {
        match self {
            Self::Gravity { name, .. } => name,
        }
    }
}

/// Makes `generator` act on `particle`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForceConfig {
    pub particle: String,
    pub generator: String,
}

fn default_mass() -> f32 {
    DEFAULT_MASS
}

fn default_drag() -> f32 {
    DEFAULT_DRAG
}

fn default_gravity() -> Vector2 {
    DEFAULT_GRAVITY
}

impl Scenario {
    pub fn from_toml_str(source: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let scenario = Scenario::from_toml_str(
            r#"
[simulate]
dt = 0.5
steps = 2

[[particles]]
name = "a"

[[generators]]
name = "g"
kind = "gravity"
"#,
        )
        .unwrap();

        let p = &scenario.particles[0];
        assert_eq!(p.position, Vector2::ZERO);
        assert_eq!(p.mass, DEFAULT_MASS);
        assert_eq!(p.drag, DEFAULT_DRAG);
        assert!(!p.immovable);
        assert_eq!(
            scenario.generators[0],
            GeneratorConfig::Gravity {
                name: "g".to_string(),
                gravity: DEFAULT_GRAVITY,
            }
        );
        assert!(scenario.forces.is_empty());
    }

    #[test]
    fn test_unknown_generator_kind_is_rejected() {
        let err = Scenario::from_toml_str(
            r#"
[simulate]
dt = 0.5
steps = 2

[[generators]]
name = "g"
kind = "tractor_beam"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }
}
