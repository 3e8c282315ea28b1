pub mod arena;
pub mod error;
pub mod force;
pub mod gravity;
pub mod integrator;
pub mod particle;
pub mod registry;
pub mod runtime;
pub mod scenario;
pub mod vector;
pub mod world;

pub use arena::{GeneratorHandle, ParticleHandle};
pub use error::{PhysicsError, ScenarioError};
pub use force::ForceGenerator;
pub use gravity::{GravityForceGenerator, DEFAULT_GRAVITY};
pub use particle::{Particle, DEFAULT_DRAG, DEFAULT_MASS};
pub use registry::{ForceRegistry, RegistryEntry};
pub use runtime::{
    build_simulation_context, build_world, get_particle_states, run_scenario,
    run_scenario_source, step_simulation, NameTable, ParticleState, SimulationContext,
    SimulationResult,
};
pub use scenario::Scenario;
pub use vector::Vector2;
pub use world::World;
