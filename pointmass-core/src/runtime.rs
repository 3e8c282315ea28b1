use crate::arena::{GeneratorHandle, ParticleHandle};
use crate::error::{PhysicsError, ScenarioError};
use crate::gravity::GravityForceGenerator;
use crate::particle::Particle;
use crate::scenario::{GeneratorConfig, ParticleConfig, Scenario};
use crate::vector::Vector2;
use crate::world::World;
use log::{debug, info, warn};
use std::collections::HashMap;

/// Snapshot of one particle, reported by name
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    pub name: String,
    pub position: Vector2,
    pub velocity: Vector2,
    /// `None` for immovable particles
    pub kinetic_energy: Option<f32>,
}

/// Final result of running a scenario
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub time: f32,
    pub steps: usize,
    pub particles: Vec<ParticleState>,
}

/// Scenario names mapped to world handles, in declaration order
#[derive(Debug, Default, Clone)]
pub struct NameTable {
    particles: Vec<(String, ParticleHandle)>,
    particle_lookup: HashMap<String, ParticleHandle>,
    generator_lookup: HashMap<String, GeneratorHandle>,
}

impl NameTable {
    pub fn particle(&self, name: &str) -> Option<ParticleHandle> {
        self.particle_lookup.get(name).copied()
    }

    pub fn generator(&self, name: &str) -> Option<GeneratorHandle> {
        self.generator_lookup.get(name).copied()
    }

    /// Particle names with their handles, in the order they were declared
    pub fn particles(&self) -> impl Iterator<Item = (&str, ParticleHandle)> {
        self.particles
            .iter()
            .map(|(name, handle)| (name.as_str(), *handle))
    }
}

/// A world built from a scenario, stepped on demand
#[derive(Debug)]
pub struct SimulationContext {
    pub world: World,
    pub names: NameTable,
    pub dt: f32,
    pub steps: usize,
    pub current_step: usize,
}

impl SimulationContext {
    pub fn is_finished(&self) -> bool {
        self.current_step >= self.steps
    }
}

/// Main entry point: build a world from `scenario` and run it to completion
pub fn run_scenario(scenario: &Scenario) -> Result<SimulationResult, ScenarioError> {
    let mut ctx = build_simulation_context(scenario)?;
    info!(
        "running {} particles for {} steps of {}",
        ctx.world.particle_count(),
        ctx.steps,
        ctx.dt
    );
    while !ctx.is_finished() {
        step_simulation(&mut ctx)?;
    }

    Ok(SimulationResult {
        time: ctx.world.time(),
        steps: ctx.current_step,
        particles: get_particle_states(&ctx),
    })
}

/// Parse TOML source and run it
pub fn run_scenario_source(source: &str) -> Result<SimulationResult, ScenarioError> {
    let scenario = Scenario::from_toml_str(source)?;
    run_scenario(&scenario)
}

pub fn build_simulation_context(scenario: &Scenario) -> Result<SimulationContext, ScenarioError> {
    let (world, names) = build_world(scenario)?;
    Ok(SimulationContext {
        world,
        names,
        dt: scenario.simulate.dt,
        steps: scenario.simulate.steps,
        current_step: 0,
    })
}

/// Advance the context by one step
pub fn step_simulation(ctx: &mut SimulationContext) -> Result<(), PhysicsError> {
    ctx.world.step(ctx.dt)?;
    ctx.current_step += 1;
    Ok(())
}

/// Current state of every particle, in declaration order
pub fn get_particle_states(ctx: &SimulationContext) -> Vec<ParticleState> {
    ctx.names
        .particles()
        .filter_map(|(name, handle)| {
            ctx.world.particle(handle).map(|particle| ParticleState {
                name: name.to_string(),
                position: particle.position(),
                velocity: particle.velocity(),
                kinetic_energy: particle.kinetic_energy().ok(),
            })
        })
        .collect()
}

/// Build a World from a parsed Scenario
pub fn build_world(scenario: &Scenario) -> Result<(World, NameTable), ScenarioError> {
    let mut world = World::new();
    let mut names = NameTable::default();

    for decl in &scenario.particles {
        if names.particle_lookup.contains_key(&decl.name) {
            return Err(ScenarioError::DuplicateParticle(decl.name.clone()));
        }
        let particle = build_particle(decl).map_err(|source| ScenarioError::InvalidParticle {
            name: decl.name.clone(),
            source,
        })?;
        let handle = world.add_particle(particle);
        names.particle_lookup.insert(decl.name.clone(), handle);
        names.particles.push((decl.name.clone(), handle));
    }

    for decl in &scenario.generators {
        let name = decl.name();
        if names.generator_lookup.contains_key(name) {
            return Err(ScenarioError::DuplicateGenerator(name.to_string()));
        }
        let handle = match decl {
            GeneratorConfig::Gravity { gravity, .. } => {
                world.add_generator(GravityForceGenerator::new(*gravity))
            }
        };
        names.generator_lookup.insert(name.to_string(), handle);
    }

    for decl in &scenario.forces {
        let particle = names
            .particle(&decl.particle)
            .ok_or_else(|| ScenarioError::UnknownParticle(decl.particle.clone()))?;
        let generator = names
            .generator(&decl.generator)
            .ok_or_else(|| ScenarioError::UnknownGenerator(decl.generator.clone()))?;

        let immovable = world
            .particle(particle)
            .is_some_and(|p| !p.has_finite_mass());
        if immovable {
            warn!(
                "'{}' is immovable, '{}' will have no effect on it",
                decl.particle, decl.generator
            );
        }
        world.register(particle, generator)?;
    }

    debug!(
        "built world with {} particles, {} generators, {} associations",
        world.particle_count(),
        world.generator_count(),
        world.registry().len()
    );
    Ok((world, names))
}

fn build_particle(decl: &ParticleConfig) -> Result<Particle, PhysicsError> {
    let mut particle = if decl.immovable {
        let mut p = Particle::immovable(decl.position);
        p.set_velocity(decl.velocity);
        p.set_acceleration(decl.acceleration);
        p
    } else {
        Particle::new(decl.position, decl.velocity, decl.acceleration, decl.mass)?
    };
    particle.set_drag(decl.drag)?;
    Ok(particle)
}
