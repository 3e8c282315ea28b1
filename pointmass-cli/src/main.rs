mod logging;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pointmass_core::{
    build_simulation_context, get_particle_states, step_simulation, ParticleState, Scenario,
};
use std::path::PathBuf;

/// Built-in scenario for `pointmass demo`
const DEMO_SCENARIO: &str = r#"
[simulate]
dt = 0.05
steps = 40

[[particles]]
name = "ball"
position = [0.0, 20.0]
velocity = [2.0, 0.0]
mass = 1.0

[[particles]]
name = "boulder"
position = [5.0, 20.0]
mass = 500.0

[[particles]]
name = "pivot"
position = [10.0, 20.0]
immovable = true

[[generators]]
name = "earth"
kind = "gravity"

[[forces]]
particle = "ball"
generator = "earth"

[[forces]]
particle = "boulder"
generator = "earth"
"#;

#[derive(Parser)]
#[command(name = "pointmass")]
#[command(about = "Point-mass particle simulator", long_about = None)]
struct Cli {
    /// Log level, e.g. "debug" or "pointmass_core=trace". Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file
    Run {
        /// Path to the TOML scenario
        file: PathBuf,

        /// Override the number of steps
        #[arg(long)]
        steps: Option<usize>,

        /// Override the step size in seconds
        #[arg(long)]
        dt: Option<f32>,

        /// Also print states every N steps
        #[arg(long)]
        every: Option<usize>,
    },
    /// Run the built-in falling objects scenario
    Demo {
        /// Also print states every N steps
        #[arg(long)]
        every: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::setup(cli.log_level.as_deref())?;

    match cli.command {
        Commands::Run {
            file,
            steps,
            dt,
            every,
        } => {
            let mut scenario = Scenario::from_path(&file)
                .with_context(|| format!("loading {}", file.display()))?;
            if let Some(steps) = steps {
                scenario.simulate.steps = steps;
            }
            if let Some(dt) = dt {
                scenario.simulate.dt = dt;
            }
            run(&scenario, every)
        }
        Commands::Demo { every } => {
            let scenario = Scenario::from_toml_str(DEMO_SCENARIO)?;
            run(&scenario, every)
        }
    }
}

fn run(scenario: &Scenario, every: Option<usize>) -> Result<()> {
    if !(scenario.simulate.dt > 0.0) {
        bail!("dt must be positive, got {}", scenario.simulate.dt);
    }
    if every == Some(0) {
        bail!("--every must be at least 1");
    }

    let mut ctx = build_simulation_context(scenario)?;
    log::info!(
        "simulating {} particles for {} steps of {}s",
        ctx.world.particle_count(),
        ctx.steps,
        ctx.dt
    );

    while !ctx.is_finished() {
        step_simulation(&mut ctx)?;
        if let Some(every) = every {
            if ctx.current_step % every == 0 && !ctx.is_finished() {
                println!("-- step {} (t = {:.4})", ctx.current_step, ctx.world.time());
                print_states(&get_particle_states(&ctx));
            }
        }
    }

    println!("== step {} (t = {:.4})", ctx.current_step, ctx.world.time());
    print_states(&get_particle_states(&ctx));
    Ok(())
}

fn print_states(states: &[ParticleState]) {
    for state in states {
        let energy = match state.kinetic_energy {
            Some(ke) => format!("{:.6}", ke),
            None => "immovable".to_string(),
        };
        println!(
            "{:<12} pos = ({:.6}, {:.6})  vel = ({:.6}, {:.6})  ke = {}",
            state.name,
            state.position.x,
            state.position.y,
            state.velocity.x,
            state.velocity.y,
            energy
        );
    }
}
