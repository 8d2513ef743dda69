//! Fabian Strategy Simulator
//!
//! Runs one pursuit/attrition scenario from the command line and reports how
//! the pursuer's resource held up.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pursuit_core::output::RunOutputs;
use pursuit_core::{RunSummary, ScenarioConfig, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "fabian_sim")]
#[command(about = "A strong pursuer against a harassing, attrition-seeking evader")]
struct Args {
    /// Scenario file (TOML); defaults to scenario.toml if present. Missing keys use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(long)]
    steps: Option<u64>,

    /// Number of pursuers
    #[arg(long)]
    pursuers: Option<usize>,

    /// Number of evaders
    #[arg(long)]
    evaders: Option<usize>,

    /// Evader standoff distance
    #[arg(long)]
    safe_distance: Option<f64>,

    /// Pursuer resource lost per tick to upkeep
    #[arg(long)]
    decay_rate: Option<f64>,

    /// Resource an evader strips per tick of harassment
    #[arg(long)]
    harass_power: Option<f64>,

    /// Directory for history, events, final agents and summary
    #[arg(long)]
    output: Option<PathBuf>,

    /// Interval between progress log lines (in ticks)
    #[arg(long, default_value_t = 25)]
    report_interval: u64,
}

impl Args {
    /// Applies command line overrides on top of the scenario file.
    fn scenario(&self) -> Result<ScenarioConfig, pursuit_core::ConfigError> {
        let mut config = match &self.config {
            Some(path) => ScenarioConfig::load(path)?,
            None => ScenarioConfig::load_or_default()?,
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(pursuers) = self.pursuers {
            config.pursuer_count = pursuers;
        }
        if let Some(evaders) = self.evaders {
            config.evader_count = evaders;
        }
        if let Some(safe_distance) = self.safe_distance {
            config.safe_distance = safe_distance;
        }
        if let Some(decay_rate) = self.decay_rate {
            config.decay_rate = decay_rate;
        }
        if let Some(harass_power) = self.harass_power {
            config.harass_power = harass_power;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fabian_sim=info,pursuit_core=info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            info!(
                ticks = summary.ticks,
                final_mean = summary.final_mean,
                min_mean = summary.min_mean,
                exhausted_at = ?summary.exhausted_at,
                outcome = ?summary.outcome,
                "Simulation complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<RunSummary, Box<dyn std::error::Error>> {
    let config = args.scenario()?;
    info!(seed = config.seed, steps = config.steps, "Starting simulation");

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut sim = Simulation::new(&config, &mut rng)?;

    let mut outputs = match &args.output {
        Some(dir) => Some(RunOutputs::create(dir)?),
        None => None,
    };

    for tick in 0..config.steps {
        sim.step();
        let events = sim.drain_events();
        if let Some(outputs) = outputs.as_mut() {
            outputs.log_events(&events)?;
        }

        if args.report_interval > 0 && tick % args.report_interval == 0 {
            info!(
                tick,
                mean_resource = sim.mean_pursuer_resource(),
                events = events.len(),
                "Progress"
            );
        }
    }

    let summary = RunSummary::from_history(sim.history(), sim.tick());
    if let Some(outputs) = outputs {
        let dir = outputs.dir().to_path_buf();
        outputs.finish(&sim, &summary)?;
        info!("Wrote run outputs to {}", dir.display());
    }

    Ok(summary)
}
