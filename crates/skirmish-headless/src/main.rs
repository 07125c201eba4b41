//! Headless fleet battle runner.
//!
//! ```bash
//! cargo run -p skirmish-headless -- --scenario duel --seconds 10 --seed 7
//! cargo run -p skirmish-headless -- --config battle.json --realtime -v
//! ```
//!
//! Logs go to stderr; the JSON summary goes to stdout.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use skirmish_core::enums::ScenarioId;
use skirmish_headless::runner::{run_battle, RunOptions};
use skirmish_sim::{scenario, Scenario, SimConfig, SimulationEngine};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Skirmish,
    Duel,
}

impl From<ScenarioArg> for ScenarioId {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Skirmish => ScenarioId::Skirmish,
            ScenarioArg::Duel => ScenarioId::Duel,
        }
    }
}

/// Run a fleet battle without a renderer and print a JSON summary.
#[derive(Parser, Debug)]
#[command(name = "skirmish-headless")]
struct Cli {
    /// JSON simulation config; missing fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in battle layout
    #[arg(long, value_enum, default_value_t = ScenarioArg::Skirmish)]
    scenario: ScenarioArg,

    /// JSON battle layout, used instead of --scenario
    #[arg(long)]
    scenario_file: Option<PathBuf>,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,

    /// Milliseconds per frame
    #[arg(long, default_value_t = 16.6)]
    frame_ms: f64,

    /// Pace frames to wall-clock time
    #[arg(long)]
    realtime: bool,

    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Log spawns, docking and other per-unit events
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let battle: Scenario = match &cli.scenario_file {
        Some(path) => Scenario::load(path)?,
        None => scenario::build(cli.scenario.into()),
    };

    info!(
        scenario = %battle.name,
        seconds = cli.seconds,
        frame_ms = cli.frame_ms,
        seed = ?config.seed,
        "starting headless run"
    );

    let options = RunOptions {
        seconds: cli.seconds,
        frame_ms: cli.frame_ms,
        realtime: cli.realtime,
    };
    let mut engine = SimulationEngine::new(config);
    let summary = run_battle(&mut engine, &battle, &options);

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
