//! Operator console for the waste-collection fleet.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use u_fleet::allocation::AllocationEngine;
use u_fleet::config::EngineConfig;
use u_fleet::console::Console;
use u_fleet::scenario::Scenario;

/// Belgaum City waste-collection fleet console.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file with engine settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with areas, roads, vehicles, drivers and requests.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Ledger text file, overriding the configured path.
    #[arg(long)]
    ledger: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(path) = args.ledger {
        config.ledger_path = path;
    }

    let scenario = match &args.scenario {
        Some(path) => Scenario::from_json_file(path)?,
        None => Scenario::belgaum(),
    };
    let (network, fleet, requests) = scenario.build()?;
    let engine = AllocationEngine::new(&network, fleet, requests, config)?;

    let stdin = io::stdin();
    let mut console = Console::new(engine, stdin.lock(), io::stdout());
    console.run()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("{e}");
        process::exit(1);
    }
}
