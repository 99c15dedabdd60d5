//! Prize wheel balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 1000 sessions x 500 spins
//!   cargo run --bin simulate -- -n 200 -s 5000       # long sessions
//!   cargo run --bin simulate -- --seed 42 --json     # reproducible, save JSON
//!   cargo run --bin simulate -- -c wheel.json        # custom wheel

use anyhow::Context;
use clap::Parser;
use spinwheel::simulator::{run_simulation, SimConfig};
use spinwheel::{load_config, WheelConfig};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Monte Carlo balance check for the prize wheel")]
struct Args {
    /// Number of independent sessions
    #[arg(short = 'n', long, default_value_t = 1000)]
    runs: u32,

    /// Spins per session
    #[arg(short, long, default_value_t = 500)]
    spins: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Wheel config JSON (defaults to the built-in party wheel)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quick check: 100 sessions x 200 spins
    #[arg(long)]
    quick: bool,

    /// Save the report as JSON next to the current directory
    #[arg(long)]
    json: bool,

    /// Log every session
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let wheel = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load wheel config {}", path.display()))?,
        None => WheelConfig::default(),
    };

    let mut config = if args.quick {
        SimConfig::quick()
    } else {
        SimConfig {
            num_runs: args.runs,
            spins_per_run: args.spins,
            ..Default::default()
        }
    };
    config.seed = args.seed;
    config.verbosity = if args.verbose { 2 } else { 1 };

    info!(
        runs = config.num_runs,
        spins_per_run = config.spins_per_run,
        seed = ?config.seed,
        "running simulation"
    );
    let report = run_simulation(&wheel, &config).context("simulation failed")?;

    println!("{}", report.to_text());

    if args.json {
        let json = report.to_json().context("failed to serialize report")?;
        let filename = format!(
            "wheel_sim_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json)
            .with_context(|| format!("failed to write {filename}"))?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
