//! Command-line driver for the prize wheel engine.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spinwheel::build_info;
use spinwheel::pity::effective_probabilities;
use spinwheel::prizes::weighted_cost;
use spinwheel::{
    load_config, save_config, PityPhase, RandomRolls, SelectionEngine, WheelConfig,
};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, about = "Weighted prize wheel with pity escalation")]
struct Cli {
    /// Wheel config JSON (defaults to the built-in party wheel)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed the draw for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log every spin
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Spin the wheel and print each outcome
    Spin {
        #[arg(default_value_t = 1)]
        count: u32,
    },
    /// Spin, then print the statistics snapshot as JSON
    Stats {
        #[arg(default_value_t = 0)]
        spins: u32,
    },
    /// Expected payout per spin, normal and boosted
    Expected,
    /// Write the active config as JSON
    ExportConfig { path: PathBuf },
    /// Print build information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load wheel config {}", path.display()))?,
        None => WheelConfig::default(),
    };

    match cli.command {
        Command::Spin { count } => {
            let mut engine = build_engine(config, cli.seed)?;
            for n in 1..=count {
                let result = engine.select_prize();
                println!(
                    "#{:<4} {:<28} cost €{:>6.2}{}",
                    n,
                    result.prize.display_name(),
                    result.prize.cost,
                    if result.was_pity_active { "  [pity]" } else { "" }
                );
            }
            println!();
            println!(
                "Streak without rare: {}, pity active: {}",
                engine.streak(),
                engine.is_pity_active()
            );
        }
        Command::Stats { spins } => {
            let mut engine = build_engine(config, cli.seed)?;
            for _ in 0..spins {
                engine.select_prize();
            }
            let json = serde_json::to_string_pretty(&engine.statistics())
                .context("failed to serialize statistics")?;
            println!("{json}");
        }
        Command::Expected => {
            config.validate().context("invalid wheel config")?;
            let normal = weighted_cost(&config.prizes, &config.base_probabilities);
            let boosted_table = effective_probabilities(
                &config.base_probabilities,
                &config.pity,
                PityPhase::Boosted,
            );
            let boosted = weighted_cost(&config.prizes, &boosted_table);
            println!("Spin price:            €{:.3}", config.spin_price);
            println!("Expected cost:         €{:.3}", normal);
            println!("Expected cost (pity):  €{:.3}", boosted);
            println!("Margin:                €{:.3}", config.spin_price - normal);
        }
        Command::ExportConfig { path } => {
            save_config(&path, &config)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        Command::Version => {
            println!("spinwheel {}", build_info::version_line());
        }
    }

    Ok(())
}

fn build_engine(
    config: WheelConfig,
    seed: Option<u64>,
) -> anyhow::Result<SelectionEngine<RandomRolls<StdRng>>> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    SelectionEngine::with_rng(config, rng).context("invalid wheel config")
}
