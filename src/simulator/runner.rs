//! Runs many independent sessions, each on its own engine.

use super::config::SimConfig;
use super::report::SimReport;
use super::session_sim::simulate_session;
use crate::config::WheelConfig;
use crate::error::ConfigError;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full simulation and return a report.
pub fn run_simulation(wheel: &WheelConfig, config: &SimConfig) -> Result<SimReport, ConfigError> {
    wheel.validate()?;
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_session(wheel, config.spins_per_run, rng)?;
        if config.verbosity >= 2 {
            debug!(
                run = run_idx + 1,
                of = config.num_runs,
                cost_per_spin = run.cost_per_spin(),
                rare_wins = run.rare_wins,
                pity_activations = run.pity_activations,
                longest_drought = run.longest_drought,
                "session finished"
            );
        }
        all_runs.push(run);
    }

    let report = SimReport::from_runs(all_runs, wheel);
    if config.verbosity >= 1 {
        info!(
            spins = report.total_spins,
            cost_per_spin = report.avg_cost_per_spin,
            "simulation complete"
        );
    }
    Ok(report)
}
