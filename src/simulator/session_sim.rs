//! Single-session simulation on a real engine.

use crate::config::WheelConfig;
use crate::engine::SelectionEngine;
use crate::error::ConfigError;
use rand::Rng;

/// Statistics gathered over one simulated session.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub spins: u64,
    pub prize_counts: Vec<u64>,
    pub rare_wins: u64,
    pub pity_activations: u64,
    /// Spins drawn while the boost was latched
    pub boosted_spins: u64,
    /// Longest run of non-rare spins
    pub longest_drought: u32,
    pub total_cost: f64,
}

impl RunStats {
    pub fn cost_per_spin(&self) -> f64 {
        if self.spins == 0 {
            0.0
        } else {
            self.total_cost / self.spins as f64
        }
    }
}

/// Spin a fresh engine `spins` times.
pub fn simulate_session<R: Rng>(
    wheel: &WheelConfig,
    spins: u32,
    rng: R,
) -> Result<RunStats, ConfigError> {
    let mut engine = SelectionEngine::with_rng(wheel.clone(), rng)?;
    let mut stats = RunStats {
        prize_counts: vec![0; wheel.prizes.len()],
        ..Default::default()
    };
    let mut drought = 0u32;

    for _ in 0..spins {
        if engine.is_pity_active() {
            stats.boosted_spins += 1;
        }
        let result = engine.select_prize();
        if result.is_rare {
            stats.rare_wins += 1;
            drought = 0;
        } else {
            drought += 1;
            stats.longest_drought = stats.longest_drought.max(drought);
        }
    }

    let summary = engine.statistics();
    stats.spins = summary.total_spins;
    stats.prize_counts = summary.prize_counts;
    stats.pity_activations = summary.pity_activations;
    stats.total_cost = summary.total_cost;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_session_counts_every_spin() {
        let stats = simulate_session(&WheelConfig::default(), 300, ChaCha8Rng::seed_from_u64(1))
            .expect("default config is valid");
        assert_eq!(stats.spins, 300);
        assert_eq!(stats.prize_counts.iter().sum::<u64>(), 300);
        let rare: u64 = stats.prize_counts[..3].iter().sum();
        assert_eq!(rare, stats.rare_wins);
    }

    #[test]
    fn test_long_session_triggers_pity() {
        // ~1.8% rare rate: 2000 spins is far beyond one 30-spin drought
        let stats = simulate_session(&WheelConfig::default(), 2000, ChaCha8Rng::seed_from_u64(9))
            .expect("default config is valid");
        assert!(stats.pity_activations > 0);
        assert!(stats.boosted_spins > 0);
        assert!(stats.longest_drought >= 30);
    }

    #[test]
    fn test_cost_per_spin_of_empty_run() {
        assert_eq!(RunStats::default().cost_per_spin(), 0.0);
    }
}
