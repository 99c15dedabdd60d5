//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent sessions to simulate
    pub num_runs: u32,

    /// Spins per session (one evening at the bar, say)
    pub spins_per_run: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            spins_per_run: 500,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick sanity check of the cost target
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            spins_per_run: 200,
            ..Default::default()
        }
    }

    /// Long sessions, where the pity latch matters most
    pub fn long_sessions(num_runs: u32) -> Self {
        Self {
            num_runs,
            spins_per_run: 5_000,
            ..Default::default()
        }
    }

    pub fn total_spins(&self) -> u64 {
        self.num_runs as u64 * self.spins_per_run as u64
    }
}
