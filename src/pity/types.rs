use crate::core::constants::{
    PITY_ENABLED, PITY_MULTIPLIER, PITY_RARE_INDICES, PITY_RESET_ON_WIN, PITY_THRESHOLD_SPINS,
};
use serde::{Deserialize, Serialize};

/// Rare-prize boost settings. Immutable once an engine is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PityConfig {
    pub enabled: bool,
    /// Catalog positions treated as rare
    pub rare_indices: Vec<usize>,
    /// Consecutive non-rare spins before the boost latches on
    pub threshold_spins: u32,
    /// Factor applied to rare probabilities while boosted (> 1)
    pub multiplier: f64,
    /// Whether a rare win clears the streak and the boost
    pub reset_on_win: bool,
}

impl Default for PityConfig {
    fn default() -> Self {
        Self {
            enabled: PITY_ENABLED,
            rare_indices: PITY_RARE_INDICES.to_vec(),
            threshold_spins: PITY_THRESHOLD_SPINS,
            multiplier: PITY_MULTIPLIER,
            reset_on_win: PITY_RESET_ON_WIN,
        }
    }
}

impl PityConfig {
    pub fn is_rare(&self, index: usize) -> bool {
        self.rare_indices.contains(&index)
    }
}

/// Latching pity state. Only `PityTracker::record` moves between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PityPhase {
    #[default]
    Normal,
    Boosted,
}

impl PityPhase {
    pub fn is_boosted(self) -> bool {
        self == PityPhase::Boosted
    }
}

/// What a single recorded spin did to the pity phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PityTransition {
    Unchanged,
    Activated,
    Reset,
}

/// Streak counter plus the latched phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PityTracker {
    pub spins_without_rare: u32,
    pub phase: PityPhase,
}

impl PityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.phase.is_boosted()
    }
}
