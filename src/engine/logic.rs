use super::types::*;
use crate::config::WheelConfig;
use crate::error::ConfigError;
use crate::pity::{effective_probabilities, PityPhase, PityTransition};
use crate::prizes::{weighted_cost, Prize};
use crate::rng::{RandomRolls, RollSource};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::VecDeque;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Weighted prize selection with pity escalation.
///
/// One engine is one game session: it owns its configuration, its roll
/// source and its state. Nothing is shared between engines.
#[derive(Debug)]
pub struct SelectionEngine<S: RollSource = RandomRolls<StdRng>> {
    config: WheelConfig,
    source: S,
    state: EngineState,
}

impl SelectionEngine<RandomRolls<StdRng>> {
    /// Engine backed by an entropy-seeded generator.
    pub fn new(config: WheelConfig) -> Result<Self, ConfigError> {
        Self::with_source(config, RandomRolls::from_entropy())
    }
}

impl<R: Rng> SelectionEngine<RandomRolls<R>> {
    pub fn with_rng(config: WheelConfig, rng: R) -> Result<Self, ConfigError> {
        Self::with_source(config, RandomRolls::new(rng))
    }
}

impl<S: RollSource> SelectionEngine<S> {
    /// Validates `config` and starts from an empty state.
    pub fn with_source(config: WheelConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = EngineState::new(config.prizes.len());
        Ok(Self {
            config,
            source,
            state,
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn catalog(&self) -> &[Prize] {
        &self.config.prizes
    }

    pub fn total_spins(&self) -> u64 {
        self.state.total_spins
    }

    pub fn streak(&self) -> u32 {
        self.state.pity.spins_without_rare
    }

    pub fn pity_phase(&self) -> PityPhase {
        self.state.pity.phase
    }

    pub fn is_pity_active(&self) -> bool {
        self.state.pity.is_active()
    }

    pub fn history(&self) -> &VecDeque<SpinOutcome> {
        &self.state.history
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Distribution for the next draw, boosted if pity is latched.
    pub fn effective_probabilities(&self) -> Vec<f64> {
        effective_probabilities(
            &self.config.base_probabilities,
            &self.config.pity,
            self.state.pity.phase,
        )
    }

    /// Draw one prize and advance the state.
    pub fn select_prize(&mut self) -> SpinResult {
        let probabilities = self.effective_probabilities();
        let roll = self.source.roll_percent();
        let prize_index = match pick_band(&probabilities, roll) {
            Some(index) => index,
            None => {
                let last = probabilities.len() - 1;
                warn!(roll, fallback = last, "roll fell past the cumulative table");
                last
            }
        };
        let is_rare = self.config.pity.is_rare(prize_index);
        let prize = self.config.prizes[prize_index].clone();

        self.state.total_spins += 1;
        self.state.prize_counts[prize_index] += 1;
        self.state.total_cost += prize.cost;

        match self.state.pity.record(is_rare, &self.config.pity) {
            PityTransition::Activated => {
                self.state.pity_activations += 1;
                info!(
                    streak = self.state.pity.spins_without_rare,
                    "pity boost activated"
                );
            }
            PityTransition::Reset => {
                info!(prize = %prize.name, "rare prize won, pity reset");
            }
            PityTransition::Unchanged => {}
        }

        let outcome = SpinOutcome {
            id: Uuid::new_v4(),
            prize: prize.clone(),
            prize_index,
            timestamp: Utc::now(),
            was_pity_active: self.state.pity.is_active(),
            spins_without_rare: self.state.pity.spins_without_rare,
        };
        debug!(
            spin = self.state.total_spins,
            roll,
            prize = %prize.name,
            pity_active = outcome.was_pity_active,
            streak = outcome.spins_without_rare,
            "spin resolved"
        );

        let result = SpinResult {
            prize,
            prize_index,
            spin_id: outcome.id,
            was_pity_active: outcome.was_pity_active,
            is_rare,
        };
        self.state.push_history(outcome, self.config.history_capacity);
        result
    }

    /// Read-only snapshot of counters, history and tables.
    pub fn statistics(&self) -> Statistics {
        let current_probabilities = self.effective_probabilities();
        let expected_cost = weighted_cost(&self.config.prizes, &current_probabilities);
        Statistics {
            total_spins: self.state.total_spins,
            spins_without_rare: self.state.pity.spins_without_rare,
            is_pity_active: self.state.pity.is_active(),
            spin_history: self.state.history.iter().cloned().collect(),
            current_probabilities,
            base_probabilities: self.config.base_probabilities.clone(),
            prize_counts: self.state.prize_counts.clone(),
            pity_activations: self.state.pity_activations,
            total_cost: self.state.total_cost,
            revenue: self.revenue(),
            expected_cost,
        }
    }

    /// Back to zero spins, no streak, no boost, empty history.
    pub fn reset_state(&mut self) {
        self.state = EngineState::new(self.config.prizes.len());
        info!("engine state reset");
    }

    /// Expected payout per spin under the current table.
    pub fn expected_cost(&self) -> f64 {
        weighted_cost(&self.config.prizes, &self.effective_probabilities())
    }

    /// Ticket price minus expected payout.
    pub fn expected_margin(&self) -> f64 {
        self.config.spin_price - self.expected_cost()
    }

    pub fn revenue(&self) -> f64 {
        self.state.total_spins as f64 * self.config.spin_price
    }
}

/// Index whose half-open band `[before, after)` contains `roll`.
///
/// Zero-width bands can never match. `None` means floating-point drift left
/// the cumulative total short of `roll`.
pub fn pick_band(probabilities: &[f64], roll: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (index, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if roll < cumulative {
            return Some(index);
        }
    }
    None
}
