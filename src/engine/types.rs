use crate::pity::PityTracker;
use crate::prizes::Prize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Immutable record of one spin, kept in the bounded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub id: Uuid,
    pub prize: Prize,
    pub prize_index: usize,
    pub timestamp: DateTime<Utc>,
    /// Pity flag after this spin's state update
    pub was_pity_active: bool,
    /// Streak after this spin's state update
    pub spins_without_rare: u32,
}

/// What `select_prize` hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub prize: Prize,
    pub prize_index: usize,
    pub spin_id: Uuid,
    pub was_pity_active: bool,
    pub is_rare: bool,
}

/// Point-in-time snapshot returned by `statistics()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_spins: u64,
    pub spins_without_rare: u32,
    pub is_pity_active: bool,
    /// Most recent first
    pub spin_history: Vec<SpinOutcome>,
    pub current_probabilities: Vec<f64>,
    pub base_probabilities: Vec<f64>,
    /// Wins per catalog position since the last reset
    pub prize_counts: Vec<u64>,
    pub pity_activations: u64,
    pub total_cost: f64,
    pub revenue: f64,
    pub expected_cost: f64,
}

/// Mutable run-time state owned by one engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub total_spins: u64,
    pub pity: PityTracker,
    pub history: VecDeque<SpinOutcome>,
    pub prize_counts: Vec<u64>,
    pub pity_activations: u64,
    pub total_cost: f64,
}

impl EngineState {
    pub fn new(prize_count: usize) -> Self {
        Self {
            total_spins: 0,
            pity: PityTracker::new(),
            history: VecDeque::new(),
            prize_counts: vec![0; prize_count],
            pity_activations: 0,
            total_cost: 0.0,
        }
    }

    /// Prepend an outcome, dropping the oldest beyond `capacity`.
    pub fn push_history(&mut self, outcome: SpinOutcome, capacity: usize) {
        self.history.push_front(outcome);
        self.history.truncate(capacity);
    }
}
