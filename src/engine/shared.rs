//! Thread-safe handle around one engine.

use super::logic::SelectionEngine;
use super::types::{SpinResult, Statistics};
use crate::config::WheelConfig;
use crate::error::ConfigError;
use crate::rng::{RandomRolls, RollSource};
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle that serializes every operation on a single engine.
///
/// `select_prize` runs its whole read-draw-update sequence under one lock,
/// and `statistics` snapshots under the same lock, so callers never see a
/// half-applied spin.
#[derive(Debug)]
pub struct SharedEngine<S: RollSource = RandomRolls<StdRng>> {
    inner: Arc<Mutex<SelectionEngine<S>>>,
}

impl<S: RollSource> Clone for SharedEngine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedEngine<RandomRolls<StdRng>> {
    pub fn new(config: WheelConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(SelectionEngine::new(config)?))
    }
}

impl<S: RollSource> SharedEngine<S> {
    pub fn from_engine(engine: SelectionEngine<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // Poisoning is ignored; no engine operation panics midway through a mutation.
    fn lock(&self) -> MutexGuard<'_, SelectionEngine<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn select_prize(&self) -> SpinResult {
        self.lock().select_prize()
    }

    pub fn statistics(&self) -> Statistics {
        self.lock().statistics()
    }

    pub fn reset_state(&self) {
        self.lock().reset_state()
    }

    pub fn expected_cost(&self) -> f64 {
        self.lock().expected_cost()
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut SelectionEngine<S>) -> T) -> T {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::thread;

    fn seeded(seed: u64) -> SharedEngine<RandomRolls<ChaCha8Rng>> {
        let engine =
            SelectionEngine::with_rng(WheelConfig::default(), ChaCha8Rng::seed_from_u64(seed))
                .expect("default config is valid");
        SharedEngine::from_engine(engine)
    }

    #[test]
    fn test_concurrent_spins_are_all_counted() {
        let shared = seeded(11);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = shared.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        engine.select_prize();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("spinner thread panicked");
        }

        let stats = shared.statistics();
        assert_eq!(stats.total_spins, 2000);
        assert_eq!(stats.prize_counts.iter().sum::<u64>(), 2000);
        assert_eq!(stats.spin_history.len(), 10);
    }

    #[test]
    fn test_snapshot_is_consistent_under_contention() {
        let shared = seeded(5);
        let writer = {
            let engine = shared.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    engine.select_prize();
                }
            })
        };
        for _ in 0..200 {
            let stats = shared.statistics();
            assert_eq!(stats.prize_counts.iter().sum::<u64>(), stats.total_spins);
            assert_eq!(
                stats.spin_history.len() as u64,
                stats.total_spins.min(10)
            );
        }
        writer.join().expect("writer panicked");
    }

    #[test]
    fn test_reset_through_handle() {
        let shared = seeded(3);
        shared.select_prize();
        shared.reset_state();
        assert_eq!(shared.statistics().total_spins, 0);
        assert!(shared.with_engine(|engine| engine.history().is_empty()));
    }

    #[test]
    fn test_separate_handles_do_not_share_state() {
        let a = seeded(1);
        let b = seeded(1);
        a.select_prize();
        assert_eq!(a.statistics().total_spins, 1);
        assert_eq!(b.statistics().total_spins, 0);
    }
}
