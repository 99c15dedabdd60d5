use super::types::*;
use crate::core::constants::PROBABILITY_TOTAL;

impl PityTracker {
    /// Apply one spin outcome.
    ///
    /// A rare win with reset-on-win clears the streak and drops back to
    /// `Normal`. A non-rare spin extends the streak and latches `Boosted`
    /// once the threshold is reached. A rare win without reset-on-win
    /// leaves everything as is.
    pub fn record(&mut self, is_rare: bool, pity: &PityConfig) -> PityTransition {
        if is_rare {
            if !pity.reset_on_win {
                return PityTransition::Unchanged;
            }
            let was_boosted = self.phase.is_boosted();
            self.spins_without_rare = 0;
            self.phase = PityPhase::Normal;
            return if was_boosted {
                PityTransition::Reset
            } else {
                PityTransition::Unchanged
            };
        }

        self.spins_without_rare = self.spins_without_rare.saturating_add(1);
        if self.phase == PityPhase::Normal && self.spins_without_rare >= pity.threshold_spins {
            self.phase = PityPhase::Boosted;
            return PityTransition::Activated;
        }
        PityTransition::Unchanged
    }
}

/// Compensated (Kahan) sum.
pub fn stable_sum(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &value in values {
        let y = value - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

/// The distribution actually used for the next draw.
///
/// Returns an exact copy of `base` unless pity is enabled and boosted, in
/// which case rare entries are multiplied and the table is rescaled back to
/// 100.
pub fn effective_probabilities(base: &[f64], pity: &PityConfig, phase: PityPhase) -> Vec<f64> {
    let mut probabilities = base.to_vec();
    if !pity.enabled || !phase.is_boosted() {
        return probabilities;
    }

    for &index in &pity.rare_indices {
        if let Some(p) = probabilities.get_mut(index) {
            *p *= pity.multiplier;
        }
    }

    let total = stable_sum(&probabilities);
    if total <= 0.0 {
        return probabilities;
    }
    for p in probabilities.iter_mut() {
        *p = *p / total * PROBABILITY_TOTAL;
    }
    probabilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{BASE_PROBABILITIES, PROBABILITY_EPSILON};

    fn boosted(base: &[f64], pity: &PityConfig) -> Vec<f64> {
        effective_probabilities(base, pity, PityPhase::Boosted)
    }

    #[test]
    fn test_normal_phase_returns_exact_copy() {
        let table = effective_probabilities(
            &BASE_PROBABILITIES,
            &PityConfig::default(),
            PityPhase::Normal,
        );
        assert_eq!(table, BASE_PROBABILITIES.to_vec());
    }

    #[test]
    fn test_disabled_pity_ignores_boosted_phase() {
        let pity = PityConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(boosted(&BASE_PROBABILITIES, &pity), BASE_PROBABILITIES.to_vec());
    }

    #[test]
    fn test_boost_doubles_then_renormalizes() {
        let table = boosted(&BASE_PROBABILITIES, &PityConfig::default());
        // Rare mass 1.8 doubles to 3.6, total becomes 101.8
        let scale = 100.0 / 101.8;
        assert!((table[0] - 0.4 * scale).abs() < 1e-9);
        assert!((table[1] - 0.8 * scale).abs() < 1e-9);
        assert!((table[2] - 2.4 * scale).abs() < 1e-9);
        assert!((table[7] - 88.4 * scale).abs() < 1e-9);
        assert!((stable_sum(&table) - 100.0).abs() < PROBABILITY_EPSILON);
    }

    #[test]
    fn test_huge_multiplier_still_sums_to_100() {
        let pity = PityConfig {
            multiplier: 1.0e6,
            ..Default::default()
        };
        let table = boosted(&BASE_PROBABILITIES, &pity);
        assert!((stable_sum(&table) - 100.0).abs() < PROBABILITY_EPSILON);
        assert!(table[7] < 1.0);
    }

    #[test]
    fn test_stable_sum_matches_naive_on_small_input() {
        assert!((stable_sum(&[0.1, 0.2, 0.3]) - 0.6).abs() < 1e-15);
        assert_eq!(stable_sum(&[]), 0.0);
    }

    #[test]
    fn test_tracker_latches_at_threshold() {
        let pity = PityConfig {
            threshold_spins: 3,
            ..Default::default()
        };
        let mut tracker = PityTracker::new();
        assert_eq!(tracker.record(false, &pity), PityTransition::Unchanged);
        assert_eq!(tracker.record(false, &pity), PityTransition::Unchanged);
        assert_eq!(tracker.record(false, &pity), PityTransition::Activated);
        assert!(tracker.is_active());
        // Further non-rare spins keep the latch without re-firing
        assert_eq!(tracker.record(false, &pity), PityTransition::Unchanged);
        assert!(tracker.is_active());
        assert_eq!(tracker.spins_without_rare, 4);
    }

    #[test]
    fn test_tracker_rare_win_resets() {
        let pity = PityConfig {
            threshold_spins: 2,
            ..Default::default()
        };
        let mut tracker = PityTracker::new();
        tracker.record(false, &pity);
        tracker.record(false, &pity);
        assert_eq!(tracker.record(true, &pity), PityTransition::Reset);
        assert_eq!(tracker, PityTracker::new());
    }

    #[test]
    fn test_tracker_rare_win_before_threshold_clears_streak() {
        let pity = PityConfig::default();
        let mut tracker = PityTracker::new();
        tracker.record(false, &pity);
        tracker.record(false, &pity);
        assert_eq!(tracker.record(true, &pity), PityTransition::Unchanged);
        assert_eq!(tracker.spins_without_rare, 0);
    }

    #[test]
    fn test_tracker_without_reset_on_win_keeps_state() {
        let pity = PityConfig {
            threshold_spins: 1,
            reset_on_win: false,
            ..Default::default()
        };
        let mut tracker = PityTracker::new();
        tracker.record(false, &pity);
        assert!(tracker.is_active());
        assert_eq!(tracker.record(true, &pity), PityTransition::Unchanged);
        assert!(tracker.is_active());
        assert_eq!(tracker.spins_without_rare, 1);
    }
}
