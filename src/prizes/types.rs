use crate::core::constants::{PRIZE_COLORS, PRIZE_COSTS, PRIZE_COUNT, PRIZE_ICONS, PRIZE_NAMES};
use serde::{Deserialize, Serialize};

/// A single wheel segment. `id` doubles as the catalog position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    pub id: usize,
    pub name: String,
    /// Payout cost in euro, used only for reporting
    pub cost: f64,
    pub icon: String,
    pub color: String,
}

impl Prize {
    pub fn new(id: usize, name: &str, cost: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            cost,
            icon: String::new(),
            color: String::new(),
        }
    }

    pub fn with_cosmetics(mut self, icon: &str, color: &str) -> Self {
        self.icon = icon.to_string();
        self.color = color.to_string();
        self
    }

    /// Name prefixed with the icon, e.g. "🍺 Birra".
    pub fn display_name(&self) -> String {
        if self.icon.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.icon, self.name)
        }
    }
}

/// The eight-segment party wheel.
pub fn default_catalog() -> Vec<Prize> {
    (0..PRIZE_COUNT)
        .map(|i| {
            Prize::new(i, PRIZE_NAMES[i], PRIZE_COSTS[i])
                .with_cosmetics(PRIZE_ICONS[i], PRIZE_COLORS[i])
        })
        .collect()
}

/// Probability-weighted average of prize costs. `probabilities` are
/// percentage points aligned with `prizes`.
pub fn weighted_cost(prizes: &[Prize], probabilities: &[f64]) -> f64 {
    prizes
        .iter()
        .zip(probabilities)
        .map(|(prize, p)| (p / 100.0) * prize.cost)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::BASE_PROBABILITIES;

    #[test]
    fn test_default_catalog_ids_match_positions() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), PRIZE_COUNT);
        for (i, prize) in catalog.iter().enumerate() {
            assert_eq!(prize.id, i);
        }
        assert_eq!(catalog[0].name, "Moët");
        assert_eq!(catalog[7].name, "Miss");
        assert_eq!(catalog[7].cost, 0.0);
    }

    #[test]
    fn test_display_name_with_and_without_icon() {
        let plain = Prize::new(3, "Vino", 60.0);
        assert_eq!(plain.display_name(), "Vino");
        let fancy = plain.with_cosmetics("🍷", "#DC143C");
        assert_eq!(fancy.display_name(), "🍷 Vino");
    }

    #[test]
    fn test_weighted_cost_of_default_table() {
        // 0.3 + 0.4 + 0.12 + 0.48 + 0.15 + 0.25 + 0.25 = 1.95
        let cost = weighted_cost(&default_catalog(), &BASE_PROBABILITIES);
        assert!((cost - 1.95).abs() < 1e-9, "expected 1.95, got {cost}");
    }
}
