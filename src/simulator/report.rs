//! Simulation report generation.

use super::session_sim::RunStats;
use crate::config::WheelConfig;
use serde::Serialize;

/// Observed vs configured rate for one catalog position.
#[derive(Debug, Clone, Serialize)]
pub struct PrizeRate {
    pub name: String,
    pub cost: f64,
    pub configured_pct: f64,
    pub observed_pct: f64,
    pub wins: u64,
}

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub total_spins: u64,
    pub spin_price: f64,

    // Economics
    pub avg_cost_per_spin: f64,
    pub configured_cost_per_spin: f64,
    pub avg_margin_per_spin: f64,
    pub worst_run_cost_per_spin: f64,

    // Pity behaviour
    pub rare_rate_pct: f64,
    pub pity_activations_per_1000: f64,
    pub boosted_share_pct: f64,
    pub avg_longest_drought: f64,
    pub max_longest_drought: u32,

    pub prize_rates: Vec<PrizeRate>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, wheel: &WheelConfig) -> Self {
        let num_runs = runs.len() as u32;
        let total_spins: u64 = runs.iter().map(|r| r.spins).sum();
        let spins = total_spins.max(1) as f64;
        let runs_divisor = num_runs.max(1) as f64;

        let total_cost: f64 = runs.iter().map(|r| r.total_cost).sum();
        let avg_cost_per_spin = total_cost / spins;
        let configured_cost_per_spin =
            crate::prizes::weighted_cost(&wheel.prizes, &wheel.base_probabilities);
        let worst_run_cost_per_spin = runs
            .iter()
            .map(RunStats::cost_per_spin)
            .fold(0.0, f64::max);

        let rare_wins: u64 = runs.iter().map(|r| r.rare_wins).sum();
        let activations: u64 = runs.iter().map(|r| r.pity_activations).sum();
        let boosted: u64 = runs.iter().map(|r| r.boosted_spins).sum();
        let avg_longest_drought = runs
            .iter()
            .map(|r| r.longest_drought as f64)
            .sum::<f64>()
            / runs_divisor;
        let max_longest_drought = runs.iter().map(|r| r.longest_drought).max().unwrap_or(0);

        let prize_rates = wheel
            .prizes
            .iter()
            .enumerate()
            .map(|(i, prize)| {
                let wins: u64 = runs
                    .iter()
                    .map(|r| r.prize_counts.get(i).copied().unwrap_or(0))
                    .sum();
                PrizeRate {
                    name: prize.name.clone(),
                    cost: prize.cost,
                    configured_pct: wheel.base_probabilities[i],
                    observed_pct: wins as f64 / spins * 100.0,
                    wins,
                }
            })
            .collect();

        Self {
            num_runs,
            total_spins,
            spin_price: wheel.spin_price,
            avg_cost_per_spin,
            configured_cost_per_spin,
            avg_margin_per_spin: wheel.spin_price - avg_cost_per_spin,
            worst_run_cost_per_spin,
            rare_rate_pct: rare_wins as f64 / spins * 100.0,
            pity_activations_per_1000: activations as f64 / spins * 1000.0,
            boosted_share_pct: boosted as f64 / spins * 100.0,
            avg_longest_drought,
            max_longest_drought,
            prize_rates,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  PRIZE WHEEL SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Sessions: {}, total spins: {}\n\n",
            self.num_runs, self.total_spins
        ));

        report.push_str("── ECONOMICS ────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Spin Price:          €{:.2}\n",
            self.spin_price
        ));
        report.push_str(&format!(
            "  Cost/Spin (base):    €{:.3}\n",
            self.configured_cost_per_spin
        ));
        report.push_str(&format!(
            "  Cost/Spin (actual):  €{:.3}\n",
            self.avg_cost_per_spin
        ));
        report.push_str(&format!(
            "  Worst Session:       €{:.3}\n",
            self.worst_run_cost_per_spin
        ));
        report.push_str(&format!(
            "  Margin/Spin:         €{:.3}\n\n",
            self.avg_margin_per_spin
        ));

        report.push_str("── PITY ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Rare Rate:           {:.2}%\n", self.rare_rate_pct));
        report.push_str(&format!(
            "  Activations/1000:    {:.2}\n",
            self.pity_activations_per_1000
        ));
        report.push_str(&format!(
            "  Boosted Spins:       {:.1}%\n",
            self.boosted_share_pct
        ));
        report.push_str(&format!(
            "  Longest Drought:     {:.1} avg, {} max\n\n",
            self.avg_longest_drought, self.max_longest_drought
        ));

        report.push_str("── PRIZES ───────────────────────────────────────────────────────\n");
        report.push_str("  Prize                  Config    Actual      Wins\n");
        report.push_str("  ─────                  ──────    ──────      ────\n");
        for rate in &self.prize_rates {
            report.push_str(&format!(
                "  {:<20} {:>7.2}%  {:>7.2}%  {:>8}\n",
                rate.name, rate.configured_pct, rate.observed_pct, rate.wins
            ));
        }

        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
