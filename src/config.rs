//! Wheel configuration: catalog, base table, pity settings.

use crate::core::constants::{
    BASE_PROBABILITIES, HISTORY_CAPACITY, PROBABILITY_EPSILON, PROBABILITY_TOTAL, SPIN_PRICE,
};
use crate::error::ConfigError;
use crate::pity::{stable_sum, PityConfig};
use crate::prizes::{default_catalog, Prize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    pub prizes: Vec<Prize>,
    /// Percentage points aligned with `prizes`, summing to 100
    pub base_probabilities: Vec<f64>,
    #[serde(default)]
    pub pity: PityConfig,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_spin_price")]
    pub spin_price: f64,
}

fn default_history_capacity() -> usize {
    HISTORY_CAPACITY
}

fn default_spin_price() -> f64 {
    SPIN_PRICE
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            prizes: default_catalog(),
            base_probabilities: BASE_PROBABILITIES.to_vec(),
            pity: PityConfig::default(),
            history_capacity: HISTORY_CAPACITY,
            spin_price: SPIN_PRICE,
        }
    }
}

impl WheelConfig {
    /// Reject any configuration that would skew or break the draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prizes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.prizes.len() != self.base_probabilities.len() {
            return Err(ConfigError::LengthMismatch {
                prizes: self.prizes.len(),
                probabilities: self.base_probabilities.len(),
            });
        }

        for (position, prize) in self.prizes.iter().enumerate() {
            if prize.id != position {
                return Err(ConfigError::IdMismatch {
                    position,
                    id: prize.id,
                });
            }
            if !prize.cost.is_finite() || prize.cost < 0.0 {
                return Err(ConfigError::InvalidCost {
                    index: position,
                    cost: prize.cost,
                });
            }
        }

        for (index, &value) in self.base_probabilities.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidProbability { index, value });
            }
        }
        let sum = stable_sum(&self.base_probabilities);
        if (sum - PROBABILITY_TOTAL).abs() > PROBABILITY_EPSILON {
            return Err(ConfigError::ProbabilitySum { sum });
        }

        let len = self.prizes.len();
        if let Some(&index) = self.pity.rare_indices.iter().find(|&&i| i >= len) {
            return Err(ConfigError::RareIndexOutOfRange { index, len });
        }
        if self.pity.enabled && self.pity.rare_indices.is_empty() {
            return Err(ConfigError::NoRarePrizes);
        }
        if self.pity.threshold_spins == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if !self.pity.multiplier.is_finite() || self.pity.multiplier <= 1.0 {
            return Err(ConfigError::InvalidMultiplier(self.pity.multiplier));
        }

        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        if !self.spin_price.is_finite() || self.spin_price < 0.0 {
            return Err(ConfigError::InvalidSpinPrice(self.spin_price));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WheelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load and validate a wheel config from a JSON file.
pub fn load_config(path: &Path) -> Result<WheelConfig, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    WheelConfig::from_json_str(&json)
}

/// Write a config as pretty-printed JSON, creating parent directories.
pub fn save_config(path: &Path, config: &WheelConfig) -> Result<(), ConfigError> {
    let io_err = |source: io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = config.to_json()?;
    fs::write(path, json).map_err(io_err)?;
    Ok(())
}
