//! Construction-time configuration errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("prize catalog is empty")]
    EmptyCatalog,
    #[error("probability table has {probabilities} entries but the catalog has {prizes}")]
    LengthMismatch { prizes: usize, probabilities: usize },
    #[error("prize at position {position} has id {id}")]
    IdMismatch { position: usize, id: usize },
    #[error("probability at index {index} is invalid: {value}")]
    InvalidProbability { index: usize, value: f64 },
    #[error("probabilities sum to {sum}, expected 100")]
    ProbabilitySum { sum: f64 },
    #[error("prize {index} has invalid cost {cost}")]
    InvalidCost { index: usize, cost: f64 },
    #[error("rare index {index} is outside the catalog (len {len})")]
    RareIndexOutOfRange { index: usize, len: usize },
    #[error("pity is enabled but no rare prizes are configured")]
    NoRarePrizes,
    #[error("pity threshold must be positive")]
    ZeroThreshold,
    #[error("pity multiplier must be greater than 1, got {0}")]
    InvalidMultiplier(f64),
    #[error("history capacity must be positive")]
    ZeroHistoryCapacity,
    #[error("spin price is invalid: {0}")]
    InvalidSpinPrice(f64),
    #[error("failed to access config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
}
