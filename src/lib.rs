//! Spinwheel - weighted prize wheel with pity escalation.
//!
//! The library owns the selection algorithm and its state. Rendering,
//! persistence and anything else a front end does live with the caller.

pub mod build_info;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod pity;
pub mod prizes;
pub mod rng;
pub mod simulator;

pub use config::{load_config, save_config, WheelConfig};
pub use engine::{SelectionEngine, SharedEngine, SpinOutcome, SpinResult, Statistics};
pub use error::ConfigError;
pub use pity::{PityConfig, PityPhase};
pub use prizes::Prize;
pub use rng::{FixedRolls, RandomRolls, RollSource};
