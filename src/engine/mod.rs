//! The selection engine: weighted draw, pity latch, history, statistics.

pub mod logic;
pub mod shared;
pub mod types;

pub use logic::*;
pub use shared::*;
pub use types::*;
