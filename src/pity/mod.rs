//! Pity escalation: streak tracking, the latched boost, and the boosted
//! probability table.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
