//! Monte Carlo balance simulator.
//!
//! Spins thousands of independent sessions on real engines to check:
//! - Actual payout per spin against the configured target
//! - How often the pity boost latches on, and for how long
//! - Observed prize rates against the base table
//!
//! Every session builds its own `SelectionEngine`, so results reflect
//! exactly what the live wheel does.

mod config;
mod report;
mod runner;
mod session_sim;

pub use config::SimConfig;
pub use report::{PrizeRate, SimReport};
pub use runner::run_simulation;
pub use session_sim::{simulate_session, RunStats};
