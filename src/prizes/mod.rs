//! Prize catalog definitions.

pub mod types;

pub use types::*;
