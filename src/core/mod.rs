//! Shared constants for the default wheel.

pub mod constants;
