//! Injectable randomness for the draw.

use crate::core::constants::PROBABILITY_TOTAL;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the uniform value in `[0, 100)` that picks a wheel band.
pub trait RollSource {
    fn roll_percent(&mut self) -> f64;
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomRolls<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomRolls<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomRolls<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RollSource for RandomRolls<R> {
    fn roll_percent(&mut self) -> f64 {
        self.rng.gen_range(0.0..PROBABILITY_TOTAL)
    }
}

/// Scripted rolls, replayed in order and cycled when exhausted.
///
/// Values are clamped into `[0, 100)` so a script can never produce an
/// impossible draw.
#[derive(Debug, Clone)]
pub struct FixedRolls {
    rolls: Vec<f64>,
    cursor: usize,
}

impl FixedRolls {
    pub fn new(rolls: Vec<f64>) -> Self {
        let rolls = if rolls.is_empty() { vec![0.0] } else { rolls };
        Self { rolls, cursor: 0 }
    }

    /// A single value repeated forever.
    pub fn constant(roll: f64) -> Self {
        Self::new(vec![roll])
    }

    /// Queue more rolls after the current script position.
    pub fn push(&mut self, roll: f64) {
        self.rolls.push(roll);
    }
}

impl RollSource for FixedRolls {
    fn roll_percent(&mut self) -> f64 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        if roll.is_nan() {
            return 0.0;
        }
        roll.clamp(0.0, PROBABILITY_TOTAL - f64::EPSILON * PROBABILITY_TOTAL)
    }
}
