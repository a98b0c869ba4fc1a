//! Uniform integer sources.
//!
//! Everything stochastic in the engine draws through [`RandomSource`], so a
//! caller can run it against a seeded generator, OS entropy, or a fixed
//! script of rolls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform integer generator over inclusive ranges.
pub trait RandomSource {
    /// Draw a value uniformly from `low..=high`.
    fn roll_range(&mut self, low: u32, high: u32) -> u32;

    /// Draw a percentile roll (1-100).
    fn d100(&mut self) -> u32 {
        self.roll_range(1, 100)
    }
}

/// Random source backed by the standard RNG.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Deterministic source for reproducible sessions.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Unseeded source drawing its seed from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
///
/// Each scripted value is clamped into the requested range. An empty script
/// always yields the low end of the range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high.max(low))
    }
}
