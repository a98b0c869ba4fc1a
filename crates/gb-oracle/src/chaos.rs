//! Chaos factor tracking.
//!
//! The chaos factor (1-9) represents how volatile the story has become.
//! Higher chaos raises the chance of "Yes" answers and makes random events
//! more likely. It only changes on explicit user action.

use serde::{Deserialize, Serialize};

/// Lowest allowed chaos value.
pub const MIN_CHAOS: u32 = 1;
/// Highest allowed chaos value.
pub const MAX_CHAOS: u32 = 9;

/// The chaos factor, ranging from 1 (orderly) to 9 (chaotic).
///
/// Serialized as a bare integer. Out-of-range values coming from disk are
/// clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ChaosFactor {
    value: u32,
}

impl ChaosFactor {
    /// Create a new chaos factor, clamped to 1-9.
    pub fn new(value: u32) -> Self {
        Self {
            value: value.clamp(MIN_CHAOS, MAX_CHAOS),
        }
    }

    /// Get the current chaos value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Replace the value, clamped to 1-9.
    pub fn set(&mut self, value: u32) {
        *self = Self::new(value);
    }

    /// Increase chaos by 1 (max 9).
    pub fn increase(&mut self) {
        self.value = (self.value + 1).min(MAX_CHAOS);
    }

    /// Decrease chaos by 1 (min 1).
    pub fn decrease(&mut self) {
        self.value = self.value.saturating_sub(1).max(MIN_CHAOS);
    }
}

impl Default for ChaosFactor {
    fn default() -> Self {
        Self::new(5)
    }
}

impl From<u32> for ChaosFactor {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<ChaosFactor> for u32 {
    fn from(chaos: ChaosFactor) -> Self {
        chaos.value
    }
}

impl std::fmt::Display for ChaosFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
