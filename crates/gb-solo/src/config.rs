//! Configuration for a campaign session.

/// Configuration for a campaign session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible rolls. Drawn from the OS when unset.
    pub seed: Option<u64>,
    /// Chaos factor (1-9) to apply on open, overriding the saved value.
    pub initial_chaos: Option<u32>,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the chaos factor to open with (clamped to 1-9).
    pub fn with_chaos(mut self, chaos: u32) -> Self {
        self.initial_chaos = Some(chaos.clamp(1, 9));
        self
    }
}
