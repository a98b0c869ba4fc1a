//! Fate engine for greenbox.
//!
//! Turns a qualitative [`Odds`] judgment and the current [`ChaosFactor`] into
//! a Yes/No [`Verdict`], with a secondary chance of an unprompted
//! [`RandomEvent`]. All randomness flows through a [`RandomSource`] so the
//! engine is deterministic under a fixed seed or a scripted sequence.

pub mod chaos;
pub mod dice;
pub mod error;
pub mod event;
pub mod fate;
pub mod random;
pub mod tables;

pub use chaos::ChaosFactor;
pub use dice::Die;
pub use error::{OracleError, OracleResult};
pub use event::{Focus, Meaning, RandomEvent, generate_random_event};
pub use fate::{Odds, Resolution, Verdict, classify, compute_probability, is_random_event, resolve};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
