//! Error types for the fate engine.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can occur when consulting the oracle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OracleError {
    /// The question was empty or whitespace only. No roll was made.
    #[error("the oracle needs a question")]
    BlankQuestion,

    /// Unrecognized odds label.
    #[error("invalid odds: {0}")]
    InvalidOdds(String),

    /// Unrecognized die.
    #[error("invalid die: {0} (use d4, d6, d8, d10, d20 or d100)")]
    InvalidDie(String),
}
