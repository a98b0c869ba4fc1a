//! Error types for persistence.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the durable or session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    #[error("storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    /// A key contained characters the backend cannot store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// The campaign could not be serialized.
    #[error("could not encode campaign: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored campaign is not valid JSON of a known shape.
    #[error("saved campaign is unreadable: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Reasons an import file is rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file is not JSON of a known shape.
    #[error("invalid save file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A required top-level field is missing.
    #[error("invalid save file: missing `{0}`")]
    MissingField(&'static str),
}
