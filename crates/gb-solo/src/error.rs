//! Error types for campaign sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SoloResult<T> = Result<T, SoloError>;

/// Errors that can occur during a campaign session.
#[derive(Debug, Error)]
pub enum SoloError {
    /// Oracle or dice input was rejected.
    #[error("{0}")]
    Oracle(#[from] gb_oracle::OracleError),

    /// A campaign edit was rejected.
    #[error("{0}")]
    Core(#[from] gb_core::CoreError),

    /// An import file was rejected. The campaign is unchanged.
    #[error("{0}")]
    Import(#[from] gb_store::ImportError),

    /// An explicit save or export failed.
    #[error("{0}")]
    Store(#[from] gb_store::StoreError),

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
