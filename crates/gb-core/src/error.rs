/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when mutating campaign state.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    /// No agent matches the given id or name.
    #[error("agent not found: {0}")]
    AgentNotFound(String),

    /// No list item matches the given id or title.
    #[error("{category} not found: {key}")]
    ItemNotFound {
        /// The list that was searched.
        category: String,
        /// The id or title that was looked up.
        key: String,
    },

    /// Unrecognized track name.
    #[error("unknown track: {0} (use hp, wp or san)")]
    UnknownTrack(String),

    /// Unrecognized list category.
    #[error("unknown category: {0} (use thread, npc or location)")]
    UnknownCategory(String),

    /// Required text was empty.
    #[error("{0} must not be empty")]
    Blank(&'static str),
}
