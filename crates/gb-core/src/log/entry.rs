//! Log entry types.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// What kind of record a log entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// Story text written by the player.
    Narrative,
    /// Oracle questions, answers and random events.
    Mythic,
    /// Dice rolls and housekeeping notes.
    System,
    /// Fight beats.
    Combat,
    /// Attention-grabbing notices such as triggered random events.
    Alert,
    /// Spoken lines.
    Dialogue,
}

impl LogKind {
    /// Upper-case tag used in journal exports.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Narrative => "NARRATIVE",
            Self::Mythic => "MYTHIC",
            Self::System => "SYSTEM",
            Self::Combat => "COMBAT",
            Self::Alert => "ALERT",
            Self::Dialogue => "DIALOGUE",
        }
    }
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Narrative => write!(f, "narrative"),
            Self::Mythic => write!(f, "mythic"),
            Self::System => write!(f, "system"),
            Self::Combat => write!(f, "combat"),
            Self::Alert => write!(f, "alert"),
            Self::Dialogue => write!(f, "dialogue"),
        }
    }
}

/// A single immutable record in the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique token.
    pub id: String,
    /// Wall-clock display time (`HH:MM`).
    pub timestamp: String,
    /// Record kind. Saves from the browser desk call this field `type`.
    #[serde(alias = "type")]
    pub kind: LogKind,
    /// Main text.
    pub content: String,
    /// Supplementary text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LogEntry {
    /// Create an entry stamped with a fresh id and the current local time.
    pub fn new(kind: LogKind, content: impl Into<String>, details: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            timestamp: Local::now().format("%H:%M").to_string(),
            kind,
            content: content.into(),
            details,
        }
    }

    /// Create an entry with an explicit id and timestamp.
    pub fn at(
        id: impl Into<String>,
        timestamp: impl Into<String>,
        kind: LogKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.into(),
            kind,
            content: content.into(),
            details: None,
        }
    }

    /// Attach supplementary text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// A narrative entry.
    pub fn narrative(content: impl Into<String>) -> Self {
        Self::new(LogKind::Narrative, content, None)
    }

    /// A mythic (oracle) entry.
    pub fn mythic(content: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(LogKind::Mythic, content, Some(details.into()))
    }

    /// A system entry.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(LogKind::System, content, None)
    }

    /// A combat entry.
    pub fn combat(content: impl Into<String>) -> Self {
        Self::new(LogKind::Combat, content, None)
    }

    /// An alert entry.
    pub fn alert(content: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(LogKind::Alert, content, Some(details.into()))
    }

    /// A dialogue entry.
    pub fn dialogue(content: impl Into<String>) -> Self {
        Self::new(LogKind::Dialogue, content, None)
    }
}
