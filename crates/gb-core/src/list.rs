use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which tracking list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// An open plot thread.
    Thread,
    /// A non-player character.
    Npc,
    /// A place.
    Location,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Thread, Self::Npc, Self::Location]
    }

    /// Prefix used for ids synthesized from legacy plain-text lists.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Thread => "t",
            Self::Npc => "n",
            Self::Location => "l",
        }
    }

    /// Singular heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Thread => "Thread",
            Self::Npc => "NPC",
            Self::Location => "Location",
        }
    }

    /// Plural heading.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Thread => "Threads",
            Self::Npc => "NPCs",
            Self::Location => "Locations",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thread" | "threads" => Ok(Self::Thread),
            "npc" | "npcs" => Ok(Self::Npc),
            "location" | "locations" | "loc" => Ok(Self::Location),
            _ => Err(CoreError::UnknownCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thread => write!(f, "thread"),
            Self::Npc => write!(f, "npc"),
            Self::Location => write!(f, "location"),
        }
    }
}

/// An entry in the thread, NPC or location list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Opaque identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Longer notes.
    #[serde(default)]
    pub description: String,
    /// Owning list.
    pub category: Category,
}

impl ListItem {
    /// Create an item with a fresh id.
    pub fn new(category: Category, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            title: title.into(),
            description: description.into(),
            category,
        }
    }

    /// Whether `key` names this item by id or (case-insensitively) by title.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id == key || self.title.eq_ignore_ascii_case(key)
    }
}

impl std::fmt::Display for ListItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{} ({})", self.title, self.description)
        }
    }
}
