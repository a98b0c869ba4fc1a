//! Schema migration.
//!
//! Older saves kept threads, NPCs and locations as plain string lists and the
//! scene as a plain string. Each field is parsed into a tagged union of its
//! legacy and current shapes and upgraded on its own, so a single save may
//! mix both. Missing fields fall back to the built-in defaults.

use serde::Deserialize;

use gb_core::{Agent, CampaignState, Category, EventLog, ListItem, Scene, defaults};
use gb_oracle::ChaosFactor;

/// Description given to list items upgraded from plain strings.
pub const LEGACY_DESCRIPTION: &str = "Legacy Data";
/// Description given to a plain-string scene restored at startup.
pub const RESTORED_SCENE: &str = "Restored Scene";
/// Title used on import when the file carries no usable scene.
pub const UNKNOWN_SCENE: &str = "Unknown Scene";

/// Which entry point a save is being migrated through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationPath {
    /// Reading the durable store on startup.
    Startup,
    /// Reading a user-supplied import file.
    Import,
}

/// A tracking list in either schema.
///
/// An empty list parses as `Legacy` and upgrades to an empty list, which is
/// the same thing an empty current-shape list would produce.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredList {
    /// Plain titles.
    Legacy(Vec<String>),
    /// Structured items.
    Current(Vec<ListItem>),
}

impl StoredList {
    /// Upgrade to structured items of `category`.
    pub fn upgrade(self, category: Category) -> Vec<ListItem> {
        match self {
            Self::Legacy(titles) => titles
                .into_iter()
                .enumerate()
                .map(|(i, title)| ListItem {
                    id: format!("{}{i}", category.id_prefix()),
                    title,
                    description: LEGACY_DESCRIPTION.to_string(),
                    category,
                })
                .collect(),
            Self::Current(items) => items,
        }
    }

    /// Whether this is the legacy shape with at least one entry.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(titles) if !titles.is_empty())
    }
}

/// The scene in either schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredScene {
    /// A bare heading.
    Legacy(String),
    /// Title and description.
    Current(Scene),
}

impl StoredScene {
    /// Upgrade to a structured scene. The filler description differs by path.
    pub fn upgrade(self, path: MigrationPath) -> Scene {
        match (self, path) {
            (Self::Current(scene), _) => scene,
            (Self::Legacy(title), MigrationPath::Startup) => Scene::new(title, RESTORED_SCENE),
            (Self::Legacy(title), MigrationPath::Import) if title.trim().is_empty() => {
                Scene::new(UNKNOWN_SCENE, "")
            }
            (Self::Legacy(title), MigrationPath::Import) => Scene::new(title, ""),
        }
    }
}

/// A save as read from disk, before migration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCampaign {
    /// Agent roster. No legacy shape.
    pub agents: Option<Vec<Agent>>,
    /// Chaos factor. No legacy shape.
    pub chaos_factor: Option<ChaosFactor>,
    /// Event log. No legacy shape.
    pub logs: Option<EventLog>,
    /// Threads in either shape.
    pub threads: Option<StoredList>,
    /// NPCs in either shape.
    pub npcs: Option<StoredList>,
    /// Locations in either shape.
    pub locations: Option<StoredList>,
    /// Scene in either shape.
    pub scene: Option<StoredScene>,
}

impl RawCampaign {
    /// Whether any field is stored in a legacy shape.
    pub fn has_legacy_fields(&self) -> bool {
        [&self.threads, &self.npcs, &self.locations]
            .into_iter()
            .flatten()
            .any(StoredList::is_legacy)
            || matches!(self.scene, Some(StoredScene::Legacy(_)))
    }
}

fn upgrade_list(list: Option<StoredList>, category: Category) -> Vec<ListItem> {
    match list {
        Some(list) => list.upgrade(category),
        None => defaults::list(category),
    }
}

/// Normalize a raw save into the current schema.
///
/// Agents, chaos factor and logs pass through unchanged, or take their
/// defaults when absent. Callers that require them check before migrating.
pub fn migrate(raw: RawCampaign, path: MigrationPath) -> CampaignState {
    if raw.has_legacy_fields() {
        log::info!("upgrading legacy campaign fields ({path:?})");
    }

    let scene = match (raw.scene, path) {
        (Some(scene), _) => scene.upgrade(path),
        (None, MigrationPath::Startup) => defaults::scene(),
        (None, MigrationPath::Import) => Scene::new(UNKNOWN_SCENE, ""),
    };

    CampaignState {
        agents: raw.agents.unwrap_or_else(defaults::agents),
        chaos_factor: raw.chaos_factor.unwrap_or_default(),
        logs: raw.logs.unwrap_or_else(defaults::logs),
        threads: upgrade_list(raw.threads, Category::Thread),
        npcs: upgrade_list(raw.npcs, Category::Npc),
        locations: upgrade_list(raw.locations, Category::Location),
        scene,
    }
}
