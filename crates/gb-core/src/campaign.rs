use serde::{Deserialize, Serialize};

use gb_oracle::ChaosFactor;

use crate::agent::Agent;
use crate::defaults;
use crate::error::{CoreError, CoreResult};
use crate::list::{Category, ListItem};
use crate::log::{EventLog, LogEntry};
use crate::scene::Scene;

/// The whole campaign. Persisted as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignState {
    /// The agent roster.
    pub agents: Vec<Agent>,
    /// Narrative volatility, 1-9.
    pub chaos_factor: ChaosFactor,
    /// Everything that has happened, oldest first.
    pub logs: EventLog,
    /// Open plot threads.
    pub threads: Vec<ListItem>,
    /// Tracked NPCs.
    pub npcs: Vec<ListItem>,
    /// Known locations.
    pub locations: Vec<ListItem>,
    /// The scene being played.
    pub scene: Scene,
}

impl Default for CampaignState {
    fn default() -> Self {
        defaults::campaign()
    }
}

impl CampaignState {
    /// Append a log entry.
    pub fn append_log(&mut self, entry: LogEntry) {
        self.logs.append(entry);
    }

    /// Find an agent by id or name.
    pub fn agent(&self, key: &str) -> CoreResult<&Agent> {
        self.agents
            .iter()
            .find(|a| a.matches(key))
            .ok_or_else(|| CoreError::AgentNotFound(key.to_string()))
    }

    /// Find an agent by id or name, mutably.
    pub fn agent_mut(&mut self, key: &str) -> CoreResult<&mut Agent> {
        self.agents
            .iter_mut()
            .find(|a| a.matches(key))
            .ok_or_else(|| CoreError::AgentNotFound(key.to_string()))
    }

    /// Borrow one of the tracking lists.
    pub fn list(&self, category: Category) -> &[ListItem] {
        match category {
            Category::Thread => &self.threads,
            Category::Npc => &self.npcs,
            Category::Location => &self.locations,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<ListItem> {
        match category {
            Category::Thread => &mut self.threads,
            Category::Npc => &mut self.npcs,
            Category::Location => &mut self.locations,
        }
    }

    /// Add an item to a list. Returns the new item.
    pub fn add_item(
        &mut self,
        category: Category,
        title: &str,
        description: &str,
    ) -> CoreResult<&ListItem> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Blank("title"));
        }
        let list = self.list_mut(category);
        list.push(ListItem::new(category, title, description.trim()));
        Ok(&list[list.len() - 1])
    }

    /// Replace the title and description of an item found by id or title.
    pub fn edit_item(
        &mut self,
        category: Category,
        key: &str,
        title: &str,
        description: &str,
    ) -> CoreResult<&ListItem> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Blank("title"));
        }
        let item = self
            .list_mut(category)
            .iter_mut()
            .find(|i| i.matches(key))
            .ok_or_else(|| CoreError::ItemNotFound {
                category: category.to_string(),
                key: key.to_string(),
            })?;
        item.title = title.to_string();
        item.description = description.trim().to_string();
        Ok(item)
    }

    /// Remove an item found by id or title. Returns the removed item.
    pub fn remove_item(&mut self, category: Category, key: &str) -> CoreResult<ListItem> {
        let list = self.list_mut(category);
        let idx = list
            .iter()
            .position(|i| i.matches(key))
            .ok_or_else(|| CoreError::ItemNotFound {
                category: category.to_string(),
                key: key.to_string(),
            })?;
        Ok(list.remove(idx))
    }

    /// Replace the current scene.
    pub fn set_scene(&mut self, title: &str, description: &str) -> CoreResult<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Blank("scene title"));
        }
        self.scene = Scene::new(title, description.trim());
        Ok(())
    }
}
