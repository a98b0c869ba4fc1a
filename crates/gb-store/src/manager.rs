//! Campaign persistence across the durable and session stores.

use gb_core::{CampaignState, LogEntry};

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;
use crate::migrate::{MigrationPath, RawCampaign, migrate};

/// Durable-store key holding the campaign document.
pub const CAMPAIGN_KEY: &str = "greenbox.campaign";
/// Session-store key holding the unsent log draft.
pub const DRAFT_KEY: &str = "greenbox.draft";

const CORRUPT_NOTE: &str = "Saved campaign could not be read. Starting from defaults.";

/// Reads and writes campaigns and drafts.
///
/// `D` outlives the process; `S` holds only the current session's draft.
#[derive(Debug)]
pub struct PersistenceManager<D, S> {
    durable: D,
    session: S,
}

impl<D: KeyValueStore, S: KeyValueStore> PersistenceManager<D, S> {
    /// Wrap a durable and a session store.
    pub fn new(durable: D, session: S) -> Self {
        Self { durable, session }
    }

    /// The durable store.
    pub fn durable(&self) -> &D {
        &self.durable
    }

    /// The session store.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Write the whole campaign to the durable store.
    pub fn save(&mut self, state: &CampaignState) -> StoreResult<()> {
        let json = serde_json::to_string(state).map_err(StoreError::Encode)?;
        self.durable.set(CAMPAIGN_KEY, &json)
    }

    /// Read and migrate the saved campaign. `Ok(None)` when nothing is saved.
    pub fn load(&self) -> StoreResult<Option<CampaignState>> {
        let Some(json) = self.durable.get(CAMPAIGN_KEY)? else {
            return Ok(None);
        };
        let raw: RawCampaign = serde_json::from_str(&json).map_err(StoreError::Corrupt)?;
        Ok(Some(migrate(raw, MigrationPath::Startup)))
    }

    /// Load the saved campaign, falling back to the defaults.
    ///
    /// An unreadable save is not fatal: the defaults are returned with a
    /// system note explaining what happened. The bad save stays on disk until
    /// the next write replaces it.
    pub fn load_or_default(&self) -> CampaignState {
        match self.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                log::debug!("no saved campaign, starting from defaults");
                CampaignState::default()
            }
            Err(e) => {
                log::warn!("{e}");
                let mut state = CampaignState::default();
                state.append_log(LogEntry::system(CORRUPT_NOTE));
                state
            }
        }
    }

    /// Store the log draft. An empty draft clears the key.
    pub fn save_draft(&mut self, draft: &str) -> StoreResult<()> {
        if draft.is_empty() {
            self.session.clear(DRAFT_KEY)
        } else {
            self.session.set(DRAFT_KEY, draft)
        }
    }

    /// Read the log draft, empty when none is stored.
    pub fn load_draft(&self) -> String {
        match self.session.get(DRAFT_KEY) {
            Ok(draft) => draft.unwrap_or_default(),
            Err(e) => {
                log::warn!("could not read draft: {e}");
                String::new()
            }
        }
    }

    /// Clear both stores and return a fresh default campaign.
    ///
    /// Failures are logged and skipped; the caller gets defaults either way.
    pub fn reset(&mut self) -> CampaignState {
        if let Err(e) = self.durable.clear(CAMPAIGN_KEY) {
            log::warn!("could not clear saved campaign: {e}");
        }
        if let Err(e) = self.session.clear(DRAFT_KEY) {
            log::warn!("could not clear draft: {e}");
        }
        CampaignState::default()
    }
}
