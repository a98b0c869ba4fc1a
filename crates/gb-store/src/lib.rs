//! Persistence for greenbox campaigns.
//!
//! Campaigns are written through to a durable [`KeyValueStore`] after every
//! mutation, while the unsent log draft lives in a session-scoped one. Saves
//! written by older versions are upgraded field by field on the way in, and
//! campaigns can be exported to and imported from a portable JSON file.

pub mod error;
pub mod kv;
pub mod manager;
pub mod migrate;
pub mod transfer;

pub use error::{ImportError, StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use manager::{CAMPAIGN_KEY, DRAFT_KEY, PersistenceManager};
pub use migrate::{MigrationPath, RawCampaign, StoredList, StoredScene, migrate};
pub use transfer::{EXPORT_FILE_NAME, export_campaign, import_campaign};
