//! Campaign state for greenbox.
//!
//! [`CampaignState`] is the unit of persistence: the agent roster, the chaos
//! factor, the append-only [`EventLog`], the thread/NPC/location lists and the
//! current scene. This crate knows nothing about storage; agent statistics are
//! payload it stores without interpreting.

/// Agent roster records and clamped resource tracks.
pub mod agent;
/// The campaign aggregate root.
pub mod campaign;
/// Built-in starting campaign.
pub mod defaults;
/// Error types used throughout the crate.
pub mod error;
/// Thread, NPC and location list items.
pub mod list;
/// Append-only event log.
pub mod log;
/// The current scene.
pub mod scene;

/// Re-export agent types.
pub use agent::{Agent, Portrait, Stats, Track, TrackKind};
/// Re-export the aggregate root.
pub use campaign::CampaignState;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export list types.
pub use list::{Category, ListItem};
/// Re-export log types.
pub use log::{EventLog, LogEntry, LogKind};
/// Re-export scene type.
pub use scene::Scene;
