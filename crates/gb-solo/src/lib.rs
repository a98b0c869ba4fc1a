//! Campaign session for greenbox.
//!
//! [`CampaignSession`] is what a front end talks to: it owns the campaign,
//! the persistence manager and the random source, flushes the campaign to the
//! durable store after every mutation, and interprets text commands for the
//! interactive desk.

pub mod config;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use error::{SoloError, SoloResult};
pub use session::CampaignSession;
