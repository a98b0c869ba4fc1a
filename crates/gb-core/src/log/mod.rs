//! The campaign's append-only event log.

pub mod entry;
pub mod event_log;

pub use entry::{LogEntry, LogKind};
pub use event_log::EventLog;
