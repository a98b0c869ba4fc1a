//! Log storage and journal export.

use serde::{Deserialize, Serialize};

use super::entry::{LogEntry, LogKind};

/// A chronological, append-only record of the campaign.
///
/// Entries are kept in creation order. There is no way to edit or remove one;
/// the whole log can only be replaced together with the campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// All entries in creation order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Iterate entries in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// The newest entry, which views keep scrolled into sight.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// The newest `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Operation Log\n\n");
        for entry in &self.entries {
            match entry.kind {
                LogKind::Narrative => {
                    out.push_str(&format!("*{}*\n\n{}\n", entry.timestamp, entry.content));
                }
                LogKind::Dialogue => {
                    out.push_str(&format!("*{}* > \"{}\"\n", entry.timestamp, entry.content));
                }
                kind => {
                    out.push_str(&format!(
                        "*{}* **{}** {}\n",
                        entry.timestamp,
                        kind.tag(),
                        entry.content
                    ));
                }
            }
            if let Some(details) = &entry.details {
                out.push_str(&format!("  {details}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Export the log as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Operation Log\n=============\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "[{}] {:<9} {}\n",
                entry.timestamp,
                entry.kind.tag(),
                entry.content
            ));
            if let Some(details) = &entry.details {
                out.push_str(&format!("          {details}\n"));
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<LogEntry>> for EventLog {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}
