pub mod ask;
pub mod chart;
pub mod export;
pub mod import;
pub mod play;
pub mod reset;
pub mod roll;
pub mod status;

use std::path::Path;

use colored::{ColoredString, Colorize};

use gb_oracle::Verdict;
use gb_solo::{CampaignSession, SessionConfig};
use gb_store::{FileStore, MemoryStore, PersistenceManager};

/// A campaign saved under the data directory, with an in-process draft store.
pub type DeskSession = CampaignSession<FileStore, MemoryStore>;

/// Open the campaign in `data_dir`, or the defaults if nothing is saved there.
pub fn open_session(data_dir: &Path, seed: Option<u64>) -> DeskSession {
    log::debug!("opening campaign in {}", data_dir.display());
    let persistence = PersistenceManager::new(FileStore::new(data_dir), MemoryStore::new());
    let config = match seed {
        Some(seed) => SessionConfig::default().with_seed(seed),
        None => SessionConfig::default(),
    };
    CampaignSession::open(persistence, config)
}

/// Colour a verdict: green for yes, red for no, bold when exceptional.
fn paint_verdict(verdict: Verdict) -> ColoredString {
    let text = verdict.to_string();
    match verdict {
        Verdict::ExceptionalYes => text.green().bold(),
        Verdict::Yes => text.green(),
        Verdict::No => text.red(),
        Verdict::ExceptionalNo => text.red().bold(),
    }
}
