//! Random event generation.
//!
//! A triggered event rolls on the focus table to decide what the event is
//! about, then draws an action word and a descriptor word for the player to
//! interpret.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::tables::{ACTION_WORDS, DESCRIPTOR_WORDS};

/// What a random event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Focus {
    /// Something happens elsewhere that affects the story.
    RemoteEvent,
    /// An NPC takes independent action.
    NpcAction,
    /// A new NPC enters the story.
    IntroduceNewNpc,
    /// An open thread advances.
    MoveTowardThread,
    /// An open thread is set back.
    MoveAwayFromThread,
    /// An open thread resolves.
    CloseThread,
    /// Something bad happens to a player character.
    PcNegative,
    /// Something good happens to a player character.
    PcPositive,
    /// An event that could go either way.
    AmbiguousEvent,
    /// Something bad happens to an NPC.
    NpcNegative,
}

/// Cumulative upper bounds of the focus table, in d100 order.
const FOCUS_TABLE: [(u32, Focus); 10] = [
    (7, Focus::RemoteEvent),
    (28, Focus::NpcAction),
    (35, Focus::IntroduceNewNpc),
    (45, Focus::MoveTowardThread),
    (52, Focus::MoveAwayFromThread),
    (55, Focus::CloseThread),
    (67, Focus::PcNegative),
    (75, Focus::PcPositive),
    (83, Focus::AmbiguousEvent),
    (100, Focus::NpcNegative),
];

impl Focus {
    /// Look up the focus for a d100 roll. Rolls above 100 count as 100.
    pub fn for_roll(roll: u32) -> Self {
        FOCUS_TABLE
            .iter()
            .find(|(max, _)| roll <= *max)
            .map(|(_, focus)| *focus)
            .unwrap_or(Self::NpcNegative)
    }

    /// All focus categories in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        FOCUS_TABLE.iter().map(|(_, focus)| *focus)
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RemoteEvent => write!(f, "Remote Event"),
            Self::NpcAction => write!(f, "NPC Action"),
            Self::IntroduceNewNpc => write!(f, "Introduce New NPC"),
            Self::MoveTowardThread => write!(f, "Move Toward a Thread"),
            Self::MoveAwayFromThread => write!(f, "Move Away from a Thread"),
            Self::CloseThread => write!(f, "Close a Thread"),
            Self::PcNegative => write!(f, "PC Negative"),
            Self::PcPositive => write!(f, "PC Positive"),
            Self::AmbiguousEvent => write!(f, "Ambiguous Event"),
            Self::NpcNegative => write!(f, "NPC Negative"),
        }
    }
}

/// An action/descriptor word pair to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// Verb-like action word.
    pub action: String,
    /// Adjective-like descriptor word.
    pub descriptor: String,
}

impl std::fmt::Display for Meaning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}", self.action, self.descriptor)
    }
}

/// A generated random event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomEvent {
    /// What the event is about.
    pub focus: Focus,
    /// The d100 roll that selected the focus.
    pub focus_roll: u32,
    /// Words to interpret.
    pub meaning: Meaning,
}

impl std::fmt::Display for RandomEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.focus, self.meaning)
    }
}

/// Roll on the focus table. Returns the focus and the roll.
pub fn roll_focus(rng: &mut dyn RandomSource) -> (Focus, u32) {
    let roll = rng.d100();
    (Focus::for_roll(roll), roll)
}

/// Draw an action word and a descriptor word, each uniformly.
pub fn roll_meaning(rng: &mut dyn RandomSource) -> Meaning {
    Meaning {
        action: pick(ACTION_WORDS, rng).to_string(),
        descriptor: pick(DESCRIPTOR_WORDS, rng).to_string(),
    }
}

/// Generate a complete random event: focus, then action, then descriptor.
pub fn generate_random_event(rng: &mut dyn RandomSource) -> RandomEvent {
    let (focus, focus_roll) = roll_focus(rng);
    let meaning = roll_meaning(rng);
    RandomEvent {
        focus,
        focus_roll,
        meaning,
    }
}

fn pick(words: &'static [&'static str], rng: &mut dyn RandomSource) -> &'static str {
    let len = words.len() as u32;
    let idx = rng.roll_range(1, len) - 1;
    words[idx as usize]
}
