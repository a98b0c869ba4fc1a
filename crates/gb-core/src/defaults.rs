//! The built-in starting campaign: Operation VISCID GLIMMER.
//!
//! Used on first run, after a reset, and to fill fields missing from a save.

use serde_json::Map;

use crate::agent::{Agent, Derived, Stats, Track};
use crate::campaign::CampaignState;
use crate::list::{Category, ListItem};
use crate::log::{EventLog, LogEntry, LogKind};
use crate::scene::Scene;

use gb_oracle::ChaosFactor;

const BRIEFING: &str = "BRIEFING: Operation VISCID GLIMMER\n\n\
TARGET: Elias Vance (Grad Student, U of Chicago).\n\
STATUS: Missing (48hrs).\n\n\
DETAILS: Vance was researching \"Hyper-geometry in Pre-Columbian Architecture.\" \
Local PD report he is a runaway, but responding officer reported nausea and \
disorientation upon entering Vance's apartment. Apartment contains strange \
charcoal scrawls.\n\n\
OBJECTIVES:\n1. Locate Vance.\n2. Assess potential unnatural threat.\n3. Contain/Sanitize.";

/// The complete default campaign.
pub fn campaign() -> CampaignState {
    CampaignState {
        agents: agents(),
        chaos_factor: ChaosFactor::default(),
        logs: logs(),
        threads: threads(),
        npcs: npcs(),
        locations: locations(),
        scene: scene(),
    }
}

#[allow(clippy::too_many_arguments)]
fn agent(
    id: &str,
    name: &str,
    profession: &str,
    description: &str,
    stats: [i32; 6],
    hp: i32,
    wp: i32,
    san: (i32, i32),
    skills: &[&str],
    gear: &[&str],
) -> Agent {
    let [strength, constitution, dexterity, intelligence, power, charisma] = stats;
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        profession: profession.to_string(),
        description: description.to_string(),
        stats: Stats {
            strength,
            constitution,
            dexterity,
            intelligence,
            power,
            charisma,
        },
        derived: Derived {
            hp: Track::new(hp),
            wp: Track::new(wp),
            san: Track::sanity(san.0, 99, san.1),
        },
        skills: skills.iter().map(|s| s.to_string()).collect(),
        gear: gear.iter().map(|s| s.to_string()).collect(),
        portrait: None,
        extra: Map::new(),
    }
}

/// The starting roster.
pub fn agents() -> Vec<Agent> {
    vec![
        agent(
            "jack",
            "Jack Robbins",
            "Police Detective",
            "38 y/o. Sturdy build, weary eyes. Wears cheap suits. Smells of coffee.",
            [13, 13, 12, 12, 11, 11],
            13,
            11,
            (55, 44),
            &["Firearms 50%", "Humint 60%", "Law 40%", "Search 50%", "Unarmed 50%"],
            &["Glock 17", "Badge & ID", "Kevlar Vest", "Handcuffs", "Unmarked Sedan"],
        ),
        agent(
            "tom",
            "Tom Marteen",
            "Paramedic",
            "29 y/o. Lean, nervous energy. Practical dress (cargo pants, hoodies).",
            [10, 11, 12, 15, 14, 10],
            11,
            14,
            (70, 56),
            &["First Aid 60%", "Medicine 50%", "Pharmacy 40%", "Science (Biology) 40%"],
            &["Trauma Bag", "Nitrile Gloves", "Headlamp", "Multi-tool", "Personal SUV"],
        ),
        agent(
            "paul",
            "Paul Smith",
            "Historian",
            "45 y/o. Soft build, glasses, tweed jackets. Professor at U of Chicago.",
            [9, 10, 10, 17, 14, 12],
            10,
            14,
            (70, 56),
            &["History 70%", "Occult 50%", "Language (Latin) 50%", "Research 60%"],
            &["Laptop", "Voice Recorder", "Notebook", "Library Keycard", "Volvo Station Wagon"],
        ),
    ]
}

/// The opening log entries.
pub fn logs() -> EventLog {
    EventLog::from(vec![
        LogEntry::at(
            "init-1",
            "09:00",
            LogKind::System,
            "Secure connection established. Decrypting mission packet...",
        ),
        LogEntry::at("init-2", "09:01", LogKind::Narrative, BRIEFING),
    ])
}

/// Default threads.
pub fn threads() -> Vec<ListItem> {
    vec![
        item("t1", Category::Thread, "Operation: VISCID GLIMMER", "Primary mission"),
        item("t2", Category::Thread, "Find Elias Vance", "Missing for 48 hours"),
    ]
}

/// Default NPCs.
pub fn npcs() -> Vec<ListItem> {
    vec![item("n1", Category::Npc, "Handler (Control)", "Mission contact")]
}

/// Default locations.
pub fn locations() -> Vec<ListItem> {
    vec![
        item("l1", Category::Location, "Vance's Apartment", "Charcoal scrawls on the walls"),
        item("l2", Category::Location, "University of Chicago", "Vance's department"),
    ]
}

/// Default list for a category.
pub fn list(category: Category) -> Vec<ListItem> {
    match category {
        Category::Thread => threads(),
        Category::Npc => npcs(),
        Category::Location => locations(),
    }
}

/// The opening scene.
pub fn scene() -> Scene {
    Scene::new("Scene 1: The Call", "Briefing")
}

fn item(id: &str, category: Category, title: &str, description: &str) -> ListItem {
    ListItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
    }
}
