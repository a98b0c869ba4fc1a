//! Meaning tables for random event interpretation.
//!
//! Two fixed lists of 100 words each. A random event draws one word from
//! each, independently and uniformly.

/// Action words (100 entries).
pub const ACTION_WORDS: &[&str] = &[
    "Abandon",
    "Accuse",
    "Acquire",
    "Adapt",
    "Advance",
    "Ambush",
    "Amuse",
    "Argue",
    "Arrest",
    "Assault",
    "Assist",
    "Attract",
    "Befriend",
    "Betray",
    "Block",
    "Break",
    "Bribe",
    "Burn",
    "Capture",
    "Celebrate",
    "Change",
    "Chase",
    "Collapse",
    "Command",
    "Communicate",
    "Conceal",
    "Confront",
    "Contact",
    "Corrupt",
    "Create",
    "Damage",
    "Deceive",
    "Decrease",
    "Defend",
    "Delay",
    "Deny",
    "Destroy",
    "Disappear",
    "Discover",
    "Disrupt",
    "Divide",
    "Dominate",
    "Escape",
    "Expose",
    "Fail",
    "Falsify",
    "Fear",
    "Follow",
    "Guard",
    "Guide",
    "Harm",
    "Haunt",
    "Heal",
    "Hide",
    "Hunt",
    "Imitate",
    "Imprison",
    "Increase",
    "Infect",
    "Inform",
    "Inquire",
    "Inspect",
    "Intercept",
    "Interrogate",
    "Invade",
    "Investigate",
    "Kill",
    "Lie",
    "Lose",
    "Manipulate",
    "Mislead",
    "Move",
    "Negotiate",
    "Neglect",
    "Observe",
    "Obsess",
    "Open",
    "Oppose",
    "Pursue",
    "Question",
    "Recruit",
    "Refuse",
    "Release",
    "Repair",
    "Rescue",
    "Return",
    "Reveal",
    "Ruin",
    "Sacrifice",
    "Seize",
    "Separate",
    "Signal",
    "Spy",
    "Steal",
    "Struggle",
    "Summon",
    "Threaten",
    "Transform",
    "Trap",
    "Wound",
];

/// Descriptor words (100 entries).
pub const DESCRIPTOR_WORDS: &[&str] = &[
    "Abandoned",
    "Alien",
    "Ancient",
    "Anxious",
    "Bizarre",
    "Bleak",
    "Bloody",
    "Bright",
    "Broken",
    "Burning",
    "Calm",
    "Careless",
    "Classified",
    "Clean",
    "Cold",
    "Colossal",
    "Concealed",
    "Corrupt",
    "Cramped",
    "Cruel",
    "Damaged",
    "Dangerous",
    "Dark",
    "Dead",
    "Decayed",
    "Desperate",
    "Dirty",
    "Distant",
    "Dreadful",
    "Empty",
    "Enormous",
    "Familiar",
    "Feverish",
    "Filthy",
    "Forgotten",
    "Fragile",
    "Frantic",
    "Frozen",
    "Geometric",
    "Ghostly",
    "Grim",
    "Guilty",
    "Haunted",
    "Heavy",
    "Hidden",
    "Hollow",
    "Hostile",
    "Hungry",
    "Illegal",
    "Impossible",
    "Infected",
    "Innocent",
    "Insane",
    "Isolated",
    "Lonely",
    "Lost",
    "Loud",
    "Medical",
    "Mechanical",
    "Missing",
    "Mysterious",
    "Nervous",
    "Official",
    "Old",
    "Ominous",
    "Painful",
    "Pale",
    "Paranoid",
    "Peaceful",
    "Powerful",
    "Private",
    "Quiet",
    "Rotten",
    "Ruined",
    "Sacred",
    "Scarred",
    "Secret",
    "Shattered",
    "Sick",
    "Silent",
    "Sinister",
    "Strange",
    "Suspicious",
    "Tainted",
    "Tense",
    "Toxic",
    "Twisted",
    "Unnatural",
    "Unseen",
    "Urgent",
    "Violent",
    "Warm",
    "Watchful",
    "Weak",
    "Weird",
    "Wet",
    "Wicked",
    "Wild",
    "Wounded",
    "Young",
];
