//! Fate chart for yes/no questions.
//!
//! Odds map to a base probability calibrated at chaos 5, shifted five points
//! per chaos step and clamped to 5-95 so no answer is ever certain. A d100
//! roll against that probability gives Yes, No, or an exceptional variant of
//! either. Doubles at or under the chaos factor also trigger a random event.

use serde::{Deserialize, Serialize};

use crate::chaos::ChaosFactor;
use crate::error::{OracleError, OracleResult};
use crate::event::{RandomEvent, generate_random_event};
use crate::random::RandomSource;

/// Lowest probability the fate chart will ever report.
pub const MIN_PROBABILITY: u32 = 5;
/// Highest probability the fate chart will ever report.
pub const MAX_PROBABILITY: u32 = 95;

/// Chaos level the base probabilities are calibrated at.
const REFERENCE_CHAOS: i32 = 5;
/// Percentage points added per chaos step above the reference.
const POINTS_PER_CHAOS_STEP: i32 = 5;

/// How likely the asker thinks the answer is "Yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Odds {
    /// Almost certainly not.
    Impossible,
    /// Extremely unlikely.
    #[serde(rename = "No Way")]
    NoWay,
    /// Leaning no.
    Unlikely,
    /// Even odds.
    #[serde(rename = "50/50")]
    FiftyFifty,
    /// Leaning yes.
    Likely,
    /// Very probably.
    #[serde(rename = "Sure Thing")]
    SureThing,
    /// Virtually guaranteed.
    #[serde(rename = "Has To Be")]
    HasToBe,
}

impl Odds {
    /// Parse odds from a user-supplied label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "impossible" => Some(Self::Impossible),
            "no way" | "noway" => Some(Self::NoWay),
            "unlikely" => Some(Self::Unlikely),
            "50/50" | "5050" | "fifty fifty" | "even" => Some(Self::FiftyFifty),
            "likely" => Some(Self::Likely),
            "sure thing" | "surething" | "sure" => Some(Self::SureThing),
            "has to be" | "hastobe" | "certain" => Some(Self::HasToBe),
            _ => None,
        }
    }

    /// All odds from least to most likely.
    pub fn all() -> &'static [Self] {
        &[
            Self::Impossible,
            Self::NoWay,
            Self::Unlikely,
            Self::FiftyFifty,
            Self::Likely,
            Self::SureThing,
            Self::HasToBe,
        ]
    }

    /// Yes-probability at chaos 5.
    pub fn base_probability(self) -> u32 {
        match self {
            Self::Impossible => 10,
            Self::NoWay => 25,
            Self::Unlikely => 45,
            Self::FiftyFifty => 50,
            Self::Likely => 65,
            Self::SureThing => 85,
            Self::HasToBe => 95,
        }
    }
}

impl std::str::FromStr for Odds {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| OracleError::InvalidOdds(s.to_string()))
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Impossible => write!(f, "Impossible"),
            Self::NoWay => write!(f, "No Way"),
            Self::Unlikely => write!(f, "Unlikely"),
            Self::FiftyFifty => write!(f, "50/50"),
            Self::Likely => write!(f, "Likely"),
            Self::SureThing => write!(f, "Sure Thing"),
            Self::HasToBe => write!(f, "Has To Be"),
        }
    }
}

/// The oracle's answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Yes, and more than expected.
    ExceptionalYes,
    /// Affirmative.
    Yes,
    /// Negative.
    No,
    /// No, and worse than expected.
    ExceptionalNo,
}

impl Verdict {
    /// Whether the verdict is a yes of either strength.
    pub fn is_yes(self) -> bool {
        matches!(self, Self::ExceptionalYes | Self::Yes)
    }

    /// Whether the verdict is an exceptional result.
    pub fn is_exceptional(self) -> bool {
        matches!(self, Self::ExceptionalYes | Self::ExceptionalNo)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExceptionalYes => write!(f, "Exceptional Yes"),
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
            Self::ExceptionalNo => write!(f, "Exceptional No"),
        }
    }
}

/// The full outcome of a resolved question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The question exactly as asked.
    pub question: String,
    /// Odds chosen by the asker.
    pub odds: Odds,
    /// Chaos factor at the time of asking.
    pub chaos: u32,
    /// The d100 roll (1-100).
    pub roll: u32,
    /// Yes-probability the roll was checked against.
    pub probability: u32,
    /// The verdict.
    pub verdict: Verdict,
    /// A random event, if the roll triggered one.
    pub random_event: Option<RandomEvent>,
}

/// Yes-probability for the given chaos and odds, always within 5-95.
pub fn compute_probability(chaos: ChaosFactor, odds: Odds) -> u32 {
    let shift = (chaos.value() as i32 - REFERENCE_CHAOS) * POINTS_PER_CHAOS_STEP;
    let raw = odds.base_probability() as i32 + shift;
    raw.clamp(MIN_PROBABILITY as i32, MAX_PROBABILITY as i32) as u32
}

/// Classify a d100 roll against a yes-probability.
///
/// Exceptional Yes is the bottom fifth of the yes band (rounded up),
/// Exceptional No the top fifth of the no band (rounded down). The four bands
/// partition 1-100.
pub fn classify(roll: u32, probability: u32) -> Verdict {
    let exceptional_yes_max = (probability * 20).div_ceil(100);
    let exceptional_no_min = 100 - (100 - probability.min(100)) * 20 / 100;

    if roll <= exceptional_yes_max {
        Verdict::ExceptionalYes
    } else if roll <= probability {
        Verdict::Yes
    } else if roll >= exceptional_no_min {
        Verdict::ExceptionalNo
    } else {
        Verdict::No
    }
}

/// Whether a roll triggers a random event.
///
/// The roll's two digits must match (11, 22, ..., 99) and the repeated digit
/// must not exceed the chaos factor. Single-digit rolls read as `0n` and 100
/// never qualifies.
pub fn is_random_event(roll: u32, chaos: ChaosFactor) -> bool {
    if !(11..=99).contains(&roll) {
        return false;
    }
    let tens = roll / 10;
    let ones = roll % 10;
    tens == ones && tens <= chaos.value()
}

/// Ask the oracle a yes/no question.
///
/// A blank question is rejected before anything is rolled.
pub fn resolve(
    question: &str,
    chaos: ChaosFactor,
    odds: Odds,
    rng: &mut dyn RandomSource,
) -> OracleResult<Resolution> {
    if question.trim().is_empty() {
        return Err(OracleError::BlankQuestion);
    }

    let probability = compute_probability(chaos, odds);
    let roll = rng.d100();
    let verdict = classify(roll, probability);

    let random_event = if is_random_event(roll, chaos) {
        Some(generate_random_event(rng))
    } else {
        None
    };

    log::debug!("oracle: {odds} at chaos {chaos}, rolled {roll} vs {probability}% -> {verdict}");

    Ok(Resolution {
        question: question.to_string(),
        odds,
        chaos: chaos.value(),
        roll,
        probability,
        verdict,
        random_event,
    })
}
