//! Plain polyhedral dice for the dice tray.

use serde::{Deserialize, Serialize};

use crate::error::OracleError;
use crate::random::RandomSource;

/// A single die from the standard tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twenty-sided die.
    D20,
    /// Percentile die.
    D100,
}

impl Die {
    /// Every die in the tray, smallest first.
    pub fn all() -> &'static [Self] {
        &[Self::D4, Self::D6, Self::D8, Self::D10, Self::D20, Self::D100]
    }

    /// Number of faces.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// Roll this die once.
    pub fn roll(self, rng: &mut dyn RandomSource) -> u32 {
        rng.roll_range(1, self.sides())
    }
}

impl std::str::FromStr for Die {
    type Err = OracleError;

    /// Accepts `d20`, `D20` or `20`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['d', 'D'])
            .unwrap_or(trimmed);
        let sides: u32 = digits
            .parse()
            .map_err(|_| OracleError::InvalidDie(s.to_string()))?;
        Self::all()
            .iter()
            .copied()
            .find(|d| d.sides() == sides)
            .ok_or_else(|| OracleError::InvalidDie(s.to_string()))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    #[test]
    fn parse_variants() {
        assert_eq!("d20".parse::<Die>().unwrap(), Die::D20);
        assert_eq!("D6".parse::<Die>().unwrap(), Die::D6);
        assert_eq!("100".parse::<Die>().unwrap(), Die::D100);
        assert!("d7".parse::<Die>().is_err());
        assert!("dx".parse::<Die>().is_err());
    }

    #[test]
    fn rolls_stay_on_the_die() {
        let mut rng = SeededRandom::from_seed(3);
        for die in Die::all() {
            for _ in 0..500 {
                let v = die.roll(&mut rng);
                assert!((1..=die.sides()).contains(&v), "{die} rolled {v}");
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(Die::D100.to_string(), "d100");
    }
}
