//! Definitions for [`WalkScore`] and its derived [`ScoreCategory`].

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A walkability score, an integer in [0, 100].
///
/// The library makes no assumption about how the score was produced —
/// today it comes from the simulated generator in
/// [`crate::utils::generator`], later from a real scoring pipeline —
/// only that it was validated into this range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WalkScore(u8);

impl WalkScore {
    /// Validates a raw score into a [`WalkScore`].
    pub fn new(value: u8) -> Result<WalkScore, Error> {
        if value > 100 {
            return Err(Error::ScoreOutOfRange(value));
        }
        Ok(WalkScore(value))
    }

    /// Returns the raw score value.
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Classifies the score into its display category.
    ///
    /// Boundary values belong to the higher category: exactly 70 is
    /// [`ScoreCategory::High`], exactly 40 is [`ScoreCategory::Moderate`].
    pub fn category(&self) -> ScoreCategory {
        if self.0 >= 70 {
            ScoreCategory::High
        } else if self.0 >= 40 {
            ScoreCategory::Moderate
        } else {
            ScoreCategory::Low
        }
    }
}

impl TryFrom<u8> for WalkScore {
    type Error = Error;

    fn try_from(value: u8) -> Result<WalkScore, Error> {
        WalkScore::new(value)
    }
}

impl From<WalkScore> for u8 {
    fn from(score: WalkScore) -> u8 {
        score.0
    }
}

impl std::fmt::Display for WalkScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Walkability category, derived from the fixed breakpoints 70 and 40.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    High,
    Moderate,
    Low,
}

impl ScoreCategory {
    /// Short headline shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::High => "Highly Walkable",
            ScoreCategory::Moderate => "Moderately Walkable",
            ScoreCategory::Low => "Poor Walkability",
        }
    }

    /// Longer explanation of what the category means on the ground.
    pub fn explanation(&self) -> &'static str {
        match self {
            ScoreCategory::High => {
                "Highly walkable area with good pedestrian access, well-lit paths, \
                 and safe crossings. Most errands can be accomplished on foot."
            }
            ScoreCategory::Moderate => {
                "Moderate walkability with some pedestrian infrastructure. Some \
                 improvements needed for better accessibility and safety."
            }
            ScoreCategory::Low => {
                "Low walkability, not pedestrian friendly. Limited sidewalks, poor \
                 lighting, and challenging crossings. Driving is likely required \
                 for most errands."
            }
        }
    }
}

#[cfg(test)]
mod score_tests {
    use super::*;

    #[test]
    fn ut_score_range() {
        assert!(WalkScore::new(0).is_ok());
        assert!(WalkScore::new(100).is_ok());
        assert_eq!(WalkScore::new(101), Err(Error::ScoreOutOfRange(101)));
    }

    /// Boundary values belong to the higher category.
    #[test]
    fn ut_category_breakpoints() {
        assert_eq!(WalkScore::new(70).unwrap().category(), ScoreCategory::High);
        assert_eq!(
            WalkScore::new(69).unwrap().category(),
            ScoreCategory::Moderate
        );
        assert_eq!(
            WalkScore::new(40).unwrap().category(),
            ScoreCategory::Moderate
        );
        assert_eq!(WalkScore::new(39).unwrap().category(), ScoreCategory::Low);
        assert_eq!(WalkScore::new(100).unwrap().category(), ScoreCategory::High);
        assert_eq!(WalkScore::new(0).unwrap().category(), ScoreCategory::Low);
    }

    #[test]
    fn ut_category_labels() {
        assert_eq!(ScoreCategory::High.label(), "Highly Walkable");
        assert_eq!(ScoreCategory::Low.label(), "Poor Walkability");
    }
}
