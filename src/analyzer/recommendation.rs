//! Analyzer output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall verdict on a name, derived from its score.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OverallLabel {
    Great,
    Good,
    NeedsWork,
}

impl OverallLabel {
    pub const GREAT_THRESHOLD: u8 = 4;
    pub const GOOD_THRESHOLD: u8 = 2;

    /// Map a score onto its label.
    pub const fn from_score(score: u8) -> Self {
        if score >= Self::GREAT_THRESHOLD {
            Self::Great
        } else if score >= Self::GOOD_THRESHOLD {
            Self::Good
        } else {
            Self::NeedsWork
        }
    }

    /// One-sentence summary shown next to the score.
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Great => "Great variable name! It follows best practices.",
            Self::Good => "Good variable name with room for improvement.",
            Self::NeedsWork => "This variable name could be improved.",
        }
    }
}

impl fmt::Display for OverallLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::NeedsWork => "NeedsWork",
        })
    }
}

/// Scored feedback on an accepted identifier.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Recommendation {
    /// Between 0 and [`Recommendation::MAX_SCORE`]
    pub score: u8,
    pub label: OverallLabel,
    pub positives: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Recommendation {
    pub const MAX_SCORE: u8 = 5;

    pub(crate) fn new(score: u8, positives: Vec<String>, suggestions: Vec<String>) -> Self {
        let score = score.min(Self::MAX_SCORE);
        Self {
            score,
            label: OverallLabel::from_score(score),
            positives,
            suggestions,
        }
    }
}
