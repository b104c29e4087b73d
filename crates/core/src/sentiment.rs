//! Sentiment labels
//!
//! Two label sets exist because the two classifiers disagree on ties:
//! - [`Sentiment`]: lexicon feature extraction, binary, ties are negative
//! - [`Polarity`]: Emo-SL classification, ternary, an exact zero is neutral

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary label assigned by lexicon-based feature extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive evidence outweighs negative evidence
    Positive,
    /// Everything else, including a tweet with no evidence at all
    #[default]
    Negative,
}

impl Sentiment {
    /// Label as written in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ternary label assigned by the Emo-SL classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Combined score above zero
    #[serde(rename = "positive")]
    Positive,
    /// Combined score below zero
    #[serde(rename = "negative")]
    Negative,
    /// Combined score exactly zero
    Neutral,
}

impl Polarity {
    /// Classify a combined score by its sign
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    /// Label as written in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
