//! Per-tweet feature vector

use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical and emoji evidence extracted from one normalized tweet.
///
/// `negative_score` is the signed sum of the non-positive scores that were
/// matched, so it is never above zero. `emojis` keeps every detected emoji in
/// text order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Tokens whose lexicon score is > 0
    pub positive_words_count: usize,
    /// Tokens whose lexicon score is <= 0
    pub negative_words_count: usize,
    /// Detected emojis whose score is > 0
    pub positive_emojis_count: usize,
    /// Detected emojis whose score is <= 0 (or that have no score)
    pub negative_emojis_count: usize,
    /// Number of detected emoji occurrences
    pub total_emojis_count: usize,
    /// Sum of positive word and emoji scores
    pub positive_score: f64,
    /// Sum of non-positive word and emoji scores
    pub negative_score: f64,
    /// Detected emojis in text order
    pub emojis: Vec<char>,
    /// Derived label
    pub sentiment: Sentiment,
}

impl FeatureVector {
    /// Compact single-line JSON, for logs
    pub fn to_one_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pretty = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&pretty)
    }
}
