//! Emoji scoring from occurrence counts
//!
//! This module provides:
//! - EmojiScorer trait for pluggable ratio formulas
//! - SignedRatioScorer (alias EmojiSentimentScorer): (p - n) / (p + n)
//! - PositiveShareScorer: p / (p + n), used for the Emo-SL lexicon

use emosl_core::{EmojiOccurrenceMap, EmojiScores};
use std::collections::BTreeSet;

// ============================================================================
// EmojiScorer Trait
// ============================================================================

/// Reduces positive/negative occurrence counts into one score per emoji.
///
/// Scorers must be Send + Sync so a single instance can serve parallel work.
pub trait EmojiScorer: Send + Sync {
    /// Score every emoji seen in either map
    fn score(&self, positive: &EmojiOccurrenceMap, negative: &EmojiOccurrenceMap) -> EmojiScores;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

fn union_keys(positive: &EmojiOccurrenceMap, negative: &EmojiOccurrenceMap) -> BTreeSet<char> {
    positive.keys().chain(negative.keys()).collect()
}

// ============================================================================
// SignedRatioScorer
// ============================================================================

/// Signed polarity in [-1, 1].
///
/// score = (p - n) / (p + n), or 0.0 when the emoji was never observed.
/// An unobserved emoji and a perfectly balanced one both score 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignedRatioScorer;

/// The batch emoji sentiment scorer.
pub type EmojiSentimentScorer = SignedRatioScorer;

impl SignedRatioScorer {
    /// Score a single emoji from its counts
    pub fn ratio(p: u64, n: u64) -> f64 {
        let total = p + n;
        if total > 0 {
            (p as f64 - n as f64) / total as f64
        } else {
            0.0
        }
    }
}

impl EmojiScorer for SignedRatioScorer {
    fn score(&self, positive: &EmojiOccurrenceMap, negative: &EmojiOccurrenceMap) -> EmojiScores {
        union_keys(positive, negative)
            .into_iter()
            .map(|emoji| (emoji, Self::ratio(positive.get(emoji), negative.get(emoji))))
            .collect()
    }

    fn name(&self) -> &str {
        "signed_ratio"
    }
}

// ============================================================================
// PositiveShareScorer
// ============================================================================

/// Unsigned positive share in [0, 1].
///
/// score = p / (p + n). Emojis with no observations get no entry at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveShareScorer;

impl PositiveShareScorer {
    /// Score a single emoji from its counts, `None` if never observed
    pub fn ratio(p: u64, n: u64) -> Option<f64> {
        let total = p + n;
        (total > 0).then(|| p as f64 / total as f64)
    }
}

impl EmojiScorer for PositiveShareScorer {
    fn score(&self, positive: &EmojiOccurrenceMap, negative: &EmojiOccurrenceMap) -> EmojiScores {
        union_keys(positive, negative)
            .into_iter()
            .filter_map(|emoji| {
                Self::ratio(positive.get(emoji), negative.get(emoji)).map(|s| (emoji, s))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "positive_share"
    }
}
