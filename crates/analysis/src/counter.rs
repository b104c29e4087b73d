//! Emoji occurrence counting
//!
//! Unlike feature extraction, counting drops emojis whose score is exactly
//! zero: they land in neither bucket.

use emosl_core::{EmojiOccurrenceMap, EmojiSentimentLexicon, FeatureVector};
use serde::{Deserialize, Serialize};

/// Buckets the emojis of a [`FeatureVector`] by the sign of their score.
#[derive(Debug, Clone, Copy)]
pub struct EmojiOccurrenceCounter<'a> {
    emojis: &'a EmojiSentimentLexicon,
}

impl<'a> EmojiOccurrenceCounter<'a> {
    /// Bind the emoji lexicon
    pub fn new(emojis: &'a EmojiSentimentLexicon) -> Self {
        EmojiOccurrenceCounter { emojis }
    }

    /// Count one tweet's emojis into fresh (positive, negative) maps.
    pub fn count(&self, vector: &FeatureVector) -> (EmojiOccurrenceMap, EmojiOccurrenceMap) {
        let mut positive = EmojiOccurrenceMap::new();
        let mut negative = EmojiOccurrenceMap::new();
        for &emoji in &vector.emojis {
            let score = self.emojis.score_or_zero(emoji);
            if score > 0.0 {
                positive.increment(emoji);
            } else if score < 0.0 {
                negative.increment(emoji);
            }
        }
        (positive, negative)
    }
}

/// Positive and negative emoji counts accumulated over a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiTally {
    /// Occurrences of emojis with a positive score
    pub positive: EmojiOccurrenceMap,
    /// Occurrences of emojis with a negative score
    pub negative: EmojiOccurrenceMap,
}

impl EmojiTally {
    /// Start an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one tweet's buckets
    pub fn absorb(&mut self, positive: &EmojiOccurrenceMap, negative: &EmojiOccurrenceMap) {
        self.positive.merge(positive);
        self.negative.merge(negative);
    }

    /// Key-wise sum of two tallies, for parallel reduction
    pub fn merged(mut self, other: EmojiTally) -> Self {
        self.absorb(&other.positive, &other.negative);
        self
    }
}
