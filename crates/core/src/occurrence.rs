//! Emoji occurrence counters
//!
//! Counters are keyed by emoji and ordered, so two maps built from the same
//! tweets in different orders compare equal and serialize identically.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Emoji → signed sentiment score in [-1, 1].
pub type EmojiScores = BTreeMap<char, f64>;

/// Emoji → occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiOccurrenceMap {
    counts: BTreeMap<char, u64>,
}

impl EmojiOccurrenceMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `emoji`
    pub fn increment(&mut self, emoji: char) {
        self.add(emoji, 1);
    }

    /// Count `n` more occurrences of `emoji`
    pub fn add(&mut self, emoji: char, n: u64) {
        *self.counts.entry(emoji).or_insert(0) += n;
    }

    /// Key-wise sum of `other` into `self`.
    ///
    /// Commutative and associative, so per-tweet maps can be merged in any
    /// order.
    pub fn merge(&mut self, other: &EmojiOccurrenceMap) {
        for (&emoji, &n) in &other.counts {
            self.add(emoji, n);
        }
    }

    /// Consuming form of [`merge`](Self::merge), for folds
    pub fn merged(mut self, other: &EmojiOccurrenceMap) -> Self {
        self.merge(other);
        self
    }

    /// Occurrences of `emoji`, 0 if never seen
    pub fn get(&self, emoji: char) -> u64 {
        self.counts.get(&emoji).copied().unwrap_or(0)
    }

    /// Emojis with their counts, in key order
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&e, &n)| (e, n))
    }

    /// Emojis present in the map
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct emojis
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<char> for EmojiOccurrenceMap {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut map = EmojiOccurrenceMap::new();
        for emoji in iter {
            map.increment(emoji);
        }
        map
    }
}
