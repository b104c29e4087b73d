//! Read-only lookup tables
//!
//! Every table is loaded once per run and then only borrowed. Components take
//! `&SentimentLexicon`, `&StopWordSet`, ... in their constructors; nothing here
//! offers interior mutability.

use std::collections::{HashMap, HashSet};

/// Variation selector-16, appended to many emoji to request emoji presentation.
const VARIATION_SELECTOR_16: char = '\u{FE0F}';

// ============================================================================
// SentimentLexicon
// ============================================================================

/// Word → polarity score.
///
/// The sign of the score is the word's polarity. A word without an entry is
/// unknown and contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    scores: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, trimming surrounding whitespace.
    ///
    /// Empty words are ignored. A repeated word takes the latest score.
    pub fn insert(&mut self, word: &str, score: f64) {
        let word = word.trim();
        if !word.is_empty() {
            self.scores.insert(word.to_string(), score);
        }
    }

    /// Score for a word, if it has one
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no word has a score
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for SentimentLexicon {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut lexicon = SentimentLexicon::new();
        for (word, score) in iter {
            lexicon.insert(word.as_ref(), score);
        }
        lexicon
    }
}

// ============================================================================
// EmojiSentimentLexicon
// ============================================================================

/// Single-character emoji → polarity score.
#[derive(Debug, Clone, Default)]
pub struct EmojiSentimentLexicon {
    scores: HashMap<char, f64>,
}

impl EmojiSentimentLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an emoji character
    pub fn insert(&mut self, emoji: char, score: f64) {
        self.scores.insert(emoji, score);
    }

    /// Insert an emoji given as text.
    ///
    /// The key is trimmed and a trailing variation selector-16 is dropped; the
    /// remainder must be exactly one character. Returns false (and inserts
    /// nothing) otherwise.
    pub fn insert_str(&mut self, emoji: &str, score: f64) -> bool {
        match single_char(emoji) {
            Some(c) => {
                self.insert(c, score);
                true
            }
            None => false,
        }
    }

    /// Score for an emoji, if it has one
    pub fn get(&self, emoji: char) -> Option<f64> {
        self.scores.get(&emoji).copied()
    }

    /// Score for an emoji, 0.0 when absent
    pub fn score_or_zero(&self, emoji: char) -> f64 {
        self.get(emoji).unwrap_or(0.0)
    }

    /// True if the character is a key of the lexicon
    pub fn contains(&self, c: char) -> bool {
        self.scores.contains_key(&c)
    }

    /// Number of emojis
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no emoji has a score
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FromIterator<(char, f64)> for EmojiSentimentLexicon {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        EmojiSentimentLexicon {
            scores: iter.into_iter().collect(),
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let text = text.trim();
    let text = text.strip_suffix(VARIATION_SELECTOR_16).unwrap_or(text);
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// ============================================================================
// NormalizationPatternTable
// ============================================================================

/// Ordered pattern → replacement table for Arabic character variants.
///
/// Patterns are applied in insertion order, so a later pattern sees the
/// output of every earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationPatternTable {
    patterns: Vec<(String, String)>,
}

impl NormalizationPatternTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual Arabic letter-variant folding:
    /// alef with hamza/madda → bare alef, teh marbuta → heh, alef maksura → yeh.
    pub fn arabic_variants() -> Self {
        [
            ("إ", "ا"),
            ("أ", "ا"),
            ("آ", "ا"),
            ("ة", "ه"),
            ("ى", "ي"),
        ]
        .into_iter()
        .collect()
    }

    /// Append a pattern.
    ///
    /// An empty pattern is ignored. A pattern already in the table keeps its
    /// original position and takes the new replacement.
    pub fn push(&mut self, pattern: &str, replacement: &str) {
        if pattern.is_empty() {
            return;
        }
        match self.patterns.iter_mut().find(|(p, _)| p == pattern) {
            Some(entry) => entry.1 = replacement.to_string(),
            None => self
                .patterns
                .push((pattern.to_string(), replacement.to_string())),
        }
    }

    /// Patterns in application order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.patterns.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when the table has no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<P: AsRef<str>, R: AsRef<str>> FromIterator<(P, R)> for NormalizationPatternTable {
    fn from_iter<I: IntoIterator<Item = (P, R)>>(iter: I) -> Self {
        let mut table = NormalizationPatternTable::new();
        for (pattern, replacement) in iter {
            table.push(pattern.as_ref(), replacement.as_ref());
        }
        table
    }
}

// ============================================================================
// StopWordSet / WordList / KnownEmojis
// ============================================================================

/// Words dropped by the last normalization step. Matching is exact.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the token is a stop word
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StopWordSet {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_string())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

/// Ordered list of positive or negative words used by Emo-SL.
///
/// Blank entries are dropped: an empty word would be a substring of every tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Words in file order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        WordList {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().trim().to_string())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

/// The curated list of emojis Emo-SL builds its lexicon over.
///
/// Entries keep first-seen order and are de-duplicated. A trailing U+FE0F is
/// dropped, so `❤️` and `❤` are the same entry. An entry may span several
/// code points; such entries can only match as substrings.
#[derive(Debug, Clone, Default)]
pub struct KnownEmojis {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl KnownEmojis {
    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// True if the entry is in the list
    pub fn contains(&self, emoji: &str) -> bool {
        self.seen.contains(emoji)
    }

    /// True if the single character is itself an entry
    pub fn contains_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.contains(c.encode_utf8(&mut buf))
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KnownEmojis {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut known = KnownEmojis::default();
        for entry in iter {
            let entry = entry.as_ref().trim();
            let entry = entry.strip_suffix(VARIATION_SELECTOR_16).unwrap_or(entry);
            if !entry.is_empty() && known.seen.insert(entry.to_string()) {
                known.entries.push(entry.to_string());
            }
        }
        known
    }
}

// ============================================================================
// Corpus
// ============================================================================

/// Ordered raw tweets. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    tweets: Vec<String>,
}

impl Corpus {
    /// Wrap a list of tweets
    pub fn new(tweets: Vec<String>) -> Self {
        Corpus { tweets }
    }

    /// Tweets in input order
    pub fn tweets(&self) -> &[String] {
        &self.tweets
    }

    /// Number of tweets
    pub fn len(&self) -> usize {
        self.tweets.len()
    }

    /// True when there are no tweets
    pub fn is_empty(&self) -> bool {
        self.tweets.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Corpus::new(iter.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Lexicons
// ============================================================================

/// Every table a run needs, loaded together and then shared by reference.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    /// Word → score
    pub words: SentimentLexicon,
    /// Emoji → score
    pub emojis: EmojiSentimentLexicon,
    /// Character-variant folding rules
    pub patterns: NormalizationPatternTable,
    /// Tokens dropped during normalization
    pub stop_words: StopWordSet,
    /// Emo-SL positive words
    pub positive_words: WordList,
    /// Emo-SL negative words
    pub negative_words: WordList,
    /// Curated emoji list
    pub known_emojis: KnownEmojis,
}
