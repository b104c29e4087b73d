//! Lexicon-based feature extraction
//!
//! Words come from the `\w+` tokenizer and are scored against the
//! [`SentimentLexicon`]. Emojis are picked out character by character and
//! scored against the [`EmojiSentimentLexicon`]. A score of exactly zero
//! counts as negative for both.

use emosl_core::{
    EmojiSentimentLexicon, FeatureVector, KnownEmojis, Sentiment, SentimentLexicon,
};
use emosl_text::tokenize_words;

/// Rule deciding which characters of a tweet are emojis.
#[derive(Debug, Clone, Copy, Default)]
pub enum EmojiDetection<'a> {
    /// A character is an emoji iff it is a key of the emoji lexicon.
    /// Every detected emoji is scored, so positive + negative == total.
    #[default]
    Lexicon,
    /// A character is an emoji iff it is an entry of the curated list.
    /// Detected emojis without a lexicon score are counted in the total
    /// but in neither bucket.
    KnownList(&'a KnownEmojis),
}

/// Turns a normalized tweet into a [`FeatureVector`].
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor<'a> {
    words: &'a SentimentLexicon,
    emojis: &'a EmojiSentimentLexicon,
    detection: EmojiDetection<'a>,
}

impl<'a> FeatureExtractor<'a> {
    /// Bind the lexicons, detecting emojis by emoji-lexicon membership
    pub fn new(words: &'a SentimentLexicon, emojis: &'a EmojiSentimentLexicon) -> Self {
        FeatureExtractor {
            words,
            emojis,
            detection: EmojiDetection::Lexicon,
        }
    }

    /// Builder: set the emoji detection rule
    pub fn with_detection(mut self, detection: EmojiDetection<'a>) -> Self {
        self.detection = detection;
        self
    }

    /// Emojis of `text` in order, duplicates included
    pub fn detect_emojis(&self, text: &str) -> Vec<char> {
        match self.detection {
            EmojiDetection::Lexicon => text.chars().filter(|&c| self.emojis.contains(c)).collect(),
            EmojiDetection::KnownList(known) => {
                text.chars().filter(|&c| known.contains_char(c)).collect()
            }
        }
    }

    /// Extract features from one normalized tweet.
    ///
    /// Never fails: unknown words and emojis are simply not counted.
    pub fn extract(&self, tweet: &str) -> FeatureVector {
        let mut fv = FeatureVector::default();

        for token in tokenize_words(tweet) {
            if let Some(score) = self.words.get(token) {
                if score > 0.0 {
                    fv.positive_words_count += 1;
                    fv.positive_score += score;
                } else {
                    fv.negative_words_count += 1;
                    fv.negative_score += score;
                }
            }
        }

        let emojis = self.detect_emojis(tweet);
        fv.total_emojis_count = emojis.len();
        for &emoji in &emojis {
            let score = match (self.detection, self.emojis.get(emoji)) {
                (_, Some(score)) => score,
                (EmojiDetection::Lexicon, None) => 0.0,
                (EmojiDetection::KnownList(_), None) => continue,
            };
            if score > 0.0 {
                fv.positive_emojis_count += 1;
                fv.positive_score += score;
            } else {
                fv.negative_emojis_count += 1;
                fv.negative_score += score;
            }
        }
        fv.emojis = emojis;

        // negative_score is signed; weigh magnitudes
        fv.sentiment = if fv.positive_score > fv.negative_score.abs() {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };

        fv
    }
}
