//! Emo-SL: emoji sentiment lexicon built from the corpus itself
//!
//! Steps:
//! 1. `preprocess_corpus`: keep Arabic (and optionally emoji) characters, lowercase
//! 2. `build_lexicon`: coarse-label each tweet by the presence of any positive
//!    word, count known emojis per label, score each emoji by its positive share
//! 3. `extract_features`: lexicon scores of the known emojis present, plus
//!    positive/negative word shares
//! 4. `classify`: sign of the summed features, with an exact zero as Neutral
//!
//! The configured emoji sentiment lexicon plays no part here.

use crate::scorer::{EmojiScorer, PositiveShareScorer};
use emosl_core::{
    ClassifiedTweet, Corpus, EmoSlFeatures, EmojiOccurrenceMap, EmojiScores, KnownEmojis,
    Polarity, Sentiment, WordList,
};
use emosl_text::charset;
use emosl_text::tokenize_whitespace;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Characters kept by [`EmoSl::preprocess_corpus`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorpusFilter {
    /// Arabic block (U+0600–U+06FF) and whitespace only.
    /// Emojis are removed, so the lexicon can only be learned from tweets
    /// that reach `build_lexicon` without this step.
    #[default]
    ArabicOnly,
    /// Arabic block, whitespace and the normalizer's emoji ranges.
    ArabicAndEmoji,
}

impl CorpusFilter {
    fn keeps(&self, c: char) -> bool {
        let base = charset::ARABIC.contains(&c) || c.is_whitespace();
        match self {
            CorpusFilter::ArabicOnly => base,
            CorpusFilter::ArabicAndEmoji => base || charset::is_emoji(c),
        }
    }
}

/// Emoji → positive share, learned from a corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmoSlLexicon {
    scores: EmojiScores,
}

impl EmoSlLexicon {
    /// Wrap precomputed scores
    pub fn new(scores: EmojiScores) -> Self {
        EmoSlLexicon { scores }
    }

    /// Score of a known-emoji entry.
    ///
    /// Only single-character entries can ever be learned; anything else, and
    /// any emoji never observed, scores 0.0.
    pub fn score_of(&self, entry: &str) -> f64 {
        let mut chars = entry.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.scores.get(&c).copied().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Learned scores
    pub fn scores(&self) -> &EmojiScores {
        &self.scores
    }

    /// Number of learned emojis
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when nothing was learned
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Everything one Emo-SL run produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmoSlRun {
    /// Preprocessed tweets, in corpus order
    pub tweets: Vec<String>,
    /// Learned emoji lexicon
    pub lexicon: EmoSlLexicon,
    /// Features per preprocessed tweet
    pub features: Vec<EmoSlFeatures>,
    /// Label per preprocessed tweet
    pub classifications: Vec<ClassifiedTweet>,
}

/// Emo-SL lexicon builder and feature extractor over positive/negative word lists.
#[derive(Debug, Clone)]
pub struct EmoSl<'a> {
    positive: HashSet<&'a str>,
    negative: HashSet<&'a str>,
    filter: CorpusFilter,
}

impl<'a> EmoSl<'a> {
    /// Bind the word lists
    pub fn new(positive: &'a WordList, negative: &'a WordList) -> Self {
        EmoSl {
            positive: positive.iter().collect(),
            negative: negative.iter().collect(),
            filter: CorpusFilter::default(),
        }
    }

    /// Builder: set the corpus filter
    pub fn with_corpus_filter(mut self, filter: CorpusFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Strip unwanted characters from every tweet, then lowercase.
    pub fn preprocess_corpus(&self, tweets: &[String]) -> Vec<String> {
        tweets
            .iter()
            .map(|tweet| {
                tweet
                    .chars()
                    .filter(|&c| self.filter.keeps(c))
                    .collect::<String>()
                    .to_lowercase()
            })
            .collect()
    }

    /// Positive iff any positive word occurs anywhere in the tweet, even
    /// inside another word. No negative evidence is required for Negative.
    pub fn coarse_label(&self, tweet: &str) -> Sentiment {
        if self.positive.iter().any(|word| tweet.contains(word)) {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    /// Learn emoji scores from preprocessed tweets.
    ///
    /// Every character that is itself a known emoji is counted under its
    /// tweet's coarse label.
    pub fn build_lexicon(&self, tweets: &[String], known: &KnownEmojis) -> EmoSlLexicon {
        let mut positive = EmojiOccurrenceMap::new();
        let mut negative = EmojiOccurrenceMap::new();

        for tweet in tweets {
            let bucket = match self.coarse_label(tweet) {
                Sentiment::Positive => &mut positive,
                Sentiment::Negative => &mut negative,
            };
            for c in tweet.chars().filter(|&c| known.contains_char(c)) {
                bucket.increment(c);
            }
        }

        let lexicon = EmoSlLexicon::new(PositiveShareScorer.score(&positive, &negative));
        debug!(
            target: "emosl::pipeline",
            tweets = tweets.len(),
            learned = lexicon.len(),
            "Built emoji lexicon"
        );
        lexicon
    }

    /// Features for every preprocessed tweet.
    ///
    /// `emoji_features` follows the order of `known`, not the order of
    /// appearance, and lists each present entry once.
    pub fn extract_features(
        &self,
        lexicon: &EmoSlLexicon,
        tweets: &[String],
        known: &KnownEmojis,
    ) -> Vec<EmoSlFeatures> {
        tweets
            .iter()
            .map(|tweet| {
                let emoji_features = known
                    .iter()
                    .filter(|entry| tweet.contains(entry))
                    .map(|entry| lexicon.score_of(entry))
                    .collect();

                let tokens = tokenize_whitespace(tweet);
                let positive = tokens.iter().filter(|t| self.positive.contains(*t)).count();
                let negative = tokens.iter().filter(|t| self.negative.contains(*t)).count();
                let (positive_count, negative_count) = if tokens.is_empty() {
                    (0.0, 0.0)
                } else {
                    let total = tokens.len() as f64;
                    (positive as f64 / total, negative as f64 / total)
                };

                EmoSlFeatures {
                    emoji_features,
                    positive_count,
                    negative_count,
                }
            })
            .collect()
    }

    /// Preprocess, build, extract and classify in one go.
    pub fn run(&self, corpus: &Corpus, known: &KnownEmojis) -> EmoSlRun {
        let tweets = self.preprocess_corpus(corpus.tweets());
        let lexicon = self.build_lexicon(&tweets, known);
        let features = self.extract_features(&lexicon, &tweets, known);
        let classifications = classify(&tweets, &features);
        EmoSlRun {
            tweets,
            lexicon,
            features,
            classifications,
        }
    }
}

/// Label each tweet by the sign of its combined feature score.
///
/// Tweets and features are paired positionally; extra entries on either side
/// are ignored.
pub fn classify(tweets: &[String], features: &[EmoSlFeatures]) -> Vec<ClassifiedTweet> {
    tweets
        .iter()
        .zip(features)
        .map(|(tweet, f)| {
            let score = f.combined_score();
            ClassifiedTweet {
                tweet: tweet.clone(),
                score,
                label: Polarity::from_score(score),
            }
        })
        .collect()
}
