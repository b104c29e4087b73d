//! Core types and traits for Emo-SL
//!
//! This crate defines the foundational types shared by every stage:
//! - Lexicons: SentimentLexicon, EmojiSentimentLexicon, NormalizationPatternTable,
//!   StopWordSet, WordList, KnownEmojis, Corpus
//! - FeatureVector: per-tweet lexical and emoji evidence
//! - EmojiOccurrenceMap: per-emoji counters merged across a batch
//! - Sentiment / Polarity: the two label sets used by the two classifiers
//! - Report records: TweetRecord, BatchSummary, ClassifiedTweet, ExternalScore
//! - Error: Error type hierarchy
//! - Traits: ReportSink, ExternalSentimentScorer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod feature;
pub mod lexicon;
pub mod occurrence;
pub mod report;
pub mod sentiment;
pub mod traits;

pub use error::{Error, Result};
pub use feature::FeatureVector;
pub use lexicon::{
    Corpus, EmojiSentimentLexicon, KnownEmojis, Lexicons, NormalizationPatternTable,
    SentimentLexicon, StopWordSet, WordList,
};
pub use occurrence::{EmojiOccurrenceMap, EmojiScores};
pub use report::{BatchSummary, ClassifiedTweet, EmoSlFeatures, ExternalScore, TweetRecord};
pub use sentiment::{Polarity, Sentiment};
pub use traits::{ExternalSentimentScorer, ReportSink};
