//! Sentiment analysis stages for Emo-SL
//!
//! This crate provides:
//! - FeatureExtractor: lexicon-based word and emoji features per tweet
//! - EmojiOccurrenceCounter / EmojiTally: per-tweet and per-batch emoji buckets
//! - EmojiScorer trait with SignedRatioScorer (batch emoji scores) and
//!   PositiveShareScorer (Emo-SL lexicon values)
//! - EmoSl: corpus-driven emoji lexicon building and classification
//! - NullExternalScorer: placeholder for an outside polarity scorer
//! - BatchPipeline: runs a corpus through every stage and feeds a ReportSink
//!
//! # Usage
//!
//! ```
//! use emosl_analysis::BatchPipeline;
//! use emosl_core::{Corpus, Lexicons};
//!
//! let mut lexicons = Lexicons::default();
//! lexicons.words.insert("سعيد", 1.0);
//! lexicons.emojis.insert('😊', 1.0);
//!
//! let corpus: Corpus = ["أنا سعيد 😊"].into_iter().collect();
//! let report = BatchPipeline::new(&lexicons).analyze(&corpus);
//! assert_eq!(report.records[0].features.positive_words_count, 1);
//! assert_eq!(report.summary.total_positive_emojis.get('😊'), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod counter;
pub mod emosl;
pub mod external;
pub mod extractor;
pub mod pipeline;
pub mod scorer;

pub use counter::{EmojiOccurrenceCounter, EmojiTally};
pub use emosl::{classify, CorpusFilter, EmoSl, EmoSlLexicon, EmoSlRun};
pub use external::{score_external, NullExternalScorer};
pub use extractor::{EmojiDetection, FeatureExtractor};
pub use pipeline::{BatchPipeline, BatchReport, DetectionRule, PipelineOptions};
pub use scorer::{EmojiScorer, EmojiSentimentScorer, PositiveShareScorer, SignedRatioScorer};
