//! Emo-SL - emoji-aware sentiment analysis for Arabic tweets
//!
//! Emo-SL normalizes tweets, extracts lexicon-based word and emoji features,
//! scores every emoji by how often it appears with positive versus negative
//! sentiment, and learns an emoji lexicon from a raw corpus to classify tweets
//! as positive, negative or neutral.
//!
//! # Quick Start
//!
//! ```no_run
//! use emosl::{BatchPipeline, EmoslConfig, JsonReportSink, LexiconLoader};
//!
//! let config = EmoslConfig::default();
//! let loader = LexiconLoader::from_config(&config);
//! let lexicons = loader.load_lexicons();
//! let corpus = loader.load_corpus();
//!
//! let mut sink = JsonReportSink::new(&config.output_dir);
//! let summary = BatchPipeline::new(&lexicons).run(&corpus, &mut sink)?;
//! println!("{} emojis scored", summary.emoji_sentiment_scores.len());
//! # Ok::<(), emosl::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `emosl-core`: record types, lexicon tables, errors and sink traits
//! - `emosl-text`: normalization and tokenization
//! - `emosl-analysis`: feature extraction, emoji scoring, Emo-SL, batch pipeline
//! - `emosl-storage`: flat-file loading, `emosl.toml`, JSON reports

pub use emosl_analysis::{
    classify, score_external, BatchPipeline, BatchReport, CorpusFilter, DetectionRule,
    EmoSl, EmoSlLexicon, EmoSlRun, EmojiDetection, EmojiOccurrenceCounter, EmojiScorer,
    EmojiSentimentScorer, EmojiTally, FeatureExtractor, NullExternalScorer, PipelineOptions,
    PositiveShareScorer, SignedRatioScorer,
};
pub use emosl_core::{
    BatchSummary, ClassifiedTweet, Corpus, EmoSlFeatures, EmojiOccurrenceMap, EmojiScores,
    EmojiSentimentLexicon, Error, ExternalScore, ExternalSentimentScorer, FeatureVector,
    KnownEmojis, Lexicons, NormalizationPatternTable, Polarity, ReportSink, Result, Sentiment,
    SentimentLexicon, StopWordSet, TweetRecord, WordList,
};
pub use emosl_storage::{
    clear_reports, AnalysisConfig, EmoslConfig, FileNames, JsonReportSink, LexiconLoader,
    MemoryReportSink, CONFIG_FILE_NAME, REPORT_PREFIX,
};
pub use emosl_text::{normalize, tokenize_whitespace, tokenize_words, TextNormalizer};

