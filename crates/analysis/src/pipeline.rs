//! Batch orchestration
//!
//! ```text
//!  Corpus ──┬──► normalize ─► extract ─► count ──► per-tweet TweetRecord
//!           │                              │
//!           │                              ▼
//!           │                         EmojiTally ─► SignedRatioScorer
//!           │
//!           └──► Emo-SL: preprocess ─► build ─► extract ─► classify
//!                                         └──► external scorer
//! ```
//!
//! BatchPipeline is stateless: it borrows the lexicons and builds every
//! stage per call, so one pipeline can serve many batches. The per-tweet path
//! optionally runs on the rayon pool; the tally is then reduced key-wise and
//! the result is identical to a sequential run.

use crate::counter::{EmojiOccurrenceCounter, EmojiTally};
use crate::emosl::{CorpusFilter, EmoSl};
use crate::external::{score_external, NullExternalScorer};
use crate::extractor::{EmojiDetection, FeatureExtractor};
use crate::scorer::{EmojiScorer, EmojiSentimentScorer};
use emosl_core::{
    BatchSummary, Corpus, ExternalSentimentScorer, Lexicons, ReportSink, Result, TweetRecord,
};
use emosl_text::TextNormalizer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

static NULL_SCORER: NullExternalScorer = NullExternalScorer;

/// Which emoji detection rule the feature extractor uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionRule {
    /// Keys of the emoji sentiment lexicon
    #[default]
    Lexicon,
    /// Entries of the curated emoji list
    KnownList,
}

/// Knobs for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Emoji detection rule for feature extraction
    pub emoji_detection: DetectionRule,
    /// Run the per-tweet stages on the rayon pool
    pub parallel: bool,
    /// Characters kept by Emo-SL preprocessing
    pub corpus_filter: CorpusFilter,
}

/// Output of [`BatchPipeline::analyze`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// One record per tweet, in corpus order
    pub records: Vec<TweetRecord>,
    /// Batch aggregates
    pub summary: BatchSummary,
}

/// Runs a corpus through every analysis stage.
#[derive(Clone, Copy)]
pub struct BatchPipeline<'a> {
    lexicons: &'a Lexicons,
    options: PipelineOptions,
    external: &'a dyn ExternalSentimentScorer,
}

impl<'a> BatchPipeline<'a> {
    /// Create a pipeline with default options and the null external scorer
    pub fn new(lexicons: &'a Lexicons) -> Self {
        BatchPipeline {
            lexicons,
            options: PipelineOptions::default(),
            external: &NULL_SCORER,
        }
    }

    /// Builder: set options
    pub fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder: set the external polarity scorer
    pub fn with_external_scorer(mut self, scorer: &'a dyn ExternalSentimentScorer) -> Self {
        self.external = scorer;
        self
    }

    /// Current options
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Normalizer bound to the loaded tables
    pub fn normalizer(&self) -> TextNormalizer<'a> {
        TextNormalizer::new(&self.lexicons.patterns, &self.lexicons.stop_words)
    }

    /// Feature extractor bound to the loaded lexicons and detection rule
    pub fn extractor(&self) -> FeatureExtractor<'a> {
        let detection = match self.options.emoji_detection {
            DetectionRule::Lexicon => EmojiDetection::Lexicon,
            DetectionRule::KnownList => EmojiDetection::KnownList(&self.lexicons.known_emojis),
        };
        FeatureExtractor::new(&self.lexicons.words, &self.lexicons.emojis).with_detection(detection)
    }

    /// Normalize, extract and count one raw tweet.
    pub fn analyze_tweet(&self, raw: &str) -> TweetRecord {
        let processed = self.normalizer().normalize(raw);
        let features = self.extractor().extract(&processed);
        let (positive_emojis, negative_emojis) =
            EmojiOccurrenceCounter::new(&self.lexicons.emojis).count(&features);
        debug!(target: "emosl::pipeline", features = %features.to_one_line(), "Analyzed tweet");
        TweetRecord {
            raw: raw.to_string(),
            processed,
            features,
            positive_emojis,
            negative_emojis,
        }
    }

    /// Analyze a whole corpus.
    ///
    /// Never fails; empty lexicons give an all-negative/neutral baseline.
    pub fn analyze(&self, corpus: &Corpus) -> BatchReport {
        let started = Instant::now();
        info!(
            target: "emosl::pipeline",
            tweets = corpus.len(),
            parallel = self.options.parallel,
            "Starting batch"
        );

        let (records, tally) = if self.options.parallel {
            let records: Vec<TweetRecord> = corpus
                .tweets()
                .par_iter()
                .map(|raw| self.analyze_tweet(raw))
                .collect();
            let tally = records
                .par_iter()
                .fold(EmojiTally::new, |mut tally, r| {
                    tally.absorb(&r.positive_emojis, &r.negative_emojis);
                    tally
                })
                .reduce(EmojiTally::new, EmojiTally::merged);
            (records, tally)
        } else {
            let mut tally = EmojiTally::new();
            let records: Vec<TweetRecord> = corpus
                .tweets()
                .iter()
                .map(|raw| {
                    let record = self.analyze_tweet(raw);
                    tally.absorb(&record.positive_emojis, &record.negative_emojis);
                    record
                })
                .collect();
            (records, tally)
        };

        let emoji_sentiment_scores = EmojiSentimentScorer::default().score(&tally.positive, &tally.negative);

        let emosl = EmoSl::new(&self.lexicons.positive_words, &self.lexicons.negative_words)
            .with_corpus_filter(self.options.corpus_filter);
        let run = emosl.run(corpus, &self.lexicons.known_emojis);
        let external_sentiment_scores = score_external(self.external, &run.tweets);

        info!(
            target: "emosl::pipeline",
            tweets = records.len(),
            emojis_scored = emoji_sentiment_scores.len(),
            emosl_lexicon = run.lexicon.len(),
            external = self.external.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Finished batch"
        );

        BatchReport {
            records,
            summary: BatchSummary {
                total_positive_emojis: tally.positive,
                total_negative_emojis: tally.negative,
                emoji_sentiment_scores,
                classification_results: run.classifications,
                external_sentiment_scores,
            },
        }
    }

    /// Analyze a corpus and hand every result to `sink`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the sink.
    pub fn run(&self, corpus: &Corpus, sink: &mut dyn ReportSink) -> Result<BatchSummary> {
        let report = self.analyze(corpus);
        for record in &report.records {
            sink.write_tweet(record)?;
        }
        sink.write_batch(&report.summary)?;
        sink.finish()?;
        Ok(report.summary)
    }
}
