//! External polarity scoring
//!
//! Real integration (translation plus an English polarity model) lives
//! outside this system. [`NullExternalScorer`] stands in for it and always
//! answers 0.0.

use emosl_core::{ExternalScore, ExternalSentimentScorer};

/// Placeholder scorer: every tweet scores 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullExternalScorer;

impl ExternalSentimentScorer for NullExternalScorer {
    fn score(&self, _tweet: &str) -> f64 {
        0.0
    }

    fn name(&self) -> &str {
        "null"
    }
}

/// Score every tweet with `scorer`, keeping corpus order.
pub fn score_external(scorer: &dyn ExternalSentimentScorer, tweets: &[String]) -> Vec<ExternalScore> {
    tweets
        .iter()
        .map(|tweet| ExternalScore {
            tweet: tweet.clone(),
            score: scorer.score(tweet),
        })
        .collect()
}
