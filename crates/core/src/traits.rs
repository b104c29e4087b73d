//! Seams to external collaborators
//!
//! - [`ReportSink`]: where per-tweet and per-batch results go
//! - [`ExternalSentimentScorer`]: an outside polarity scorer

use crate::error::Result;
use crate::report::{BatchSummary, TweetRecord};

/// Consumer of analysis results.
///
/// The pipeline calls [`write_tweet`](Self::write_tweet) once per tweet in
/// corpus order, then [`write_batch`](Self::write_batch) once, then
/// [`finish`](Self::finish).
pub trait ReportSink {
    /// Accept one analyzed tweet
    fn write_tweet(&mut self, record: &TweetRecord) -> Result<()>;

    /// Accept the batch aggregates
    fn write_batch(&mut self, summary: &BatchSummary) -> Result<()>;

    /// Flush whatever was collected. The default does nothing.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Polarity scorer living outside this system.
///
/// Must be Send + Sync so a single scorer can serve a parallel batch.
pub trait ExternalSentimentScorer: Send + Sync {
    /// Polarity of one tweet
    fn score(&self, tweet: &str) -> f64;

    /// Name for logging
    fn name(&self) -> &str;
}
