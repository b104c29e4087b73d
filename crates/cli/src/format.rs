//! Result → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): short aligned text
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use emosl_core::{BatchSummary, FeatureVector, Polarity};
use std::path::Path;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

fn to_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

/// Format an error.
pub fn format_error(err: &anyhow::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(&serde_json::json!({ "error": format!("{:#}", err) })),
        OutputMode::Human => format!("(error) {:#}", err),
    }
}

/// Format a normalized text.
pub fn format_normalized(raw: &str, processed: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(&serde_json::json!({ "raw": raw, "processed": processed })),
        OutputMode::Human => processed.to_string(),
    }
}

/// Format a feature vector.
///
/// JSON mode prints one object per line so pipe output stays line-oriented.
pub fn format_features(features: &FeatureVector, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => features.to_one_line(),
        OutputMode::Human => {
            let emojis: String = features.emojis.iter().collect();
            format!(
                "sentiment: {}\nwords:     +{} / -{}\nemojis:    +{} / -{} of {} [{}]\nscore:     +{:.4} / {:.4}",
                features.sentiment,
                features.positive_words_count,
                features.negative_words_count,
                features.positive_emojis_count,
                features.negative_emojis_count,
                features.total_emojis_count,
                emojis,
                features.positive_score,
                features.negative_score,
            )
        }
    }
}

/// Format the outcome of a batch run.
pub fn format_summary(
    tweets: usize,
    summary: &BatchSummary,
    report: Option<&Path>,
    mode: OutputMode,
) -> String {
    let count = |label: Polarity| {
        summary
            .classification_results
            .iter()
            .filter(|c| c.label == label)
            .count()
    };
    let (positive, negative, neutral) = (
        count(Polarity::Positive),
        count(Polarity::Negative),
        count(Polarity::Neutral),
    );

    match mode {
        OutputMode::Json => to_json(&serde_json::json!({
            "tweets": tweets,
            "report": report.map(|p| p.display().to_string()),
            "positive_emoji_occurrences": summary.total_positive_emojis.total(),
            "negative_emoji_occurrences": summary.total_negative_emojis.total(),
            "emojis_scored": summary.emoji_sentiment_scores.len(),
            "classified": { "positive": positive, "negative": negative, "neutral": neutral },
        })),
        OutputMode::Human => {
            let mut lines = vec![
                format!("tweets analyzed:   {}", tweets),
                format!(
                    "emoji occurrences: +{} / -{}",
                    summary.total_positive_emojis.total(),
                    summary.total_negative_emojis.total()
                ),
                format!("emojis scored:     {}", summary.emoji_sentiment_scores.len()),
                format!(
                    "emo-sl labels:     {} positive, {} negative, {} neutral",
                    positive, negative, neutral
                ),
            ];
            if let Some(path) = report {
                lines.push(format!("report:            {}", path.display()));
            }
            lines.join("\n")
        }
    }
}

/// Format the result of `clear`.
pub fn format_cleared(removed: usize, dir: &Path, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(&serde_json::json!({
            "removed": removed,
            "dir": dir.display().to_string(),
        })),
        OutputMode::Human => format!("removed {} report(s) from {}", removed, dir.display()),
    }
}
