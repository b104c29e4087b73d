//! Records handed to a [`ReportSink`](crate::traits::ReportSink)

use crate::feature::FeatureVector;
use crate::occurrence::{EmojiOccurrenceMap, EmojiScores};
use crate::sentiment::Polarity;
use serde::{Deserialize, Serialize};

/// One analyzed tweet: text before and after normalization, its features and
/// its own emoji buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetRecord {
    /// Tweet as read from the corpus
    pub raw: String,
    /// Tweet after normalization
    pub processed: String,
    /// Extracted features
    #[serde(flatten)]
    pub features: FeatureVector,
    /// Positive emojis of this tweet
    pub positive_emojis: EmojiOccurrenceMap,
    /// Negative emojis of this tweet
    pub negative_emojis: EmojiOccurrenceMap,
}

/// Emo-SL features for one preprocessed tweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmoSlFeatures {
    /// Emo-SL lexicon scores of the known emojis present in the tweet
    pub emoji_features: Vec<f64>,
    /// Share of tokens found in the positive word list
    pub positive_count: f64,
    /// Share of tokens found in the negative word list
    pub negative_count: f64,
}

impl EmoSlFeatures {
    /// Combined score used by the classifier
    pub fn combined_score(&self) -> f64 {
        self.emoji_features.iter().sum::<f64>() + self.positive_count - self.negative_count
    }
}

/// Emo-SL classification of one preprocessed tweet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedTweet {
    /// Preprocessed tweet text
    pub tweet: String,
    /// Combined score
    pub score: f64,
    /// Label derived from the sign of `score`
    pub label: Polarity,
}

/// Score from the external polarity scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalScore {
    /// Preprocessed tweet text
    pub tweet: String,
    /// External polarity
    pub score: f64,
}

/// Everything computed once per batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Positive emoji occurrences over the whole batch
    pub total_positive_emojis: EmojiOccurrenceMap,
    /// Negative emoji occurrences over the whole batch
    pub total_negative_emojis: EmojiOccurrenceMap,
    /// Signed score per emoji
    pub emoji_sentiment_scores: EmojiScores,
    /// Emo-SL classification per tweet, in corpus order
    pub classification_results: Vec<ClassifiedTweet>,
    /// External polarity per tweet, in corpus order
    pub external_sentiment_scores: Vec<ExternalScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_score() {
        let f = EmoSlFeatures {
            emoji_features: vec![0.2],
            positive_count: 0.1,
            negative_count: 0.4,
        };
        assert!((f.combined_score() - (-0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_combined_score_empty_is_zero() {
        assert_eq!(EmoSlFeatures::default().combined_score(), 0.0);
    }

    #[test]
    fn test_tweet_record_flattens_features() {
        let record = TweetRecord {
            raw: "أنا سعيد 😊".to_string(),
            processed: "انا سعيد 😊".to_string(),
            features: FeatureVector::default(),
            positive_emojis: EmojiOccurrenceMap::new(),
            negative_emojis: EmojiOccurrenceMap::new(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("positive_words_count").is_some());
        assert!(value.get("features").is_none());
        assert_eq!(value["processed"], "انا سعيد 😊");
    }
}
