//! Scenario Tests
//!
//! Fixed inputs whose outputs are known by hand.

use crate::test_utils::*;
use emosl_text::normalizer::fold_variants;

#[test]
fn positive_word_and_emoji() {
    let words: SentimentLexicon = [("سعيد", 1.0)].into_iter().collect();
    let emojis: EmojiSentimentLexicon = [('😊', 1.0)].into_iter().collect();

    let fv = FeatureExtractor::new(&words, &emojis).extract("أنا سعيد 😊");
    assert_eq!(fv.positive_words_count, 1);
    assert_eq!(fv.positive_emojis_count, 1);
    assert_eq!(fv.negative_words_count, 0);
    assert_eq!(fv.total_emojis_count, 1);
    assert_eq!(fv.positive_score, 2.0);
    assert_eq!(fv.sentiment, Sentiment::Positive);
}

#[test]
fn lone_negative_emoji() {
    let words = SentimentLexicon::new();
    let emojis: EmojiSentimentLexicon = [('😢', -1.0)].into_iter().collect();

    let fv = FeatureExtractor::new(&words, &emojis).extract("أنا 😢");
    assert_eq!(fv.negative_emojis_count, 1);
    assert_eq!(fv.positive_score, 0.0);
    assert_eq!(fv.negative_score, -1.0);
    assert_eq!(fv.sentiment, Sentiment::Negative);
}

#[test]
fn variant_folding() {
    let patterns: NormalizationPatternTable = [("أ", "ا"), ("إ", "ا")].into_iter().collect();
    assert_eq!(fold_variants("إنه أمل", &patterns), "انه امل");
}

#[test]
fn emoji_score_three_to_one() {
    let positive: EmojiOccurrenceMap = ['🙂', '🙂', '🙂'].into_iter().collect();
    let negative: EmojiOccurrenceMap = ['🙂'].into_iter().collect();

    let scores = EmojiSentimentScorer::default().score(&positive, &negative);
    assert_eq!(scores[&'🙂'], 0.5);
}

#[test]
fn classifier_negative_combined_score() {
    let tweets = vec!["تغريده".to_string()];
    let features = vec![EmoSlFeatures {
        emoji_features: vec![0.2],
        positive_count: 0.1,
        negative_count: 0.4,
    }];

    let results = classify(&tweets, &features);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label, Polarity::Negative);
    assert!((results[0].score - (-0.1)).abs() < 1e-9);
}

#[test]
fn classifier_zero_is_neutral() {
    let tweets = vec!["لا شيء".to_string()];
    let results = classify(&tweets, &[EmoSlFeatures::default()]);
    assert_eq!(results[0].label, Polarity::Neutral);
}

#[test]
fn full_normalization_of_mixed_tweet() {
    let lexicons = sample_lexicons();
    let normalizer = TextNormalizer::new(&lexicons.patterns, &lexicons.stop_words);
    assert_eq!(
        normalizer.normalize("#يوم_رائع مع الأصدقاء 😊😍 http://t.co 123"),
        "يوم رائع مع الاصدقاء 😊😍"
    );
}

#[test]
fn zero_score_emoji_rules_differ_by_stage() {
    let lexicons = sample_lexicons();
    let pipeline = BatchPipeline::new(&lexicons);

    let record = pipeline.analyze_tweet("لا تعليق 😐");
    // extraction counts a zero score as negative
    assert_eq!(record.features.negative_emojis_count, 1);
    // counting puts it nowhere
    assert!(record.positive_emojis.is_empty());
    assert!(record.negative_emojis.is_empty());
}
