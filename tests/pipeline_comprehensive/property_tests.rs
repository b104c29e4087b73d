//! Property Tests
//!
//! Invariants that must hold for any tweet, map or corpus.

use crate::test_utils::*;
use proptest::prelude::*;

fn tweet_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        'ا', 'أ', 'إ', 'آ', 'ب', 'ة', 'ى', 'س', 'ع', 'ي', 'د', 'ح', 'ز', 'ن', 'ج', 'م', 'ل',
        '\u{064E}', '\u{0651}', '\u{0640}', '٣', '۵', '7', 'a', 'Z', '#', '_', ' ', ' ', '\t',
        '!', '😊', '😢', '😍', '😡', '😐', '🙂',
    ])
}

fn tweet() -> impl Strategy<Value = String> {
    prop::collection::vec(tweet_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

fn occurrence_map() -> impl Strategy<Value = EmojiOccurrenceMap> {
    prop::collection::vec(prop::sample::select(vec!['😊', '😢', '🙂', '😡']), 0..30)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(text in tweet()) {
        let patterns = NormalizationPatternTable::arabic_variants();
        let stop_words = StopWordSet::new();
        let once = normalize(&text, &patterns, &stop_words);
        let twice = normalize(&once, &patterns, &stop_words);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_emoji_totals_consistent(text in tweet()) {
        let lexicons = sample_lexicons();
        let record = BatchPipeline::new(&lexicons).analyze_tweet(&text);
        let f = &record.features;
        prop_assert_eq!(f.total_emojis_count, f.emojis.len());
        prop_assert_eq!(f.positive_emojis_count + f.negative_emojis_count, f.total_emojis_count);
        prop_assert!(f.negative_score <= 0.0);
        prop_assert!(f.positive_score >= 0.0);
    }

    #[test]
    fn prop_counter_buckets_within_features(text in tweet()) {
        let lexicons = sample_lexicons();
        let record = BatchPipeline::new(&lexicons).analyze_tweet(&text);
        let counted = record.positive_emojis.total() + record.negative_emojis.total();
        prop_assert!(counted as usize <= record.features.total_emojis_count);
        prop_assert_eq!(record.positive_emojis.total() as usize, record.features.positive_emojis_count);
    }

    #[test]
    fn prop_emoji_scores_in_range(p in occurrence_map(), n in occurrence_map()) {
        let scores = EmojiSentimentScorer::default().score(&p, &n);
        for (emoji, score) in &scores {
            prop_assert!((-1.0..=1.0).contains(score));
            if p.get(*emoji) + n.get(*emoji) == 0 {
                prop_assert_eq!(*score, 0.0);
            }
        }
    }

    #[test]
    fn prop_merge_commutative(a in occurrence_map(), b in occurrence_map()) {
        prop_assert_eq!(a.clone().merged(&b), b.merged(&a));
    }

    #[test]
    fn prop_parallel_matches_sequential(tweets in prop::collection::vec(tweet(), 0..20)) {
        let lexicons = sample_lexicons();
        let corpus = Corpus::new(tweets);
        let sequential = BatchPipeline::new(&lexicons).analyze(&corpus);
        let parallel = BatchPipeline::new(&lexicons)
            .with_options(PipelineOptions { parallel: true, ..PipelineOptions::default() })
            .analyze(&corpus);
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn prop_classification_label_matches_sign(tweets in prop::collection::vec(tweet(), 0..10)) {
        let lexicons = sample_lexicons();
        let summary = BatchPipeline::new(&lexicons)
            .with_options(PipelineOptions {
                corpus_filter: CorpusFilter::ArabicAndEmoji,
                ..PipelineOptions::default()
            })
            .analyze(&Corpus::new(tweets))
            .summary;
        for c in &summary.classification_results {
            let expected = if c.score > 0.0 {
                Polarity::Positive
            } else if c.score < 0.0 {
                Polarity::Negative
            } else {
                Polarity::Neutral
            };
            prop_assert_eq!(c.label, expected);
        }
    }
}
