//! Batch Tests
//!
//! BatchPipeline over a whole corpus: aggregation, option handling, sinks.

use crate::test_utils::*;

#[test]
fn one_record_per_tweet_in_order() {
    let lexicons = sample_lexicons();
    let corpus = sample_corpus();
    let report = BatchPipeline::new(&lexicons).analyze(&corpus);

    assert_eq!(report.records.len(), corpus.len());
    for (record, raw) in report.records.iter().zip(corpus.tweets()) {
        assert_eq!(&record.raw, raw);
    }
    assert_eq!(report.summary.classification_results.len(), corpus.len());
    assert_eq!(report.summary.external_sentiment_scores.len(), corpus.len());
}

#[test]
fn totals_equal_sum_of_per_tweet_maps() {
    let lexicons = sample_lexicons();
    let report = BatchPipeline::new(&lexicons).analyze(&sample_corpus());

    let positive = report
        .records
        .iter()
        .fold(EmojiOccurrenceMap::new(), |acc, r| acc.merged(&r.positive_emojis));
    let negative = report
        .records
        .iter()
        .fold(EmojiOccurrenceMap::new(), |acc, r| acc.merged(&r.negative_emojis));

    assert_eq!(report.summary.total_positive_emojis, positive);
    assert_eq!(report.summary.total_negative_emojis, negative);
    assert_eq!(positive.get('😊'), 3);
    assert_eq!(positive.get('😍'), 3);
    assert_eq!(negative.get('😢'), 2);
    assert_eq!(negative.get('😡'), 1);
}

#[test]
fn emoji_scores_cover_observed_emojis_only() {
    let lexicons = sample_lexicons();
    let summary = BatchPipeline::new(&lexicons).analyze(&sample_corpus()).summary;

    let keys: Vec<char> = summary.emoji_sentiment_scores.keys().copied().collect();
    assert_eq!(keys.len(), 4);
    for c in ['😊', '😍', '😢', '😡'] {
        assert!(keys.contains(&c));
    }
    // 😐 scores zero and 🙂 has no score: neither is counted
    assert!(!keys.contains(&'😐'));
    assert!(!keys.contains(&'🙂'));
    for score in summary.emoji_sentiment_scores.values() {
        assert!((-1.0..=1.0).contains(score));
    }
}

#[test]
fn parallel_equals_sequential() {
    let lexicons = sample_lexicons();
    let corpus: Corpus = sample_corpus()
        .tweets()
        .iter()
        .cycle()
        .take(500)
        .cloned()
        .collect();

    for emoji_detection in [DetectionRule::Lexicon, DetectionRule::KnownList] {
        let options = PipelineOptions {
            emoji_detection,
            ..PipelineOptions::default()
        };
        let sequential = BatchPipeline::new(&lexicons)
            .with_options(options)
            .analyze(&corpus);
        let parallel = BatchPipeline::new(&lexicons)
            .with_options(PipelineOptions {
                parallel: true,
                ..options
            })
            .analyze(&corpus);
        assert_eq!(sequential, parallel);
    }
}

#[test]
fn emosl_learns_nothing_from_arabic_only_corpus() {
    let lexicons = sample_lexicons();
    let summary = BatchPipeline::new(&lexicons).analyze(&sample_corpus()).summary;

    // emojis are stripped before the lexicon is built
    for result in &summary.classification_results {
        assert!(!result.tweet.contains('😊'));
    }
    let first = &summary.classification_results[0];
    assert_eq!(first.label, Polarity::Positive);
}

#[test]
fn emosl_with_corpus_emojis_kept() {
    let lexicons = sample_lexicons();
    let options = PipelineOptions {
        corpus_filter: CorpusFilter::ArabicAndEmoji,
        ..PipelineOptions::default()
    };
    let summary = BatchPipeline::new(&lexicons)
        .with_options(options)
        .analyze(&sample_corpus())
        .summary;

    assert!(summary.classification_results[0].tweet.contains('😊'));
    // "لا تعليق 😐": no list words, 😐 not a known emoji
    assert_eq!(summary.classification_results[6].label, Polarity::Neutral);
    // empty tweet
    assert_eq!(summary.classification_results[7].label, Polarity::Neutral);
}

#[test]
fn empty_lexicons_give_baseline() {
    let lexicons = Lexicons::default();
    let report = BatchPipeline::new(&lexicons).analyze(&sample_corpus());

    assert!(report
        .records
        .iter()
        .all(|r| r.features.sentiment == Sentiment::Negative && r.features.total_emojis_count == 0));
    assert!(report.summary.total_positive_emojis.is_empty());
    assert!(report.summary.total_negative_emojis.is_empty());
    assert!(report.summary.emoji_sentiment_scores.is_empty());
    assert!(report
        .summary
        .classification_results
        .iter()
        .all(|c| c.label == Polarity::Neutral));
}

#[test]
fn empty_corpus() {
    let lexicons = sample_lexicons();
    let report = BatchPipeline::new(&lexicons).analyze(&Corpus::default());
    assert!(report.records.is_empty());
    assert_eq!(report.summary, BatchSummary::default());
}

#[test]
fn run_feeds_memory_sink() {
    let lexicons = sample_lexicons();
    let corpus = sample_corpus();
    let mut sink = MemoryReportSink::new();

    let summary = BatchPipeline::new(&lexicons).run(&corpus, &mut sink).unwrap();
    assert_eq!(sink.records.len(), corpus.len());
    assert_eq!(sink.summary.as_ref(), Some(&summary));
    assert!(sink.finished);
}

#[test]
fn single_tweet_through_memory_sink_matches_direct_extraction() {
    let lexicons = sample_lexicons();
    let pipeline = BatchPipeline::new(&lexicons);
    let text = "أنا سعيد جدا 😊";
    let mut sink = MemoryReportSink::new();

    pipeline
        .run(&Corpus::new(vec![text.to_string()]), &mut sink)
        .unwrap();
    assert_eq!(sink.records.len(), 1);
    assert_eq!(sink.records[0].features, pipeline.analyze_tweet(text).features);
}

#[test]
fn duplicate_tweets_are_kept() {
    let lexicons = sample_lexicons();
    let corpus: Corpus = ["أنا سعيد", "أنا سعيد"].into_iter().collect();
    let summary = BatchPipeline::new(&lexicons).analyze(&corpus).summary;
    assert_eq!(summary.classification_results.len(), 2);
    assert_eq!(
        summary.classification_results[0],
        summary.classification_results[1]
    );
}
