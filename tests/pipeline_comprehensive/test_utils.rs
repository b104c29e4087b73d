//! Shared fixtures for the pipeline suite.

#![allow(dead_code)]

pub use emosl::*;
use std::fs;
use std::path::Path;

/// Small lexicon set covering every table.
pub fn sample_lexicons() -> Lexicons {
    let mut lexicons = Lexicons {
        patterns: NormalizationPatternTable::arabic_variants(),
        stop_words: ["في", "من", "على"].into_iter().collect(),
        positive_words: ["سعيد", "جميل", "رائع"].into_iter().collect(),
        negative_words: ["حزين", "سيء"].into_iter().collect(),
        known_emojis: ["😊", "😢", "😍", "😡", "🙂"].into_iter().collect(),
        ..Lexicons::default()
    };
    for (word, score) in [("سعيد", 1.0), ("جميل", 0.8), ("رائع", 0.9), ("حزين", -1.0), ("سيء", -0.7)] {
        lexicons.words.insert(word, score);
    }
    for (emoji, score) in [('😊', 0.9), ('😍', 1.0), ('😢', -0.8), ('😡', -1.0), ('😐', 0.0)] {
        lexicons.emojis.insert(emoji, score);
    }
    lexicons
}

/// Tweets mixing Arabic, Latin, digits, hashtags and emojis.
pub fn sample_corpus() -> Corpus {
    [
        "أنا سعيد جداً 😊",
        "يوم جميل في المدينة 😍😍",
        "الخدمة سيئة 😡",
        "أنا حزين 😢 من الأخبار",
        "Good morning 2024 😊",
        "#يوم_رائع مع الأصدقاء 😊😍",
        "لا تعليق 😐",
        "",
        "رائع رائع رائع 🙂",
        "كتاب جميل ولكن النهاية حزينة 😢",
    ]
    .into_iter()
    .collect()
}

/// Write a complete data directory.
pub fn write_data_dir(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("tweets.txt"),
        "أنا سعيد 😊\nيوم حزين 😢\n\nHello world\nجميل جداً 😍 😊\n",
    )
    .unwrap();
    fs::write(dir.join("stop_words.txt"), "في\nمن\n").unwrap();
    fs::write(dir.join("positive_lexicon.txt"), "سعيد\nجميل\n").unwrap();
    fs::write(dir.join("negative_lexicon.txt"), "حزين\n").unwrap();
    fs::write(dir.join("emojis.txt"), "😊\n😢\n😍\n").unwrap();
    fs::write(
        dir.join("sentiment_lexicon.tsv"),
        "word\tscore\nسعيد\t1.0\nجميل\t0.5\nحزين\t-1.0\n",
    )
    .unwrap();
    fs::write(
        dir.join("emoji_sentiment_lexicon.tsv"),
        "emoji\tscore\n😊\t0.9\n😍\t1.0\n😢\t-0.8\n",
    )
    .unwrap();
    fs::write(
        dir.join("normalization_patterns.tsv"),
        "pattern\treplacement\nأ\tا\nإ\tا\nآ\tا\nة\tه\nى\tي\n",
    )
    .unwrap();
}
