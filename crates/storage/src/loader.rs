//! Flat-file lexicon loader
//!
//! Reads every table a run needs from the data directory. Sources are plain
//! UTF-8 files: line lists (one entry per line) and tab-separated tables with a
//! header row. A source that cannot be read is logged and replaced with an
//! empty collection; a row that cannot be parsed is skipped.

use crate::config::{EmoslConfig, FileNames};
use csv::{ReaderBuilder, StringRecord, Trim};
use emosl_core::{
    Corpus, EmojiSentimentLexicon, KnownEmojis, Lexicons, NormalizationPatternTable,
    SentimentLexicon, StopWordSet, WordList,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Loads lexicons and the corpus from a data directory.
#[derive(Debug, Clone)]
pub struct LexiconLoader {
    data_dir: PathBuf,
    files: FileNames,
}

impl LexiconLoader {
    /// Loader over `data_dir` with the default file names
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        LexiconLoader {
            data_dir: data_dir.into(),
            files: FileNames::default(),
        }
    }

    /// Loader using the directory and file names of a config
    pub fn from_config(config: &EmoslConfig) -> Self {
        LexiconLoader {
            data_dir: config.data_dir.clone(),
            files: config.files.clone(),
        }
    }

    /// Builder: override the file names
    pub fn with_files(mut self, files: FileNames) -> Self {
        self.files = files;
        self
    }

    /// Data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    // ========================================================================
    // Whole-run loading
    // ========================================================================

    /// Load every lexicon.
    pub fn load_lexicons(&self) -> Lexicons {
        let files = &self.files;

        let mut words = SentimentLexicon::new();
        for (key, score) in read_scored_table(&self.path(&files.word_lexicon)) {
            words.insert(&key, score);
        }

        let mut emojis = EmojiSentimentLexicon::new();
        for (key, score) in read_scored_table(&self.path(&files.emoji_lexicon)) {
            if !emojis.insert_str(&key, score) {
                debug!(target: "emosl::load", key = %key, "Skipping multi-character emoji key");
            }
        }

        let lexicons = Lexicons {
            words,
            emojis,
            patterns: read_pattern_table(&self.path(&files.normalization_patterns)),
            stop_words: read_lines(&self.path(&files.stop_words))
                .into_iter()
                .collect::<StopWordSet>(),
            positive_words: read_lines(&self.path(&files.positive_words))
                .into_iter()
                .collect::<WordList>(),
            negative_words: read_lines(&self.path(&files.negative_words))
                .into_iter()
                .collect::<WordList>(),
            known_emojis: read_lines(&self.path(&files.known_emojis))
                .into_iter()
                .collect::<KnownEmojis>(),
        };

        info!(
            target: "emosl::load",
            data_dir = %self.data_dir.display(),
            words = lexicons.words.len(),
            emojis = lexicons.emojis.len(),
            patterns = lexicons.patterns.len(),
            stop_words = lexicons.stop_words.len(),
            positive_words = lexicons.positive_words.len(),
            negative_words = lexicons.negative_words.len(),
            known_emojis = lexicons.known_emojis.len(),
            "Loaded lexicons"
        );
        lexicons
    }

    /// Load the tweet corpus.
    pub fn load_corpus(&self) -> Corpus {
        let corpus = Corpus::new(read_lines(&self.path(&self.files.tweets)));
        info!(target: "emosl::load", tweets = corpus.len(), "Loaded corpus");
        corpus
    }
}

// ============================================================================
// File readers
// ============================================================================

fn read_source(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(
                target: "emosl::load",
                path = %path.display(),
                error = %e,
                "Source unavailable, using an empty collection"
            );
            None
        }
    }
}

/// Read a line list. Missing file → empty.
pub fn read_lines(path: &Path) -> Vec<String> {
    read_source(path).map(|c| parse_lines(&c)).unwrap_or_default()
}

/// Read a `key<TAB>score` table. Missing file → empty.
pub fn read_scored_table(path: &Path) -> Vec<(String, f64)> {
    read_source(path)
        .map(|c| parse_scored_table(&c))
        .unwrap_or_default()
}

/// Read a `pattern<TAB>replacement` table. Missing file → empty.
pub fn read_pattern_table(path: &Path) -> NormalizationPatternTable {
    read_source(path)
        .map(|c| parse_pattern_table(&c))
        .unwrap_or_default()
}

// ============================================================================
// Parsers
// ============================================================================

/// Trimmed non-blank lines.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn tsv_reader(content: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(content.as_bytes())
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Rows of a scored table, header skipped. Columns past the second are ignored.
pub fn parse_scored_table(content: &str) -> Vec<(String, f64)> {
    let mut rows = Vec::new();
    for result in tsv_reader(content).records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!(target: "emosl::load", error = %e, "Skipping unreadable row");
                continue;
            }
        };
        let key = record.get(0).unwrap_or("");
        let score = record
            .get(1)
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite());
        match score {
            Some(score) if !key.is_empty() => rows.push((key.to_string(), score)),
            _ => debug!(target: "emosl::load", line = line_of(&record), "Skipping malformed row"),
        }
    }
    rows
}

/// Rows of a pattern table, header skipped.
pub fn parse_pattern_table(content: &str) -> NormalizationPatternTable {
    let mut table = NormalizationPatternTable::new();
    for result in tsv_reader(content).records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!(target: "emosl::load", error = %e, "Skipping unreadable pattern row");
                continue;
            }
        };
        match (record.get(0), record.get(1)) {
            (Some(pattern), Some(replacement)) if !pattern.is_empty() => {
                table.push(pattern, replacement);
            }
            _ => debug!(
                target: "emosl::load",
                line = line_of(&record),
                "Skipping malformed pattern row"
            ),
        }
    }
    table
}
