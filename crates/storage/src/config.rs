//! Run configuration via `emosl.toml`
//!
//! A default `emosl.toml` can be written with `emosl init`. Every field has a
//! default, so an empty or partial file is valid. Command-line flags override
//! what the file says.

use emosl_analysis::{CorpusFilter, DetectionRule, PipelineOptions};
use emosl_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "emosl.toml";

// ============================================================================
// Source file names
// ============================================================================

/// File names of every source, relative to `data_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNames {
    /// Tweet corpus, one tweet per line
    pub tweets: String,
    /// Stop words, one per line
    pub stop_words: String,
    /// Emo-SL positive words, one per line
    pub positive_words: String,
    /// Emo-SL negative words, one per line
    pub negative_words: String,
    /// Curated emoji list, one per line
    pub known_emojis: String,
    /// `word<TAB>score` table
    pub word_lexicon: String,
    /// `emoji<TAB>score` table
    pub emoji_lexicon: String,
    /// `pattern<TAB>replacement` table
    pub normalization_patterns: String,
}

impl Default for FileNames {
    fn default() -> Self {
        FileNames {
            tweets: "tweets.txt".to_string(),
            stop_words: "stop_words.txt".to_string(),
            positive_words: "positive_lexicon.txt".to_string(),
            negative_words: "negative_lexicon.txt".to_string(),
            known_emojis: "emojis.txt".to_string(),
            word_lexicon: "sentiment_lexicon.tsv".to_string(),
            emoji_lexicon: "emoji_sentiment_lexicon.tsv".to_string(),
            normalization_patterns: "normalization_patterns.tsv".to_string(),
        }
    }
}

// ============================================================================
// Analysis settings
// ============================================================================

/// The `[analysis]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Emoji detection rule: `"lexicon"` or `"known-list"`
    pub emoji_detection: String,
    /// Run the per-tweet stages in parallel
    pub parallel: bool,
    /// Keep emojis in the Emo-SL preprocessed corpus
    pub keep_corpus_emojis: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            emoji_detection: "lexicon".to_string(),
            parallel: false,
            keep_corpus_emojis: false,
        }
    }
}

impl AnalysisConfig {
    /// Parse the detection string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"lexicon"` or `"known-list"`.
    pub fn detection_rule(&self) -> Result<DetectionRule> {
        match self.emoji_detection.as_str() {
            "lexicon" => Ok(DetectionRule::Lexicon),
            "known-list" => Ok(DetectionRule::KnownList),
            other => Err(Error::config(format!(
                "Invalid emoji_detection '{}' in {}. Expected \"lexicon\" or \"known-list\".",
                other, CONFIG_FILE_NAME
            ))),
        }
    }

    /// Pipeline options described by this section.
    pub fn pipeline_options(&self) -> Result<PipelineOptions> {
        Ok(PipelineOptions {
            emoji_detection: self.detection_rule()?,
            parallel: self.parallel,
            corpus_filter: if self.keep_corpus_emojis {
                CorpusFilter::ArabicAndEmoji
            } else {
                CorpusFilter::ArabicOnly
            },
        })
    }
}

// ============================================================================
// EmoslConfig
// ============================================================================

/// Configuration loaded from `emosl.toml`.
///
/// # Example
///
/// ```toml
/// data_dir = "Data"
/// output_dir = "output"
///
/// [analysis]
/// emoji_detection = "lexicon"
/// parallel = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoslConfig {
    /// Directory holding every source file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory receiving JSON reports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Source file names
    #[serde(default)]
    pub files: FileNames,
    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("Data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for EmoslConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            files: FileNames::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl EmoslConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Emo-SL configuration
#
# Directory holding the lexicons and the tweet corpus
data_dir = "Data"

# Directory receiving report_<timestamp>.json files
output_dir = "output"

# Source file names, relative to data_dir
[files]
tweets = "tweets.txt"
stop_words = "stop_words.txt"
positive_words = "positive_lexicon.txt"
negative_words = "negative_lexicon.txt"
known_emojis = "emojis.txt"
word_lexicon = "sentiment_lexicon.tsv"
emoji_lexicon = "emoji_sentiment_lexicon.tsv"
normalization_patterns = "normalization_patterns.tsv"

[analysis]
# Emoji detection: "lexicon" (default) or "known-list"
#   "lexicon"    = emojis that have a score in the emoji lexicon
#   "known-list" = emojis listed in the curated emoji file
emoji_detection = "lexicon"

# Analyze tweets on all cores (default: false)
parallel = false

# Keep emojis when preprocessing the corpus for Emo-SL (default: false)
keep_corpus_emojis = false
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: EmoslConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.analysis.detection_rule()?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` when the file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| {
            Error::config(format!(
                "Failed to write default config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(true)
    }
}
