//! Arabic tweet normalizer
//!
//! Pipeline (fixed order, each step a pure `&str -> String` function):
//! 1. Character-variant folding from the pattern table
//! 2. Drop Latin letters
//! 3. Drop decimal digits (ASCII, Arabic-Indic, Extended Arabic-Indic)
//! 4. Allow-list filter (Arabic blocks, emoji ranges, space, underscore)
//! 5. Strip tashkeel
//! 6. Strip kashida
//! 7. Remove `#`, turn `_` into a space
//! 8. Collapse whitespace and trim
//! 9. Remove stop words
//!
//! No step can fail. An empty pattern table or stop-word set turns its step
//! into the identity.

use crate::charset;
use emosl_core::{NormalizationPatternTable, StopWordSet};

/// Step 1: replace every occurrence of each pattern, in table order.
pub fn fold_variants(text: &str, patterns: &NormalizationPatternTable) -> String {
    patterns
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            acc.replace(pattern, replacement)
        })
}

/// Step 2: drop A–Z and a–z.
pub fn remove_latin(text: &str) -> String {
    text.chars().filter(|&c| !charset::is_latin_letter(c)).collect()
}

/// Step 3: drop decimal digits.
pub fn remove_digits(text: &str) -> String {
    text.chars().filter(|&c| !charset::is_decimal_digit(c)).collect()
}

/// Step 4: keep only allow-listed characters.
pub fn retain_allowed(text: &str) -> String {
    text.chars().filter(|&c| charset::is_allowed(c)).collect()
}

/// Step 5: strip tashkeel.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|&c| !charset::is_tashkeel(c)).collect()
}

/// Step 6: strip kashida runs.
pub fn remove_elongation(text: &str) -> String {
    text.chars().filter(|&c| c != charset::KASHIDA).collect()
}

/// Step 7: remove hashtag marks and split underscore-joined words.
pub fn remove_hash_symbols(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '#')
        .map(|c| if c == '_' { ' ' } else { c })
        .collect()
}

/// Step 8: collapse whitespace runs to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Step 9: drop whitespace-separated tokens found in `stop_words`.
pub fn remove_stop_words(text: &str, stop_words: &StopWordSet) -> String {
    text.split_whitespace()
        .filter(|token| !stop_words.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the full nine-step pipeline.
///
/// # Example
///
/// ```
/// use emosl_core::{NormalizationPatternTable, StopWordSet};
/// use emosl_text::normalize;
///
/// let patterns = NormalizationPatternTable::arabic_variants();
/// let stop_words: StopWordSet = ["انا"].into_iter().collect();
///
/// let out = normalize("أنا  سعيــد جداً!! #فرحة_كبيرة 😊 2024", &patterns, &stop_words);
/// assert_eq!(out, "سعيد جدا فرحه كبيره 😊");
/// ```
pub fn normalize(text: &str, patterns: &NormalizationPatternTable, stop_words: &StopWordSet) -> String {
    let text = fold_variants(text, patterns);
    let text = remove_latin(&text);
    let text = remove_digits(&text);
    let text = retain_allowed(&text);
    let text = remove_diacritics(&text);
    let text = remove_elongation(&text);
    let text = remove_hash_symbols(&text);
    let text = collapse_whitespace(&text);
    remove_stop_words(&text, stop_words)
}

/// [`normalize`] with its tables bound once.
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer<'a> {
    patterns: &'a NormalizationPatternTable,
    stop_words: &'a StopWordSet,
}

impl<'a> TextNormalizer<'a> {
    /// Bind the pattern table and stop words
    pub fn new(patterns: &'a NormalizationPatternTable, stop_words: &'a StopWordSet) -> Self {
        TextNormalizer {
            patterns,
            stop_words,
        }
    }

    /// Normalize one tweet
    pub fn normalize(&self, text: &str) -> String {
        normalize(text, self.patterns, self.stop_words)
    }
}
