//! Tokenizers
//!
//! Two splitting rules are in use:
//! - [`tokenize_words`]: maximal runs of letters, digits and underscore, used by
//!   lexicon feature extraction; punctuation and emoji never form words
//! - [`tokenize_whitespace`]: plain whitespace split, used by Emo-SL

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of letters, numbers and underscore. Combining marks end a word.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("Invalid regex"));

/// Split text into word tokens.
///
/// A word is a maximal run of letters, digits and underscore. Order and
/// duplicates are preserved.
///
/// # Example
///
/// ```
/// use emosl_text::tokenize_words;
///
/// let tokens = tokenize_words("انا سعيد، جدا😊!");
/// assert_eq!(tokens, vec!["انا", "سعيد", "جدا"]);
/// ```
pub fn tokenize_words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text on whitespace.
///
/// # Example
///
/// ```
/// use emosl_text::tokenize_whitespace;
///
/// assert_eq!(tokenize_whitespace(" انا  سعيد "), vec!["انا", "سعيد"]);
/// ```
pub fn tokenize_whitespace(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
