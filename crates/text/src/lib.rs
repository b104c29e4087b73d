//! Text processing for Emo-SL
//!
//! This crate provides:
//! - Character classes for Arabic text and emoji (`charset`)
//! - The nine-step tweet normalizer (`normalizer`)
//! - Word and whitespace tokenizers (`tokenizer`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod charset;
pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{normalize, TextNormalizer};
pub use tokenizer::{tokenize_words, tokenize_whitespace};
