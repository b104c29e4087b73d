//! Storage layer for Emo-SL
//!
//! This crate provides:
//! - `EmoslConfig`: the `emosl.toml` configuration file
//! - `LexiconLoader`: reads lexicons and the tweet corpus from flat files
//! - `JsonReportSink` / `MemoryReportSink`: report output
//!
//! Missing sources never fail a run: they are logged and replaced with empty
//! collections. Only configuration parsing and report writing return errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod loader;
pub mod report;

pub use config::{AnalysisConfig, EmoslConfig, FileNames, CONFIG_FILE_NAME};
pub use loader::LexiconLoader;
pub use report::{clear_reports, JsonReportSink, MemoryReportSink, REPORT_PREFIX};
