//! Report sinks
//!
//! `JsonReportSink` writes one `report_<timestamp>.json` per batch into the
//! output directory. `MemoryReportSink` keeps everything in memory.

use chrono::{DateTime, Local};
use emosl_core::{BatchSummary, ReportSink, Result, TweetRecord};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name prefix of generated reports.
pub const REPORT_PREFIX: &str = "report_";

/// Report file name for a timestamp: `report_<Y>_<M>_<D>_<h>_<m>_<s>.json`,
/// fields without zero padding.
pub fn report_file_name(at: &DateTime<Local>) -> String {
    format!("{}{}.json", REPORT_PREFIX, at.format("%Y_%-m_%-d_%-H_%-M_%-S"))
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    report: &'a [TweetRecord],
    #[serde(flatten)]
    summary: &'a BatchSummary,
}

// ============================================================================
// JsonReportSink
// ============================================================================

/// Collects a batch and writes it as one pretty JSON document on `finish`.
#[derive(Debug)]
pub struct JsonReportSink {
    output_dir: PathBuf,
    records: Vec<TweetRecord>,
    summary: Option<BatchSummary>,
    written: Option<PathBuf>,
}

impl JsonReportSink {
    /// Sink writing into `output_dir` (created on demand)
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        JsonReportSink {
            output_dir: output_dir.into(),
            records: Vec::new(),
            summary: None,
            written: None,
        }
    }

    /// Path of the written report, once `finish` succeeded
    pub fn written_path(&self) -> Option<&Path> {
        self.written.as_deref()
    }

    /// Write the collected batch to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let empty = BatchSummary::default();
        let document = ReportDocument {
            report: &self.records,
            summary: self.summary.as_ref().unwrap_or(&empty),
        };
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl ReportSink for JsonReportSink {
    fn write_tweet(&mut self, record: &TweetRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn write_batch(&mut self, summary: &BatchSummary) -> Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.written.is_some() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(report_file_name(&Local::now()));
        self.write_to(&path)?;
        info!(
            target: "emosl::report",
            path = %path.display(),
            tweets = self.records.len(),
            "Wrote report"
        );
        self.written = Some(path);
        Ok(())
    }
}

// ============================================================================
// MemoryReportSink
// ============================================================================

/// Keeps every record in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryReportSink {
    /// Per-tweet records in arrival order
    pub records: Vec<TweetRecord>,
    /// Last batch summary received
    pub summary: Option<BatchSummary>,
    /// Set by `finish`
    pub finished: bool,
}

impl MemoryReportSink {
    /// Empty sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemoryReportSink {
    fn write_tweet(&mut self, record: &TweetRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn write_batch(&mut self, summary: &BatchSummary) -> Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

// ============================================================================
// Clearing
// ============================================================================

/// Remove every generated report from `output_dir`.
///
/// Returns the number of files removed. A missing directory removes nothing.
pub fn clear_reports(output_dir: &Path) -> Result<usize> {
    if !output_dir.is_dir() {
        return Ok(0);
    }
    let mut removed = 0;
    for entry in std::fs::read_dir(output_dir)? {
        let path = entry?.path();
        let is_report = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(REPORT_PREFIX) && n.ends_with(".json"))
                .unwrap_or(false);
        if is_report {
            std::fs::remove_file(&path)?;
            debug!(target: "emosl::report", path = %path.display(), "Removed report");
            removed += 1;
        }
    }
    info!(target: "emosl::report", removed, dir = %output_dir.display(), "Cleared reports");
    Ok(removed)
}
