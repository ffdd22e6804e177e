//! JSON report output.
//!
//! A report captures one session: the sources, every classified headline and
//! the results of whichever analyses ran.
//!
//! # Output Structure
//!
//! Files are organized by date, one file per run:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── 081502.json
//!     └── 173040.json
//! ```

use crate::error::Result;
use crate::models::{ClassifiedHeadline, MapMarker, SentimentBuckets, WordCount};
use crate::utils::ensure_writable_dir;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// A serializable snapshot of one analysis session.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub sources: Vec<SourceSummary>,
    pub headlines: Vec<ClassifiedHeadline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_words: Option<Vec<WordCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentBuckets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<MapMarker>>,
}

/// Per-source fetch outcome.
#[derive(Debug, Serialize)]
pub struct SourceSummary {
    pub url: String,
    pub status: Option<u16>,
    pub headline_count: usize,
}

/// Path a report generated at `at` is written to.
pub fn report_path(json_output_dir: &Path, at: &DateTime<Local>) -> PathBuf {
    json_output_dir
        .join(at.format("%Y-%m-%d").to_string())
        .join(format!("{}.json", at.format("%H%M%S")))
}

/// Write `report` under `json_output_dir`, returning the file path.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display()))]
pub async fn write_report(report: &Report, json_output_dir: &Path) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(report)?;
    let path = report_path(json_output_dir, &report.generated_at);
    if let Some(dir) = path.parent() {
        ensure_writable_dir(dir).await?;
    }
    fs::write(&path, json).await?;
    info!(path = %path.display(), headlines = report.headlines.len(), "Wrote JSON report");
    Ok(path)
}
