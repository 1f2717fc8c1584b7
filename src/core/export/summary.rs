//! Export summary and reporting
//!
//! This module defines the structure returned by a batch export run.

use crate::domain::duration::format_duration;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Record of one closed output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenBatch {
    /// Zero-based file index
    pub index: usize,

    /// Global index of the first chapter in the file
    pub first_chapter: usize,

    /// Number of chapters in the file
    pub chapters: usize,

    /// Rows written, header excluded
    pub rows: usize,
}

/// Summary of an export operation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of files opened and closed
    pub files_written: usize,

    /// Number of chapters exported
    pub chapters_written: usize,

    /// Number of parts exported
    pub parts_written: usize,

    /// Rows written across all files, headers excluded
    pub rows_written: usize,

    /// Sum of all chapter durations in seconds
    pub total_duration_seconds: u64,

    /// Per-file breakdown in write order
    pub batches: Vec<WrittenBatch>,

    /// When the export started
    pub started_at: DateTime<Utc>,

    /// When the export finished
    pub finished_at: DateTime<Utc>,

    /// Whether rows were counted instead of written
    pub dry_run: bool,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            files_written: 0,
            chapters_written: 0,
            parts_written: 0,
            rows_written: 0,
            total_duration_seconds: 0,
            batches: Vec::new(),
            started_at: now,
            finished_at: now,
            dry_run: false,
        }
    }

    /// Register a closed file
    pub fn add_batch(&mut self, batch: WrittenBatch) {
        self.files_written += 1;
        self.batches.push(batch);
    }

    /// Wall-clock time of the run
    pub fn elapsed(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }

    /// Course length rendered as `H:MM:SS`
    pub fn total_duration_display(&self) -> String {
        format_duration(self.total_duration_seconds)
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            files = self.files_written,
            chapters = self.chapters_written,
            parts = self.parts_written,
            rows = self.rows_written,
            course_duration = %self.total_duration_display(),
            elapsed_ms = self.elapsed().as_millis() as u64,
            dry_run = self.dry_run,
            "Export completed"
        );
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}
