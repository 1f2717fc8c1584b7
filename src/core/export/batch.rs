//! Batch export of chapters into task files
//!
//! Chapters are written in order, each batch of consecutive chapters going to
//! its own sink. A file is closed after the chapter whose global (0-based)
//! index `i` satisfies `(i + 1) % batch_size == 0`, or after the last chapter.
//! The boundary test uses the global chapter index, never a per-file counter.

use super::row::TaskRow;
use super::sink::RowSink;
use super::summary::{ExportSummary, WrittenBatch};
use crate::domain::curriculum::Chapter;
use crate::domain::{CourseTasksError, Result};
use chrono::Utc;

/// Default number of chapters per file
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Writes chapters into size-bounded batches of rows
#[derive(Debug, Clone, Copy)]
pub struct BatchExporter {
    batch_size: usize,
}

impl BatchExporter {
    /// Create an exporter writing `batch_size` chapters per file
    ///
    /// # Errors
    ///
    /// Returns a validation error if `batch_size` is 0.
    pub fn new(batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(CourseTasksError::Validation(
                "batch size must be greater than 0".to_string(),
            ));
        }
        Ok(Self { batch_size })
    }

    /// Chapters per file
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of files an export of `chapters` chapters produces
    pub fn expected_files(&self, chapters: usize) -> usize {
        chapters.div_ceil(self.batch_size)
    }

    /// Export chapters, opening one sink per batch
    ///
    /// `sink_factory` receives the zero-based file index. Each chapter emits a
    /// chapter row and a blank row, then a part row and a blank row per part.
    ///
    /// # Errors
    ///
    /// Any failure to open or write a sink aborts the export. Files finished
    /// before the failure are left in place.
    pub fn export<S, F>(&self, chapters: &[Chapter], sink_factory: F) -> Result<ExportSummary>
    where
        S: RowSink,
        F: FnMut(usize) -> Result<S>,
    {
        self.export_with(chapters, sink_factory, |_| {})
    }

    /// Export chapters, calling `on_close` as soon as each batch is finished
    ///
    /// `on_close` runs before the next batch is opened, so it has seen every
    /// completed file even when a later batch fails.
    pub fn export_with<S, F, C>(
        &self,
        chapters: &[Chapter],
        mut sink_factory: F,
        mut on_close: C,
    ) -> Result<ExportSummary>
    where
        S: RowSink,
        F: FnMut(usize) -> Result<S>,
        C: FnMut(&WrittenBatch),
    {
        let mut summary = ExportSummary::new();
        let total = chapters.len();

        tracing::info!(
            chapters = total,
            batch_size = self.batch_size,
            files = self.expected_files(total),
            "Starting batch export"
        );

        let mut open: Option<OpenBatch<S>> = None;

        for (i, chapter) in chapters.iter().enumerate() {
            let mut batch = match open.take() {
                Some(batch) => batch,
                None => {
                    let index = summary.files_written;
                    tracing::debug!(file_index = index, first_chapter = i, "Opening batch");
                    OpenBatch::new(sink_factory(index)?, index, i)
                }
            };

            batch.write_chapter(chapter)?;
            summary.chapters_written += 1;
            summary.parts_written += chapter.parts().len();
            summary.total_duration_seconds += chapter.duration_seconds();

            if i + 1 == total || (i + 1) % self.batch_size == 0 {
                let written = batch.close()?;
                summary.rows_written += written.rows;
                crate::log_batch_written!(written.index, written.chapters, written.rows);
                on_close(&written);
                summary.add_batch(written);
            } else {
                open = Some(batch);
            }
        }

        summary.finished_at = Utc::now();
        Ok(summary)
    }
}

impl Default for BatchExporter {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Sink of the batch currently being written
struct OpenBatch<S> {
    sink: S,
    index: usize,
    first_chapter: usize,
    chapters: usize,
    rows: usize,
}

impl<S: RowSink> OpenBatch<S> {
    fn new(sink: S, index: usize, first_chapter: usize) -> Self {
        Self {
            sink,
            index,
            first_chapter,
            chapters: 0,
            rows: 0,
        }
    }

    fn write_chapter(&mut self, chapter: &Chapter) -> Result<()> {
        self.emit(&TaskRow::chapter(chapter))?;
        self.emit(&TaskRow::blank())?;
        for part in chapter.parts() {
            self.emit(&TaskRow::part(part))?;
            self.emit(&TaskRow::blank())?;
        }
        self.chapters += 1;
        Ok(())
    }

    fn emit(&mut self, row: &TaskRow) -> Result<()> {
        self.sink.write_row(row)?;
        self.rows += 1;
        Ok(())
    }

    fn close(self) -> Result<WrittenBatch> {
        self.sink.finish()?;
        Ok(WrittenBatch {
            index: self.index,
            first_chapter: self.first_chapter,
            chapters: self.chapters,
            rows: self.rows,
        })
    }
}
