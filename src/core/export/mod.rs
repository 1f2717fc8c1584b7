//! Task file export
//!
//! This module provides:
//! - The fixed import row schema
//! - Row sinks (CSV files, in-memory writers, dry-run counters)
//! - Batch export of chapters into size-bounded files
//! - Summary and reporting

pub mod batch;
pub mod row;
pub mod sink;
pub mod summary;

pub use batch::{BatchExporter, DEFAULT_BATCH_SIZE};
pub use row::{Indent, Priority, RowType, TaskRow, COLUMNS};
pub use sink::{output_path, CountingSink, CsvFileSinkFactory, CsvRowSink, RowSink};
pub use summary::{ExportSummary, WrittenBatch};
