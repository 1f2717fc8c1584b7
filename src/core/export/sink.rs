//! Row sinks for exported task files
//!
//! A [`RowSink`] receives the rows of exactly one batch. The exporter opens a
//! sink per batch, writes into it, and calls [`RowSink::finish`] once the
//! batch is complete. A sink that is dropped without `finish` (an error was hit
//! mid-batch) leaves whatever it already wrote in place.

use super::row::{TaskRow, COLUMNS};
use crate::domain::errors::OutputError;
use crate::domain::ids::CourseId;
use crate::domain::Result;
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for the rows of one batch
pub trait RowSink {
    /// Append one row
    fn write_row(&mut self, row: &TaskRow) -> Result<()>;

    /// Flush and close the sink
    fn finish(self) -> Result<()>
    where
        Self: Sized;
}

/// CSV sink over any writer
///
/// The header row is written as soon as the sink is created. Records end
/// with CRLF, as task importers expect RFC 4180 files.
pub struct CsvRowSink<W: Write> {
    writer: csv::Writer<W>,
    label: String,
    rows_written: usize,
}

impl<W: Write> CsvRowSink<W> {
    /// Create a sink and write the header row
    ///
    /// `label` names the destination in error messages and logs.
    pub fn new(writer: W, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(writer);
        writer
            .write_record(COLUMNS)
            .map_err(|e| write_failed(&label, e))?;
        Ok(Self {
            writer,
            label,
            rows_written: 0,
        })
    }

    /// Destination label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of rows written, header excluded
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        let label = self.label;
        let inner = self
            .writer
            .into_inner()
            .map_err(|e| write_failed(&label, e))?;
        Ok(inner)
    }
}

impl<W: Write> RowSink for CsvRowSink<W> {
    fn write_row(&mut self, row: &TaskRow) -> Result<()> {
        self.writer
            .write_record(&row.to_record())
            .map_err(|e| write_failed(&self.label, e))?;
        self.rows_written += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| write_failed(&self.label, e))?;
        tracing::debug!(
            destination = %self.label,
            rows = self.rows_written,
            "Closed task file"
        );
        Ok(())
    }
}

fn write_failed(label: &str, err: impl std::fmt::Display) -> OutputError {
    OutputError::WriteFailed {
        path: label.to_string(),
        message: err.to_string(),
    }
}

/// Sink that only counts rows, used for dry runs
#[derive(Debug, Default)]
pub struct CountingSink {
    rows: usize,
}

impl CountingSink {
    /// Create an empty counting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows received so far
    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl RowSink for CountingSink {
    fn write_row(&mut self, _row: &TaskRow) -> Result<()> {
        self.rows += 1;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        Ok(())
    }
}

/// Opens `{output_dir}/result_{course_id}_{index}.csv` files
#[derive(Debug, Clone)]
pub struct CsvFileSinkFactory {
    output_dir: PathBuf,
    course_id: CourseId,
}

impl CsvFileSinkFactory {
    /// Create a factory for an existing output directory
    ///
    /// # Errors
    ///
    /// Returns an [`OutputError`] if the directory does not exist or is not a
    /// directory. The directory is never created.
    pub fn new(output_dir: impl AsRef<Path>, course_id: CourseId) -> Result<Self> {
        let output_dir = output_dir.as_ref();
        if !output_dir.exists() {
            return Err(OutputError::DirectoryNotFound(output_dir.display().to_string()).into());
        }
        if !output_dir.is_dir() {
            return Err(OutputError::NotADirectory(output_dir.display().to_string()).into());
        }
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            course_id,
        })
    }

    /// Path of the file with the given zero-based index
    pub fn path_for(&self, index: usize) -> PathBuf {
        output_path(&self.output_dir, &self.course_id, index)
    }

    /// Create (or truncate) the file with the given index
    pub fn open(&self, index: usize) -> Result<CsvRowSink<File>> {
        let path = self.path_for(index);
        let file = File::create(&path).map_err(|e| OutputError::CreateFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        CsvRowSink::new(file, path.display().to_string())
    }
}

/// Output file path for a course and file index
pub fn output_path(output_dir: &Path, course_id: &CourseId, index: usize) -> PathBuf {
    output_dir.join(format!("result_{course_id}_{index}.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::curriculum::Part;
    use crate::domain::CourseTasksError;
    use tempfile::TempDir;

    #[test]
    fn test_csv_sink_writes_header_and_rows() {
        let mut sink = CsvRowSink::new(Vec::new(), "memory").unwrap();
        sink.write_row(&TaskRow::part(&Part::new("L1", 125))).unwrap();
        sink.write_row(&TaskRow::blank()).unwrap();
        assert_eq!(sink.rows_written(), 2);

        let bytes = sink.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "TYPE,CONTENT,DESCRIPTION,PRIORITY,INDENT,AUTHOR,RESPONSIBLE,DATE,DATE_LANG,TIMEZONE,DURATION,DURATION_UNIT"
        );
        assert_eq!(lines[1], "task,L1 0:02:05,,4,2,,,,,,125,");
        assert_eq!(lines[2], ",,,,,,,,,,,");
    }

    #[test]
    fn test_csv_sink_uses_crlf() {
        let mut sink = CsvRowSink::new(Vec::new(), "memory").unwrap();
        sink.write_row(&TaskRow::blank()).unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert!(text.ends_with(",,,,,,,,,,,\r\n"));
        assert_eq!(text.matches("\r\n").count(), 2);
        assert_eq!(text.matches('\n').count(), 2);
    }

    #[test]
    fn test_csv_sink_quotes_commas() {
        let mut sink = CsvRowSink::new(Vec::new(), "memory").unwrap();
        sink.write_row(&TaskRow::part(&Part::new("Structs, enums", 1)))
            .unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert!(text.contains("\"Structs, enums 0:00:01\""));
    }

    #[test]
    fn test_counting_sink() {
        let mut sink = CountingSink::new();
        sink.write_row(&TaskRow::blank()).unwrap();
        sink.write_row(&TaskRow::blank()).unwrap();
        assert_eq!(sink.rows(), 2);
        assert!(sink.finish().is_ok());
    }

    #[test]
    fn test_factory_rejects_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let result = CsvFileSinkFactory::new(&missing, CourseId::new("1").unwrap());
        assert!(matches!(
            result,
            Err(CourseTasksError::Output(OutputError::DirectoryNotFound(_)))
        ));
    }

    #[test]
    fn test_factory_rejects_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain.txt");
        std::fs::write(&file_path, "x").unwrap();
        let result = CsvFileSinkFactory::new(&file_path, CourseId::new("1").unwrap());
        assert!(matches!(
            result,
            Err(CourseTasksError::Output(OutputError::NotADirectory(_)))
        ));
    }

    #[test]
    fn test_factory_opens_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let factory =
            CsvFileSinkFactory::new(temp_dir.path(), CourseId::new("4242").unwrap()).unwrap();
        let expected = temp_dir.path().join("result_4242_3.csv");
        assert_eq!(factory.path_for(3), expected);

        let sink = factory.open(3).unwrap();
        sink.finish().unwrap();
        let contents = std::fs::read_to_string(expected).unwrap();
        assert!(contents.starts_with("TYPE,CONTENT,"));
    }
}
