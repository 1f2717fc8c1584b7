//! Todoist command implementation
//!
//! Loads the downloaded curriculum pages, groups them into chapters and
//! writes the chapters into batched task import CSV files.

use crate::adapters::udemy::load_curriculum;
use crate::config::CourseTasksConfig;
use crate::core::export::{BatchExporter, CountingSink, CsvFileSinkFactory, ExportSummary};
use crate::core::parse::CurriculumParser;
use crate::domain::{CourseId, CourseTasksError, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the todoist command
#[derive(Args, Debug)]
pub struct TodoistArgs {
    /// Downloaded curriculum page (repeat for several pages, in order)
    #[arg(short = 'f', long = "from-file", visible_alias = "from_file", required = true)]
    pub from_file: Vec<PathBuf>,

    /// Existing, writable directory for the generated files
    #[arg(short = 'o', long = "output-dir", visible_alias = "output_dir")]
    pub output_dir: Option<PathBuf>,

    /// Chapters per output file [default: 10]
    #[arg(
        short = 'b',
        long = "bunch-size",
        visible_aliases = ["bunch_size", "batch-size"]
    )]
    pub bunch_size: Option<usize>,

    /// Parse and count without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Result of a todoist run
#[derive(Debug)]
pub struct TodoistOutcome {
    /// Export summary
    pub summary: ExportSummary,

    /// Files written, in index order (empty for dry runs)
    pub files: Vec<PathBuf>,
}

impl TodoistArgs {
    /// Resolve the output directory from CLI and configuration
    fn output_dir(&self, config: &CourseTasksConfig) -> Result<PathBuf> {
        self.output_dir
            .clone()
            .or_else(|| config.export.output_dir.as_ref().map(PathBuf::from))
            .ok_or_else(|| {
                CourseTasksError::Configuration(
                    "No output directory: pass --output-dir or set export.output_dir".to_string(),
                )
            })
    }

    /// Run the conversion without printing
    ///
    /// The output directory is checked before any input is read.
    pub fn run(&self, course_id: &CourseId, config: &CourseTasksConfig) -> Result<TodoistOutcome> {
        self.run_with(course_id, config, |_| {})
    }

    /// Run the conversion, passing each file path to `on_file` once it is complete
    pub fn run_with<C>(
        &self,
        course_id: &CourseId,
        config: &CourseTasksConfig,
        mut on_file: C,
    ) -> Result<TodoistOutcome>
    where
        C: FnMut(&Path),
    {
        let batch_size = self.bunch_size.unwrap_or(config.export.batch_size);
        let exporter = BatchExporter::new(batch_size)?;

        let factory = if self.dry_run {
            None
        } else {
            Some(CsvFileSinkFactory::new(
                self.output_dir(config)?,
                course_id.clone(),
            )?)
        };

        crate::log_export_start!(course_id, self.from_file.len(), batch_size);

        let records = load_curriculum(self.from_file.as_slice())?;
        let chapters = CurriculumParser::new().parse(records);

        let outcome = match factory {
            Some(factory) => {
                let summary = exporter.export_with(
                    &chapters,
                    |index| factory.open(index),
                    |batch| on_file(&factory.path_for(batch.index)),
                )?;
                let files = summary
                    .batches
                    .iter()
                    .map(|batch| factory.path_for(batch.index))
                    .collect();
                TodoistOutcome { summary, files }
            }
            None => {
                let mut summary = exporter.export(&chapters, |_| Ok(CountingSink::new()))?;
                summary.dry_run = true;
                TodoistOutcome {
                    summary,
                    files: Vec::new(),
                }
            }
        };

        outcome.summary.log_summary();
        Ok(outcome)
    }

    /// Execute the todoist command
    pub fn execute(&self, course_id: &CourseId, config: &CourseTasksConfig) -> anyhow::Result<i32> {
        tracing::info!(course_id = %course_id, "Starting todoist command");

        if self.dry_run {
            println!("DRY RUN - no files will be written");
            println!();
        }

        let result = self.run_with(course_id, config, |path| {
            println!("Result has been written to file: {}", path.display());
        });
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                crate::log_error_with_context!(&e, "Todoist export failed");
                eprintln!("Export failed: {e}");
                return Ok(e.exit_code());
            }
        };

        let summary = &outcome.summary;
        println!();
        println!("Export Summary:");
        println!("  Files: {}", summary.files_written);
        println!("  Chapters: {}", summary.chapters_written);
        println!("  Parts: {}", summary.parts_written);
        println!("  Rows: {}", summary.rows_written);
        println!("  Course duration: {}", summary.total_duration_display());

        if summary.chapters_written == 0 {
            println!();
            println!("No chapters found in the input; nothing was written.");
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output_dir: Option<&str>) -> TodoistArgs {
        TodoistArgs {
            from_file: vec![PathBuf::from("page.json")],
            output_dir: output_dir.map(PathBuf::from),
            bunch_size: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_output_dir_cli_wins() {
        let mut config = CourseTasksConfig::default();
        config.export.output_dir = Some("from-config".to_string());
        assert_eq!(
            args(Some("from-cli")).output_dir(&config).unwrap(),
            PathBuf::from("from-cli")
        );
        assert_eq!(
            args(None).output_dir(&config).unwrap(),
            PathBuf::from("from-config")
        );
    }

    #[test]
    fn test_output_dir_required() {
        let result = args(None).output_dir(&CourseTasksConfig::default());
        assert!(matches!(result, Err(CourseTasksError::Configuration(_))));
    }

    #[test]
    fn test_zero_bunch_size_rejected() {
        let mut args = args(Some("."));
        args.bunch_size = Some(0);
        let result = args.run(&CourseId::new("1").unwrap(), &CourseTasksConfig::default());
        assert!(matches!(result, Err(CourseTasksError::Validation(_))));
    }
}
