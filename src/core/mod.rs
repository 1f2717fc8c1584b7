//! Core conversion logic for course-tasks.
//!
//! # Modules
//!
//! - [`parse`] - Grouping flat curriculum records into chapters
//! - [`export`] - Batch export of chapters into task import files
//!
//! # Workflow
//!
//! 1. **Load**: Read one or more curriculum pages and concatenate their records
//! 2. **Parse**: Fold the flat records into chapters owning their parts
//! 3. **Export**: Write chapters into files of at most `batch_size` chapters
//!
//! # Example
//!
//! ```rust,no_run
//! use course_tasks::core::export::{BatchExporter, CsvFileSinkFactory};
//! use course_tasks::core::parse::CurriculumParser;
//! use course_tasks::adapters::udemy::load_curriculum;
//! use course_tasks::domain::CourseId;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let records = load_curriculum(&["page1.json"])?;
//! let chapters = CurriculumParser::new().parse(records);
//!
//! let factory = CsvFileSinkFactory::new("out", CourseId::new("1565838")?)?;
//! let summary = BatchExporter::new(10)?.export(&chapters, |i| factory.open(i))?;
//!
//! println!("Files written: {}", summary.files_written);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod parse;
