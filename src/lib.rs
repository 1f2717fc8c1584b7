// course-tasks - Curriculum to Todo-List Import Converter
// Copyright (c) 2025 Course Tasks Contributors
// Licensed under the MIT License

//! # course-tasks - Curriculum to Todo-List Import Converter
//!
//! course-tasks turns the flat curriculum export of an online course
//! (chapters followed by their timed lectures, quizzes and practice items)
//! into CSV files ready for import into a todo-list application.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Linking** to the curriculum download for a course
//! - **Loading** one or more downloaded JSON pages
//! - **Parsing** the flat records into chapters owning their parts
//! - **Exporting** chapters into files of a bounded number of chapters
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Parsing and batch export
//! - [`adapters`] - Course platform link and page loading
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use course_tasks::adapters::udemy::load_curriculum;
//! use course_tasks::core::export::{BatchExporter, CsvFileSinkFactory};
//! use course_tasks::core::parse::CurriculumParser;
//! use course_tasks::domain::CourseId;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = load_curriculum(&["curriculum.json"])?;
//! let chapters = CurriculumParser::new().parse(records);
//!
//! let factory = CsvFileSinkFactory::new("out", CourseId::new("1565838")?)?;
//! let summary = BatchExporter::new(10)?.export(&chapters, |i| factory.open(i))?;
//!
//! println!("Wrote {} files", summary.files_written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Layout
//!
//! Every file starts with the 12-column header. Each chapter contributes a
//! top-level task row (priority 3, indent 1) and a blank row, then a child
//! task row (priority 4, indent 2) and a blank row per part. Task content is
//! the title followed by the duration as `H:MM:SS`.
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error type is
//! [`domain::CourseTasksError`]. Nothing is retried: input and output errors
//! abort the run and name the offending path.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
