//! Domain error types
//!
//! This module defines the error hierarchy for course-tasks.
//! Input and output failures carry the offending path so the operator can
//! fix the file and re-run; nothing here is retried.

use thiserror::Error;

/// Main course-tasks error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum CourseTasksError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Curriculum input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Export destination errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl CourseTasksError {
    /// Process exit code for this error
    ///
    /// Configuration and validation problems map to 2, everything else is fatal (5).
    pub fn exit_code(&self) -> i32 {
        match self {
            CourseTasksError::Configuration(_) | CourseTasksError::Validation(_) => 2,
            _ => 5,
        }
    }
}

/// Errors raised while reading curriculum documents
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// The input file is not a curriculum page (bad JSON, missing `results`,
    /// record without `_class` or `title`)
    #[error("Malformed curriculum document {path}: {message}")]
    MalformedJson { path: String, message: String },
}

/// Errors raised while writing task files
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory does not exist
    #[error("Output directory not found: {0}")]
    DirectoryNotFound(String),

    /// Output path exists but is not a directory
    #[error("Output path is not a directory: {0}")]
    NotADirectory(String),

    /// Output file could not be created
    #[error("Failed to create {path}: {message}")]
    CreateFailed { path: String, message: String },

    /// A row could not be written or flushed
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CourseTasksError {
    fn from(err: toml::de::Error) -> Self {
        CourseTasksError::Configuration(format!("TOML parse error: {err}"))
    }
}
