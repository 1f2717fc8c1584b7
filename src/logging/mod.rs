//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr
//! - Configurable log levels (`--log-level`, config file, or `RUST_LOG`)
//! - Optional local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use course_tasks::logging::init_logging;
//! use course_tasks::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export run
///
/// # Example
///
/// ```no_run
/// use course_tasks::log_export_start;
/// use course_tasks::domain::CourseId;
///
/// let course_id = CourseId::new("1565838").unwrap();
/// log_export_start!(&course_id, 3, 10);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($course_id:expr, $inputs:expr, $batch_size:expr) => {
        tracing::info!(
            course_id = %$course_id,
            inputs = $inputs,
            batch_size = $batch_size,
            "Starting export"
        );
    };
}

/// Log a closed output batch
///
/// # Example
///
/// ```no_run
/// use course_tasks::log_batch_written;
///
/// log_batch_written!(0, 10, 84);
/// ```
#[macro_export]
macro_rules! log_batch_written {
    ($index:expr, $chapters:expr, $rows:expr) => {
        tracing::info!(
            file_index = $index,
            chapters = $chapters,
            rows = $rows,
            "Batch written"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use course_tasks::log_error_with_context;
/// use course_tasks::domain::CourseTasksError;
///
/// let error = CourseTasksError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
