//! Configuration management for course-tasks.
//!
//! # Overview
//!
//! course-tasks runs without any configuration file. An optional TOML file
//! supports:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `COURSE_TASKS_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [source]
//! host = "https://www.udemy.com/api-2.0"
//! page_size = 1000
//!
//! [export]
//! output_dir = "${HOME}/todoist"
//! batch_size = 10
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use course_tasks::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("course-tasks.toml")?;
//! println!("Batch size: {}", config.export.batch_size);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, CourseTasksConfig, ExportConfig, LoggingConfig, SourceConfig};
