//! Domain models and types for course-tasks.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Curriculum tree** ([`Chapter`], [`Part`])
//! - **Input records** ([`CurriculumItem`], [`CurriculumPage`])
//! - **Strongly-typed identifiers** ([`CourseId`])
//! - **Error types** ([`CourseTasksError`], [`InputError`], [`OutputError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CourseTasksError>`]:
//!
//! ```rust
//! use course_tasks::domain::{CourseId, CourseTasksError, Result};
//!
//! fn example() -> Result<CourseId> {
//!     CourseId::new("1565838").map_err(CourseTasksError::Validation)
//! }
//! ```

pub mod curriculum;
pub mod duration;
pub mod errors;
pub mod ids;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use curriculum::{Chapter, Part};
pub use duration::format_duration;
pub use errors::{CourseTasksError, InputError, OutputError};
pub use ids::CourseId;
pub use record::{Asset, CurriculumItem, CurriculumPage, ItemClass};
pub use result::Result;
