//! Result type alias for course-tasks

use super::errors::CourseTasksError;

/// Result type alias for course-tasks operations
///
/// # Examples
///
/// ```
/// use course_tasks::domain::result::Result;
/// use course_tasks::domain::errors::CourseTasksError;
///
/// fn failing_function() -> Result<()> {
///     Err(CourseTasksError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CourseTasksError>;
