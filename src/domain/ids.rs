//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course identifier newtype wrapper
///
/// The identifier ends up both in a URL path segment and in output file
/// names, so only ASCII alphanumerics, `-` and `_` are accepted.
///
/// # Examples
///
/// ```
/// use course_tasks::domain::ids::CourseId;
/// use std::str::FromStr;
///
/// let course_id = CourseId::from_str("1565838").unwrap();
/// assert_eq!(course_id.as_str(), "1565838");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a new CourseId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(CourseId)` if the ID is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Course ID cannot be empty".to_string());
        }

        if let Some(bad) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(format!(
                "Invalid character '{bad}' in course ID '{id}'. Only letters, digits, '-' and '_' are allowed"
            ));
        }

        Ok(Self(id))
    }

    /// Returns the course ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
