//! Curriculum download link
//!
//! Builds the URL the operator opens (while logged in) to download the flat
//! curriculum of a course as JSON.

use crate::config::SourceConfig;
use crate::domain::ids::CourseId;
use crate::domain::{CourseTasksError, Result};
use url::Url;

/// Default API root
pub const DEFAULT_HOST: &str = "https://www.udemy.com/api-2.0";

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Builder for `subscriber-curriculum-items` links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumLink {
    host: String,
    page_size: u32,
}

impl CurriculumLink {
    /// Create a link builder for an API root and page size
    pub fn new(host: impl Into<String>, page_size: u32) -> Self {
        Self {
            host: host.into(),
            page_size,
        }
    }

    /// Create a link builder from the `[source]` configuration section
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.host.clone(), config.page_size)
    }

    /// Build the download URL for a course
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the host is not a valid URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_tasks::adapters::udemy::CurriculumLink;
    /// use course_tasks::domain::CourseId;
    ///
    /// let url = CurriculumLink::default()
    ///     .build(&CourseId::new("42").unwrap())
    ///     .unwrap();
    /// assert!(url.as_str().ends_with("page=1&page_size=1000"));
    /// ```
    pub fn build(&self, course_id: &CourseId) -> Result<Url> {
        let base = format!(
            "{}/courses/{}/subscriber-curriculum-items",
            self.host.trim_end_matches('/'),
            course_id
        );
        let mut url = Url::parse(&base).map_err(|e| {
            CourseTasksError::Configuration(format!("Invalid source host '{}': {}", self.host, e))
        })?;

        let page_size = self.page_size.to_string();
        let query = [
            ("caching_intent", "True"),
            ("fields[asset]", "title,time_estimation"),
            ("fields[chapter]", "title"),
            ("fields[lecture]", "title,asset"),
            ("fields[practice]", "title"),
            ("fields[quiz]", "title"),
            ("page", "1"),
            ("page_size", page_size.as_str()),
        ];
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        tracing::debug!(course_id = %course_id, url = %url, "Built curriculum link");
        Ok(url)
    }
}

impl Default for CurriculumLink {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PAGE_SIZE)
    }
}
