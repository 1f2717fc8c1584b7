//! Link command implementation
//!
//! Prints the curriculum download link for a course. No request is made;
//! the operator opens the link in a logged-in browser and saves the JSON.

use crate::adapters::udemy::CurriculumLink;
use crate::config::CourseTasksConfig;
use crate::domain::CourseId;
use clap::Args;

/// Arguments for the link command
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Override the number of records requested per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl LinkArgs {
    /// Build the link from configuration and CLI overrides
    pub fn link(&self, config: &CourseTasksConfig) -> CurriculumLink {
        let page_size = self.page_size.unwrap_or(config.source.page_size);
        CurriculumLink::new(config.source.host.clone(), page_size)
    }

    /// Execute the link command
    pub fn execute(&self, course_id: &CourseId, config: &CourseTasksConfig) -> anyhow::Result<i32> {
        tracing::info!(course_id = %course_id, "Building curriculum link");

        if let Some(size) = self.page_size {
            if !(1..=10_000).contains(&size) {
                eprintln!("Invalid page size: {size}. Must be between 1 and 10000");
                return Ok(2);
            }
        }

        let url = match self.link(config).build(course_id) {
            Ok(url) => url,
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to build curriculum link");
                eprintln!("Error: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("{url}");
        eprintln!();
        eprintln!("Open the link while logged in and save the response as JSON, then run:");
        eprintln!("  course-tasks -c {course_id} todoist -f <saved.json> -o <output dir>");
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_uses_config_page_size() {
        let mut config = CourseTasksConfig::default();
        config.source.page_size = 250;
        let args = LinkArgs { page_size: None };
        assert_eq!(args.link(&config), CurriculumLink::new(config.source.host.clone(), 250));
    }

    #[test]
    fn test_link_cli_override() {
        let config = CourseTasksConfig::default();
        let args = LinkArgs {
            page_size: Some(20),
        };
        let url = args.link(&config).build(&CourseId::new("9").unwrap()).unwrap();
        assert!(url.as_str().ends_with("page_size=20"));
    }

    #[test]
    fn test_execute_rejects_bad_page_size() {
        let args = LinkArgs {
            page_size: Some(0),
        };
        let code = args
            .execute(&CourseId::new("9").unwrap(), &CourseTasksConfig::default())
            .unwrap();
        assert_eq!(code, 2);
    }
}
