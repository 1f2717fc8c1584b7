//! Downloaded curriculum pages
//!
//! Each input file holds one JSON page with a `results` array. Pages are
//! concatenated in the order given, so a paginated download can be passed as
//! several files.

use crate::domain::errors::InputError;
use crate::domain::record::{CurriculumItem, CurriculumPage};
use crate::domain::Result;
use std::fs;
use std::path::Path;

/// Read and parse a single curriculum page
///
/// # Errors
///
/// Returns an [`InputError`] naming the file if it cannot be read or is not a
/// valid curriculum page.
pub fn read_page(path: impl AsRef<Path>) -> Result<CurriculumPage> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| InputError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let page: CurriculumPage =
        serde_json::from_str(&contents).map_err(|e| InputError::MalformedJson {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(page)
}

/// Load and concatenate the records of several pages
///
/// # Examples
///
/// ```no_run
/// use course_tasks::adapters::udemy::load_curriculum;
///
/// let records = load_curriculum(&["page1.json", "page2.json"]).unwrap();
/// println!("{} records", records.len());
/// ```
pub fn load_curriculum<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<CurriculumItem>> {
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let page = read_page(path)?;

        tracing::info!(
            path = %path.display(),
            records = page.results.len(),
            reported_count = ?page.count,
            "Loaded curriculum page"
        );

        if let Some(next) = page.next.as_deref() {
            tracing::warn!(
                path = %path.display(),
                next = %next,
                "Curriculum page is paginated; download the next page and pass it as another input file"
            );
        }

        records.extend(page.results);
    }

    Ok(records)
}
