//! Curriculum export record model
//!
//! Mirrors the JSON page returned by the course platform's
//! `subscriber-curriculum-items` endpoint. Only the fields the tool needs are
//! modelled; everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

/// Record discriminator (`_class` in the payload)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemClass {
    /// Starts a new chapter
    Chapter,
    /// Video or article lecture
    Lecture,
    /// Quiz
    Quiz,
    /// Practice test or coding exercise
    Practice,
    /// Any other leaf kind
    #[serde(other)]
    Other,
}

/// Asset attached to a lecture
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Estimated time in seconds
    #[serde(default)]
    pub time_estimation: Option<u64>,
}

/// One flat curriculum record
///
/// # Examples
///
/// ```
/// use course_tasks::domain::record::{CurriculumItem, ItemClass};
///
/// let item: CurriculumItem = serde_json::from_str(
///     r#"{"_class": "lecture", "title": "L1", "asset": {"time_estimation": 125}}"#,
/// ).unwrap();
/// assert_eq!(item.class, ItemClass::Lecture);
/// assert_eq!(item.duration_seconds(), 125);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumItem {
    /// Record kind
    #[serde(rename = "_class")]
    pub class: ItemClass,

    /// Record title
    pub title: String,

    /// Lecture asset, absent for chapters and most quizzes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
}

impl CurriculumItem {
    /// Creates a chapter marker record
    pub fn chapter(title: impl Into<String>) -> Self {
        Self {
            class: ItemClass::Chapter,
            title: title.into(),
            asset: None,
        }
    }

    /// Creates a lecture record with a time estimation
    pub fn lecture(title: impl Into<String>, time_estimation: u64) -> Self {
        Self {
            class: ItemClass::Lecture,
            title: title.into(),
            asset: Some(Asset {
                time_estimation: Some(time_estimation),
            }),
        }
    }

    /// Whether this record begins a new chapter
    pub fn is_chapter_marker(&self) -> bool {
        self.class == ItemClass::Chapter
    }

    /// Estimated duration, 0 when the record carries no estimate
    pub fn duration_seconds(&self) -> u64 {
        self.asset
            .as_ref()
            .and_then(|asset| asset.time_estimation)
            .unwrap_or(0)
    }
}

/// One downloaded page of curriculum records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumPage {
    /// Total record count reported by the platform
    #[serde(default)]
    pub count: Option<u64>,

    /// Link to the next page, if the download was paginated
    #[serde(default)]
    pub next: Option<String>,

    /// Flat records in curriculum order
    pub results: Vec<CurriculumItem>,
}
