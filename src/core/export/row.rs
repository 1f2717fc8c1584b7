//! Task import row schema
//!
//! The destination todo application imports a fixed 12-column CSV layout.
//! Only TYPE, CONTENT, PRIORITY, INDENT and DURATION are filled in here; the
//! remaining columns are left empty for the application to populate.

use crate::domain::curriculum::{Chapter, Part};
use std::fmt;

/// Column headers in file order
pub const COLUMNS: [&str; 12] = [
    "TYPE",
    "CONTENT",
    "DESCRIPTION",
    "PRIORITY",
    "INDENT",
    "AUTHOR",
    "RESPONSIBLE",
    "DATE",
    "DATE_LANG",
    "TIMEZONE",
    "DURATION",
    "DURATION_UNIT",
];

/// Task priority as understood by the destination application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    /// Numeric value written to the PRIORITY column
    pub fn value(self) -> u8 {
        match self {
            Priority::P1 => 1,
            Priority::P2 => 2,
            Priority::P3 => 3,
            Priority::P4 => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Nesting level hint; level 1 is a top-level task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    I1,
    I2,
    I3,
    I4,
}

impl Indent {
    /// Numeric value written to the INDENT column
    pub fn value(self) -> u8 {
        match self {
            Indent::I1 => 1,
            Indent::I2 => 2,
            Indent::I3 => 3,
            Indent::I4 => 4,
        }
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Value of the TYPE column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowType {
    Task,
}

impl RowType {
    /// Text written to the TYPE column
    pub fn as_str(self) -> &'static str {
        match self {
            RowType::Task => "task",
        }
    }
}

/// One row of an import file
///
/// A row with every field unset is the blank separator row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskRow {
    pub kind: Option<RowType>,
    pub content: String,
    pub priority: Option<Priority>,
    pub indent: Option<Indent>,
    pub duration: Option<u64>,
}

impl TaskRow {
    /// Top-level task for a chapter
    pub fn chapter(chapter: &Chapter) -> Self {
        Self {
            kind: Some(RowType::Task),
            content: chapter.to_string(),
            priority: Some(Priority::P3),
            indent: Some(Indent::I1),
            duration: Some(chapter.duration_seconds()),
        }
    }

    /// Child task for a part
    pub fn part(part: &Part) -> Self {
        Self {
            kind: Some(RowType::Task),
            content: part.to_string(),
            priority: Some(Priority::P4),
            indent: Some(Indent::I2),
            duration: Some(part.duration_seconds()),
        }
    }

    /// Separator row with every column empty
    pub fn blank() -> Self {
        Self::default()
    }

    /// Whether this is a separator row
    pub fn is_blank(&self) -> bool {
        *self == Self::blank()
    }

    /// Column values in [`COLUMNS`] order
    pub fn to_record(&self) -> [String; 12] {
        let opt = |value: Option<String>| value.unwrap_or_default();
        [
            opt(self.kind.map(|k| k.as_str().to_string())),
            self.content.clone(),
            String::new(),
            opt(self.priority.map(|p| p.to_string())),
            opt(self.indent.map(|i| i.to_string())),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            opt(self.duration.map(|d| d.to_string())),
            String::new(),
        ]
    }
}
