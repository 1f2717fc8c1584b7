//! Curriculum tree model
//!
//! A course is an ordered list of [`Chapter`]s, each owning an ordered list
//! of [`Part`]s. Both are built once by the parser and read-only afterwards.

use super::duration::format_duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A leaf work item (lecture, quiz, practice...)
///
/// # Examples
///
/// ```
/// use course_tasks::domain::curriculum::Part;
///
/// let part = Part::new("Ownership", 125);
/// assert_eq!(part.to_string(), "Ownership 0:02:05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    title: String,
    duration_seconds: u64,
}

impl Part {
    /// Creates a new part
    pub fn new(title: impl Into<String>, duration_seconds: u64) -> Self {
        Self {
            title: title.into(),
            duration_seconds,
        }
    }

    /// Part title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Estimated duration in seconds
    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title, format_duration(self.duration_seconds))
    }
}

/// A group of parts
///
/// The chapter duration is derived from its parts on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    title: String,
    parts: Vec<Part>,
}

impl Chapter {
    /// Creates a chapter with no parts
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parts: Vec::new(),
        }
    }

    /// Creates a chapter with the given parts
    pub fn with_parts(title: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            title: title.into(),
            parts,
        }
    }

    /// Appends a part, keeping source order
    pub(crate) fn push_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Chapter title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Parts in source order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Sum of all part durations, 0 for an empty chapter
    pub fn duration_seconds(&self) -> u64 {
        self.parts.iter().map(Part::duration_seconds).sum()
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.title,
            format_duration(self.duration_seconds())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chapter_duration_is_zero() {
        let chapter = Chapter::new("Introduction");
        assert!(chapter.parts().is_empty());
        assert_eq!(chapter.duration_seconds(), 0);
        assert_eq!(chapter.to_string(), "Introduction 0:00:00");
    }

    #[test]
    fn test_chapter_duration_sums_parts() {
        let chapter = Chapter::with_parts(
            "Traits",
            vec![Part::new("Intro", 60), Part::new("Generics", 3600), Part::new("Quiz", 0)],
        );
        assert_eq!(chapter.duration_seconds(), 3660);
        assert_eq!(chapter.to_string(), "Traits 1:01:00");
    }

    #[test]
    fn test_duration_recomputed_after_push() {
        let mut chapter = Chapter::new("Async");
        chapter.push_part(Part::new("Futures", 100));
        assert_eq!(chapter.duration_seconds(), 100);
        chapter.push_part(Part::new("Pinning", 25));
        assert_eq!(chapter.duration_seconds(), 125);
        assert_eq!(chapter.parts()[1].title(), "Pinning");
    }

    #[test]
    fn test_part_display() {
        let part = Part::new("Lifetimes", 59);
        assert_eq!(part.title(), "Lifetimes");
        assert_eq!(part.duration_seconds(), 59);
        assert_eq!(part.to_string(), "Lifetimes 0:00:59");
    }
}
