//! Flat record to curriculum tree grouping
//!
//! The platform delivers the curriculum as a flat, ordered list in which a
//! chapter marker is followed by the leaf items that belong to it. The parser
//! folds that list into [`Chapter`]s in a single left-to-right pass.

use crate::domain::curriculum::{Chapter, Part};
use crate::domain::record::CurriculumItem;

/// Groups flat curriculum records into chapters
#[derive(Debug, Clone, Copy, Default)]
pub struct CurriculumParser;

impl CurriculumParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse records into chapters, preserving source order
    ///
    /// Every leaf record is attached to the nearest preceding chapter marker.
    /// Leaf records that appear before the first marker are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_tasks::core::parse::CurriculumParser;
    /// use course_tasks::domain::CurriculumItem;
    ///
    /// let chapters = CurriculumParser::new().parse(vec![
    ///     CurriculumItem::chapter("C1"),
    ///     CurriculumItem::lecture("L1", 125),
    ///     CurriculumItem::chapter("C2"),
    /// ]);
    /// assert_eq!(chapters.len(), 2);
    /// assert_eq!(chapters[0].duration_seconds(), 125);
    /// assert!(chapters[1].parts().is_empty());
    /// ```
    pub fn parse<I>(&self, records: I) -> Vec<Chapter>
    where
        I: IntoIterator<Item = CurriculumItem>,
    {
        let mut chapters: Vec<Chapter> = Vec::new();
        let mut orphans = 0usize;

        for record in records {
            if record.is_chapter_marker() {
                chapters.push(Chapter::new(record.title));
                continue;
            }

            let part = Part::new(record.title.as_str(), record.duration_seconds());
            match chapters.last_mut() {
                Some(current) => current.push_part(part),
                None => orphans += 1,
            }
        }

        if orphans > 0 {
            tracing::debug!(
                dropped = orphans,
                "Dropped records preceding the first chapter marker"
            );
        }

        tracing::debug!(
            chapters = chapters.len(),
            parts = chapters.iter().map(|c| c.parts().len()).sum::<usize>(),
            "Parsed curriculum"
        );

        chapters
    }
}

/// Convenience wrapper around [`CurriculumParser::parse`]
pub fn parse_curriculum<I>(records: I) -> Vec<Chapter>
where
    I: IntoIterator<Item = CurriculumItem>,
{
    CurriculumParser::new().parse(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{ItemClass, CurriculumItem};

    fn quiz(title: &str) -> CurriculumItem {
        CurriculumItem {
            class: ItemClass::Quiz,
            title: title.to_string(),
            asset: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_curriculum(Vec::new()).is_empty());
    }

    #[test]
    fn test_no_chapter_marker_yields_nothing() {
        let chapters = parse_curriculum(vec![
            CurriculumItem::lecture("L1", 10),
            quiz("Q1"),
            CurriculumItem::lecture("L2", 20),
        ]);
        assert!(chapters.is_empty());
    }

    #[test]
    fn test_leading_orphans_are_dropped() {
        let chapters = parse_curriculum(vec![
            CurriculumItem::lecture("Orphan", 99),
            CurriculumItem::chapter("C1"),
            CurriculumItem::lecture("L1", 10),
        ]);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title(), "C1");
        assert_eq!(chapters[0].parts().len(), 1);
        assert_eq!(chapters[0].parts()[0].title(), "L1");
        assert_eq!(chapters[0].duration_seconds(), 10);
    }

    #[test]
    fn test_parts_attach_to_nearest_preceding_chapter() {
        let chapters = parse_curriculum(vec![
            CurriculumItem::chapter("C1"),
            CurriculumItem::lecture("L1", 60),
            quiz("Q1"),
            CurriculumItem::chapter("C2"),
            CurriculumItem::lecture("L2", 30),
            CurriculumItem::lecture("L3", 30),
        ]);

        assert_eq!(chapters.len(), 2);
        let titles: Vec<&str> = chapters[0].parts().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["L1", "Q1"]);
        assert_eq!(chapters[0].duration_seconds(), 60);

        let titles: Vec<&str> = chapters[1].parts().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["L2", "L3"]);
        assert_eq!(chapters[1].duration_seconds(), 60);
    }

    #[test]
    fn test_consecutive_markers_give_empty_chapters() {
        let chapters = parse_curriculum(vec![
            CurriculumItem::chapter("C1"),
            CurriculumItem::chapter("C2"),
            CurriculumItem::chapter("C3"),
        ]);
        assert_eq!(chapters.len(), 3);
        assert!(chapters.iter().all(|c| c.parts().is_empty()));
        assert!(chapters.iter().all(|c| c.duration_seconds() == 0));
    }

    #[test]
    fn test_missing_estimate_defaults_to_zero() {
        let chapters = parse_curriculum(vec![CurriculumItem::chapter("C1"), quiz("Q1")]);
        assert_eq!(chapters[0].parts()[0].duration_seconds(), 0);
    }
}
