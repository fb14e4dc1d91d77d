//! Derived views over a finished analysis

use crate::types::{Segment, SegmentLevel, SemanticAnalysis};
use std::collections::HashSet;

/// Topics above this clamped confidence become tags
pub const TOPIC_TAG_THRESHOLD: f64 = 0.6;

/// Entities above this clamped confidence become tags
pub const ENTITY_TAG_THRESHOLD: f64 = 0.7;

/// Top-level sections: level `section` and no parent
#[must_use]
pub fn top_level_sections(analysis: &SemanticAnalysis) -> Vec<&Segment> {
    analysis
        .segments
        .iter()
        .filter(|s| s.level == SegmentLevel::Section)
        .filter(|s| s.parent.as_deref().map_or(true, |p| p.trim().is_empty()))
        .collect()
}

/// Confident topic and entity names, first occurrence order, no repeats
#[must_use]
pub fn tags_from_analysis(analysis: &SemanticAnalysis) -> Vec<String> {
    let topics = analysis
        .topics
        .iter()
        .filter(|t| t.clamped_confidence() > TOPIC_TAG_THRESHOLD)
        .map(|t| t.name.as_str());
    let entities = analysis
        .entities
        .iter()
        .filter(|e| e.clamped_confidence() > ENTITY_TAG_THRESHOLD)
        .map(|e| e.name.as_str());

    let mut seen = HashSet::new();
    topics
        .chain(entities)
        .filter(|name| seen.insert(*name))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Entity, Topic};

    #[test]
    fn tags_respect_thresholds_and_dedupe() {
        let analysis = SemanticAnalysis {
            topics: vec![
                Topic::new("Cloud", 0.9),
                Topic::new("Weather", 0.6),
                Topic::new("Revenue", 3.0),
            ],
            entities: vec![
                Entity::new("Cloud", "concept", 0.95),
                Entity::new("Acme", "organization", 0.71),
                Entity::new("Bob", "person", 0.7),
            ],
            segments: vec![],
        };

        assert_eq!(tags_from_analysis(&analysis), vec!["Cloud", "Revenue", "Acme"]);
    }

    #[test]
    fn top_level_sections_skip_nested_and_paragraphs() {
        let analysis = SemanticAnalysis {
            segments: vec![
                Segment::new("s1", "One", "", SegmentLevel::Section),
                Segment::new("s2", "Two", "", SegmentLevel::Section).with_parent("s1"),
                Segment::new("p1", "Para", "", SegmentLevel::Paragraph),
                Segment::new("s3", "Three", "", SegmentLevel::Section).with_parent(""),
            ],
            ..SemanticAnalysis::default()
        };

        let ids: Vec<&str> = top_level_sections(&analysis)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["s1", "s3"]);
    }
}
