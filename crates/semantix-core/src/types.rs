//! Core types for Semantix
//!
//! Defines the analysis result model:
//! - Topics and entities with confidence scores
//! - Hierarchical document segments
//! - Personality suggestions
//!
//! Values are stored exactly as the model produced them. Confidence is not
//! clamped on the way in; read it through `clamped_confidence()`.

use serde::{Deserialize, Serialize};

/// Composite analysis result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemanticAnalysis {
    /// Prominent themes, model order
    #[serde(default)]
    pub topics: Vec<Topic>,
    /// Named things extracted from the text
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Flat outline, linked through `parent` / `children`
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl SemanticAnalysis {
    /// Create empty analysis
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.entities.is_empty() && self.segments.is_empty()
    }
}

/// A theme the model judged prominent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Short phrase
    pub name: String,
    /// Model confidence, nominally in `[0, 1]`
    pub confidence: f64,
}

impl Topic {
    /// Create new topic
    #[inline]
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }

    /// Confidence clamped to `[0, 1]`
    #[inline]
    #[must_use]
    pub fn clamped_confidence(&self) -> f64 {
        clamp_confidence(self.confidence)
    }
}

/// A named thing extracted from the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Surface name
    pub name: String,
    /// Free-form label: person, organization, location, date, concept...
    #[serde(rename = "type")]
    pub kind: String,
    /// Model confidence, nominally in `[0, 1]`
    pub confidence: f64,
}

impl Entity {
    /// Create new entity
    #[inline]
    pub fn new(name: impl Into<String>, kind: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            confidence,
        }
    }

    /// Confidence clamped to `[0, 1]`
    #[inline]
    #[must_use]
    pub fn clamped_confidence(&self) -> f64 {
        clamp_confidence(self.confidence)
    }
}

/// Outline depth of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentLevel {
    /// Top-level section
    Section,
    /// Nested section
    Subsection,
    /// Leaf paragraph
    Paragraph,
}

impl SegmentLevel {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Subsection => "subsection",
            Self::Paragraph => "paragraph",
        }
    }
}

/// Node of the model-inferred outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Model-chosen id, e.g. `section-1`
    pub id: String,
    /// Heading
    pub title: String,
    /// Short summary, not the full text
    pub content: String,
    /// Outline depth
    pub level: SegmentLevel,
    /// Containing segment, `None` at top level
    #[serde(default)]
    pub parent: Option<String>,
    /// Contained segment ids (may disagree with `parent` links)
    #[serde(default)]
    pub children: Vec<String>,
}

impl Segment {
    /// Create a segment with no links
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        level: SegmentLevel,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            level,
            parent: None,
            children: Vec::new(),
        }
    }

    /// With parent id
    #[inline]
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// With child ids
    #[inline]
    #[must_use]
    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }
}

/// Register a personality speaks in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Default register
    #[default]
    Academic,
    /// Business register
    Business,
    /// Technical register
    Technical,
    /// Casual register
    Casual,
}

impl Tone {
    /// Parse a tone label, ignoring case and surrounding whitespace
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "academic" => Some(Self::Academic),
            "business" => Some(Self::Business),
            "technical" => Some(Self::Technical),
            "casual" => Some(Self::Casual),
            _ => None,
        }
    }

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Business => "business",
            Self::Technical => "technical",
            Self::Casual => "casual",
        }
    }
}

/// Model-proposed persona for interpreting a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalitySuggestion {
    /// Role name
    pub name: String,
    /// What the persona looks at
    pub description: String,
    /// Focus areas
    pub focus: Vec<String>,
    /// Register
    pub tone: Tone,
    /// Expertise areas
    pub expertise: Vec<String>,
}

#[inline]
fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
