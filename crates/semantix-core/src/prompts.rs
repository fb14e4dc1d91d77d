//! Prompt construction for the generation backend
//!
//! Every prompt ends with an instruction to emit a bare JSON array; the
//! sanitizer still copes when the model ignores it.

use crate::types::SemanticAnalysis;

/// Characters of document content embedded in analysis prompts
pub const ANALYSIS_CONTENT_LIMIT: usize = 8_000;

/// Characters of document content embedded in the personality prompt
pub const SUGGESTION_SAMPLE_LIMIT: usize = 4_000;

/// Sampling temperature for topic, entity and structure requests
pub const ANALYSIS_TEMPERATURE: f32 = 0.2;

/// Sampling temperature for personality suggestions
pub const SUGGESTION_TEMPERATURE: f32 = 0.7;

/// Stand-in for content that trims to nothing
pub const EMPTY_DOCUMENT_PLACEHOLDER: &str = "This document is empty.";

/// Title used in prompts when the caller gave none
pub const DEFAULT_TITLE: &str = "Untitled";

/// Sample text used when suggesting without document content
pub const NO_CONTENT_SAMPLE: &str = "No content provided";

const RAW_JSON_ONLY: &str =
    "Return ONLY the JSON array without any markdown formatting or explanation.";

/// Prefix of `text` holding at most `limit` characters
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Topic extraction prompt (5-8 topics)
#[must_use]
pub fn topics_prompt(title: &str, content: &str) -> String {
    format!(
        "Analyze the following document and extract the top 5-8 main topics or themes.\n\
         For each topic, provide a confidence score between 0 and 1.\n\
         Format the response as a JSON array of objects with \"name\" and \"confidence\" properties.\n\
         {RAW_JSON_ONLY}\n\
         \n\
         {}",
        document_block(title, content)
    )
}

/// Entity extraction prompt (10-15 entities)
#[must_use]
pub fn entities_prompt(title: &str, content: &str) -> String {
    format!(
        "Analyze the following document and extract key entities such as people, organizations,\n\
         locations, dates, and important concepts.\n\
         For each entity, provide its type and a confidence score between 0 and 1.\n\
         Format the response as a JSON array of objects with \"name\", \"type\", and \"confidence\" properties.\n\
         Limit to 10-15 most important entities.\n\
         {RAW_JSON_ONLY}\n\
         \n\
         {}",
        document_block(title, content)
    )
}

/// Structural segmentation prompt
#[must_use]
pub fn structure_prompt(title: &str, content: &str) -> String {
    format!(
        "Analyze the following document and create a hierarchical structure of its content.\n\
         Identify sections, subsections, and their relationships.\n\
         For each segment, provide:\n\
         - id: a unique identifier (e.g., \"section-1\", \"subsection-1-1\")\n\
         - title: the heading or title of the segment\n\
         - content: a brief summary of the segment's content\n\
         - level: \"section\", \"subsection\", or \"paragraph\"\n\
         - parent: the id of the parent segment (null for top-level segments)\n\
         - children: an array of ids of child segments\n\
         \n\
         Format the response as a JSON array of these segment objects.\n\
         {RAW_JSON_ONLY}\n\
         \n\
         {}",
        document_block(title, content)
    )
}

/// Personality suggestion prompt built from a prior analysis
///
/// `content_sample` should already be truncated; `None` embeds
/// [`NO_CONTENT_SAMPLE`].
#[must_use]
pub fn personalities_prompt(
    analysis: &SemanticAnalysis,
    content_sample: Option<&str>,
    title: &str,
) -> String {
    let topics = analysis
        .topics
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let entities = analysis
        .entities
        .iter()
        .map(|e| format!("{} ({})", e.name, e.kind))
        .collect::<Vec<_>>()
        .join(", ");
    let sample = content_sample.unwrap_or(NO_CONTENT_SAMPLE);

    format!(
        "You are an expert at creating AI personalities that are HIGHLY SPECIFIC to document content.\n\
         \n\
         Analyze this document carefully and create 2 AI personalities that would be PERFECTLY TAILORED\n\
         to analyze this specific document. Each personality should directly address the main themes,\n\
         topics, and entities found in the document.\n\
         \n\
         Document Title: {title}\n\
         Document Topics: {topics}\n\
         Document Entities: {entities}\n\
         \n\
         Document Content Sample:\n\
         {sample}\n\
         \n\
         For each personality:\n\
         1. Create a NAME that reflects a specific role relevant to the document's domain\n\
         2. Write a DESCRIPTION that mentions specific themes from the document\n\
         3. List FOCUS AREAS (3-5) that directly reference concepts, methodologies, or frameworks mentioned in the document\n\
         4. Choose a TONE (academic, business, technical, or casual) that best matches the document's style\n\
         5. List EXPERTISE AREAS (3-5) that would be most valuable for analyzing this specific document\n\
         \n\
         IMPORTANT: Each personality must be HIGHLY SPECIFIC to this document. Avoid generic personalities.\n\
         \n\
         Format the response as a JSON array of objects with \"name\", \"description\", \"focus\",\n\
         \"tone\", and \"expertise\" properties.\n\
         {RAW_JSON_ONLY}"
    )
}

fn document_block(title: &str, content: &str) -> String {
    format!("Document Title: {title}\nDocument Content: {content}")
}
