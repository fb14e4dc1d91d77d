//! Model response sanitization
//!
//! The generation backend has no structured-output mode, so its replies are
//! free text that usually, but not always, holds a JSON document. Cleaning:
//!
//! ```text
//! raw ─► strip ``` / ```json fences ─► trim ─► (not [ or {?) cut to outermost brackets ─► serde_json
//! ```
//!
//! Everything here is pure and deterministic.

use crate::error::ParseFault;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Characters of a raw response kept in diagnostics
pub const DIAGNOSTIC_PREVIEW_CHARS: usize = 200;

static FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*```[ \t]*(?:json)?\s*").expect("fence pattern is valid")
});

/// Strip markdown fences and surrounding prose from a model response
///
/// The result is either empty or starts with `[`/`{`, unless the fence-free
/// text already started with one (in which case it is returned trimmed and
/// otherwise untouched).
#[must_use]
pub fn clean_response_text(raw: &str) -> String {
    let unfenced = strip_fences(raw);
    let trimmed = unfenced.trim();

    let cleaned = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        trimmed.to_string()
    } else {
        recover_embedded_json(trimmed).to_string()
    };

    tracing::debug!(preview = %preview(&cleaned, 100), "cleaned response text");
    cleaned
}

/// Clean a response and deserialize it into `T`
///
/// # Errors
/// - `ParseFault::EmptyPayload` if nothing JSON-like survives cleaning
/// - `ParseFault::Syntax` if the cleaned text is not valid JSON
/// - `ParseFault::Shape` if it is valid JSON of the wrong structure
pub fn sanitize_and_parse<T: DeserializeOwned>(raw: &str) -> Result<T, ParseFault> {
    let cleaned = clean_response_text(raw);
    if cleaned.is_empty() {
        return Err(ParseFault::EmptyPayload);
    }
    serde_json::from_str(&cleaned).map_err(|e| ParseFault::from_json(&e))
}

/// Clean a response and parse it as an untyped JSON value
///
/// # Errors
/// Same as [`sanitize_and_parse`], minus shape faults.
pub fn sanitize_to_value(raw: &str) -> Result<Value, ParseFault> {
    sanitize_and_parse::<Value>(raw)
}

/// First `max_chars` characters of `text`, on a char boundary
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Remove fence markers until none are left
///
/// Removing one marker can splice stray backticks into a new one.
fn strip_fences(raw: &str) -> String {
    let mut text = raw.to_string();
    while FENCE.is_match(&text) {
        text = FENCE.replace_all(&text, "").into_owned();
    }
    text
}

/// Slice from the first `[`/`{` to the last `]`/`}`
fn recover_embedded_json(text: &str) -> &str {
    let Some(start) = text.find(['[', '{']) else {
        return "";
    };
    match text.rfind([']', '}']) {
        Some(end) if end >= start => &text[start..=end],
        _ => &text[start..],
    }
}
