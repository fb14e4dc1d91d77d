//! Plain-text preparation for editor content
//!
//! Editors hand over HTML; prompts want plain text.

use crate::prompts::{truncate_chars, EMPTY_DOCUMENT_PLACEHOLDER};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Characters a caller sends to the analysis service
pub const CLIENT_CONTENT_LIMIT: usize = 10_000;

/// Default summary length
pub const SUMMARY_LENGTH: usize = 200;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("space pattern is valid"));

/// Strip markup, decode common entities, collapse whitespace
#[must_use]
pub fn extract_plain_text(html: &str) -> String {
    let without_tags = TAG.replace_all(html, " ");
    let decoded = decode_entities(&without_tags);
    WHITESPACE.replace_all(&decoded, " ").trim().to_string()
}

/// Plain-text summary of at most `max_len` characters plus an ellipsis
#[must_use]
pub fn document_summary(content: &str, max_len: usize) -> String {
    let plain = extract_plain_text(content);
    if plain.chars().count() <= max_len {
        return plain;
    }
    format!("{}...", truncate_chars(&plain, max_len))
}

/// Caller-side preparation before sending text for analysis
///
/// Empty text becomes the placeholder sentence; long text is cut to
/// [`CLIENT_CONTENT_LIMIT`] characters.
#[must_use]
pub fn prepare_for_analysis(content: &str) -> Cow<'_, str> {
    if content.trim().is_empty() {
        return Cow::Borrowed(EMPTY_DOCUMENT_PLACEHOLDER);
    }
    Cow::Borrowed(truncate_chars(content, CLIENT_CONTENT_LIMIT))
}

fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    // &amp; last so "&amp;lt;" stays "&lt;".
    Cow::Owned(
        text.replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let html = "<h1>Q3 Report</h1>\n<p>Revenue   grew <b>12%</b>.</p>";
        assert_eq!(extract_plain_text(html), "Q3 Report Revenue grew 12% .");
    }

    #[test]
    fn decodes_common_entities() {
        assert_eq!(
            extract_plain_text("<p>R&amp;D &lt;core&gt;&nbsp;team&#39;s &quot;plan&quot;</p>"),
            "R&D <core> team's \"plan\""
        );
        assert_eq!(extract_plain_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn summary_truncates_with_ellipsis() {
        assert_eq!(document_summary("<p>short</p>", SUMMARY_LENGTH), "short");
        assert_eq!(document_summary("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn prepare_substitutes_and_truncates() {
        assert_eq!(prepare_for_analysis("  "), EMPTY_DOCUMENT_PLACEHOLDER);

        let long = "x".repeat(CLIENT_CONTENT_LIMIT + 50);
        assert_eq!(prepare_for_analysis(&long).chars().count(), CLIENT_CONTENT_LIMIT);
        assert_eq!(prepare_for_analysis("hello"), "hello");
    }
}
