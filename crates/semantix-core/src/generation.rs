//! Text generation seam
//!
//! The only capability the pipeline needs from a language model:
//! given a prompt and a temperature, produce text. Implementations live
//! outside this crate (HTTP backends, test doubles).

use crate::error::GenerationError;
use async_trait::async_trait;
use std::fmt;

/// What a completion request is for (diagnostics only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestPurpose {
    /// Topic extraction
    Topics,
    /// Entity extraction
    Entities,
    /// Structural segmentation
    Structure,
    /// Personality suggestion
    Personalities,
}

impl RequestPurpose {
    /// Stable lowercase label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Topics => "topics",
            Self::Entities => "entities",
            Self::Structure => "segments",
            Self::Personalities => "personalities",
        }
    }
}

impl fmt::Display for RequestPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single prompt sent to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Full prompt text
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Why the request is made
    pub purpose: RequestPurpose,
}

impl CompletionRequest {
    /// Create new request
    #[inline]
    pub fn new(purpose: RequestPurpose, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            purpose,
        }
    }
}

/// Text-completion capability
///
/// Implementors report transport-level problems as [`GenerationError`]; the
/// text they return is never trusted to be well-formed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete a prompt
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError>;

    /// Backend name for logs
    fn name(&self) -> &str {
        "generator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purpose_labels() {
        assert_eq!(RequestPurpose::Topics.to_string(), "topics");
        assert_eq!(RequestPurpose::Structure.as_str(), "segments");
    }

    #[tokio::test]
    async fn mock_generator_returns_scripted_text() {
        let mut mock = MockTextGenerator::new();
        mock.expect_complete()
            .withf(|req| req.purpose == RequestPurpose::Topics)
            .times(1)
            .returning(|_| Ok("[]".to_string()));

        let out = mock
            .complete(CompletionRequest::new(RequestPurpose::Topics, "p", 0.2))
            .await
            .unwrap();
        assert_eq!(out, "[]");
    }
}
