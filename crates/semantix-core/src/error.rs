//! Error types for Semantix Core
//!
//! Provides error handling for:
//! - Text generation failures (transport, auth, quota, timeouts)
//! - Response parse faults (recovered locally by the pipeline)
//! - Document source lookups
//! - Pipeline-level failures surfaced to callers

/// Main pipeline error type
///
/// Only generation failures and missing input reach the caller. Malformed
/// model output never does; see [`ParseFault`].
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Required input missing
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The generation capability failed
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Document could not be loaded
    #[error("document source error: {0}")]
    Source(#[from] SourceError),
}

impl AnalysisError {
    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Generation(err) => err.is_retryable(),
            Self::InvalidInput(_) | Self::Source(_) => false,
        }
    }

    /// Check if error was caused by the caller
    #[inline]
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::Source(SourceError::NotFound(_))
        )
    }
}

/// Errors raised by a [`TextGenerator`](crate::generation::TextGenerator)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Network-level failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Credentials rejected
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Quota or rate limit hit
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Backend answered with a non-success status
    #[error("generation backend unavailable (status {status}): {message}")]
    Unavailable {
        /// HTTP status code, 0 if unknown
        status: u16,
        /// Backend message
        message: String,
    },

    /// Backend answered but the envelope had no completion text
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),

    /// Request exceeded its time budget
    #[error("generation timed out after {after_ms}ms")]
    Timeout {
        /// Elapsed budget in milliseconds
        after_ms: u64,
    },
}

impl GenerationError {
    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::RateLimited(_) | Self::Unavailable { .. } | Self::Timeout { .. }
        )
    }
}

/// Why a model response could not be turned into the expected value
///
/// Recovered locally: the affected field degrades to an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFault {
    /// Nothing JSON-like left after cleaning
    #[error("response contained no JSON payload")]
    EmptyPayload,

    /// Cleaned text is not valid JSON
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        /// Line of the failure
        line: usize,
        /// Column of the failure
        column: usize,
        /// serde_json message
        message: String,
    },

    /// Valid JSON with the wrong structure
    #[error("unexpected shape: {0}")]
    Shape(String),
}

impl ParseFault {
    pub(crate) fn from_json(err: &serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::Shape(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => Self::Syntax {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
        }
    }
}

/// Document source errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// No document with this id
    #[error("document not found: {0}")]
    NotFound(String),

    /// Store could not be reached
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_error_display() {
        let err = AnalysisError::InvalidInput("content".to_string());
        assert!(err.to_string().contains("invalid input"));
    }

    #[test]
    fn generation_error_is_retryable() {
        assert!(GenerationError::Transport("reset".into()).is_retryable());
        assert!(GenerationError::Timeout { after_ms: 10 }.is_retryable());
        assert!(GenerationError::RateLimited("slow down".into()).is_retryable());
        assert!(!GenerationError::Authentication("bad key".into()).is_retryable());
        assert!(!GenerationError::InvalidResponse("no choices".into()).is_retryable());
    }

    #[test]
    fn analysis_error_wraps_generation() {
        let err: AnalysisError = GenerationError::Timeout { after_ms: 1500 }.into();
        assert!(err.is_retryable());
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("1500ms"));
    }

    #[test]
    fn missing_document_is_client_error() {
        let err: AnalysisError = SourceError::NotFound("doc-1".into()).into();
        assert!(err.is_client_error());
        assert!(!err.is_retryable());
    }

    #[test]
    fn parse_fault_classifies_serde_errors() {
        let syntax = serde_json::from_str::<Vec<u32>>("[1, 2").unwrap_err();
        assert!(matches!(ParseFault::from_json(&syntax), ParseFault::Syntax { .. }));

        let shape = serde_json::from_str::<Vec<u32>>(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(ParseFault::from_json(&shape), ParseFault::Shape(_)));
    }
}
