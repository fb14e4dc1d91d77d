//! Semantix Core - document analysis pipeline
//!
//! Turns plain document text into structured metadata using a
//! text-completion backend as the only source of understanding:
//! - Topics and entities with confidence scores
//! - A hierarchical outline of sections, subsections and paragraphs
//! - Document-specific personality suggestions
//!
//! Model output is untrusted free text. It goes through
//! [`sanitize`] before parsing, and a malformed reply only empties the field
//! it was meant to fill.
//!
//! # Example
//!
//! ```rust,ignore
//! use semantix_core::{AnalysisPipeline, PipelineConfig};
//! use std::sync::Arc;
//!
//! # async fn example(generator: Arc<dyn semantix_core::TextGenerator>) -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = AnalysisPipeline::new(generator, PipelineConfig::new());
//!
//! let analysis = pipeline
//!     .analyze("doc-1", "Quarterly revenue grew 12% driven by cloud services.", Some("Q3 Report"))
//!     .await?;
//!
//! println!("{} topics, {} segments", analysis.topics.len(), analysis.segments.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod generation;
pub mod insights;
pub mod outline;
pub mod pipeline;
pub mod prompts;
pub mod sanitize;
pub mod source;
pub mod text;
pub mod types;

// Re-exports for convenience
pub use error::{AnalysisError, GenerationError, ParseFault, SourceError};
pub use generation::{CompletionRequest, RequestPurpose, TextGenerator};
pub use outline::{DanglingParent, DocumentOutline};
pub use pipeline::{normalize_suggestions, AnalysisPipeline, PipelineConfig};
pub use sanitize::{clean_response_text, sanitize_and_parse};
pub use source::{DocumentSource, InMemoryDocumentSource};
pub use types::{
    Entity, PersonalitySuggestion, Segment, SegmentLevel, SemanticAnalysis, Tone, Topic,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Semantix Core
    pub use crate::{
        AnalysisError, AnalysisPipeline, CompletionRequest, DocumentOutline, GenerationError,
        PersonalitySuggestion, PipelineConfig, SemanticAnalysis, TextGenerator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
