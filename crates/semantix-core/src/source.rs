//! Document source seam
//!
//! The pipeline only needs to turn a document id into plain text. The real
//! store is an external collaborator; `InMemoryDocumentSource` backs tests
//! and the CLI.

use crate::error::SourceError;
use async_trait::async_trait;
use dashmap::DashMap;

/// Loads plain document text by id
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Load the text of a document
    async fn load_document_text(&self, id: &str) -> Result<String, SourceError>;
}

/// Concurrent in-memory document map
#[derive(Debug, Default)]
pub struct InMemoryDocumentSource {
    documents: DashMap<String, String>,
}

impl InMemoryDocumentSource {
    /// Create empty source
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document, returning the previous text
    pub fn insert(&self, id: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.documents.insert(id.into(), text.into())
    }

    /// Remove a document
    pub fn remove(&self, id: &str) -> Option<String> {
        self.documents.remove(id).map(|(_, text)| text)
    }

    /// Number of stored documents
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when no documents are stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentSource for InMemoryDocumentSource {
    async fn load_document_text(&self, id: &str) -> Result<String, SourceError> {
        self.documents
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }
}
