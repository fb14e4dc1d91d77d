//! Testing utilities for Semantix workspace
//!
//! Shared generator doubles, canned model replies and pipeline setup.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use semantix_core::{
    AnalysisPipeline, CompletionRequest, GenerationError, PipelineConfig, RequestPurpose,
    TextGenerator,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Clean topic reply
pub const TOPICS_JSON: &str =
    r#"[{"name":"Cloud services","confidence":0.93},{"name":"Revenue growth","confidence":0.87}]"#;

/// Entity reply wrapped in a json fence
pub const ENTITIES_FENCED: &str = "```json\n[{\"name\":\"Q3\",\"type\":\"date\",\"confidence\":0.82},{\"name\":\"Cloud services\",\"type\":\"concept\",\"confidence\":0.78}]\n```";

/// Segment reply wrapped in prose
pub const SEGMENTS_IN_PROSE: &str = "Here is the structure:\n[{\"id\":\"section-1\",\"title\":\"Results\",\"content\":\"Revenue grew 12%\",\"level\":\"section\",\"parent\":null,\"children\":[\"paragraph-1-1\"]},{\"id\":\"paragraph-1-1\",\"title\":\"Drivers\",\"content\":\"Cloud services\",\"level\":\"paragraph\",\"parent\":\"section-1\",\"children\":[]}]\nHope this helps!";

/// Personality reply missing optional fields
pub const PERSONALITIES_JSON: &str = r#"[{"name":"Cloud Revenue Analyst","description":"Reads growth drivers","focus":["cloud margins","bookings"],"tone":"business","expertise":["SaaS finance"]},{"description":"Second opinion","focus":"n/a"}]"#;

/// Reply that survives no amount of cleaning
pub const GARBAGE: &str = "I'm sorry, I can't help with that.";

/// Generator that answers by request purpose and records every prompt
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    replies: HashMap<RequestPurpose, Result<String, GenerationError>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGenerator {
    /// Empty script; unscripted purposes answer `[]`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Well-formed replies for every purpose
    #[must_use]
    pub fn well_formed() -> Self {
        Self::new()
            .reply(RequestPurpose::Topics, TOPICS_JSON)
            .reply(RequestPurpose::Entities, ENTITIES_FENCED)
            .reply(RequestPurpose::Structure, SEGMENTS_IN_PROSE)
            .reply(RequestPurpose::Personalities, PERSONALITIES_JSON)
    }

    /// Script a text reply
    #[must_use]
    pub fn reply(mut self, purpose: RequestPurpose, text: impl Into<String>) -> Self {
        self.replies.insert(purpose, Ok(text.into()));
        self
    }

    /// Script a failure
    #[must_use]
    pub fn fail(mut self, purpose: RequestPurpose, error: GenerationError) -> Self {
        self.replies.insert(purpose, Err(error));
        self
    }

    /// Requests received so far
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().clone()
    }

    /// Prompt sent for `purpose`, if any
    #[must_use]
    pub fn prompt_for(&self, purpose: RequestPurpose) -> Option<String> {
        self.requests
            .lock()
            .iter()
            .find(|r| r.purpose == purpose)
            .map(|r| r.prompt.clone())
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        let reply = self
            .replies
            .get(&request.purpose)
            .cloned()
            .unwrap_or_else(|| Ok("[]".to_string()));
        self.requests.lock().push(request);
        reply
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Generator whose every call fails with the same error
#[derive(Debug, Clone)]
pub struct FailingGenerator(pub GenerationError);

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GenerationError> {
        Err(self.0.clone())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Pipeline over a shared generator with default config
pub fn pipeline_with(generator: Arc<dyn TextGenerator>) -> AnalysisPipeline {
    AnalysisPipeline::new(generator, PipelineConfig::default())
}
