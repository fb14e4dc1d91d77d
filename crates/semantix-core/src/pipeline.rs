//! Document analysis pipeline
//!
//! Turns `(document id, text, title)` into a [`SemanticAnalysis`]:
//!
//! ```text
//!            ┌─► topics prompt    ─► complete ─► sanitize ─► Vec<Topic>   ─┐
//! content ───┼─► entities prompt  ─► complete ─► sanitize ─► Vec<Entity>  ─┼─► SemanticAnalysis
//!            └─► structure prompt ─► complete ─► sanitize ─► Vec<Segment> ─┘
//! ```
//!
//! The three requests run concurrently. A request that fails at the transport
//! level fails the whole call; a response that cannot be parsed only empties
//! its own field.

use crate::error::{AnalysisError, GenerationError};
use crate::generation::{CompletionRequest, RequestPurpose, TextGenerator};
use crate::prompts::{
    self, ANALYSIS_CONTENT_LIMIT, ANALYSIS_TEMPERATURE, DEFAULT_TITLE, EMPTY_DOCUMENT_PLACEHOLDER,
    SUGGESTION_SAMPLE_LIMIT, SUGGESTION_TEMPERATURE,
};
use crate::sanitize::{preview, sanitize_and_parse, sanitize_to_value, DIAGNOSTIC_PREVIEW_CHARS};
use crate::source::DocumentSource;
use crate::types::{PersonalitySuggestion, SemanticAnalysis, Tone};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Name used when a suggestion has none
pub const UNNAMED_PERSONALITY: &str = "Unnamed Personality";

/// Description used when a suggestion has none
pub const MISSING_DESCRIPTION: &str = "No description provided";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Budget for each outbound request
    pub request_timeout: Duration,
    /// Characters of content embedded in analysis prompts
    pub content_limit: usize,
    /// Characters of content embedded in the suggestion prompt
    pub sample_limit: usize,
    /// Temperature for analysis requests
    pub analysis_temperature: f32,
    /// Temperature for suggestion requests
    pub suggestion_temperature: f32,
}

impl PipelineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With per-request timeout
    #[inline]
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// With analysis content limit
    #[inline]
    #[must_use]
    pub fn with_content_limit(mut self, limit: usize) -> Self {
        self.content_limit = limit;
        self
    }

    /// With suggestion sample limit
    #[inline]
    #[must_use]
    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            content_limit: ANALYSIS_CONTENT_LIMIT,
            sample_limit: SUGGESTION_SAMPLE_LIMIT,
            analysis_temperature: ANALYSIS_TEMPERATURE,
            suggestion_temperature: SUGGESTION_TEMPERATURE,
        }
    }
}

/// Stateless analysis pipeline over a [`TextGenerator`]
#[derive(Clone)]
pub struct AnalysisPipeline {
    generator: Arc<dyn TextGenerator>,
    config: PipelineConfig,
}

impl fmt::Debug for AnalysisPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisPipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AnalysisPipeline {
    /// Create new pipeline
    #[inline]
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, config: PipelineConfig) -> Self {
        Self { generator, config }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Analyze a document
    ///
    /// Content that trims to nothing is replaced by a placeholder sentence, so
    /// all three requests always run. `document_id` is only used for tracing.
    ///
    /// # Errors
    /// - `AnalysisError::Generation` if any request fails or times out
    #[tracing::instrument(name = "analyze", skip_all, fields(document_id = %document_id))]
    pub async fn analyze(
        &self,
        document_id: &str,
        content: &str,
        title: Option<&str>,
    ) -> Result<SemanticAnalysis, AnalysisError> {
        let title = prompt_title(title);
        let content = self.prompt_content(content);
        tracing::info!(title, content_len = content.len(), "analyzing document");

        let temperature = self.config.analysis_temperature;
        let (topics_raw, entities_raw, segments_raw) = tokio::try_join!(
            self.request(CompletionRequest::new(
                RequestPurpose::Topics,
                prompts::topics_prompt(title, content),
                temperature,
            )),
            self.request(CompletionRequest::new(
                RequestPurpose::Entities,
                prompts::entities_prompt(title, content),
                temperature,
            )),
            self.request(CompletionRequest::new(
                RequestPurpose::Structure,
                prompts::structure_prompt(title, content),
                temperature,
            )),
        )?;

        let analysis = SemanticAnalysis {
            topics: parse_field(RequestPurpose::Topics, &topics_raw),
            entities: parse_field(RequestPurpose::Entities, &entities_raw),
            segments: parse_field(RequestPurpose::Structure, &segments_raw),
        };

        tracing::info!(
            topics = analysis.topics.len(),
            entities = analysis.entities.len(),
            segments = analysis.segments.len(),
            "document analysis completed"
        );
        Ok(analysis)
    }

    /// Load a document through `source` and analyze it
    ///
    /// # Errors
    /// - `AnalysisError::Source` if the document cannot be loaded
    /// - `AnalysisError::Generation` as for [`Self::analyze`]
    pub async fn analyze_stored(
        &self,
        source: &dyn DocumentSource,
        document_id: &str,
        title: Option<&str>,
    ) -> Result<SemanticAnalysis, AnalysisError> {
        let text = source.load_document_text(document_id).await?;
        self.analyze(document_id, &text, title).await
    }

    /// Topics and entities only, for seeding personality suggestions
    ///
    /// # Errors
    /// - `AnalysisError::Generation` if either request fails
    pub async fn summarize_for_suggestions(
        &self,
        content: &str,
        title: Option<&str>,
    ) -> Result<SemanticAnalysis, AnalysisError> {
        let title = prompt_title(title);
        let content = self.prompt_content(content);
        let temperature = self.config.analysis_temperature;

        let (topics_raw, entities_raw) = tokio::try_join!(
            self.request(CompletionRequest::new(
                RequestPurpose::Topics,
                prompts::topics_prompt(title, content),
                temperature,
            )),
            self.request(CompletionRequest::new(
                RequestPurpose::Entities,
                prompts::entities_prompt(title, content),
                temperature,
            )),
        )?;

        Ok(SemanticAnalysis {
            topics: parse_field(RequestPurpose::Topics, &topics_raw),
            entities: parse_field(RequestPurpose::Entities, &entities_raw),
            segments: Vec::new(),
        })
    }

    /// Suggest document-specific personalities from a prior analysis
    ///
    /// An unparseable response yields an empty list.
    ///
    /// # Errors
    /// - `AnalysisError::Generation` if the request fails
    #[tracing::instrument(name = "suggest_personalities", skip_all)]
    pub async fn suggest_personalities(
        &self,
        analysis: &SemanticAnalysis,
        content: Option<&str>,
        title: Option<&str>,
    ) -> Result<Vec<PersonalitySuggestion>, AnalysisError> {
        let sample = content
            .filter(|c| !c.is_empty())
            .map(|c| prompts::truncate_chars(c, self.config.sample_limit));
        let prompt = prompts::personalities_prompt(analysis, sample, prompt_title(title));

        let raw = self
            .request(CompletionRequest::new(
                RequestPurpose::Personalities,
                prompt,
                self.config.suggestion_temperature,
            ))
            .await?;

        let suggestions = normalize_suggestions(&raw);
        tracing::info!(count = suggestions.len(), "personality suggestions ready");
        Ok(suggestions)
    }

    /// Suggest personalities, computing a light analysis when none is given
    ///
    /// # Errors
    /// - `AnalysisError::InvalidInput` if neither content nor analysis is given
    /// - `AnalysisError::Generation` if a request fails
    pub async fn suggest_for_document(
        &self,
        content: Option<&str>,
        title: Option<&str>,
        analysis: Option<SemanticAnalysis>,
    ) -> Result<Vec<PersonalitySuggestion>, AnalysisError> {
        let analysis = match analysis {
            Some(analysis) => analysis,
            None => {
                let content = content.filter(|c| !c.is_empty()).ok_or_else(|| {
                    AnalysisError::InvalidInput(
                        "document content or analysis is required".to_string(),
                    )
                })?;
                self.summarize_for_suggestions(content, title).await?
            }
        };

        self.suggest_personalities(&analysis, content, title).await
    }

    fn prompt_content<'a>(&self, content: &'a str) -> &'a str {
        if content.trim().is_empty() {
            tracing::warn!("empty content provided, using placeholder");
            EMPTY_DOCUMENT_PLACEHOLDER
        } else {
            prompts::truncate_chars(content, self.config.content_limit)
        }
    }

    async fn request(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        let purpose = request.purpose;
        let budget = self.config.request_timeout;

        match tokio::time::timeout(budget, self.generator.complete(request)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(err)) => {
                tracing::error!(request = %purpose, error = %err, "generation request failed");
                Err(err)
            }
            Err(_) => {
                let after_ms = u64::try_from(budget.as_millis()).unwrap_or(u64::MAX);
                tracing::error!(request = %purpose, after_ms, "generation request timed out");
                Err(GenerationError::Timeout { after_ms })
            }
        }
    }
}

fn prompt_title(title: Option<&str>) -> &str {
    title.filter(|t| !t.trim().is_empty()).unwrap_or(DEFAULT_TITLE)
}

/// Parse one field, degrading to empty on any fault
fn parse_field<T: DeserializeOwned>(purpose: RequestPurpose, raw: &str) -> Vec<T> {
    match sanitize_and_parse::<Vec<T>>(raw) {
        Ok(items) => {
            tracing::debug!(field = %purpose, count = items.len(), "parsed model response");
            items
        }
        Err(fault) => {
            tracing::warn!(
                field = %purpose,
                error = %fault,
                raw = %preview(raw, DIAGNOSTIC_PREVIEW_CHARS),
                "unparseable model response, field left empty"
            );
            Vec::new()
        }
    }
}

/// Parse and normalize a personality response
///
/// Non-object entries are skipped; anything other than an array yields an
/// empty list.
#[must_use]
pub fn normalize_suggestions(raw: &str) -> Vec<PersonalitySuggestion> {
    match sanitize_to_value(raw) {
        Ok(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_object)
            .map(normalize_suggestion)
            .collect(),
        Ok(other) => {
            tracing::warn!(
                kind = json_kind(&other),
                raw = %preview(raw, DIAGNOSTIC_PREVIEW_CHARS),
                "personality response is not an array"
            );
            Vec::new()
        }
        Err(fault) => {
            tracing::warn!(
                error = %fault,
                raw = %preview(raw, DIAGNOSTIC_PREVIEW_CHARS),
                "unparseable personality response"
            );
            Vec::new()
        }
    }
}

fn normalize_suggestion(obj: &Map<String, Value>) -> PersonalitySuggestion {
    PersonalitySuggestion {
        name: non_empty_str(obj, "name").unwrap_or(UNNAMED_PERSONALITY).to_string(),
        description: non_empty_str(obj, "description")
            .unwrap_or(MISSING_DESCRIPTION)
            .to_string(),
        focus: string_list(obj.get("focus")),
        tone: obj
            .get("tone")
            .and_then(Value::as_str)
            .and_then(Tone::from_label)
            .unwrap_or_default(),
        expertise: string_list(obj.get("expertise")),
    }
}

fn non_empty_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(ToString::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::MockTextGenerator;
    use crate::types::SegmentLevel;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tokio::sync::Barrier;

    const TOPICS: &str = r#"[{"name":"Cloud services","confidence":0.92},{"name":"Revenue growth","confidence":0.88}]"#;
    const ENTITIES: &str = r#"```json
[{"name":"Q3","type":"date","confidence":0.8},{"name":"Cloud","type":"concept","confidence":0.7}]
```"#;
    const SEGMENTS: &str = r#"Here is the structure:
[{"id":"section-1","title":"Summary","content":"Revenue grew","level":"section","parent":null,"children":["paragraph-1-1"]},
 {"id":"paragraph-1-1","title":"Drivers","content":"Cloud services","level":"paragraph","parent":"section-1","children":[]}]
Hope this helps!"#;

    fn scripted(
        topics: &'static str,
        entities: &'static str,
        segments: &'static str,
    ) -> MockTextGenerator {
        let mut mock = MockTextGenerator::new();
        mock.expect_complete().returning(move |req| {
            Ok(match req.purpose {
                RequestPurpose::Topics => topics,
                RequestPurpose::Entities => entities,
                RequestPurpose::Structure => segments,
                RequestPurpose::Personalities => "[]",
            }
            .to_string())
        });
        mock
    }

    fn pipeline(mock: MockTextGenerator) -> AnalysisPipeline {
        AnalysisPipeline::new(Arc::new(mock), PipelineConfig::default())
    }

    #[tokio::test]
    async fn well_formed_responses_fill_every_field() {
        let analysis = pipeline(scripted(TOPICS, ENTITIES, SEGMENTS))
            .analyze("doc-1", "Quarterly revenue grew 12%.", Some("Q3 Report"))
            .await
            .unwrap();

        assert_eq!(analysis.topics.len(), 2);
        assert_eq!(analysis.topics[0].name, "Cloud services");
        assert_eq!(analysis.entities.len(), 2);
        assert_eq!(analysis.entities[0].kind, "date");
        assert_eq!(analysis.segments.len(), 2);
        assert_eq!(analysis.segments[1].parent.as_deref(), Some("section-1"));
        assert_eq!(analysis.segments[1].level, SegmentLevel::Paragraph);
    }

    #[tokio::test]
    async fn malformed_field_does_not_affect_others() {
        let analysis = pipeline(scripted("not json at all", ENTITIES, SEGMENTS))
            .analyze("doc-1", "text", None)
            .await
            .unwrap();

        assert!(analysis.topics.is_empty());
        assert_eq!(analysis.entities.len(), 2);
        assert_eq!(analysis.segments.len(), 2);

        let analysis = pipeline(scripted(TOPICS, r#"[{"name":"broken""#, SEGMENTS))
            .analyze("doc-1", "text", None)
            .await
            .unwrap();

        assert_eq!(analysis.topics.len(), 2);
        assert!(analysis.entities.is_empty());
        assert_eq!(analysis.segments.len(), 2);
    }

    #[tokio::test]
    async fn wrong_shape_degrades_to_empty() {
        let analysis = pipeline(scripted(
            r#"{"topics":[{"name":"A","confidence":1}]}"#,
            r#"[{"name":"A"}]"#,
            r#"[{"id":"s","title":"t","content":"c","level":"chapter"}]"#,
        ))
        .analyze("doc-1", "text", None)
        .await
        .unwrap();

        assert_eq!(analysis, SemanticAnalysis::default());
    }

    #[tokio::test]
    async fn empty_content_uses_placeholder_for_all_requests() {
        let mut mock = MockTextGenerator::new();
        mock.expect_complete()
            .withf(|req| {
                req.prompt.contains(EMPTY_DOCUMENT_PLACEHOLDER)
                    && req.prompt.contains("Document Title: Untitled")
                    && (req.temperature - ANALYSIS_TEMPERATURE).abs() < f32::EPSILON
            })
            .times(3)
            .returning(|_| Ok("[]".to_string()));

        let analysis = pipeline(mock).analyze("doc-1", "   \n\t ", None).await.unwrap();
        assert!(analysis.is_empty());
    }

    #[tokio::test]
    async fn content_is_truncated_before_prompting() {
        let content = format!("{}TAIL-MARKER", "a".repeat(ANALYSIS_CONTENT_LIMIT));

        let mut mock = MockTextGenerator::new();
        mock.expect_complete()
            .withf(|req| {
                !req.prompt.contains("TAIL-MARKER")
                    && req.prompt.contains(&"a".repeat(ANALYSIS_CONTENT_LIMIT))
            })
            .times(3)
            .returning(|_| Ok("[]".to_string()));

        pipeline(mock).analyze("doc-1", &content, None).await.unwrap();
    }

    #[tokio::test]
    async fn transport_failure_fails_the_call() {
        let mut mock = MockTextGenerator::new();
        mock.expect_complete().returning(|req| match req.purpose {
            RequestPurpose::Entities => Err(GenerationError::Authentication("bad key".into())),
            _ => Ok(TOPICS.to_string()),
        });

        let err = pipeline(mock).analyze("doc-1", "text", None).await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Generation(GenerationError::Authentication(_))
        ));
    }

    struct StalledGenerator;

    #[async_trait]
    impl TextGenerator for StalledGenerator {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, GenerationError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("[]".to_string())
        }
    }

    #[tokio::test]
    async fn slow_backend_times_out_as_transport_error() {
        let pipeline = AnalysisPipeline::new(
            Arc::new(StalledGenerator),
            PipelineConfig::default().with_request_timeout(Duration::from_millis(20)),
        );

        let err = pipeline.analyze("doc-1", "text", None).await.unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Generation(GenerationError::Timeout { after_ms: 20 })
        ));
    }

    /// Each request waits until all three have started.
    struct RendezvousGenerator {
        barrier: Barrier,
    }

    #[async_trait]
    impl TextGenerator for RendezvousGenerator {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, GenerationError> {
            self.barrier.wait().await;
            Ok("[]".to_string())
        }
    }

    #[tokio::test]
    async fn sub_requests_run_concurrently() {
        let pipeline = AnalysisPipeline::new(
            Arc::new(RendezvousGenerator {
                barrier: Barrier::new(3),
            }),
            PipelineConfig::default().with_request_timeout(Duration::from_secs(5)),
        );

        let result = pipeline.analyze("doc-1", "text", None).await;
        assert!(result.is_ok(), "requests were serialized: {result:?}");
    }

    #[test]
    fn suggestion_defaults_fill_missing_fields() {
        let raw = r#"[{"focus": "not a list", "expertise": null},
                      {"name": "  ", "description": "Reads contracts", "tone": "Business",
                       "focus": ["clauses", 3, "liability"], "expertise": ["law"]}]"#;

        let suggestions = normalize_suggestions(raw);
        assert_eq!(suggestions.len(), 2);

        assert_eq!(suggestions[0].name, UNNAMED_PERSONALITY);
        assert_eq!(suggestions[0].description, MISSING_DESCRIPTION);
        assert_eq!(suggestions[0].tone, Tone::Academic);
        assert!(suggestions[0].focus.is_empty());
        assert!(suggestions[0].expertise.is_empty());

        assert_eq!(suggestions[1].name, UNNAMED_PERSONALITY);
        assert_eq!(suggestions[1].tone, Tone::Business);
        assert_eq!(suggestions[1].focus, vec!["clauses", "liability"]);
    }

    #[test]
    fn unknown_tone_falls_back_to_academic() {
        let suggestions = normalize_suggestions(r#"[{"name":"X","tone":"whimsical"}]"#);
        assert_eq!(suggestions[0].tone, Tone::Academic);
    }

    #[test]
    fn non_array_suggestion_response_is_empty() {
        assert!(normalize_suggestions(r#"{"name":"solo"}"#).is_empty());
        assert!(normalize_suggestions("no json here").is_empty());
        assert_eq!(normalize_suggestions(r#"["text", {"name":"ok"}]"#).len(), 1);
    }

    #[tokio::test]
    async fn suggestions_use_high_temperature_and_sample() {
        let content = format!("{}SAMPLE-TAIL", "b".repeat(SUGGESTION_SAMPLE_LIMIT));

        let mut mock = MockTextGenerator::new();
        mock.expect_complete()
            .withf(|req| {
                req.purpose == RequestPurpose::Personalities
                    && (req.temperature - SUGGESTION_TEMPERATURE).abs() < f32::EPSILON
                    && !req.prompt.contains("SAMPLE-TAIL")
            })
            .times(1)
            .returning(|_| Ok(r#"```json
[{"name":"Revenue Analyst","description":"Tracks growth","focus":["cloud"],"tone":"business","expertise":["finance"]}]
```"#
                .to_string()));

        let suggestions = pipeline(mock)
            .suggest_personalities(&SemanticAnalysis::default(), Some(&content), None)
            .await
            .unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].name, "Revenue Analyst");
        assert_eq!(suggestions[0].tone, Tone::Business);
    }

    #[tokio::test]
    async fn suggest_with_given_analysis_makes_one_request() {
        let mut mock = MockTextGenerator::new();
        mock.expect_complete()
            .withf(|req| req.purpose == RequestPurpose::Personalities)
            .times(1)
            .returning(|_| Ok("[]".to_string()));

        let suggestions = pipeline(mock)
            .suggest_for_document(None, None, Some(SemanticAnalysis::default()))
            .await
            .unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn suggest_without_analysis_skips_structure_request() {
        let mut mock = MockTextGenerator::new();
        mock.expect_complete()
            .withf(|req| req.purpose != RequestPurpose::Structure)
            .times(3)
            .returning(|req| {
                Ok(match req.purpose {
                    RequestPurpose::Topics => TOPICS.to_string(),
                    RequestPurpose::Personalities => {
                        assert!(req.prompt.contains("Cloud services, Revenue growth"));
                        "[]".to_string()
                    }
                    _ => "[]".to_string(),
                })
            });

        pipeline(mock)
            .suggest_for_document(Some("Quarterly revenue grew."), Some("Q3"), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn suggest_without_content_or_analysis_is_invalid() {
        let mock = MockTextGenerator::new();
        let err = pipeline(mock)
            .suggest_for_document(Some(""), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn analyze_stored_loads_through_source() {
        use crate::source::InMemoryDocumentSource;

        let source = InMemoryDocumentSource::new();
        source.insert("doc-7", "Stored body text");

        let mut mock = MockTextGenerator::new();
        mock.expect_complete()
            .withf(|req| req.prompt.contains("Stored body text"))
            .times(3)
            .returning(|_| Ok("[]".to_string()));

        pipeline(mock)
            .analyze_stored(&source, "doc-7", None)
            .await
            .unwrap();

        let err = pipeline(MockTextGenerator::new())
            .analyze_stored(&source, "missing", None)
            .await
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn config_builders() {
        let config = PipelineConfig::new()
            .with_request_timeout(Duration::from_secs(5))
            .with_content_limit(100)
            .with_sample_limit(50);

        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.content_limit, 100);
        assert_eq!(config.sample_limit, 50);
        assert_eq!(config.analysis_temperature, ANALYSIS_TEMPERATURE);
    }
}
