//! OpenAI-compatible chat completion backend

use async_trait::async_trait;
use reqwest::StatusCode;
use semantix_core::sanitize::{preview, DIAGNOSTIC_PREVIEW_CHARS};
use semantix_core::{CompletionRequest, GenerationError, TextGenerator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Connection settings for [`OpenAiGenerator`]
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Base URL without trailing slash, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub model: String,
    /// Client-side timeout for a whole request
    pub timeout: Duration,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// [`TextGenerator`] over `POST {base_url}/chat/completions`
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiGenerator {
    /// Build a generator with its own connection pool
    ///
    /// # Errors
    /// - `GenerationError::Transport` if the HTTP client cannot be built
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key,
            model: config.model,
            timeout: config.timeout,
        })
    }

    /// Endpoint requests are posted to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn send_error(&self, err: &reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout {
                after_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            GenerationError::Transport(err.to_string())
        }
    }
}

/// Map a non-success status and its body to a [`GenerationError`]
#[must_use]
pub fn status_error(status: StatusCode, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| preview(body.trim(), DIAGNOSTIC_PREVIEW_CHARS).to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited(message),
        other => GenerationError::Unavailable {
            status: other.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    #[tracing::instrument(name = "openai_complete", skip_all, fields(purpose = %request.purpose, model = %self.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            temperature: request.temperature,
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| self.send_error(&err))?;

        let status = response.status();
        let text = response.text().await.map_err(|err| self.send_error(&err))?;

        if !status.is_success() {
            let err = status_error(status, &text);
            tracing::warn!(status = status.as_u16(), error = %err, "completion request rejected");
            return Err(err);
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|err| GenerationError::InvalidResponse(err.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                GenerationError::InvalidResponse("missing choices[0].message.content".to_string())
            })?;

        tracing::debug!(chars = content.chars().count(), "completion received");
        Ok(content)
    }

    fn name(&self) -> &str {
        &self.model
    }
}
