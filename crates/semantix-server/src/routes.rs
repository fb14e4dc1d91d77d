//! HTTP routes
//!
//! - `POST /analyze`
//! - `POST /suggest-personalities`
//! - `GET /health`
//!
//! Error bodies are always `{"error": "..."}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use semantix_core::{AnalysisPipeline, PersonalitySuggestion, SemanticAnalysis};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request id, echoed on every response
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub const CONTENT_REQUIRED: &str = "Document content is required";
pub const CONTENT_OR_ANALYSIS_REQUIRED: &str = "Document content or analysis is required";
pub const ANALYZE_FAILED: &str = "Failed to analyze document";
pub const SUGGEST_FAILED: &str = "Failed to suggest personalities";

const MAX_REQUEST_ID_LEN: usize = 128;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pipeline: Arc<AnalysisPipeline>,
}

/// `POST /analyze` body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: SemanticAnalysis,
}

/// `POST /suggest-personalities` body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub analysis: Option<SemanticAnalysis>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<PersonalitySuggestion>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Error response with a JSON `{error}` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            StatusCode::PAYLOAD_TOO_LARGE
        } else {
            StatusCode::BAD_REQUEST
        };
        tracing::debug!(status = status.as_u16(), reason = %rejection.body_text(), "request body rejected");
        Self::new(status, rejection.body_text())
    }
}

/// Build the application router
pub fn build_router(pipeline: Arc<AnalysisPipeline>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/suggest-personalities", post(suggest_personalities))
        .route("/health", get(health))
        .layer(middleware::from_fn(request_tracing))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(AppState { pipeline })
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;
    let content = request
        .content
        .as_deref()
        .filter(|content| !content.is_empty())
        .ok_or_else(|| ApiError::bad_request(CONTENT_REQUIRED))?;
    let document_id = request.document_id.as_deref().unwrap_or_default();

    match state
        .pipeline
        .analyze(document_id, content, request.title.as_deref())
        .await
    {
        Ok(analysis) => Ok(Json(AnalyzeResponse { analysis })),
        Err(err) => {
            tracing::error!(document_id, error = %err, "error analyzing document");
            Err(ApiError::internal(ANALYZE_FAILED))
        }
    }
}

async fn suggest_personalities(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, ApiError> {
    let Json(request) = payload?;
    let content = request.content.as_deref().filter(|content| !content.is_empty());
    if content.is_none() && request.analysis.is_none() {
        return Err(ApiError::bad_request(CONTENT_OR_ANALYSIS_REQUIRED));
    }
    let document_id = request.document_id.as_deref().unwrap_or_default();

    match state
        .pipeline
        .suggest_for_document(content, request.title.as_deref(), request.analysis)
        .await
    {
        Ok(suggestions) => Ok(Json(SuggestResponse { suggestions })),
        Err(err) if err.is_client_error() => Err(ApiError::bad_request(CONTENT_OR_ANALYSIS_REQUIRED)),
        Err(err) => {
            tracing::error!(document_id, error = %err, "error suggesting personalities");
            Err(ApiError::internal(SUGGEST_FAILED))
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
    })
}

async fn request_tracing(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty() && value.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %request.method(),
        route = %request.uri().path(),
    );

    let started = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    span.in_scope(|| {
        tracing::info!(status = response.status().as_u16(), elapsed_ms, "request completed");
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
