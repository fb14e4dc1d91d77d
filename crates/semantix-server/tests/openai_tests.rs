//! OpenAI-compatible generator against a local fake backend

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use semantix_core::{CompletionRequest, GenerationError, RequestPurpose, TextGenerator};
use semantix_server::{OpenAiConfig, OpenAiGenerator};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Canned behaviour of the fake backend
#[derive(Clone)]
enum Behaviour {
    Reply(StatusCode, Value),
    Stall(Duration),
}

#[derive(Clone)]
struct Backend {
    behaviour: Behaviour,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn completions(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    backend.seen.lock().unwrap().push((auth, body));

    match backend.behaviour {
        Behaviour::Reply(status, reply) => (status, Json(reply)),
        Behaviour::Stall(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, Json(json!({})))
        }
    }
}

async fn fake_backend(behaviour: Behaviour) -> (String, Backend) {
    let backend = Backend {
        behaviour,
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let router = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(backend.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, router).await.expect("serve fake") });
    (format!("http://{addr}/v1"), backend)
}

fn generator(base_url: String, timeout: Duration) -> OpenAiGenerator {
    OpenAiGenerator::new(OpenAiConfig {
        api_key: "sk-test".into(),
        base_url,
        model: "gpt-4o".into(),
        timeout,
    })
    .expect("client")
}

fn request() -> CompletionRequest {
    CompletionRequest::new(RequestPurpose::Topics, "Extract topics", 0.2)
}

#[tokio::test]
async fn returns_first_choice_content() {
    let (base, backend) = fake_backend(Behaviour::Reply(
        StatusCode::OK,
        json!({"choices": [{"message": {"role": "assistant", "content": "[{\"name\":\"AI\",\"confidence\":0.9}]"}}]}),
    ))
    .await;

    let text = generator(base, Duration::from_secs(5))
        .complete(request())
        .await
        .unwrap();
    assert_eq!(text, "[{\"name\":\"AI\",\"confidence\":0.9}]");

    let seen = backend.seen.lock().unwrap();
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "Extract topics");
    assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
}

#[tokio::test]
async fn error_statuses_are_classified() {
    let cases = [
        (StatusCode::UNAUTHORIZED, "auth"),
        (StatusCode::FORBIDDEN, "auth"),
        (StatusCode::TOO_MANY_REQUESTS, "rate"),
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    ];

    for (status, expected) in cases {
        let (base, _) = fake_backend(Behaviour::Reply(
            status,
            json!({"error": {"message": "backend says no"}}),
        ))
        .await;
        let err = generator(base, Duration::from_secs(5))
            .complete(request())
            .await
            .unwrap_err();

        match (expected, err) {
            ("auth", GenerationError::Authentication(message))
            | ("rate", GenerationError::RateLimited(message)) => {
                assert_eq!(message, "backend says no");
            }
            ("unavailable", GenerationError::Unavailable { status: code, .. }) => {
                assert_eq!(code, 503);
            }
            (expected, other) => panic!("{expected}: unexpected {other:?}"),
        }
    }
}

#[tokio::test]
async fn missing_content_is_invalid_response() {
    for reply in [json!({"choices": []}), json!({"choices": [{"message": {"content": null}}]})] {
        let (base, _) = fake_backend(Behaviour::Reply(StatusCode::OK, reply)).await;
        let err = generator(base, Duration::from_secs(5))
            .complete(request())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)), "{err:?}");
    }
}

#[tokio::test]
async fn slow_backend_times_out() {
    let (base, _) = fake_backend(Behaviour::Stall(Duration::from_secs(5))).await;
    let err = generator(base, Duration::from_millis(200))
        .complete(request())
        .await
        .unwrap_err();
    assert_eq!(err, GenerationError::Timeout { after_ms: 200 });
    assert!(err.is_retryable());
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = generator(format!("http://{addr}/v1"), Duration::from_secs(5))
        .complete(request())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Transport(_)), "{err:?}");
}
