// HTTP API tests driven against a stub translation engine

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tarjama::config::AppConfig;
use tarjama::engine::Translator;
use tarjama::error::{Result, ServiceError};
use tarjama::models::Direction;
use tarjama::server::create_router;
use tower::ServiceExt;

/// Engine double that reverses the input text and counts calls.
struct StubEngine {
    calls: AtomicUsize,
    fail_with: Option<String>,
}

impl StubEngine {
    fn ok() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail_with: None,
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(message.to_string()),
        })
    }
}

#[async_trait]
impl Translator for StubEngine {
    async fn translate(&self, text: &str, _direction: Direction) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(ServiceError::ModelLoad(message.clone())),
            None => Ok(text.chars().rev().collect()),
        }
    }
}

fn test_router(engine: Arc<StubEngine>) -> Router {
    create_router(AppConfig::default(), engine).unwrap()
}

async fn post_translate(app: Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/translate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_translate_both_directions() {
    let engine = StubEngine::ok();

    for code in ["e2a", "a2e"] {
        let (status, body) = post_translate(
            test_router(engine.clone()),
            json!({"text": "good morning", "direction": code}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["original_text"], "good morning");
        assert_eq!(body["translated_text"], "gninrom doog");
        assert_eq!(body["direction"], code);
    }
}

#[tokio::test]
async fn test_invalid_direction_is_rejected_before_inference() {
    let engine = StubEngine::ok();
    let (status, body) = post_translate(
        test_router(engine.clone()),
        json!({"text": "bonjour", "direction": "fr"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Direction must be 'e2a' or 'a2e'");
    assert_eq!(
        engine.calls.load(Ordering::SeqCst),
        0,
        "engine must not run for invalid directions"
    );
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let engine = StubEngine::ok();
    let response = test_router(engine.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/translate")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_engine_failure_maps_to_500_with_detail() {
    let engine = StubEngine::failing("weights download interrupted");
    let (status, body) = post_translate(
        test_router(engine),
        json!({"text": "hello", "direction": "e2a"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("weights download interrupted"));
}

#[tokio::test]
async fn test_health_is_unconditional() {
    let (status, body) = get(test_router(StubEngine::ok()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_health_after_failed_translate() {
    let engine = StubEngine::failing("boom");
    let app = test_router(engine);

    let (status, _) = post_translate(app.clone(), json!({"text": "x", "direction": "a2e"})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_metrics_endpoint_responds() {
    let (status, _) = get(test_router(StubEngine::ok()), "/metrics").await;
    assert_eq!(status, StatusCode::OK);
}
