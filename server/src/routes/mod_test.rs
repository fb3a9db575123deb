use super::*;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::llm::types::LlmError;
use crate::state::test_helpers::{MockLlm, test_app_state, test_app_state_with_llm};

const APPS: &str = r#"[
    {"id": "1", "name": "Plain", "description": "d", "tech_stack": ["Rust"]},
    {"id": "2", "name": "Star", "description": "d", "tech_stack": ["React"], "featured": true}
]"#;

fn origins() -> AllowedOrigins {
    AllowedOrigins::List(vec!["http://localhost".to_owned()])
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).expect("json body") };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =============================================================================
// apps
// =============================================================================

#[tokio::test]
async fn apps_returns_records_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("apps.json"), APPS).unwrap();
    let app = api_routes(test_app_state(dir.path()), &origins());

    let (status, body) = send(app, get("/api/apps")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "Plain");
    assert_eq!(body[1]["featured"], true);
}

#[tokio::test]
async fn apps_missing_file_is_404_with_detail() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state(dir.path()), &origins());

    let (status, body) = send(app, get("/api/apps")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Apps data not found" }));
}

// =============================================================================
// blog
// =============================================================================

#[tokio::test]
async fn blog_list_and_detail() {
    let dir = tempfile::tempdir().unwrap();
    let blog = dir.path().join("blog");
    std::fs::create_dir_all(&blog).unwrap();
    std::fs::write(blog.join("first-post.md"), "---\ntitle: First\ndate: 2026-01-15\ntags: a, b\n---\n# Hi\n\nBody.")
        .unwrap();

    let app = api_routes(test_app_state(dir.path()), &origins());
    let (status, list) = send(app.clone(), get("/api/blog")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["slug"], "first-post");
    assert_eq!(list[0]["tags"], json!(["a", "b"]));
    assert!(list[0].get("content").is_none());

    let (status, post) = send(app, get("/api/blog/first-post")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["title"], "First");
    assert!(post["content"].as_str().unwrap().contains("<h1>Hi</h1>"));
}

#[tokio::test]
async fn blog_detail_unknown_slug_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state(dir.path()), &origins());

    let (status, body) = send(app, get("/api/blog/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Blog post not found");
}

#[tokio::test]
async fn blog_list_without_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state(dir.path()), &origins());

    let (status, body) = send(app, get("/api/blog")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// chat
// =============================================================================

#[tokio::test]
async fn chat_returns_reply_with_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let llm = Arc::new(MockLlm::replying("Hola"));
    let app = api_routes(test_app_state_with_llm(dir.path(), llm.clone()), &origins());

    let (status, body) = send(app, post_json("/api/chat", &json!({ "message": "hi" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Hola");
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
    assert_eq!(llm.calls()[0].system, "test persona");
}

#[tokio::test]
async fn chat_empty_message_is_422_and_skips_llm() {
    let dir = tempfile::tempdir().unwrap();
    let llm = Arc::new(MockLlm::replying("unused"));
    let app = api_routes(test_app_state_with_llm(dir.path(), llm.clone()), &origins());

    let (status, _) = send(app, post_json("/api/chat", &json!({ "message": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn chat_missing_message_field_is_422_with_detail() {
    let dir = tempfile::tempdir().unwrap();
    let llm = Arc::new(MockLlm::replying("unused"));
    let app = api_routes(test_app_state_with_llm(dir.path(), llm.clone()), &origins());

    let (status, body) = send(app, post_json("/api/chat", &json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("message"));
    assert!(llm.calls().is_empty());
}

#[tokio::test]
async fn chat_malformed_body_is_400_with_detail() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state_with_llm(dir.path(), Arc::new(MockLlm::new(vec![]))), &origins());

    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn chat_oversized_message_is_422() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state_with_llm(dir.path(), Arc::new(MockLlm::new(vec![]))), &origins());

    let long = "x".repeat(1001);
    let (status, _) = send(app, post_json("/api/chat", &json!({ "message": long }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn chat_without_llm_is_503() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state(dir.path()), &origins());

    let (status, body) = send(app, post_json("/api/chat", &json!({ "message": "hi" }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "Chat is not available");
}

#[tokio::test]
async fn chat_provider_failure_is_502() {
    let dir = tempfile::tempdir().unwrap();
    let llm = Arc::new(MockLlm::failing(LlmError::Transport("timeout".into())));
    let app = api_routes(test_app_state_with_llm(dir.path(), llm), &origins());

    let (status, _) = send(app, post_json("/api/chat", &json!({ "message": "hi" }))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

// =============================================================================
// health + cors
// =============================================================================

#[tokio::test]
async fn health_reports_chat_status() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state(dir.path()), &origins());

    let (status, body) = send(app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["chat"], "unconfigured");
    assert_eq!(body["services"]["blog"], "operational");
}

#[tokio::test]
async fn banner_and_healthz() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state(dir.path()), &origins());

    let (status, body) = send(app.clone(), get("/api")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], health::SERVICE_NAME);

    let (status, body) = send(app, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn cors_echoes_allowed_origin_only() {
    let dir = tempfile::tempdir().unwrap();
    let app = api_routes(test_app_state(dir.path()), &origins());

    let allowed = Request::builder()
        .uri("/healthz")
        .header(header::ORIGIN, "http://localhost")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(allowed).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("http://localhost")
    );

    let denied = Request::builder()
        .uri("/healthz")
        .header(header::ORIGIN, "https://evil.test")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(denied).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
