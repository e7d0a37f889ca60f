//! Integration tests for method dispatch on `/` and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;

use common::{assert_cors_headers, body_bytes, body_json, build_test_app, request, send, RecordingStore};

fn app() -> axum::Router {
    build_test_app(Arc::new(RecordingStore::default()))
}

// ---------------------------------------------------------------------------
// OPTIONS: preflight
// ---------------------------------------------------------------------------

#[tokio::test]
async fn options_returns_empty_200_with_cors_headers() {
    let response = request(app(), "OPTIONS", "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn browser_preflight_is_answered() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/")
        .header("Origin", "https://cartas.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(app(), req).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);
}

// ---------------------------------------------------------------------------
// GET: health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_returns_health_envelope() {
    let response = request(app(), "GET", "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors_headers(&response);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["status"], "healthy");
    assert!(json["service"].is_string());
    assert_eq!(
        json["endpoints"],
        json!({
            "POST /": "Submit form data",
            "GET /": "Health check",
            "OPTIONS /": "CORS preflight",
        })
    );

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(
        chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
        "timestamp should be RFC 3339, got {timestamp}"
    );
}

// ---------------------------------------------------------------------------
// Other methods
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_is_method_not_allowed() {
    let response = request(app(), "PATCH", "/").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_cors_headers(&response);
    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({ "success": false, "error": "Method not allowed" })
    );
}

#[tokio::test]
async fn put_and_delete_are_method_not_allowed() {
    for method in ["PUT", "DELETE"] {
        let response = request(app(), method, "/").await;
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} should be rejected"
        );
    }
}

#[tokio::test]
async fn head_is_method_not_allowed() {
    let response = request(app(), "HEAD", "/").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// General
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_path_returns_404_envelope() {
    let response = request(app(), "GET", "/submissions").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors_headers(&response);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": false, "error": "Not found" }));
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = request(app(), "GET", "/").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(
        request_id.to_str().unwrap().len(),
        36,
        "x-request-id should be a UUID string"
    );
}
