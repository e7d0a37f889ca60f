#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cardform_api::config::ServerConfig;
use cardform_api::router::build_app_router;
use cardform_api::state::AppState;
use cardform_core::submission::NewSubmission;
use cardform_core::types::DbId;
use cardform_db::repositories::SubmissionStore;

// ---------------------------------------------------------------------------
// Store fakes
// ---------------------------------------------------------------------------

/// Keeps every inserted row and hands out increasing ids.
#[derive(Default)]
pub struct RecordingStore {
    rows: Mutex<Vec<NewSubmission>>,
}

impl RecordingStore {
    pub fn rows(&self) -> Vec<NewSubmission> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionStore for RecordingStore {
    async fn insert(&self, submission: &NewSubmission) -> Result<Option<DbId>, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        rows.push(submission.clone());
        Ok(Some(rows.len() as DbId))
    }
}

/// Accepts inserts but never reports an id.
pub struct IdlessStore;

#[async_trait]
impl SubmissionStore for IdlessStore {
    async fn insert(&self, _submission: &NewSubmission) -> Result<Option<DbId>, sqlx::Error> {
        Ok(None)
    }
}

/// Fails every insert.
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn insert(&self, _submission: &NewSubmission) -> Result<Option<DbId>, sqlx::Error> {
        Err(sqlx::Error::Protocol("connection reset by peer".into()))
    }
}

/// Panics on insert, standing in for any bug below the handler.
pub struct PanickingStore;

#[async_trait]
impl SubmissionStore for PanickingStore {
    async fn insert(&self, _submission: &NewSubmission) -> Result<Option<DbId>, sqlx::Error> {
        panic!("store exploded");
    }
}

// ---------------------------------------------------------------------------
// App + request helpers
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with a small body limit.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        max_body_bytes: 16 * 1024,
        db_max_connections: 1,
    }
}

/// Build the production router around `store`.
pub fn build_test_app(store: Arc<dyn SubmissionStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn post(app: Router, content_type: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, body: serde_json::Value) -> Response<Body> {
    post(app, "application/json", body.to_string()).await
}

pub async fn request(app: Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Assert the fixed cross-origin headers are present.
pub fn assert_cors_headers<B>(response: &Response<B>) {
    let headers = response.headers();
    let expected = [
        ("access-control-allow-origin", "*"),
        ("access-control-allow-methods", "GET, POST, OPTIONS"),
        ("access-control-allow-headers", "Content-Type"),
        ("access-control-max-age", "86400"),
    ];
    for (name, value) in expected {
        let actual = headers
            .get(name)
            .unwrap_or_else(|| panic!("missing {name} header"))
            .to_str()
            .unwrap();
        assert_eq!(actual, value, "unexpected {name} header");
    }
}
