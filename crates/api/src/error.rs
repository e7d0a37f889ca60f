use std::any::Any;

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cardform_core::error::CoreError;

use crate::response::{ErrorBody, ValidationErrorBody};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure leaves as a JSON envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cardform_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The insert failed.
    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// The request body could not be read (too large, aborted, ...).
    #[error(transparent)]
    BodyRejected(#[from] BytesRejection),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    /// Anything that escaped the normal error path, such as a panic.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::Validation(errors)) => {
                tracing::info!(?errors, "Submission rejected by validation");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorBody::new(errors)),
                )
                    .into_response();
            }
            AppError::Core(CoreError::UnsupportedContentType) => {
                (StatusCode::BAD_REQUEST, "Unsupported content type".to_string())
            }
            AppError::Core(CoreError::MalformedBody(detail)) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {detail}"),
            ),

            // --- Database errors ---
            AppError::Persistence(err) => {
                tracing::error!(error = %err, "Failed to store submission");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error: {err}"),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BodyRejected(rejection) => (rejection.status(), rejection.body_text()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Unexpected(msg) => {
                tracing::error!(error = %msg, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Unexpected error: {msg}"),
                )
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Turn a caught panic into the 500 envelope.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Unexpected(message).into_response()
}
