//! Responses that never reach the submission pipeline.

use axum::http::StatusCode;

use crate::error::AppError;

/// OPTIONS / -- CORS preflight. The body is empty; the CORS headers are added
/// by the router for every response.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method on `/` other than GET, POST and OPTIONS.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Any path other than `/`.
pub async fn route_not_found() -> AppError {
    AppError::NotFound
}
