//! Response envelopes and the fixed cross-origin headers.
//!
//! Every body this service produces is one of three shapes:
//!
//! ```text
//! { "success": true,  ...payload }
//! { "success": false, "errors": ["...", ...] }   validation failures
//! { "success": false, "error": "..." }           everything else
//! ```

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderName, HeaderValue};
use cardform_core::types::DbId;
use serde::Serialize;

/// Confirmation sent back for an accepted contribution.
pub const SUBMISSION_ACCEPTED_MESSAGE: &str =
    "¡Gracias parcero! Tu contribución ha sido recibida.";

/// Cross-origin headers attached to every response, preflight included.
pub fn cors_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        (
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ),
        (
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
        (ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("86400")),
    ]
}

/// `{ "success": true, ...payload }`.
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// `{ "success": false, "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// `{ "success": false, "errors": [...] }`.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ValidationErrorBody {
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
        }
    }
}

/// Payload for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmissionAccepted {
    pub message: &'static str,
    /// Row id assigned by the database; `null` if none was reported.
    pub id: Option<DbId>,
}

impl SubmissionAccepted {
    pub fn new(id: Option<DbId>) -> Self {
        Self {
            message: SUBMISSION_ACCEPTED_MESSAGE,
            id,
        }
    }
}
