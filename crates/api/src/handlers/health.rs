use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::response::Success;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Unhinged Cards Form Service";

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub service: &'static str,
    pub status: &'static str,
    /// RFC 3339 UTC time the response was produced.
    pub timestamp: String,
    pub endpoints: Endpoints,
}

/// Operations served on `/`.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    #[serde(rename = "POST /")]
    pub submit: &'static str,
    #[serde(rename = "GET /")]
    pub health: &'static str,
    #[serde(rename = "OPTIONS /")]
    pub preflight: &'static str,
}

const ENDPOINTS: Endpoints = Endpoints {
    submit: "Submit form data",
    health: "Health check",
    preflight: "CORS preflight",
};

/// GET / -- static service status. Does not touch the database.
pub async fn health_check() -> Json<Success<HealthStatus>> {
    Json(Success::new(HealthStatus {
        service: SERVICE_NAME,
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        endpoints: ENDPOINTS,
    }))
}
