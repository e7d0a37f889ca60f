//! POST / -- card contribution submissions.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, USER_AGENT};
use axum::http::HeaderMap;
use axum::Json;

use cardform_core::decode::decode_fields;
use cardform_core::submission::{self, ClientInfo, SubmissionForm};
use cardform_core::validation;

use crate::error::AppResult;
use crate::response::{SubmissionAccepted, Success};
use crate::state::AppState;

/// Client IP headers, most trusted first.
const CLIENT_IP_HEADERS: &[&str] = &["cf-connecting-ip", "x-forwarded-for"];

/// Decode, validate and store one card contribution.
pub async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<Success<SubmissionAccepted>>> {
    let body = body?;

    let content_type = header_str(&headers, CONTENT_TYPE.as_str()).unwrap_or_default();
    let fields = decode_fields(content_type, &body)?;

    let ignored = submission::unrecognized_keys(&fields);
    if !ignored.is_empty() {
        tracing::debug!(?ignored, "Ignoring unrecognized submission fields");
    }

    let form = SubmissionForm::from_fields(&fields);
    let row = validation::prepare(form, client_info(&headers))?;

    let id = state.store.insert(&row).await?;

    tracing::info!(
        submission_id = ?id,
        card_type = %row.card_type,
        client_ip = %row.client_ip,
        "Card submission stored",
    );

    Ok(Json(Success::new(SubmissionAccepted::new(id))))
}

/// Client metadata from request headers. Empty header values count as absent.
pub fn client_info(headers: &HeaderMap) -> ClientInfo {
    let ip = CLIENT_IP_HEADERS
        .iter()
        .filter_map(|name| header_str(headers, name))
        .find(|v| !v.is_empty());
    ClientInfo::new(ip, header_str(headers, USER_AGENT.as_str()))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
