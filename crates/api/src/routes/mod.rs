use axum::routing::{get, MethodRouter};

use crate::handlers::{fallback, health, submission};
use crate::state::AppState;

/// Method dispatch for `/`.
///
/// ```text
/// OPTIONS  /    -> preflight (empty 200)
/// POST     /    -> submit_form
/// GET      /    -> health_check
/// (other)  /    -> 405
/// ```
///
/// HEAD is routed explicitly so it does not fall through to the GET handler.
pub fn form_route() -> MethodRouter<AppState> {
    get(health::health_check)
        .post(submission::submit_form)
        .options(fallback::preflight)
        .head(fallback::method_not_allowed)
        .fallback(fallback::method_not_allowed)
}
