use std::sync::Arc;

use cardform_db::repositories::SubmissionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone; nothing in it is mutated by requests.
#[derive(Clone)]
pub struct AppState {
    /// Where validated submissions are written.
    pub store: Arc<dyn SubmissionStore>,
    pub config: Arc<ServerConfig>,
}
