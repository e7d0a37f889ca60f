#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// One or more submission rules failed, in rule evaluation order.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Unsupported content type")]
    UnsupportedContentType,

    #[error("Malformed body: {0}")]
    MalformedBody(String),
}
