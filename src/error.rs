#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A fetch failed for a reason the transport reported as plain text.
    #[error("{0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
