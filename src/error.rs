use thiserror::Error;

/// Boxed cause reported by an [`HttpClient`](crate::http::HttpClient) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum StargazersError {
    #[error("Network error: {0}")]
    TransportError(#[source] BoxError),

    /// Message taken from the GitHub error envelope, shown as-is.
    #[error("{0}")]
    ApiError(String),

    #[error("Unable to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid repository URL: {0}")]
    InvalidRepoUrl(String),

    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StargazersError>;
