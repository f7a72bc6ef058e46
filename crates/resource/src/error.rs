use thiserror::Error;

/// Error type for resource resolution operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Failed to fetch '{url}': {message}")]
    FetchFailed { url: String, message: String },
}
