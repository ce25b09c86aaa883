use thiserror::Error;

/// Errors raised by a backing key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation not supported: {0}")]
    Unsupported(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors returned by the link service operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("content cannot be empty")]
    EmptyContent,
    #[error("short code is already taken: {0}")]
    CodeTaken(String),
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
    #[error("short link not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Store(#[from] StorageError),
}

impl LinkError {
    /// HTTP-equivalent status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            LinkError::EmptyContent | LinkError::CodeTaken(_) | LinkError::InvalidShortCode(_) => {
                400
            }
            LinkError::NotFound(_) => 404,
            LinkError::Store(_) => 500,
        }
    }
}
