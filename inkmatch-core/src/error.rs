//! Common error types for Inkmatch

use thiserror::Error;

/// Common result type for Inkmatch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by the core library and the web service
#[derive(Error, Debug)]
pub enum Error {
    /// Document store call failed (wraps sqlx::Error); retryable by the caller
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Referenced document does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Acting identity does not own the target resource
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Required field missing or out of range at the write boundary
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Internal error (malformed stored document, encoding failure)
    #[error("Internal error: {0}")]
    Internal(String),
}
