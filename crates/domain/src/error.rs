//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The timeout must be at least one second.
    #[error("invalid timeout: {0}s")]
    InvalidTimeout(u64),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
