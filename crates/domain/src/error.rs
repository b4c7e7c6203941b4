//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building or reading a greeting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The text is not a valid `YYYY-MM-DD HH:MM:SS` timestamp.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The line does not follow the greeting template.
    #[error("malformed greeting: {0}")]
    MalformedGreeting(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
