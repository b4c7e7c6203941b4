//! Application error types

use thiserror::Error;

use crate::ports::ConsoleError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Writing the greeting failed.
    #[error("console error: {0}")]
    Console(#[from] ConsoleError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
