//! Console port for line-oriented output

use thiserror::Error;

/// Errors from writing to the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The underlying stream rejected the write or flush.
    #[error("failed to write line: {0}")]
    Write(#[from] std::io::Error),
}

/// Port for writing whole lines of output.
pub trait Console {
    /// Writes `line` followed by a single `\n`, then flushes.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Write`] if the stream fails.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}
