//! The greeting line.

use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::timestamp::Timestamp;

/// Fixed text before the timestamp.
pub const GREETING_PREFIX: &str = "Hello from Python! The time is ";

/// Fixed text after the timestamp.
pub const GREETING_SUFFIX: &str = ".";

/// A greeting announcing the time it was made.
///
/// Renders as `Hello from Python! The time is YYYY-MM-DD HH:MM:SS.`
/// Only the timestamp varies between greetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    timestamp: Timestamp,
}

impl Greeting {
    /// Creates a greeting for the given time.
    #[must_use]
    pub const fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Returns the time this greeting announces.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Reads a greeting back from a rendered line.
    ///
    /// A single trailing `\n` or `\r\n` is ignored.
    ///
    /// # Errors
    /// - [`DomainError::MalformedGreeting`] if the fixed text around the
    ///   timestamp is missing or different
    /// - [`DomainError::InvalidTimestamp`] if the embedded timestamp is bad
    pub fn parse(line: &str) -> DomainResult<Self> {
        let line = line
            .strip_suffix('\n')
            .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest));

        let stamp = line
            .strip_prefix(GREETING_PREFIX)
            .and_then(|rest| rest.strip_suffix(GREETING_SUFFIX))
            .ok_or_else(|| DomainError::MalformedGreeting(line.to_owned()))?;

        Timestamp::parse(stamp).map(Self::new)
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{GREETING_PREFIX}{}{GREETING_SUFFIX}", self.timestamp)
    }
}
