//! Print greeting use case.

use hello_domain::{Greeting, Timestamp};

use crate::error::ApplicationResult;
use crate::ports::{Clock, Console};

/// Output from printing a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintGreetingOutput {
    /// The greeting that was written.
    pub greeting: Greeting,
}

/// Use case for announcing the current local time on the console.
pub struct PrintGreeting<C: Clock, W: Console> {
    clock: C,
    console: W,
}

impl<C: Clock, W: Console> PrintGreeting<C, W> {
    /// Creates a new `PrintGreeting` use case.
    #[must_use]
    pub const fn new(clock: C, console: W) -> Self {
        Self { clock, console }
    }

    /// Reads the clock once and writes one greeting line.
    ///
    /// The line has the form `Hello from Python! The time is YYYY-MM-DD HH:MM:SS.`
    ///
    /// # Errors
    /// Returns error if the console fails to write or flush the line.
    pub fn execute(&mut self) -> ApplicationResult<PrintGreetingOutput> {
        let timestamp = Timestamp::new(self.clock.now());
        tracing::debug!(%timestamp, "read local clock");

        let greeting = Greeting::new(timestamp);
        self.console.write_line(&greeting.to_string())?;
        tracing::debug!("greeting written");

        Ok(PrintGreetingOutput { greeting })
    }

    /// Consumes the use case, returning its console.
    #[must_use]
    pub fn into_console(self) -> W {
        self.console
    }
}
