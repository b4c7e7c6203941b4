//! Console adapter over any byte stream

use std::io::{self, StdoutLock, Write};

use hello_application::ports::{Console, ConsoleError};

/// Console that writes lines to a [`Write`] stream.
#[derive(Debug)]
pub struct StreamConsole<W: Write> {
    writer: W,
}

impl StreamConsole<StdoutLock<'static>> {
    /// Creates a console holding the process-wide stdout lock.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> StreamConsole<W> {
    /// Creates a console writing to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the console, returning the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Console for StreamConsole<W> {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}
