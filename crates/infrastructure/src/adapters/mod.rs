//! Adapters binding application ports to the host system.

mod stream_console;
mod system_clock;

pub use stream_console::StreamConsole;
pub use system_clock::SystemClock;
