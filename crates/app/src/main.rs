//! Hello - Main Entry Point
//!
//! Prints `Hello from Python! The time is YYYY-MM-DD HH:MM:SS.` using the
//! host's local time. Command-line arguments are ignored.

use hello_application::use_cases::PrintGreeting;
use hello_infrastructure::{StreamConsole, SystemClock};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so stdout only ever carries the greeting
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting hello v{}", env!("CARGO_PKG_VERSION"));

    let mut print_greeting = PrintGreeting::new(SystemClock::new(), StreamConsole::stdout());

    if let Err(err) = print_greeting.execute() {
        tracing::error!(error = %err, "failed to print greeting");
        return Err(err.into());
    }

    Ok(())
}
