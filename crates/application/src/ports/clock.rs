//! Clock port for time-related operations

use chrono::NaiveDateTime;

/// Port for getting the current time.
///
/// This abstraction allows testing time-dependent code by providing
/// a fixed implementation.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock reading.
    fn now(&self) -> NaiveDateTime;
}
