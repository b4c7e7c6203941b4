//! Hello Domain - Core greeting types
//!
//! This crate defines the values the greeting is built from.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod greeting;
pub mod timestamp;

pub use error::{DomainError, DomainResult};
pub use greeting::{GREETING_PREFIX, GREETING_SUFFIX, Greeting};
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp};
