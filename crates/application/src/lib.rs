//! Hello Application - Use cases and ports
//!
//! This crate contains the greeting use case and the port definitions
//! (traits) the infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
