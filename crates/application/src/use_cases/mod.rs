//! Application use cases (business logic orchestration).

mod print_greeting;

pub use print_greeting::*;
