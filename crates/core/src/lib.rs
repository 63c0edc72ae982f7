//! Savings Advisor Core - allocation profiles, the advisor service and errors.
//!
//! This crate maps a life/financial category onto a fixed percentage split
//! across investment instruments and projects that split onto a monthly
//! savings amount. It holds no state and performs no I/O.

pub mod allocation;
pub mod constants;
pub mod errors;

// Re-export the advisor surface
pub use allocation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
