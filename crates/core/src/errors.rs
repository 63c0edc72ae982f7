//! Core error types for the savings advisor.
//!
//! Every fallible operation in this crate returns [`Result`]. Failures are
//! surfaced to the caller as-is; nothing is retried and no partial allocation
//! is ever returned.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the savings advisor.
#[derive(Error, Debug)]
pub enum Error {
    /// The category identifier is not one of the known allocation profiles.
    #[error("Category '{0}' not supported.")]
    UnsupportedCategory(String),

    /// The savings amount is negative, non-finite or out of range.
    #[error("Invalid savings amount: {0}")]
    InvalidAmount(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised while parsing caller input at the string boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}
