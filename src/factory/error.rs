//! Error types for order construction.

use thiserror::Error;

/// Errors that can occur while building an order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The order type tag is not one the kitchen knows.
    #[error("Unknown order type: {0}")]
    UnknownOrderType(String),

    /// A required parameter is missing or out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
