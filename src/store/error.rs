//! Error types for the order store.

use thiserror::Error;

/// Errors that can occur while talking to the order collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing collection could not be reached. No retry is attempted.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
