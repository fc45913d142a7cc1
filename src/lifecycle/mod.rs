//! Wiring: the [`Kitchen`] composition root and tracing setup.

pub mod error;
pub mod kitchen;
pub mod tracing;

pub use error::*;
pub use kitchen::*;
pub use self::tracing::setup_tracing;
