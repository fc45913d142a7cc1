//! Pure data structures for orders. Construction goes through [`crate::factory`].

pub mod order;

pub use order::*;
