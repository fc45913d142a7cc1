//! # Order Collection
//!
//! The external document collection the [`OrderStore`](super::OrderStore) persists into.
//! The store only needs two operations from it, so any backend (a document database,
//! a key-value service, the in-process [`MemoryCollection`](super::MemoryCollection))
//! can sit behind this trait.

use super::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One stored record: `{ "order": "<summary>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDocument {
    pub order: String,
}

impl OrderDocument {
    pub fn new(order: impl Into<String>) -> Self {
        Self { order: order.into() }
    }
}

/// Contract for the backing collection.
#[async_trait]
pub trait OrderCollection: Send + Sync {
    /// Inserts a single document.
    async fn insert(&self, document: OrderDocument) -> Result<(), StoreError>;

    /// Returns every document in the collection's own iteration order.
    async fn find_all(&self) -> Result<Vec<OrderDocument>, StoreError>;
}
