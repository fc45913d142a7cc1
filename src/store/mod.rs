//! # Order Store
//!
//! Persists order summaries into an external [`OrderCollection`] and lists them back.
//!
//! ## One connection per process
//!
//! The store holds exactly one collection handle. Build it explicitly with
//! [`OrderStore::new`] / [`OrderStore::connect`] and pass it around, or use the
//! process-wide instance from [`global`] / [`global_with`]. The global instance is
//! created lazily behind a [`tokio::sync::OnceCell`], so concurrent first callers
//! share a single connection attempt and every caller receives the same
//! `Arc<OrderStore>`.
//!
//! The in-process collection runs on its own thread and runtime, so the global
//! instance stays live after the runtime that first connected shuts down.
//!
//! Each `add`/`list` goes straight to the collection: no caching, no buffering, no retry.

pub mod collection;
pub mod config;
pub mod error;
pub mod memory;
pub mod mock;

pub use collection::*;
pub use config::*;
pub use error::*;
pub use memory::*;

use crate::model::Order;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

/// Channel capacity for the in-process collection.
const MEMORY_COLLECTION_BUFFER: usize = 32;

static GLOBAL_STORE: OnceCell<Arc<OrderStore>> = OnceCell::const_new();

/// Persistent registry of submitted orders.
pub struct OrderStore {
    collection: Arc<dyn OrderCollection>,
}

impl std::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStore").finish_non_exhaustive()
    }
}

impl OrderStore {
    /// Wraps an already-open collection.
    pub fn new(collection: impl OrderCollection + 'static) -> Self {
        Self {
            collection: Arc::new(collection),
        }
    }

    /// Opens the collection described by `config`.
    ///
    /// Only `memory://` URLs are served in-process; any other backend is reported
    /// as [`StoreError::StorageUnavailable`].
    #[instrument(skip(config), fields(url = %config.url))]
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        match config.scheme() {
            Some("memory") => {
                let (collection, _thread) = MemoryCollection::spawn_dedicated(
                    config.namespace(),
                    MEMORY_COLLECTION_BUFFER,
                )?;
                info!(namespace = %config.namespace(), "Connected to order collection");
                Ok(Self::new(collection))
            }
            Some(scheme) => {
                warn!(scheme, "Unsupported store backend");
                Err(StoreError::StorageUnavailable(format!(
                    "unsupported store backend: {scheme}"
                )))
            }
            None => {
                warn!("Store URL has no scheme");
                Err(StoreError::StorageUnavailable(format!(
                    "invalid store url: {}",
                    config.url
                )))
            }
        }
    }

    /// Appends one order summary to the collection.
    #[instrument(skip(self))]
    pub async fn add(&self, order: &str) -> Result<(), StoreError> {
        debug!("Sending insert");
        match self.collection.insert(OrderDocument::new(order)).await {
            Ok(()) => {
                info!("Order stored");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Insert failed");
                Err(e)
            }
        }
    }

    /// Stores the summary rendered by [`Order::process`].
    pub async fn add_order(&self, order: &Order) -> Result<(), StoreError> {
        self.add(&order.process()).await
    }

    /// All stored summaries, in the order the collection returns them.
    ///
    /// Insertion order is only preserved if the backend preserves it.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        debug!("Sending find_all");
        let documents = self.collection.find_all().await.inspect_err(|e| {
            warn!(error = %e, "find_all failed");
        })?;
        debug!(size = documents.len(), "Orders listed");
        Ok(documents.into_iter().map(|document| document.order).collect())
    }
}

/// The process-wide store, connected from [`StoreConfig::from_env`] on first use.
pub async fn global() -> Result<Arc<OrderStore>, StoreError> {
    global_with(|| async { OrderStore::connect(&StoreConfig::from_env()).await }).await
}

/// The process-wide store, created with `init` if no instance exists yet.
///
/// `init` runs at most once per successful initialization, even when many tasks
/// race on first access; later calls ignore their `init` and return the existing
/// instance. If `init` fails the cell stays empty and the next call tries again.
pub async fn global_with<F, Fut>(init: F) -> Result<Arc<OrderStore>, StoreError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<OrderStore, StoreError>>,
{
    GLOBAL_STORE
        .get_or_try_init(|| async {
            info!("Initializing global order store");
            init().await.map(Arc::new)
        })
        .await
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::mock::MockCollection;
    use super::*;

    #[tokio::test]
    async fn test_add_order() {
        let mock = MockCollection::new();
        mock.expect_insert().return_ok();

        let store = OrderStore::new(mock.clone());
        store.add("Pizza").await.unwrap();

        assert_eq!(mock.inserted(), vec![OrderDocument::new("Pizza")]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_orders() {
        let mock = MockCollection::new();
        mock.expect_find_all()
            .return_ok(vec![OrderDocument::new("Pizza"), OrderDocument::new("Pasta")]);

        let store = OrderStore::new(mock.clone());
        let orders = store.list().await.unwrap();

        assert_eq!(orders, vec!["Pizza".to_string(), "Pasta".to_string()]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_surfaces_unavailable() {
        let mock = MockCollection::new();
        mock.expect_find_all()
            .return_err(StoreError::StorageUnavailable("connection refused".to_string()));

        let store = OrderStore::new(mock.clone());
        let result = store.list().await;

        assert_eq!(
            result,
            Err(StoreError::StorageUnavailable("connection refused".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_follows_backend_order() {
        let mock = MockCollection::new();
        mock.expect_find_all()
            .return_ok(vec![OrderDocument::new("Pasta"), OrderDocument::new("Pizza")]);

        let store = OrderStore::new(mock.clone());
        assert_eq!(store.list().await.unwrap(), vec!["Pasta", "Pizza"]);
    }

    #[tokio::test]
    async fn test_add_surfaces_unavailable_without_retry() {
        let mock = MockCollection::new();
        mock.expect_insert()
            .return_err(StoreError::StorageUnavailable("connection refused".to_string()));

        let store = OrderStore::new(mock.clone());
        let result = store.add("Pizza").await;

        assert!(matches!(result, Err(StoreError::StorageUnavailable(_))));
        assert_eq!(mock.inserted().len(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_order_stores_summary() {
        let mock = MockCollection::new();
        mock.expect_insert().return_ok();

        let order = crate::factory::OrderBuilder::create("bulk", "Ana", ["Soup"], Some(2)).unwrap();
        OrderStore::new(mock.clone()).add_order(&order).await.unwrap();

        assert_eq!(
            mock.inserted(),
            vec![OrderDocument::new("Bulk order for Ana: Soup x2")]
        );
    }

    #[tokio::test]
    async fn test_connect_memory_backend() {
        let store = OrderStore::connect(&StoreConfig::default()).await.unwrap();
        store.add("Pizza").await.unwrap();
        store.add("Pasta").await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec!["Pizza", "Pasta"]);
    }

    #[tokio::test]
    async fn test_connect_unsupported_backend() {
        let config = StoreConfig {
            url: "mongodb://localhost:27017/".to_string(),
            ..StoreConfig::default()
        };
        let result = OrderStore::connect(&config).await;
        assert!(matches!(result, Err(StoreError::StorageUnavailable(_))));
    }
}
