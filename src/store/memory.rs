//! # In-Process Collection
//!
//! An [`OrderCollection`] served by a Tokio task. The task owns the documents and
//! handles requests one at a time, so no lock guards the data; callers talk to it
//! through a cloneable [`MemoryCollection`] handle holding the channel sender.
//!
//! [`MemoryCollection::spawn_dedicated`] runs the task on its own thread and
//! current-thread runtime, so the collection outlives whichever runtime opened it.
//! [`MemoryCollection::spawn`] uses the caller's runtime instead.
//!
//! When the task is gone (aborted, or its runtime shut down) every call fails
//! with [`StoreError::StorageUnavailable`], the same way a remote backend would.

use super::{OrderCollection, OrderDocument, StoreError};
use async_trait::async_trait;
use std::thread;
use tokio::runtime;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug)]
enum CollectionRequest {
    Insert {
        document: OrderDocument,
        respond_to: oneshot::Sender<()>,
    },
    FindAll {
        respond_to: oneshot::Sender<Vec<OrderDocument>>,
    },
}

/// Server half: owns the documents and the receiving end of the channel.
struct CollectionActor {
    name: String,
    receiver: mpsc::Receiver<CollectionRequest>,
    documents: Vec<OrderDocument>,
}

impl CollectionActor {
    async fn run(mut self) {
        info!(collection = %self.name, "Collection started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                CollectionRequest::Insert { document, respond_to } => {
                    debug!(collection = %self.name, ?document, "Insert");
                    self.documents.push(document);
                    let _ = respond_to.send(());
                }
                CollectionRequest::FindAll { respond_to } => {
                    debug!(collection = %self.name, size = self.documents.len(), "FindAll");
                    let _ = respond_to.send(self.documents.clone());
                }
            }
        }

        info!(collection = %self.name, size = self.documents.len(), "Collection stopped");
    }
}

/// Client half of the in-process collection. Cheap to clone.
#[derive(Debug, Clone)]
pub struct MemoryCollection {
    sender: mpsc::Sender<CollectionRequest>,
}

impl MemoryCollection {
    fn actor(name: String, buffer_size: usize) -> (Self, CollectionActor) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = CollectionActor {
            name,
            receiver,
            documents: Vec::new(),
        };
        (Self { sender }, actor)
    }

    /// Spawns the collection task on the current Tokio runtime.
    ///
    /// The task exits once every handle has been dropped, or when that runtime shuts down.
    pub fn spawn(name: impl Into<String>, buffer_size: usize) -> (Self, JoinHandle<()>) {
        let (collection, actor) = Self::actor(name.into(), buffer_size);
        let handle = tokio::spawn(actor.run());
        (collection, handle)
    }

    /// Runs the collection on a dedicated thread with its own current-thread runtime.
    ///
    /// Handles work from any runtime, and the collection keeps serving after the
    /// caller's runtime is gone. The thread exits once every handle has been dropped.
    pub fn spawn_dedicated(
        name: impl Into<String>,
        buffer_size: usize,
    ) -> Result<(Self, thread::JoinHandle<()>), StoreError> {
        let name = name.into();
        let runtime = runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::StorageUnavailable(format!("collection runtime: {e}")))?;
        let (collection, actor) = Self::actor(name.clone(), buffer_size);
        let handle = thread::Builder::new()
            .name(format!("collection-{name}"))
            .spawn(move || runtime.block_on(actor.run()))
            .map_err(|e| StoreError::StorageUnavailable(format!("collection thread: {e}")))?;
        Ok((collection, handle))
    }
}

#[async_trait]
impl OrderCollection for MemoryCollection {
    async fn insert(&self, document: OrderDocument) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Insert { document, respond_to })
            .await
            .map_err(|_| StoreError::StorageUnavailable("collection closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::StorageUnavailable("collection dropped response".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<OrderDocument>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::FindAll { respond_to })
            .await
            .map_err(|_| StoreError::StorageUnavailable("collection closed".to_string()))?;
        response
            .await
            .map_err(|_| StoreError::StorageUnavailable("collection dropped response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_then_find_all_keeps_order() {
        let (collection, _handle) = MemoryCollection::spawn("orders", 8);
        collection.insert(OrderDocument::new("Pizza")).await.unwrap();
        collection.insert(OrderDocument::new("Pasta")).await.unwrap();

        let documents = collection.find_all().await.unwrap();
        assert_eq!(
            documents,
            vec![OrderDocument::new("Pizza"), OrderDocument::new("Pasta")]
        );
    }

    #[tokio::test]
    async fn test_clones_share_documents() {
        let (collection, _handle) = MemoryCollection::spawn("orders", 8);
        let other = collection.clone();
        other.insert(OrderDocument::new("Burger")).await.unwrap();

        assert_eq!(collection.find_all().await.unwrap().len(), 1);
    }

    #[test]
    fn test_dedicated_collection_outlives_runtime() {
        let (collection, thread) = MemoryCollection::spawn_dedicated("orders", 8).unwrap();

        let first = runtime::Runtime::new().unwrap();
        first
            .block_on(collection.insert(OrderDocument::new("Pizza")))
            .unwrap();
        drop(first);

        let second = runtime::Runtime::new().unwrap();
        let documents = second.block_on(collection.find_all()).unwrap();
        assert_eq!(documents, vec![OrderDocument::new("Pizza")]);

        drop(collection);
        thread.join().unwrap();
    }

    #[tokio::test]
    async fn test_stopped_collection_is_unavailable() {
        let (collection, handle) = MemoryCollection::spawn("orders", 8);
        handle.abort();
        let _ = handle.await;

        let result = collection.insert(OrderDocument::new("Pizza")).await;
        assert!(matches!(result, Err(StoreError::StorageUnavailable(_))));
        let result = collection.find_all().await;
        assert!(matches!(result, Err(StoreError::StorageUnavailable(_))));
    }
}
