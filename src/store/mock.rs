//! # Mock Collection
//!
//! Utilities for testing the store (and anything built on it) without a real backend.
//!
//! Queue the calls you expect with [`MockCollection::expect_insert`] and
//! [`MockCollection::expect_find_all`], hand the mock to an
//! [`OrderStore`](super::OrderStore), then call [`MockCollection::verify`].
//! Every inserted document is recorded and can be inspected with
//! [`MockCollection::inserted`].
//!
//! # Example
//! ```ignore
//! let mock = MockCollection::new();
//! mock.expect_insert().return_ok();
//! mock.expect_find_all().return_ok(vec![OrderDocument::new("Pizza")]);
//!
//! let store = OrderStore::new(mock.clone());
//! store.add("Pizza").await?;
//! assert_eq!(store.list().await?, vec!["Pizza"]);
//! mock.verify();
//! ```

use super::{OrderCollection, OrderDocument, StoreError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// An expected call on the mock and the response to hand back.
#[derive(Debug)]
enum Expectation {
    Insert {
        response: Result<(), StoreError>,
    },
    FindAll {
        response: Result<Vec<OrderDocument>, StoreError>,
    },
}

#[derive(Debug, Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    inserted: Vec<OrderDocument>,
}

/// A scripted [`OrderCollection`]. Clones share the same script and records.
///
/// Calls that arrive with no matching expectation at the front of the queue panic.
#[derive(Debug, Clone, Default)]
pub struct MockCollection {
    state: Arc<Mutex<MockState>>,
}

impl MockCollection {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Expects an `insert` call.
    pub fn expect_insert(&self) -> InsertExpectationBuilder {
        InsertExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects a `find_all` call.
    pub fn expect_find_all(&self) -> FindAllExpectationBuilder {
        FindAllExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Documents passed to `insert`, in call order. Failed inserts are included.
    pub fn inserted(&self) -> Vec<OrderDocument> {
        self.state().inserted.clone()
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.state().expectations.len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl OrderCollection for MockCollection {
    async fn insert(&self, document: OrderDocument) -> Result<(), StoreError> {
        let mut state = self.state();
        state.inserted.push(document.clone());
        match state.expectations.pop_front() {
            Some(Expectation::Insert { response }) => response,
            other => panic!("Unexpected insert({document:?}), expected {other:?}"),
        }
    }

    async fn find_all(&self) -> Result<Vec<OrderDocument>, StoreError> {
        let mut state = self.state();
        match state.expectations.pop_front() {
            Some(Expectation::FindAll { response }) => response,
            other => panic!("Unexpected find_all(), expected {other:?}"),
        }
    }
}

/// Builder for `insert` expectations.
pub struct InsertExpectationBuilder {
    state: Arc<Mutex<MockState>>,
}

impl InsertExpectationBuilder {
    fn push(self, response: Result<(), StoreError>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.expectations.push_back(Expectation::Insert { response });
    }

    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Sets the expectation to fail.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }
}

/// Builder for `find_all` expectations.
pub struct FindAllExpectationBuilder {
    state: Arc<Mutex<MockState>>,
}

impl FindAllExpectationBuilder {
    fn push(self, response: Result<Vec<OrderDocument>, StoreError>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.expectations.push_back(Expectation::FindAll { response });
    }

    /// Sets the expectation to return these documents.
    pub fn return_ok(self, documents: Vec<OrderDocument>) {
        self.push(Ok(documents));
    }

    /// Sets the expectation to fail.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }
}
