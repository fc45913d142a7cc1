//! The [`Kitchen`] composition root: build, store, then notify.

use crate::factory::OrderBuilder;
use crate::lifecycle::KitchenError;
use crate::model::Order;
use crate::notify::{NotificationBus, Subscriber};
use crate::store::{OrderStore, StoreError};
use std::sync::Arc;
use tracing::{info, instrument};

/// Composition root for the order pipeline.
///
/// `Kitchen` owns a [`NotificationBus`] and shares the [`OrderStore`] it was given,
/// usually the process-wide one from [`store::global`](crate::store::global).
/// Storing and notifying stay two separate steps; the kitchen runs them in order
/// on behalf of the caller.
///
/// # Example
///
/// ```ignore
/// let kitchen = Kitchen::new(store::global().await?);
/// kitchen.subscribe(Arc::new(Chef::new(Arc::new(TracingSink))));
///
/// let summary = kitchen.take_order("bulk", "Ana", ["Soup"], Some(4)).await?;
/// assert_eq!(summary, "Bulk order for Ana: Soup x4");
/// ```
#[derive(Debug)]
pub struct Kitchen {
    store: Arc<OrderStore>,
    bus: NotificationBus,
}

impl Kitchen {
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self {
            store,
            bus: NotificationBus::new(),
        }
    }

    pub fn store(&self) -> &Arc<OrderStore> {
        &self.store
    }

    pub fn bus(&self) -> &NotificationBus {
        &self.bus
    }

    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) {
        self.bus.subscribe(subscriber);
    }

    /// Stores the order summary, then announces it to every subscriber.
    ///
    /// Returns the summary. If storing fails nobody is notified.
    #[instrument(skip(self, order), fields(kind = %order.kind(), client = order.client()))]
    pub async fn place_order(&self, order: &Order) -> Result<String, KitchenError> {
        let summary = order.process();
        self.store.add(&summary).await?;
        self.bus.notify(&summary)?;
        info!(%summary, "Order placed");
        Ok(summary)
    }

    /// Builds an order with [`OrderBuilder::create`] and places it.
    pub async fn take_order<I, S>(
        &self,
        tag: &str,
        client: impl Into<String>,
        dishes: I,
        quantity: Option<i64>,
    ) -> Result<String, KitchenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order = OrderBuilder::create(tag, client, dishes, quantity)?;
        self.place_order(&order).await
    }

    /// Every order summary in the store.
    pub async fn orders(&self) -> Result<Vec<String>, StoreError> {
        self.store.list().await
    }
}
