//! Error types for order notifications.

use thiserror::Error;

/// Errors raised by an [`OrderSink`](super::OrderSink).
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Sink write failed: {0}")]
    Io(#[from] std::io::Error),

    /// The sink no longer accepts lines.
    #[error("Sink closed")]
    Closed,
}

/// Errors a [`Subscriber`](super::Subscriber) may return from `receive`.
#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// The subscriber refused the order.
    #[error("Order rejected: {0}")]
    Rejected(String),
}

/// Errors returned by [`NotificationBus::notify`](super::NotificationBus::notify).
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A subscriber failed; subscribers after `position` were not notified.
    #[error("Subscriber #{position} failed on order {order:?}: {source}")]
    Delivery {
        position: usize,
        order: String,
        #[source]
        source: SubscriberError,
    },
}
