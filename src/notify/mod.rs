//! # Kitchen Notifications
//!
//! [`NotificationBus`] fans a new-order event out to every [`Subscriber`],
//! synchronously and in subscription order.
//!
//! - Subscribing the same subscriber twice delivers every event to it twice.
//! - Delivery is fail-fast: the first subscriber error stops the fan-out and is
//!   returned from [`NotificationBus::notify`]; later subscribers see nothing.
//! - `notify` iterates over a snapshot taken under the lock, so a concurrent
//!   `subscribe` never shows up half-applied and a subscriber may itself subscribe
//!   others without deadlocking. Those late subscribers get the next event.

pub mod chef;
pub mod error;
pub mod sink;

pub use chef::*;
pub use error::*;
pub use sink::*;

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, instrument, warn};

/// Something that reacts to new orders.
pub trait Subscriber: Send + Sync {
    /// Name used in logs.
    fn role(&self) -> &str {
        "subscriber"
    }

    /// Handles one order summary. Each call is independent of the previous ones.
    fn receive(&self, order: &str) -> Result<(), SubscriberError>;
}

/// Ordered list of subscribers.
///
/// The bus holds shared handles: callers keep their own `Arc` and may go on
/// using the subscriber directly.
#[derive(Default)]
pub struct NotificationBus {
    subscribers: RwLock<Vec<Arc<dyn Subscriber>>>,
}

impl std::fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBus")
            .field("subscribers", &self.len())
            .finish()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subscriber. Duplicates are kept.
    pub fn subscribe(&self, subscriber: Arc<dyn Subscriber>) {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        debug!(role = subscriber.role(), position = subscribers.len(), "Subscribed");
        subscribers.push(subscriber);
    }

    pub fn len(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Delivers `order` to every subscriber in subscription order.
    ///
    /// # Errors
    /// [`NotifyError::Delivery`] for the first subscriber that fails; no further
    /// subscribers are called.
    #[instrument(skip(self))]
    pub fn notify(&self, order: &str) -> Result<(), NotifyError> {
        let snapshot: Vec<Arc<dyn Subscriber>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        for (position, subscriber) in snapshot.iter().enumerate() {
            if let Err(source) = subscriber.receive(order) {
                warn!(role = subscriber.role(), position, error = %source, "Delivery failed");
                return Err(NotifyError::Delivery {
                    position,
                    order: order.to_string(),
                    source,
                });
            }
        }
        debug!(delivered = snapshot.len(), "Notified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every call into a log shared between recorders.
    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<(String, String)>>>,
        fail: bool,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Arc<Mutex<Vec<(String, String)>>>) -> Arc<Self> {
            Arc::new(Self { name, log: log.clone(), fail: false })
        }

        fn failing(name: &'static str, log: &Arc<Mutex<Vec<(String, String)>>>) -> Arc<Self> {
            Arc::new(Self { name, log: log.clone(), fail: true })
        }
    }

    impl Subscriber for Recorder {
        fn role(&self) -> &str {
            self.name
        }

        fn receive(&self, order: &str) -> Result<(), SubscriberError> {
            self.log
                .lock()
                .unwrap()
                .push((self.name.to_string(), order.to_string()));
            if self.fail {
                return Err(SubscriberError::Rejected("kitchen closed".to_string()));
            }
            Ok(())
        }
    }

    fn entries(log: &Arc<Mutex<Vec<(String, String)>>>) -> Vec<(String, String)> {
        log.lock().unwrap().clone()
    }

    fn entry(name: &str, order: &str) -> (String, String) {
        (name.to_string(), order.to_string())
    }

    #[test]
    fn test_notify() {
        let log = Arc::default();
        let bus = NotificationBus::new();
        bus.subscribe(Recorder::new("chef", &log));

        bus.notify("Pizza").unwrap();

        assert_eq!(entries(&log), vec![entry("chef", "Pizza")]);
    }

    #[test]
    fn test_notifies_all_subscribers_in_order() {
        let log = Arc::default();
        let bus = NotificationBus::new();
        bus.subscribe(Recorder::new("a", &log));
        bus.subscribe(Recorder::new("b", &log));

        bus.notify("Burger").unwrap();

        assert_eq!(entries(&log), vec![entry("a", "Burger"), entry("b", "Burger")]);
    }

    #[test]
    fn test_duplicate_subscription_delivers_twice() {
        let log = Arc::default();
        let bus = NotificationBus::new();
        let chef = Recorder::new("chef", &log);
        bus.subscribe(chef.clone());
        bus.subscribe(chef);

        bus.notify("Pizza").unwrap();

        assert_eq!(bus.len(), 2);
        assert_eq!(entries(&log), vec![entry("chef", "Pizza"), entry("chef", "Pizza")]);
    }

    #[test]
    fn test_failure_stops_remaining_deliveries() {
        let log = Arc::default();
        let bus = NotificationBus::new();
        bus.subscribe(Recorder::new("a", &log));
        bus.subscribe(Recorder::failing("b", &log));
        bus.subscribe(Recorder::new("c", &log));

        let err = bus.notify("Pizza").unwrap_err();

        assert!(matches!(
            err,
            NotifyError::Delivery { position: 1, ref order, source: SubscriberError::Rejected(_) }
                if order == "Pizza"
        ));
        assert_eq!(entries(&log), vec![entry("a", "Pizza"), entry("b", "Pizza")]);
    }

    #[test]
    fn test_empty_bus() {
        let bus = NotificationBus::new();
        assert!(bus.is_empty());
        bus.notify("Pizza").unwrap();
    }

    #[test]
    fn test_subscriber_can_subscribe_during_delivery() {
        struct Recruiter {
            bus: Arc<NotificationBus>,
            log: Arc<Mutex<Vec<(String, String)>>>,
        }

        impl Subscriber for Recruiter {
            fn receive(&self, _order: &str) -> Result<(), SubscriberError> {
                self.bus.subscribe(Recorder::new("late", &self.log));
                Ok(())
            }
        }

        let log = Arc::default();
        let bus = Arc::new(NotificationBus::new());
        bus.subscribe(Arc::new(Recruiter { bus: bus.clone(), log: Arc::clone(&log) }));

        bus.notify("Pizza").unwrap();
        assert!(entries(&log).is_empty());

        bus.notify("Pasta").unwrap();
        assert_eq!(entries(&log), vec![entry("late", "Pasta")]);
    }
}
