//! The kitchen-side subscriber.

use super::{OrderSink, Subscriber, SubscriberError};
use std::sync::Arc;
use tracing::debug;

/// Announces every new order on its sink as
/// `"<role> received new order: <order>"`.
///
/// A `Chef` keeps no state between calls; each `receive` writes exactly one line.
#[derive(Clone)]
pub struct Chef {
    role: String,
    sink: Arc<dyn OrderSink>,
}

impl Chef {
    pub const DEFAULT_ROLE: &'static str = "Chef";

    pub fn new(sink: Arc<dyn OrderSink>) -> Self {
        Self::with_role(Self::DEFAULT_ROLE, sink)
    }

    /// A chef announcing under another role, e.g. `"Pastry chef"`.
    pub fn with_role(role: impl Into<String>, sink: Arc<dyn OrderSink>) -> Self {
        Self {
            role: role.into(),
            sink,
        }
    }
}

impl std::fmt::Debug for Chef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chef").field("role", &self.role).finish_non_exhaustive()
    }
}

impl Subscriber for Chef {
    fn role(&self) -> &str {
        &self.role
    }

    fn receive(&self, order: &str) -> Result<(), SubscriberError> {
        debug!(role = %self.role, order, "Order received");
        self.sink
            .write_line(&format!("{} received new order: {}", self.role, order))?;
        Ok(())
    }
}
