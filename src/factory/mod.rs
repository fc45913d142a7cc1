//! Order construction.
//!
//! [`OrderBuilder`] turns a type tag plus raw parameters into a validated
//! [`Order`]. It has no side effects: the same inputs always produce equal orders.

pub mod error;

pub use error::*;

use crate::model::{BulkOrder, Order, OrderKind, RegularOrder};
use std::str::FromStr;
use tracing::debug;

impl FromStr for OrderKind {
    type Err = OrderError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "regular" => Ok(OrderKind::Regular),
            "bulk" => Ok(OrderKind::Bulk),
            other => Err(OrderError::UnknownOrderType(other.to_string())),
        }
    }
}

/// Builds orders from a type tag and parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderBuilder;

impl OrderBuilder {
    /// Builds an order from its string tag (`"regular"` or `"bulk"`).
    ///
    /// # Errors
    /// - [`OrderError::UnknownOrderType`] for any other tag.
    /// - [`OrderError::InvalidArgument`] when the client or dish list is empty,
    ///   or a bulk order has no positive quantity.
    pub fn create<I, S>(
        tag: &str,
        client: impl Into<String>,
        dishes: I,
        quantity: Option<i64>,
    ) -> Result<Order, OrderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kind = tag.parse::<OrderKind>()?;
        Self::build(kind, client, dishes, quantity)
    }

    /// Builds an order of a known kind. `quantity` is ignored for regular orders.
    pub fn build<I, S>(
        kind: OrderKind,
        client: impl Into<String>,
        dishes: I,
        quantity: Option<i64>,
    ) -> Result<Order, OrderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let client = client.into();
        let dishes: Vec<String> = dishes.into_iter().map(Into::into).collect();

        if client.is_empty() {
            return Err(OrderError::InvalidArgument("client must not be empty".to_string()));
        }
        if dishes.is_empty() {
            return Err(OrderError::InvalidArgument("dish list must not be empty".to_string()));
        }

        let order = match kind {
            OrderKind::Regular => Order::Regular(RegularOrder::new(client, dishes)),
            OrderKind::Bulk => {
                let quantity = bulk_quantity(quantity)?;
                Order::Bulk(BulkOrder::new(client, dishes, quantity))
            }
        };
        debug!(kind = %order.kind(), client = order.client(), "Order built");
        Ok(order)
    }
}

fn bulk_quantity(quantity: Option<i64>) -> Result<u32, OrderError> {
    let quantity = quantity.ok_or_else(|| {
        OrderError::InvalidArgument("bulk order requires a quantity".to_string())
    })?;
    if quantity <= 0 {
        return Err(OrderError::InvalidArgument(format!(
            "bulk quantity must be positive, got {quantity}"
        )));
    }
    u32::try_from(quantity).map_err(|_| {
        OrderError::InvalidArgument(format!("bulk quantity {quantity} is too large"))
    })
}
