//! A customer order as produced by [`OrderBuilder`](crate::factory::OrderBuilder).
//!
//! Orders are immutable once built: fields are private and only exposed through
//! read-only accessors. Both variants render a human-readable summary through
//! [`Order::process`], which is also what gets stored and broadcast to the kitchen.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The supported order variants, parsed from the tags `"regular"` and `"bulk"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Regular,
    Bulk,
}

impl OrderKind {
    /// The tag this kind is parsed from.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Regular => "regular",
            OrderKind::Bulk => "bulk",
        }
    }
}

impl Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-portion order: one of each listed dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegularOrder {
    client: String,
    dishes: Vec<String>,
}

impl RegularOrder {
    pub(crate) fn new(client: String, dishes: Vec<String>) -> Self {
        Self { client, dishes }
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn dishes(&self) -> &[String] {
        &self.dishes
    }

    /// Renders `"Regular order for {client}: {dish, dish, ...}"`.
    pub fn process(&self) -> String {
        format!("Regular order for {}: {}", self.client, self.dishes.join(", "))
    }
}

/// An order for `quantity` portions of the listed dishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkOrder {
    client: String,
    dishes: Vec<String>,
    quantity: u32,
}

impl BulkOrder {
    pub(crate) fn new(client: String, dishes: Vec<String>, quantity: u32) -> Self {
        Self {
            client,
            dishes,
            quantity,
        }
    }

    pub fn client(&self) -> &str {
        &self.client
    }

    pub fn dishes(&self) -> &[String] {
        &self.dishes
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Renders `"Bulk order for {client}: {dish, dish, ...} x{quantity}"`.
    pub fn process(&self) -> String {
        format!(
            "Bulk order for {}: {} x{}",
            self.client,
            self.dishes.join(", "),
            self.quantity
        )
    }
}

/// Any order the kitchen accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Order {
    Regular(RegularOrder),
    Bulk(BulkOrder),
}

impl Order {
    pub fn kind(&self) -> OrderKind {
        match self {
            Order::Regular(_) => OrderKind::Regular,
            Order::Bulk(_) => OrderKind::Bulk,
        }
    }

    pub fn client(&self) -> &str {
        match self {
            Order::Regular(order) => order.client(),
            Order::Bulk(order) => order.client(),
        }
    }

    pub fn dishes(&self) -> &[String] {
        match self {
            Order::Regular(order) => order.dishes(),
            Order::Bulk(order) => order.dishes(),
        }
    }

    /// Portions per dish. Regular orders are always a single portion.
    pub fn quantity(&self) -> u32 {
        match self {
            Order::Regular(_) => 1,
            Order::Bulk(order) => order.quantity(),
        }
    }

    /// The summary line stored in the order collection and sent to subscribers.
    pub fn process(&self) -> String {
        match self {
            Order::Regular(order) => order.process(),
            Order::Bulk(order) => order.process(),
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.process())
    }
}
