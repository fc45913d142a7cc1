#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Kitchen Orders
//!
//! > **An in-process order pipeline for a restaurant kitchen.**
//!
//! Orders are built from a type tag, stored in a single shared order store, and
//! announced to every subscribed kitchen station.
//!
//! ## 🚀 Core Concepts
//!
//! ### Orders are values
//! [`Order`](model::Order) is a sum type (`Regular | Bulk`). Orders are validated once by
//! [`OrderBuilder`](factory::OrderBuilder) and never change afterwards. What travels
//! through the rest of the system is the summary line from [`Order::process`](model::Order::process).
//!
//! ### One store per process
//! [`OrderStore`](store::OrderStore) holds the only connection to the order collection.
//! [`store::global`] hands every caller the same `Arc<OrderStore>`, created on first use
//! behind a one-time async initializer, so concurrent first callers never open two
//! connections. Code that prefers explicit wiring builds its own store and passes it in.
//!
//! ### Fan-out, fail-fast
//! [`NotificationBus`](notify::NotificationBus) calls each [`Subscriber`](notify::Subscriber)
//! in subscription order. The first failure stops delivery and is returned to the caller.
//!
//! ### Mocking: Testing without a backend
//! [`store::mock::MockCollection`] scripts the collection's responses and records every
//! inserted document.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`factory`])
//! - **Key items**: [`Order`](model::Order), [`OrderKind`](model::OrderKind),
//!   [`OrderBuilder`](factory::OrderBuilder), [`OrderError`](factory::OrderError).
//!
//! ### 2. The Registry ([`store`])
//! - **Role**: Persists summaries into an [`OrderCollection`](store::OrderCollection).
//! - **Key items**: [`OrderStore`](store::OrderStore), [`MemoryCollection`](store::MemoryCollection),
//!   [`StoreConfig`](store::StoreConfig).
//!
//! ### 3. The Pass ([`notify`])
//! - **Role**: Tells the kitchen about new orders.
//! - **Key items**: [`NotificationBus`](notify::NotificationBus), [`Chef`](notify::Chef),
//!   [`OrderSink`](notify::OrderSink).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Role**: Wires store and bus together and runs build, store, notify in order.
//! - **Key items**: [`Kitchen`](lifecycle::Kitchen), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod factory;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod store;
