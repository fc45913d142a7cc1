//! # Observability & Tracing
//!
//! Structured logging for the order pipeline, built on `tracing`.
//!
//! ## What Gets Traced
//!
//! - **Store**: every `add` and `list` runs in its own span; successful inserts log at
//!   `info`, backend failures at `warn`.
//! - **Collection**: the in-process collection logs startup, shutdown, and each request.
//! - **Notifications**: subscriptions and fan-out at `debug`, failed deliveries at `warn`.
//! - **Kitchen**: `place_order` wraps the store and notify steps in one span.
//!
//! ## Usage
//!
//! ```bash
//! # Stored orders and collection lifecycle
//! RUST_LOG=info cargo test
//!
//! # Every request, subscription, and delivery
//! RUST_LOG=debug cargo test
//!
//! # Only the store
//! RUST_LOG=kitchen_orders::store=debug cargo test
//! ```
//!
//! With `RUST_LOG=debug` a placed order reads:
//!
//! ```text
//! INFO place_order:add: Order stored order="Regular order for Ana: Soup"
//! DEBUG place_order:notify: Notified delivered=2
//! ```
//!
//! [`TracingSink`](crate::notify::TracingSink) turns chef announcements into `info`
//! events with target `kitchen`, so `RUST_LOG=kitchen=info` shows only those lines.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once: if a global subscriber is already installed
/// (by an earlier call or by the host application) this does nothing.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
}
