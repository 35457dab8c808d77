//! Shared fixtures for auction integration tests.

#![allow(dead_code)]

use auctions_types::{IssuerId, Order, OrderId, Price, Reference, Tradable};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once. `RUST_LOG=debug` shows book detail.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn goog() -> Tradable {
    Tradable::new("GOOG")
}

/// Order, issuer and reference all share `n`, so tests can name participants.
pub fn ask(n: u128, limit: i64) -> Order {
    Order::ask(OrderId::from_u128(n), IssuerId::from_u128(n), Price(limit), goog())
}

pub fn bid(n: u128, limit: i64) -> Order {
    Order::bid(OrderId::from_u128(n), IssuerId::from_u128(n), Price(limit), goog())
}

pub fn reference(n: u128) -> Reference {
    Reference::from_u128(n)
}

/// Reservation orders use participant 0.
pub fn reservation_ask(limit: Price) -> Order {
    Order::ask(OrderId::from_u128(0), IssuerId::from_u128(0), limit, goog())
}

pub fn reservation_bid(limit: Price) -> Order {
    Order::bid(OrderId::from_u128(0), IssuerId::from_u128(0), limit, goog())
}
