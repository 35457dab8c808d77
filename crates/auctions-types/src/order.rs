//! Single-unit limit orders.
//!
//! An [`Order`] is a request to trade exactly one unit of a [`Tradable`] at a
//! limit price. Orders are immutable value objects; the engine consumes them
//! already validated and never rewrites them.

use serde::{Deserialize, Serialize};

use crate::{IssuerId, OrderId, Price, Tradable};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Side {
    /// Sell one unit at or above the limit.
    Ask,
    /// Buy one unit at or below the limit.
    Bid,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Ask => Self::Bid,
            Self::Bid => Self::Ask,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ask => write!(f, "ASK"),
            Self::Bid => write!(f, "BID"),
        }
    }
}

/// Single-unit limit order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    issuer: IssuerId,
    side: Side,
    limit: Price,
    tradable: Tradable,
}

impl Order {
    #[must_use]
    pub fn new(id: OrderId, issuer: IssuerId, side: Side, limit: Price, tradable: Tradable) -> Self {
        Self {
            id,
            issuer,
            side,
            limit,
            tradable,
        }
    }

    #[must_use]
    pub fn ask(id: OrderId, issuer: IssuerId, limit: Price, tradable: Tradable) -> Self {
        Self::new(id, issuer, Side::Ask, limit, tradable)
    }

    #[must_use]
    pub fn bid(id: OrderId, issuer: IssuerId, limit: Price, tradable: Tradable) -> Self {
        Self::new(id, issuer, Side::Bid, limit, tradable)
    }

    #[must_use]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[must_use]
    pub fn issuer(&self) -> IssuerId {
        self.issuer
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn limit(&self) -> Price {
        self.limit
    }

    #[must_use]
    pub fn tradable(&self) -> &Tradable {
        &self.tradable
    }

    #[must_use]
    pub fn is_ask(&self) -> bool {
        self.side == Side::Ask
    }

    #[must_use]
    pub fn is_bid(&self) -> bool {
        self.side == Side::Bid
    }

    /// Whether `self` and `other` sit on opposite sides and the ask limit does
    /// not exceed the bid limit.
    #[must_use]
    pub fn crosses(&self, other: &Self) -> bool {
        match (self.side, other.side) {
            (Side::Ask, Side::Bid) => self.limit <= other.limit,
            (Side::Bid, Side::Ask) => other.limit <= self.limit,
            _ => false,
        }
    }

    /// Whether this order would accept a trade at `price`.
    #[must_use]
    pub fn accepts(&self, price: Price) -> bool {
        match self.side {
            Side::Ask => self.limit <= price,
            Side::Bid => self.limit >= price,
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} @ {} [{}]",
            self.side, self.tradable, self.limit, self.id
        )
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy_ask(limit: i64, tradable: &Tradable) -> Self {
        Self::ask(OrderId::random(), IssuerId::random(), Price(limit), tradable.clone())
    }

    pub fn dummy_bid(limit: i64, tradable: &Tradable) -> Self {
        Self::bid(OrderId::random(), IssuerId::random(), Price(limit), tradable.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goog() -> Tradable {
        Tradable::new("GOOG")
    }

    #[test]
    fn side_display_and_opposite() {
        assert_eq!(format!("{}", Side::Ask), "ASK");
        assert_eq!(format!("{}", Side::Bid), "BID");
        assert_eq!(Side::Ask.opposite(), Side::Bid);
        assert_eq!(Side::Bid.opposite(), Side::Ask);
    }

    #[test]
    fn constructors_set_side() {
        let ask = Order::dummy_ask(5, &goog());
        let bid = Order::dummy_bid(10, &goog());
        assert!(ask.is_ask() && !ask.is_bid());
        assert!(bid.is_bid() && !bid.is_ask());
        assert_eq!(ask.limit(), Price(5));
    }

    #[test]
    fn crossing_is_symmetric() {
        let ask = Order::dummy_ask(5, &goog());
        let bid = Order::dummy_bid(5, &goog());
        assert!(ask.crosses(&bid));
        assert!(bid.crosses(&ask));

        let high_ask = Order::dummy_ask(6, &goog());
        assert!(!high_ask.crosses(&bid));
        assert!(!ask.crosses(&high_ask));
    }

    #[test]
    fn acceptance_by_side() {
        let ask = Order::dummy_ask(5, &goog());
        assert!(ask.accepts(Price(5)));
        assert!(ask.accepts(Price(6)));
        assert!(!ask.accepts(Price(4)));

        let bid = Order::dummy_bid(5, &goog());
        assert!(bid.accepts(Price(4)));
        assert!(!bid.accepts(Price(6)));
    }

    #[test]
    fn serde_roundtrip() {
        let order = Order::dummy_bid(42, &goog());
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
