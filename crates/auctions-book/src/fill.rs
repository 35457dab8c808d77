//! Fills (spot contracts) produced by the clearing engine.

use auctions_types::{IssuerId, Order, Price, Tradable};
use serde::Serialize;

/// The record of one cleared ask/bid pair and its settlement price.
///
/// Only the clearing engine creates fills, so every fill pairs a crossing
/// ask and bid at a price both accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fill {
    ask: Order,
    bid: Order,
    price: Price,
}

impl Fill {
    pub(crate) fn new(ask: Order, bid: Order, price: Price) -> Self {
        debug_assert!(ask.is_ask() && bid.is_bid());
        debug_assert!(ask.accepts(price) && bid.accepts(price));
        Self { ask, bid, price }
    }

    #[must_use]
    pub fn ask_order(&self) -> &Order {
        &self.ask
    }

    #[must_use]
    pub fn bid_order(&self) -> &Order {
        &self.bid
    }

    #[must_use]
    pub fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn seller(&self) -> IssuerId {
        self.ask.issuer()
    }

    #[must_use]
    pub fn buyer(&self) -> IssuerId {
        self.bid.issuer()
    }

    #[must_use]
    pub fn tradable(&self) -> &Tradable {
        self.bid.tradable()
    }
}

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fill[{} -> {}] {} @ {}",
            self.ask.id(),
            self.bid.id(),
            self.tradable(),
            self.price
        )
    }
}
