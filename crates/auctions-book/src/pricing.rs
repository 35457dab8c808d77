//! Pricing policies: derive a clearing price from order book state.
//!
//! All policies read the two four-heap quotes of the book:
//! - the **ask quote** `min(worst matched bid, best unmatched ask)`
//! - the **bid quote** `max(worst matched ask, best unmatched bid)`
//!
//! On any valid book `bid quote <= ask quote`, and every price in that range
//! is acceptable to every matched order. Policies are pure: the same book
//! always yields the same price.

use auctions_types::{Price, Result, Weight};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::FourHeapOrderBook;

/// How a uniform clearing price is chosen from the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "weight", rename_all = "snake_case")]
pub enum PricingPolicy {
    /// Price at the ask quote. Favours sellers; a first-price rule in a
    /// sealed-bid auction.
    AskQuote,
    /// Price at the bid quote. Favours buyers; a second-price rule in a
    /// sealed-bid auction.
    BidQuote,
    /// Floor of the midpoint of the two quotes.
    MidPoint,
    /// `round(weight * bid quote + (1 - weight) * ask quote)`.
    WeightedAverage(Weight),
}

impl PricingPolicy {
    /// Weighted-average policy.
    ///
    /// # Errors
    /// `InvalidWeight` unless `0 <= weight <= 1`.
    pub fn weighted_average(weight: Decimal) -> Result<Self> {
        Ok(Self::WeightedAverage(Weight::new(weight)?))
    }

    /// Derive a price from the book, or `None` if the required quotes are missing.
    #[must_use]
    pub fn price(&self, book: &FourHeapOrderBook) -> Option<Price> {
        match self {
            Self::AskQuote => book.ask_price_quote(),
            Self::BidQuote => book.bid_price_quote(),
            Self::MidPoint => {
                let ask = book.ask_price_quote()?;
                let bid = book.bid_price_quote()?;
                Some(Price::midpoint(ask, bid))
            }
            Self::WeightedAverage(weight) => {
                let ask = book.ask_price_quote()?;
                let bid = book.bid_price_quote()?;
                Some(Price::weighted(ask, bid, *weight))
            }
        }
    }
}

impl std::fmt::Display for PricingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AskQuote => write!(f, "ask-quote"),
            Self::BidQuote => write!(f, "bid-quote"),
            Self::MidPoint => write!(f, "mid-point"),
            Self::WeightedAverage(w) => write!(f, "weighted-average({w})"),
        }
    }
}
