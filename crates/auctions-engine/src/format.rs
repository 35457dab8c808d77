//! Auction formats.
//!
//! Every auction runs the same book and clearing engine. A format only fixes
//! two things:
//! - which side, if any, holds a single reservation order placed at
//!   construction, and therefore which side receives live order flow
//! - whether the auction answers quote requests before it clears

use auctions_types::Side;
use serde::{Deserialize, Serialize};

/// Whether an auction answers quote requests before clearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteVisibility {
    /// Submissions are private; quote requests are refused.
    Sealed,
    /// Ask, bid and spread quotes are public.
    Open,
}

/// The shape of an auction: reservation side and quote visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionFormat {
    /// Side of the fixed reservation order. `Some(Ask)` is a forward auction
    /// (one seller, many bidders), `Some(Bid)` a reverse auction, `None` a
    /// double auction.
    pub reservation: Option<Side>,
    pub quotes: QuoteVisibility,
}

impl AuctionFormat {
    pub const SEALED_BID: Self = Self::new(Some(Side::Ask), QuoteVisibility::Sealed);
    pub const OPEN_BID: Self = Self::new(Some(Side::Ask), QuoteVisibility::Open);
    pub const SEALED_BID_REVERSE: Self = Self::new(Some(Side::Bid), QuoteVisibility::Sealed);
    pub const OPEN_BID_REVERSE: Self = Self::new(Some(Side::Bid), QuoteVisibility::Open);
    pub const SEALED_DOUBLE: Self = Self::new(None, QuoteVisibility::Sealed);
    pub const OPEN_DOUBLE: Self = Self::new(None, QuoteVisibility::Open);

    #[must_use]
    pub const fn new(reservation: Option<Side>, quotes: QuoteVisibility) -> Self {
        Self {
            reservation,
            quotes,
        }
    }

    /// The side that may submit orders, or `None` if both sides may.
    #[must_use]
    pub fn accepted_side(&self) -> Option<Side> {
        self.reservation.map(Side::opposite)
    }

    /// Whether an order on `side` may be submitted.
    #[must_use]
    pub fn accepts(&self, side: Side) -> bool {
        self.accepted_side().is_none_or(|accepted| accepted == side)
    }

    #[must_use]
    pub fn is_double(&self) -> bool {
        self.reservation.is_none()
    }

    #[must_use]
    pub fn exposes_quotes(&self) -> bool {
        self.quotes == QuoteVisibility::Open
    }
}

impl std::fmt::Display for AuctionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visibility = match self.quotes {
            QuoteVisibility::Sealed => "sealed",
            QuoteVisibility::Open => "open",
        };
        match self.reservation {
            Some(Side::Ask) => write!(f, "{visibility}-bid"),
            Some(Side::Bid) => write!(f, "{visibility}-bid-reverse"),
            None => write!(f, "{visibility}-double"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_auctions_take_bids_only() {
        let format = AuctionFormat::SEALED_BID;
        assert_eq!(format.accepted_side(), Some(Side::Bid));
        assert!(format.accepts(Side::Bid));
        assert!(!format.accepts(Side::Ask));
        assert!(!format.exposes_quotes());
    }

    #[test]
    fn reverse_auctions_take_asks_only() {
        let format = AuctionFormat::OPEN_BID_REVERSE;
        assert_eq!(format.accepted_side(), Some(Side::Ask));
        assert!(!format.accepts(Side::Bid));
        assert!(format.exposes_quotes());
    }

    #[test]
    fn double_auctions_take_both_sides() {
        let format = AuctionFormat::OPEN_DOUBLE;
        assert!(format.is_double());
        assert!(format.accepts(Side::Ask) && format.accepts(Side::Bid));
    }

    #[test]
    fn display_names() {
        assert_eq!(AuctionFormat::SEALED_BID.to_string(), "sealed-bid");
        assert_eq!(AuctionFormat::OPEN_BID_REVERSE.to_string(), "open-bid-reverse");
        assert_eq!(AuctionFormat::SEALED_DOUBLE.to_string(), "sealed-double");
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_string(&AuctionFormat::SEALED_BID).unwrap();
        assert_eq!(json, r#"{"reservation":"Ask","quotes":"sealed"}"#);
        let back: AuctionFormat =
            serde_json::from_str(r#"{"reservation":null,"quotes":"open"}"#).unwrap();
        assert_eq!(back, AuctionFormat::OPEN_DOUBLE);
    }
}
