//! Quote requests and responses.
//!
//! A quote is a read-only projection of the book. Answering one never
//! changes the auction.

use auctions_book::FourHeapOrderBook;
use auctions_types::Price;
use serde::{Deserialize, Serialize};

/// What a participant asks an open auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteRequest {
    /// Highest price at which a new ask would currently be matched.
    AskPrice,
    /// Lowest price at which a new bid would currently be matched.
    BidPrice,
    /// Ask quote minus bid quote.
    Spread,
}

/// Answer to a [`QuoteRequest`]. `None` when the book cannot support the
/// quote (for example an empty book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Quote {
    AskPrice(Option<Price>),
    BidPrice(Option<Price>),
    Spread(Option<u64>),
}

impl Quote {
    /// Compute the answer to `request` from `book`.
    #[must_use]
    pub fn from_book(book: &FourHeapOrderBook, request: QuoteRequest) -> Self {
        match request {
            QuoteRequest::AskPrice => Self::AskPrice(book.ask_price_quote()),
            QuoteRequest::BidPrice => Self::BidPrice(book.bid_price_quote()),
            QuoteRequest::Spread => {
                let spread = book
                    .ask_price_quote()
                    .zip(book.bid_price_quote())
                    .and_then(|(ask, bid)| ask.distance_above(bid));
                Self::Spread(spread)
            }
        }
    }

    /// The quoted price, for ask and bid quotes.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        match self {
            Self::AskPrice(price) | Self::BidPrice(price) => *price,
            Self::Spread(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use auctions_types::{Order, Tradable};

    use super::*;

    fn book(asks: &[i64], bids: &[i64]) -> FourHeapOrderBook {
        let goog = Tradable::new("GOOG");
        let orders = asks
            .iter()
            .map(|&p| Order::dummy_ask(p, &goog))
            .chain(bids.iter().map(|&p| Order::dummy_bid(p, &goog)));
        FourHeapOrderBook::empty().insert_all(orders).unwrap()
    }

    #[test]
    fn empty_book_quotes_nothing() {
        let empty = FourHeapOrderBook::empty();
        assert_eq!(Quote::from_book(&empty, QuoteRequest::AskPrice), Quote::AskPrice(None));
        assert_eq!(Quote::from_book(&empty, QuoteRequest::BidPrice), Quote::BidPrice(None));
        assert_eq!(Quote::from_book(&empty, QuoteRequest::Spread), Quote::Spread(None));
    }

    #[test]
    fn quotes_bracket_marginal_pair() {
        let b = book(&[3, 8, 20], &[15, 11, 2]);
        assert_eq!(Quote::from_book(&b, QuoteRequest::AskPrice).price(), Some(Price(11)));
        assert_eq!(Quote::from_book(&b, QuoteRequest::BidPrice).price(), Some(Price(8)));
        assert_eq!(Quote::from_book(&b, QuoteRequest::Spread), Quote::Spread(Some(3)));
    }

    #[test]
    fn one_sided_book_quotes_one_side() {
        let b = book(&[], &[10, 7]);
        assert_eq!(Quote::from_book(&b, QuoteRequest::AskPrice), Quote::AskPrice(None));
        assert_eq!(Quote::from_book(&b, QuoteRequest::BidPrice), Quote::BidPrice(Some(Price(10))));
        assert_eq!(Quote::from_book(&b, QuoteRequest::Spread), Quote::Spread(None));
    }

    #[test]
    fn serde_tagged() {
        let json = serde_json::to_string(&Quote::Spread(Some(4))).unwrap();
        assert_eq!(json, r#"{"kind":"spread","value":4}"#);
        let req: QuoteRequest = serde_json::from_str("\"bid_price\"").unwrap();
        assert_eq!(req, QuoteRequest::BidPrice);
    }
}
