//! The clearing engine.
//!
//! Clearing turns the matched partitions of a [`FourHeapOrderBook`] into
//! [`Fill`]s. The matched set is already the maximal price-consistent
//! pairing, so clearing only has to assign prices:
//!
//! - **Uniform**: one price from the pricing policy for every pair.
//! - **Discriminatory**: the policy prices the marginal pair, that pair is
//!   split off, and the policy is applied again to the smaller book, whose
//!   new marginal pair is priced next. Each fill carries its own price.
//!
//! Clearing is all-or-nothing: if any price cannot be derived, no pair
//! clears and the book is returned unchanged. The unmatched partitions are
//! always carried forward untouched.

use auctions_types::Price;
use serde::{Deserialize, Serialize};

use crate::{FourHeapOrderBook, Fill, PricingPolicy, determinism::fill_root};

/// Whether all pairs settle at one price or each at its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearingPolicy {
    #[default]
    Uniform,
    Discriminatory,
}

impl std::fmt::Display for ClearingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Discriminatory => write!(f, "discriminatory"),
        }
    }
}

/// Result of one clearing round.
#[derive(Debug, Clone)]
pub struct ClearOutcome {
    /// The uniform clearing price. `None` when nothing cleared or when
    /// pricing was discriminatory (see each fill's own price).
    pub clearing_price: Option<Price>,
    /// One fill per previously matched pair, in rank order (best pair first).
    pub fills: Vec<Fill>,
    /// The book left behind: matched partitions empty, unmatched unchanged.
    pub residual: FourHeapOrderBook,
}

impl ClearOutcome {
    fn unchanged(book: &FourHeapOrderBook) -> Self {
        Self {
            clearing_price: None,
            fills: Vec::new(),
            residual: book.clone(),
        }
    }

    /// `true` if nothing cleared this round.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }
}

/// Clear every matched pair in `book`.
///
/// Returns the book unchanged with no fills when nothing is matched or the
/// pricing policy yields no price.
#[must_use]
pub fn clear(
    book: &FourHeapOrderBook,
    pricing: &PricingPolicy,
    clearing: ClearingPolicy,
) -> ClearOutcome {
    if book.matched_len() == 0 {
        tracing::debug!("No matched orders: nothing to clear");
        return ClearOutcome::unchanged(book);
    }

    let outcome = match clearing {
        ClearingPolicy::Uniform => clear_uniform(book, pricing),
        ClearingPolicy::Discriminatory => clear_discriminatory(book, pricing),
    };

    let Some(outcome) = outcome else {
        tracing::debug!(%pricing, "Pricing policy produced no price: nothing cleared");
        return ClearOutcome::unchanged(book);
    };

    tracing::info!(
        %pricing,
        %clearing,
        fills = outcome.fills.len(),
        clearing_price = ?outcome.clearing_price,
        residual = outcome.residual.len(),
        fill_root = hex::encode(fill_root(&outcome.fills)),
        "Clearing complete"
    );
    outcome
}

fn clear_uniform(book: &FourHeapOrderBook, pricing: &PricingPolicy) -> Option<ClearOutcome> {
    let price = pricing.price(book)?;
    let fills = book
        .matched_pairs()
        .map(|(ask, bid)| {
            let fill = Fill::new(ask.clone(), bid.clone(), price);
            log_fill(&fill);
            fill
        })
        .collect();
    Some(ClearOutcome {
        clearing_price: Some(price),
        fills,
        residual: book.without_matched(),
    })
}

fn clear_discriminatory(book: &FourHeapOrderBook, pricing: &PricingPolicy) -> Option<ClearOutcome> {
    let mut fills = Vec::with_capacity(book.matched_len());
    let mut current = book.clone();
    while let Some(((ask, bid), rest)) = current.split_marginal_match() {
        let price = pricing.price(&current)?;
        let fill = Fill::new(ask, bid, price);
        log_fill(&fill);
        fills.push(fill);
        current = rest;
    }
    // Priced marginal pair first; report best pair first like uniform clearing.
    fills.reverse();
    Some(ClearOutcome {
        clearing_price: None,
        fills,
        residual: current,
    })
}

fn log_fill(fill: &Fill) {
    tracing::debug!(
        ask = %fill.ask_order().id(),
        bid = %fill.bid_order().id(),
        seller = %fill.seller(),
        buyer = %fill.buyer(),
        price = %fill.price(),
        "Pair cleared"
    );
}
