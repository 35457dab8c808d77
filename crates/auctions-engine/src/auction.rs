//! The auction facade.
//!
//! An [`Auction`] couples one order book with a pricing policy, a clearing
//! policy, protocol parameters and an [`AuctionFormat`]. Every operation
//! returns a new auction value; the receiver is never modified, so a
//! rejected insert leaves the caller's auction exactly as it was.
//!
//! ## Order flow
//!
//! ```text
//! insert(reference, order) -> OrderGate.validate() -> reference/id checks
//!     -> FourHeapOrderBook.insert() -> new Auction
//! clear() -> clearing::clear(book, pricing, clearing) -> (residual Auction, fills)
//! ```
//!
//! Single-sided formats place their reservation order in the book at
//! construction. It is pinned while it rests there: `remove` and `cancel`
//! never take it out, and only clearing can consume it.

use auctions_book::{ClearingPolicy, Fill, FourHeapOrderBook, PricingPolicy, clear};
use auctions_types::{
    AuctionError, AuctionProtocol, Order, OrderId, Reference, RejectReason, Result, Side,
};
use imbl::HashMap;

use crate::{AuctionConfig, AuctionFormat, OrderGate, Quote, QuoteRequest};

/// A persistent single-unit auction.
#[derive(Debug, Clone)]
pub struct Auction {
    format: AuctionFormat,
    book: FourHeapOrderBook,
    pricing: PricingPolicy,
    clearing: ClearingPolicy,
    protocol: AuctionProtocol,
    reservation: Option<Order>,
    /// Live submissions by the reference their issuer attached.
    references: HashMap<Reference, Order>,
}

impl Auction {
    // =================================================================
    // Construction
    // =================================================================

    /// Build an auction of any format.
    ///
    /// # Errors
    /// `Configuration` if the reservation order does not fit the format or
    /// trades a different good than the protocol.
    pub fn new(
        format: AuctionFormat,
        reservation: Option<Order>,
        protocol: AuctionProtocol,
        pricing: PricingPolicy,
        clearing: ClearingPolicy,
    ) -> Result<Self> {
        protocol.validate()?;
        let reserved_side = reservation.as_ref().map(Order::side);
        if reserved_side != format.reservation {
            return Err(AuctionError::Configuration(format!(
                "{format} auction needs a {} reservation order, got {}",
                side_label(format.reservation),
                side_label(reserved_side)
            )));
        }

        let mut book = FourHeapOrderBook::empty();
        if let Some(order) = &reservation {
            if order.tradable() != protocol.tradable() {
                return Err(AuctionError::Configuration(format!(
                    "reservation order trades {}, protocol trades {}",
                    order.tradable(),
                    protocol.tradable()
                )));
            }
            book = book.insert(order.clone())?;
        }

        tracing::info!(
            %format,
            %pricing,
            %clearing,
            tradable = %protocol.tradable(),
            tick_size = protocol.tick_size(),
            reservation = ?reservation.as_ref().map(Order::limit),
            "Auction opened"
        );

        Ok(Self {
            format,
            book,
            pricing,
            clearing,
            protocol,
            reservation,
            references: HashMap::new(),
        })
    }

    /// Build an auction from a loaded configuration.
    ///
    /// # Errors
    /// As [`Auction::new`].
    pub fn from_config(config: AuctionConfig, reservation: Option<Order>) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.format,
            reservation,
            config.protocol,
            config.pricing,
            config.clearing,
        )
    }

    fn single_sided(
        format: AuctionFormat,
        reservation: Order,
        pricing: PricingPolicy,
        tick_size: i64,
    ) -> Result<Self> {
        let protocol = AuctionProtocol::new(reservation.tradable().clone(), tick_size)?;
        Self::new(
            format,
            Some(reservation),
            protocol,
            pricing,
            ClearingPolicy::Uniform,
        )
    }

    /// Sealed-bid auction: one seller's reservation ask, private bids.
    pub fn sealed_bid(reservation: Order, pricing: PricingPolicy, tick_size: i64) -> Result<Self> {
        Self::single_sided(AuctionFormat::SEALED_BID, reservation, pricing, tick_size)
    }

    /// Open-bid auction: one seller's reservation ask, bids with public quotes.
    pub fn open_bid(reservation: Order, pricing: PricingPolicy, tick_size: i64) -> Result<Self> {
        Self::single_sided(AuctionFormat::OPEN_BID, reservation, pricing, tick_size)
    }

    /// Sealed-bid reverse auction: one buyer's reservation bid, private asks.
    pub fn sealed_bid_reverse(
        reservation: Order,
        pricing: PricingPolicy,
        tick_size: i64,
    ) -> Result<Self> {
        Self::single_sided(AuctionFormat::SEALED_BID_REVERSE, reservation, pricing, tick_size)
    }

    /// Open-bid reverse auction: one buyer's reservation bid, public quotes.
    pub fn open_bid_reverse(
        reservation: Order,
        pricing: PricingPolicy,
        tick_size: i64,
    ) -> Result<Self> {
        Self::single_sided(AuctionFormat::OPEN_BID_REVERSE, reservation, pricing, tick_size)
    }

    /// The highest bidder wins and pays its own bid.
    pub fn first_price_sealed_bid(reservation: Order, tick_size: i64) -> Result<Self> {
        Self::sealed_bid(reservation, PricingPolicy::AskQuote, tick_size)
    }

    /// The highest bidder wins and pays the best losing bid (or the
    /// reservation price if no bid lost).
    pub fn second_price_sealed_bid(reservation: Order, tick_size: i64) -> Result<Self> {
        Self::sealed_bid(reservation, PricingPolicy::BidQuote, tick_size)
    }

    /// The lowest ask wins and is paid its own ask.
    pub fn first_price_sealed_bid_reverse(reservation: Order, tick_size: i64) -> Result<Self> {
        Self::sealed_bid_reverse(reservation, PricingPolicy::BidQuote, tick_size)
    }

    /// The lowest ask wins and is paid the best losing ask.
    pub fn second_price_sealed_bid_reverse(reservation: Order, tick_size: i64) -> Result<Self> {
        Self::sealed_bid_reverse(reservation, PricingPolicy::AskQuote, tick_size)
    }

    /// Open double auction: asks and bids from anyone, public quotes.
    ///
    /// # Errors
    /// `InvalidTickSize` for a bad protocol.
    pub fn double(
        protocol: AuctionProtocol,
        pricing: PricingPolicy,
        clearing: ClearingPolicy,
    ) -> Result<Self> {
        Self::new(AuctionFormat::OPEN_DOUBLE, None, protocol, pricing, clearing)
    }

    /// Sealed double auction: asks and bids from anyone, no quotes.
    ///
    /// # Errors
    /// `InvalidTickSize` for a bad protocol.
    pub fn sealed_double(
        protocol: AuctionProtocol,
        pricing: PricingPolicy,
        clearing: ClearingPolicy,
    ) -> Result<Self> {
        Self::new(AuctionFormat::SEALED_DOUBLE, None, protocol, pricing, clearing)
    }

    // =================================================================
    // Order flow
    // =================================================================

    /// A new auction that also holds `order`, tracked under `reference`.
    ///
    /// # Errors
    /// `Rejected` with the first failing check: tradable, side, tick,
    /// reservation price, duplicate reference, duplicate order ID.
    pub fn insert(&self, reference: Reference, order: Order) -> Result<Self> {
        self.try_insert(reference, order).inspect_err(|err| {
            tracing::warn!(%reference, %err, "Order rejected");
        })
    }

    fn try_insert(&self, reference: Reference, order: Order) -> Result<Self> {
        OrderGate::new(self.format, &self.protocol, self.reservation.as_ref()).validate(&order)?;
        if self.references.contains_key(&reference) {
            return Err(RejectReason::DuplicateReference(reference).into());
        }

        let book = self.book.insert(order.clone())?;
        tracing::debug!(
            %reference,
            order = %order,
            matched = book.is_matched(&order.id()),
            "Order accepted"
        );

        let mut next = self.with_book(book);
        next.references.insert(reference, order);
        Ok(next)
    }

    /// A new auction without the order with this ID. No-op if the order is
    /// absent or is the resting reservation order.
    #[must_use]
    pub fn remove(&self, order_id: &OrderId) -> Self {
        if self.is_reservation(order_id) {
            tracing::debug!(order = %order_id, "Reservation order is pinned; remove ignored");
            return self.clone();
        }
        if !self.book.contains(order_id) {
            return self.clone();
        }

        let mut next = self.with_book(self.book.remove(order_id));
        next.references.retain(|_, order| order.id() != *order_id);
        tracing::debug!(order = %order_id, "Order removed");
        next
    }

    /// A new auction without the order submitted under `reference`.
    ///
    /// # Errors
    /// `ReferenceNotFound` if no live order is tracked under `reference`.
    pub fn cancel(&self, reference: &Reference) -> Result<Self> {
        let order = self
            .references
            .get(reference)
            .ok_or(AuctionError::ReferenceNotFound(*reference))?;

        let mut next = self.with_book(self.book.remove(&order.id()));
        next.references.remove(reference);
        tracing::debug!(%reference, order = %order.id(), "Order cancelled");
        Ok(next)
    }

    /// Clear every matched pair.
    ///
    /// Returns the residual auction, which stays open for further order
    /// flow, and the fills, or `None` if nothing cleared this round.
    #[must_use]
    pub fn clear(&self) -> (Self, Option<Vec<Fill>>) {
        let outcome = clear(&self.book, &self.pricing, self.clearing);
        if outcome.is_empty() {
            return (self.clone(), None);
        }

        let book = outcome.residual;
        let mut references = self.references.clone();
        references.retain(|_, order| book.contains(&order.id()));
        let next = Self {
            book,
            references,
            ..self.clone()
        };
        (next, Some(outcome.fills))
    }

    // =================================================================
    // Quotes
    // =================================================================

    /// Answer a quote request from the current book.
    ///
    /// # Errors
    /// `QuotesUnavailable` for sealed formats.
    pub fn receive(&self, request: QuoteRequest) -> Result<Quote> {
        if !self.format.exposes_quotes() {
            return Err(AuctionError::QuotesUnavailable);
        }
        Ok(Quote::from_book(&self.book, request))
    }

    // =================================================================
    // Configuration rebuilds
    // =================================================================

    #[must_use]
    pub fn with_pricing_policy(&self, pricing: PricingPolicy) -> Self {
        Self {
            pricing,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_clearing_policy(&self, clearing: ClearingPolicy) -> Self {
        Self {
            clearing,
            ..self.clone()
        }
    }

    /// Same auction under new protocol parameters. Resting orders are kept
    /// as they are; the new tick size applies to later submissions.
    ///
    /// # Errors
    /// `InvalidTickSize` for a bad protocol, `Configuration` if resting
    /// orders trade a different good.
    pub fn with_protocol(&self, protocol: AuctionProtocol) -> Result<Self> {
        protocol.validate()?;
        if let Some(order) = self.book.orders().find(|o| o.tradable() != protocol.tradable()) {
            return Err(AuctionError::Configuration(format!(
                "resting order {} trades {}, protocol trades {}",
                order.id(),
                order.tradable(),
                protocol.tradable()
            )));
        }
        Ok(Self {
            protocol,
            ..self.clone()
        })
    }

    // =================================================================
    // Accessors
    // =================================================================

    #[must_use]
    pub fn book(&self) -> &FourHeapOrderBook {
        &self.book
    }

    #[must_use]
    pub fn format(&self) -> AuctionFormat {
        self.format
    }

    #[must_use]
    pub fn pricing_policy(&self) -> &PricingPolicy {
        &self.pricing
    }

    #[must_use]
    pub fn clearing_policy(&self) -> ClearingPolicy {
        self.clearing
    }

    #[must_use]
    pub fn protocol(&self) -> &AuctionProtocol {
        &self.protocol
    }

    #[must_use]
    pub fn reservation(&self) -> Option<&Order> {
        self.reservation.as_ref()
    }

    /// The live order submitted under `reference`.
    #[must_use]
    pub fn order_for(&self, reference: &Reference) -> Option<&Order> {
        self.references.get(reference)
    }

    /// Number of live submissions tracked by reference.
    #[must_use]
    pub fn live_references(&self) -> usize {
        self.references.len()
    }

    /// Whether `order_id` names the reservation order and it still rests in
    /// the book. Once clearing consumes it the ID is free for reuse.
    fn is_reservation(&self, order_id: &OrderId) -> bool {
        self.reservation
            .as_ref()
            .is_some_and(|r| self.book.get(order_id) == Some(r))
    }

    fn with_book(&self, book: FourHeapOrderBook) -> Self {
        Self {
            book,
            ..self.clone()
        }
    }
}

fn side_label(side: Option<Side>) -> &'static str {
    match side {
        Some(Side::Ask) => "ask",
        Some(Side::Bid) => "bid",
        None => "no",
    }
}
