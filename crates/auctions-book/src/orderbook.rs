//! The four-heap order book.
//!
//! The book holds four [`Partition`]s:
//! - **matched asks**: lowest price first
//! - **matched bids**: highest price first
//! - **unmatched asks**: lowest price first (best ask first)
//! - **unmatched bids**: highest price first (best bid first)
//!
//! Between operations the book always equals the greedy maximal matching of
//! its orders by price priority:
//! 1. `|matched asks| == |matched bids|`
//! 2. the worst matched ask is priced at or below the worst matched bid, so
//!    every rank-`i` pair crosses
//! 3. every matched order outranks every unmatched order on its side
//! 4. no order ID appears in more than one partition
//! 5. the best unmatched ask and best unmatched bid do not cross
//!
//! Every operation returns a new book. Partitions and the index are
//! persistent maps, so an update costs O(log n), shares all untouched nodes
//! with the previous book, and leaves that book valid and unchanged.
//!
//! An auxiliary `HashMap<OrderId, (Side, Price)>` locates orders for removal.

use auctions_types::{AuctionError, Order, OrderId, Price, RejectReason, Result, Side};
use imbl::HashMap;

use crate::partition::Partition;

/// Mutable view of the four partitions from one side's point of view.
struct SideView<'a> {
    own_matched: &'a mut Partition,
    own_unmatched: &'a mut Partition,
    other_matched: &'a mut Partition,
    other_unmatched: &'a mut Partition,
}

/// Persistent four-partition order book for single-unit orders.
#[derive(Debug, Clone)]
pub struct FourHeapOrderBook {
    matched_asks: Partition,
    matched_bids: Partition,
    unmatched_asks: Partition,
    unmatched_bids: Partition,
    /// Fast lookup: `OrderId -> (side, limit)`.
    index: HashMap<OrderId, (Side, Price)>,
}

impl Default for FourHeapOrderBook {
    fn default() -> Self {
        Self::empty()
    }
}

impl FourHeapOrderBook {
    /// A book with all four partitions empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            matched_asks: Partition::ascending(),
            matched_bids: Partition::descending(),
            unmatched_asks: Partition::ascending(),
            unmatched_bids: Partition::descending(),
            index: HashMap::new(),
        }
    }

    // =================================================================
    // Insertion
    // =================================================================

    /// A new book that also contains `order`.
    ///
    /// # Errors
    /// `Rejected(DuplicateOrder)` if an order with the same ID is present.
    pub fn insert(&self, order: Order) -> Result<Self> {
        if self.index.contains_key(&order.id()) {
            return Err(RejectReason::DuplicateOrder(order.id()).into());
        }
        let mut book = self.clone();
        book.index.insert(order.id(), (order.side(), order.limit()));
        book.place(order);
        book.debug_check();
        Ok(book)
    }

    /// Insert several orders in sequence, stopping at the first rejection.
    pub fn insert_all(&self, orders: impl IntoIterator<Item = Order>) -> Result<Self> {
        orders
            .into_iter()
            .try_fold(self.clone(), |book, order| book.insert(order))
    }

    fn place(&mut self, order: Order) {
        let side = order.side();
        let view = self.view_mut(side);

        // The order extends the matching by one pair if it crosses the best
        // unmatched counter-order and so does the current marginal match.
        let joins = view.other_unmatched.pop_best_if(|counter| {
            order.crosses(counter)
                && view
                    .own_matched
                    .worst()
                    .is_none_or(|marginal| marginal.crosses(counter))
        });
        if let Some(counter) = joins {
            tracing::trace!(order = %order.id(), counter = %counter.id(), "new matched pair");
            view.other_matched.insert(counter);
            view.own_matched.insert(order);
            return;
        }

        // Otherwise it may still displace the marginal match on its own side.
        let displaces = view
            .own_matched
            .worst()
            .is_some_and(|marginal| view.own_matched.outranks(&order, marginal));
        if displaces {
            if let Some(displaced) = view.own_matched.pop_worst() {
                tracing::trace!(order = %order.id(), displaced = %displaced.id(), "displaced marginal match");
                view.own_unmatched.insert(displaced);
            }
            view.own_matched.insert(order);
        } else {
            view.own_unmatched.insert(order);
        }
    }

    // =================================================================
    // Removal
    // =================================================================

    /// A new book without the order with this ID. No-op if it is absent.
    #[must_use]
    pub fn remove(&self, order_id: &OrderId) -> Self {
        self.try_remove(order_id)
            .map_or_else(|_| self.clone(), |(book, _)| book)
    }

    /// A new book without the order with this ID, plus the removed order.
    ///
    /// Removing a matched order first promotes the best unmatched order on the
    /// same side if it still crosses the marginal opposite match; otherwise the
    /// marginal (worst) matched order on the opposite side is demoted.
    ///
    /// # Errors
    /// `OrderNotFound` if no partition holds the order.
    pub fn try_remove(&self, order_id: &OrderId) -> Result<(Self, Order)> {
        let (side, limit) = *self
            .index
            .get(order_id)
            .ok_or(AuctionError::OrderNotFound(*order_id))?;

        let mut book = self.clone();
        book.index.remove(order_id);
        let view = book.view_mut(side);

        let removed = if let Some(order) = view.own_unmatched.remove(*order_id, limit) {
            order
        } else {
            let order = view
                .own_matched
                .remove(*order_id, limit)
                .ok_or(AuctionError::OrderNotFound(*order_id))?;

            let promoted = view.own_unmatched.pop_best_if(|candidate| {
                view.other_matched
                    .worst()
                    .is_some_and(|marginal| candidate.crosses(marginal))
            });
            if let Some(candidate) = promoted {
                view.own_matched.insert(candidate);
            } else if let Some(demoted) = view.other_matched.pop_worst() {
                tracing::trace!(removed = %order_id, demoted = %demoted.id(), "demoted marginal match");
                view.other_unmatched.insert(demoted);
            }
            order
        };

        book.debug_check();
        Ok((book, removed))
    }

    // =================================================================
    // Clearing support
    // =================================================================

    /// Split off the marginal matched pair: the worst matched ask with the
    /// worst matched bid. The rest of the book stays a valid four-heap.
    ///
    /// Returns `None` if nothing is matched.
    #[must_use]
    pub fn split_marginal_match(&self) -> Option<((Order, Order), Self)> {
        if self.matched_asks.is_empty() {
            return None;
        }
        let mut book = self.clone();
        let ask = book.matched_asks.pop_worst()?;
        let bid = book.matched_bids.pop_worst()?;
        book.index.remove(&ask.id());
        book.index.remove(&bid.id());
        book.debug_check();
        Some(((ask, bid), book))
    }

    /// A new book with both matched partitions emptied and the unmatched
    /// partitions unchanged.
    #[must_use]
    pub fn without_matched(&self) -> Self {
        if self.matched_asks.is_empty() {
            return self.clone();
        }
        let mut book = self.clone();
        for order in self.matched_asks.iter().chain(self.matched_bids.iter()) {
            book.index.remove(&order.id());
        }
        book.matched_asks.clear();
        book.matched_bids.clear();
        book.debug_check();
        book
    }

    // =================================================================
    // Queries
    // =================================================================

    #[must_use]
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.index.contains_key(order_id)
    }

    /// Look up an order by ID in whichever partition holds it.
    #[must_use]
    pub fn get(&self, order_id: &OrderId) -> Option<&Order> {
        let (side, limit) = *self.index.get(order_id)?;
        let (matched, unmatched) = match side {
            Side::Ask => (&self.matched_asks, &self.unmatched_asks),
            Side::Bid => (&self.matched_bids, &self.unmatched_bids),
        };
        matched
            .get(*order_id, limit)
            .or_else(|| unmatched.get(*order_id, limit))
    }

    /// Whether the order with this ID is currently matched.
    #[must_use]
    pub fn is_matched(&self, order_id: &OrderId) -> bool {
        self.index.get(order_id).is_some_and(|&(side, limit)| {
            let matched = match side {
                Side::Ask => &self.matched_asks,
                Side::Bid => &self.matched_bids,
            };
            matched.get(*order_id, limit).is_some()
        })
    }

    #[must_use]
    pub fn matched_asks(&self) -> &Partition {
        &self.matched_asks
    }

    #[must_use]
    pub fn matched_bids(&self) -> &Partition {
        &self.matched_bids
    }

    #[must_use]
    pub fn unmatched_asks(&self) -> &Partition {
        &self.unmatched_asks
    }

    #[must_use]
    pub fn unmatched_bids(&self) -> &Partition {
        &self.unmatched_bids
    }

    /// Matched pairs by rank: lowest matched ask with highest matched bid first.
    pub fn matched_pairs(&self) -> impl Iterator<Item = (&Order, &Order)> {
        self.matched_asks.iter().zip(self.matched_bids.iter())
    }

    #[must_use]
    pub fn best_unmatched_ask(&self) -> Option<&Order> {
        self.unmatched_asks.best()
    }

    #[must_use]
    pub fn best_unmatched_bid(&self) -> Option<&Order> {
        self.unmatched_bids.best()
    }

    #[must_use]
    pub fn best_matched_ask(&self) -> Option<&Order> {
        self.matched_asks.best()
    }

    #[must_use]
    pub fn best_matched_bid(&self) -> Option<&Order> {
        self.matched_bids.best()
    }

    /// The marginal (highest priced) matched ask.
    #[must_use]
    pub fn worst_matched_ask(&self) -> Option<&Order> {
        self.matched_asks.worst()
    }

    /// The marginal (lowest priced) matched bid.
    #[must_use]
    pub fn worst_matched_bid(&self) -> Option<&Order> {
        self.matched_bids.worst()
    }

    /// Spread = best unmatched ask - best unmatched bid. `None` if either is missing.
    #[must_use]
    pub fn spread(&self) -> Option<u64> {
        let ask = self.best_unmatched_ask()?.limit();
        let bid = self.best_unmatched_bid()?.limit();
        ask.distance_above(bid)
    }

    /// Highest price at which a new ask would still be matched:
    /// `min(worst matched bid, best unmatched ask)`.
    #[must_use]
    pub fn ask_price_quote(&self) -> Option<Price> {
        let marginal_bid = self.worst_matched_bid().map(Order::limit);
        let best_ask = self.best_unmatched_ask().map(Order::limit);
        match (marginal_bid, best_ask) {
            (Some(bid), Some(ask)) => Some(bid.min(ask)),
            (quote, None) | (None, quote) => quote,
        }
    }

    /// Lowest price at which a new bid would be matched:
    /// `max(worst matched ask, best unmatched bid)`.
    #[must_use]
    pub fn bid_price_quote(&self) -> Option<Price> {
        let marginal_ask = self.worst_matched_ask().map(Order::limit);
        let best_bid = self.best_unmatched_bid().map(Order::limit);
        match (marginal_ask, best_bid) {
            (Some(ask), Some(bid)) => Some(ask.max(bid)),
            (quote, None) | (None, quote) => quote,
        }
    }

    /// Number of matched pairs.
    #[must_use]
    pub fn matched_len(&self) -> usize {
        self.matched_asks.len()
    }

    /// Total number of orders currently in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the book has no orders in any partition.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate all orders: matched asks, matched bids, unmatched asks, unmatched bids.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.matched_asks
            .iter()
            .chain(self.matched_bids.iter())
            .chain(self.unmatched_asks.iter())
            .chain(self.unmatched_bids.iter())
    }

    // =================================================================
    // Invariants
    // =================================================================

    /// Verify every structural invariant of the book, walking every order.
    ///
    /// # Errors
    /// `InvariantViolation` naming the first invariant that fails.
    pub fn check_invariants(&self) -> Result<()> {
        let violation = |reason: String| Err(AuctionError::InvariantViolation { reason });

        for (name, partition, side) in [
            ("matched asks", &self.matched_asks, Side::Ask),
            ("matched bids", &self.matched_bids, Side::Bid),
            ("unmatched asks", &self.unmatched_asks, Side::Ask),
            ("unmatched bids", &self.unmatched_bids, Side::Bid),
        ] {
            if let Some(order) = partition.iter().find(|o| o.side() != side) {
                return violation(format!("{name} holds {} order {}", order.side(), order.id()));
            }
        }

        if let Some((rank, (ask, bid))) = self
            .matched_pairs()
            .enumerate()
            .find(|(_, (ask, bid))| !ask.crosses(bid))
        {
            return violation(format!(
                "pair {rank} does not cross: ask {} > bid {}",
                ask.limit(),
                bid.limit()
            ));
        }

        for order in self.orders() {
            if self.index.get(&order.id()) != Some(&(order.side(), order.limit())) {
                return violation(format!("order {} missing from index", order.id()));
            }
        }

        self.check_frontier()
    }

    /// The invariants visible at the partition boundaries: sizes, the
    /// marginal pair, matched-over-unmatched priority and the unmatched
    /// spread. Costs O(log n).
    fn check_frontier(&self) -> Result<()> {
        let violation = |reason: String| Err(AuctionError::InvariantViolation { reason });

        if self.matched_asks.len() != self.matched_bids.len() {
            return violation(format!(
                "{} matched asks vs {} matched bids",
                self.matched_asks.len(),
                self.matched_bids.len()
            ));
        }

        if let (Some(ask), Some(bid)) = (self.worst_matched_ask(), self.worst_matched_bid()) {
            if !ask.crosses(bid) {
                return violation(format!(
                    "marginal pair does not cross: ask {} > bid {}",
                    ask.limit(),
                    bid.limit()
                ));
            }
        }

        if let (Some(marginal), Some(best)) = (self.matched_asks.worst(), self.unmatched_asks.best())
        {
            if !self.unmatched_asks.outranks(marginal, best) {
                return violation(format!(
                    "unmatched ask {} outranks matched ask {}",
                    best.id(),
                    marginal.id()
                ));
            }
        }
        if let (Some(marginal), Some(best)) = (self.matched_bids.worst(), self.unmatched_bids.best())
        {
            if !self.unmatched_bids.outranks(marginal, best) {
                return violation(format!(
                    "unmatched bid {} outranks matched bid {}",
                    best.id(),
                    marginal.id()
                ));
            }
        }

        let total = self.matched_asks.len()
            + self.matched_bids.len()
            + self.unmatched_asks.len()
            + self.unmatched_bids.len();
        if total != self.index.len() {
            return violation(format!(
                "{total} orders in partitions vs {} indexed",
                self.index.len()
            ));
        }

        if let (Some(ask), Some(bid)) = (self.best_unmatched_ask(), self.best_unmatched_bid()) {
            if ask.crosses(bid) {
                return violation(format!(
                    "unmatched ask {} crosses unmatched bid {}",
                    ask.limit(),
                    bid.limit()
                ));
            }
        }

        Ok(())
    }

    fn debug_check(&self) {
        #[cfg(debug_assertions)]
        {
            if let Err(err) = self.check_frontier() {
                panic!("{err}");
            }
        }
    }

    fn view_mut(&mut self, side: Side) -> SideView<'_> {
        match side {
            Side::Ask => SideView {
                own_matched: &mut self.matched_asks,
                own_unmatched: &mut self.unmatched_asks,
                other_matched: &mut self.matched_bids,
                other_unmatched: &mut self.unmatched_bids,
            },
            Side::Bid => SideView {
                own_matched: &mut self.matched_bids,
                own_unmatched: &mut self.unmatched_bids,
                other_matched: &mut self.matched_asks,
                other_unmatched: &mut self.unmatched_asks,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use auctions_types::{IssuerId, Tradable};

    use super::*;

    fn goog() -> Tradable {
        Tradable::new("GOOG")
    }

    fn ask(limit: i64) -> Order {
        Order::dummy_ask(limit, &goog())
    }

    fn bid(limit: i64) -> Order {
        Order::dummy_bid(limit, &goog())
    }

    fn limits(partition: &Partition) -> Vec<i64> {
        partition.iter().map(|o| o.limit().value()).collect()
    }

    fn build(orders: Vec<Order>) -> FourHeapOrderBook {
        FourHeapOrderBook::empty().insert_all(orders).unwrap()
    }

    #[test]
    fn empty_book() {
        let book = FourHeapOrderBook::empty();
        assert!(book.is_empty());
        assert_eq!(book.best_unmatched_ask(), None);
        assert_eq!(book.best_unmatched_bid(), None);
        assert_eq!(book.spread(), None);
        assert_eq!(book.ask_price_quote(), None);
        assert_eq!(book.bid_price_quote(), None);
        book.check_invariants().unwrap();
    }

    #[test]
    fn non_crossing_orders_stay_unmatched() {
        let book = build(vec![ask(101), bid(99), ask(102), bid(100)]);
        assert_eq!(book.matched_len(), 0);
        assert_eq!(limits(book.unmatched_asks()), vec![101, 102]);
        assert_eq!(limits(book.unmatched_bids()), vec![100, 99]);
        assert_eq!(book.spread(), Some(1));
    }

    #[test]
    fn crossing_orders_match() {
        let book = build(vec![ask(5), bid(10)]);
        assert_eq!(book.matched_len(), 1);
        assert!(book.unmatched_asks().is_empty());
        assert!(book.unmatched_bids().is_empty());
    }

    #[test]
    fn new_ask_displaces_marginal_match() {
        // ask 8 matched with bid 10; bid 7 waits. Ask 6 cannot add a pair
        // (8 > 7) so it replaces 8 in the matched set.
        let book = build(vec![ask(8), bid(10), bid(7), ask(6)]);
        assert_eq!(limits(book.matched_asks()), vec![6]);
        assert_eq!(limits(book.matched_bids()), vec![10]);
        assert_eq!(limits(book.unmatched_asks()), vec![8]);
        assert_eq!(limits(book.unmatched_bids()), vec![7]);
    }

    #[test]
    fn new_ask_extends_matching() {
        let book = build(vec![ask(5), bid(10), bid(7), ask(6)]);
        assert_eq!(limits(book.matched_asks()), vec![5, 6]);
        assert_eq!(limits(book.matched_bids()), vec![10, 7]);
        assert!(book.unmatched_asks().is_empty());
        assert!(book.unmatched_bids().is_empty());
    }

    #[test]
    fn new_bid_displaces_marginal_match() {
        let book = build(vec![bid(5), ask(3), ask(6), bid(9)]);
        // Pairs: (3, 9) only; 6 > 5 so no second pair.
        assert_eq!(limits(book.matched_asks()), vec![3]);
        assert_eq!(limits(book.matched_bids()), vec![9]);
        assert_eq!(limits(book.unmatched_bids()), vec![5]);
        assert_eq!(limits(book.unmatched_asks()), vec![6]);
    }

    #[test]
    fn duplicate_order_rejected() {
        let order = ask(5);
        let book = build(vec![order.clone()]);
        let result = book.insert(order);
        assert!(matches!(
            result,
            Err(AuctionError::Rejected(RejectReason::DuplicateOrder(_)))
        ));
    }

    #[test]
    fn insert_leaves_previous_book_untouched() {
        let before = build(vec![ask(5), bid(4)]);
        let after = before.insert(bid(6)).unwrap();
        assert_eq!(before.matched_len(), 0);
        assert_eq!(before.len(), 2);
        assert_eq!(after.matched_len(), 1);
        assert_eq!(after.len(), 3);
    }

    #[test]
    fn insert_shares_untouched_partitions() {
        let before = build(vec![ask(5), bid(4), bid(3)]);
        let after = before.insert(ask(9)).unwrap();
        assert!(after.unmatched_bids().shares_storage_with(before.unmatched_bids()));
        assert!(!after.unmatched_asks().shares_storage_with(before.unmatched_asks()));
        assert_eq!(limits(before.unmatched_asks()), vec![5]);
        assert_eq!(limits(after.unmatched_asks()), vec![5, 9]);
    }

    #[test]
    fn remove_unmatched_order() {
        let resting = bid(4);
        let book = build(vec![ask(5), resting.clone()]);
        let book = book.remove(&resting.id());
        assert_eq!(book.len(), 1);
        assert!(!book.contains(&resting.id()));
    }

    #[test]
    fn remove_matched_ask_promotes_unmatched_ask() {
        let first = ask(3);
        let book = build(vec![first.clone(), ask(6), bid(10), bid(2)]);
        assert_eq!(limits(book.matched_asks()), vec![3]);

        let book = book.remove(&first.id());
        assert_eq!(limits(book.matched_asks()), vec![6]);
        assert_eq!(limits(book.matched_bids()), vec![10]);
        assert_eq!(limits(book.unmatched_bids()), vec![2]);
    }

    #[test]
    fn remove_matched_ask_demotes_marginal_bid() {
        let first = ask(3);
        let book = build(vec![first.clone(), ask(12), bid(10), bid(2)]);
        let book = book.remove(&first.id());
        assert_eq!(book.matched_len(), 0);
        assert_eq!(limits(book.unmatched_bids()), vec![10, 2]);
        assert_eq!(limits(book.unmatched_asks()), vec![12]);
    }

    #[test]
    fn remove_matched_bid_demotes_marginal_ask() {
        let top = bid(10);
        let book = build(vec![ask(3), ask(4), top.clone(), bid(9)]);
        assert_eq!(book.matched_len(), 2);
        let book = book.remove(&top.id());
        assert_eq!(limits(book.matched_asks()), vec![3]);
        assert_eq!(limits(book.matched_bids()), vec![9]);
        assert_eq!(limits(book.unmatched_asks()), vec![4]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let book = build(vec![ask(5), bid(6), bid(1)]);
        let absent = OrderId::from_u128(42);
        let after = book.remove(&absent);
        assert_eq!(after.len(), book.len());
        assert_eq!(after.matched_len(), book.matched_len());
        assert!(matches!(
            book.try_remove(&absent),
            Err(AuctionError::OrderNotFound(_))
        ));
    }

    #[test]
    fn try_remove_returns_order() {
        let order = bid(6);
        let book = build(vec![ask(5), order.clone()]);
        let (book, removed) = book.try_remove(&order.id()).unwrap();
        assert_eq!(removed, order);
        assert_eq!(book.matched_len(), 0);
    }

    #[test]
    fn quotes_bracket_the_marginal_pair() {
        // Matched: (5, 10); unmatched ask 12, unmatched bid 4.
        let book = build(vec![ask(5), bid(10), ask(12), bid(4)]);
        assert_eq!(book.ask_price_quote(), Some(Price(10)));
        assert_eq!(book.bid_price_quote(), Some(Price(5)));
        assert_eq!(book.spread(), Some(8));
    }

    #[test]
    fn quotes_with_sentinel_reservation() {
        let reservation = Order::ask(
            OrderId::from_u128(1),
            IssuerId::from_u128(1),
            Price::MIN,
            goog(),
        );
        let book = build(vec![reservation, bid(10), bid(55), bid(42), bid(99), bid(3)]);
        assert_eq!(limits(book.matched_bids()), vec![99]);
        assert_eq!(book.ask_price_quote(), Some(Price(99)));
        assert_eq!(book.bid_price_quote(), Some(Price(55)));
    }

    #[test]
    fn get_and_is_matched() {
        let matched = ask(5);
        let waiting = ask(20);
        let book = build(vec![matched.clone(), waiting.clone(), bid(6)]);
        assert_eq!(book.get(&matched.id()), Some(&matched));
        assert!(book.is_matched(&matched.id()));
        assert!(!book.is_matched(&waiting.id()));
        assert!(book.get(&OrderId::from_u128(5)).is_none());
    }

    #[test]
    fn split_marginal_match_takes_last_rank() {
        let book = build(vec![ask(3), ask(4), bid(10), bid(9)]);
        let ((a, b), rest) = book.split_marginal_match().unwrap();
        assert_eq!(a.limit(), Price(4));
        assert_eq!(b.limit(), Price(9));
        assert_eq!(rest.matched_len(), 1);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest.best_matched_ask().unwrap().limit(), Price(3));
        assert!(FourHeapOrderBook::empty().split_marginal_match().is_none());
    }

    #[test]
    fn without_matched_keeps_unmatched() {
        let book = build(vec![ask(3), bid(10), ask(20), bid(1)]);
        let residual = book.without_matched();
        assert_eq!(residual.matched_len(), 0);
        assert_eq!(limits(residual.unmatched_asks()), vec![20]);
        assert_eq!(limits(residual.unmatched_bids()), vec![1]);
        assert_eq!(residual.len(), 2);
        residual.check_invariants().unwrap();
    }

    #[test]
    fn equal_prices_match() {
        let book = build(vec![ask(7), bid(7)]);
        assert_eq!(book.matched_len(), 1);
    }
}
