//! One price-priority ordered partition of the order book.
//!
//! Orders are keyed by `(rank, OrderId)` in an [`OrdMap`], where `rank` is the
//! limit price for ascending partitions and its negation for descending ones.
//! The `OrderId` breaks ties, so the ordering is total and deterministic.
//!
//! `OrdMap` is a persistent B-tree: cloning a partition is O(1) and an update
//! copies only the O(log n) nodes on its path, sharing the rest with every
//! earlier snapshot. A snapshot never observes later mutations.

use auctions_types::{Order, OrderId, Price};
use imbl::OrdMap;

/// Direction in which a partition ranks its orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Lowest price first (asks).
    Ascending,
    /// Highest price first (bids).
    Descending,
}

type PriorityKey = (i128, OrderId);

/// A persistent, price-priority ordered set of orders.
#[derive(Debug, Clone)]
pub struct Partition {
    priority: Priority,
    orders: OrdMap<PriorityKey, Order>,
}

impl Partition {
    #[must_use]
    pub fn new(priority: Priority) -> Self {
        Self {
            priority,
            orders: OrdMap::new(),
        }
    }

    #[must_use]
    pub fn ascending() -> Self {
        Self::new(Priority::Ascending)
    }

    #[must_use]
    pub fn descending() -> Self {
        Self::new(Priority::Descending)
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    fn key(&self, limit: Price, id: OrderId) -> PriorityKey {
        let rank = i128::from(limit.value());
        match self.priority {
            Priority::Ascending => (rank, id),
            Priority::Descending => (-rank, id),
        }
    }

    fn key_of(&self, order: &Order) -> PriorityKey {
        self.key(order.limit(), order.id())
    }

    /// Whether `a` ranks strictly ahead of `b` in this partition.
    #[must_use]
    pub fn outranks(&self, a: &Order, b: &Order) -> bool {
        self.key_of(a) < self.key_of(b)
    }

    // =================================================================
    // Mutation (path copying)
    // =================================================================

    pub fn insert(&mut self, order: Order) {
        let key = self.key_of(&order);
        self.orders.insert(key, order);
    }

    /// Remove the order with this ID and limit, if present.
    pub fn remove(&mut self, id: OrderId, limit: Price) -> Option<Order> {
        let key = self.key(limit, id);
        self.orders.remove(&key)
    }

    pub fn pop_best(&mut self) -> Option<Order> {
        let key = self.orders.iter().next().map(|(key, _)| *key)?;
        self.orders.remove(&key)
    }

    pub fn pop_worst(&mut self) -> Option<Order> {
        let key = self.orders.iter().next_back().map(|(key, _)| *key)?;
        self.orders.remove(&key)
    }

    /// Pop the best order only if it satisfies `accept`.
    pub fn pop_best_if(&mut self, accept: impl FnOnce(&Order) -> bool) -> Option<Order> {
        if self.best().is_some_and(accept) {
            self.pop_best()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.orders = OrdMap::new();
    }

    // =================================================================
    // Queries
    // =================================================================

    /// The order ranked first.
    #[must_use]
    pub fn best(&self) -> Option<&Order> {
        self.orders.values().next()
    }

    /// The order ranked last.
    #[must_use]
    pub fn worst(&self) -> Option<&Order> {
        self.orders.values().next_back()
    }

    #[must_use]
    pub fn get(&self, id: OrderId, limit: Price) -> Option<&Order> {
        self.orders.get(&self.key(limit, id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate from best to worst.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Order> {
        self.orders.values()
    }

    /// Whether `other` is the same snapshot as this partition (no update has
    /// happened since one was cloned from the other).
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        self.orders.ptr_eq(&other.orders)
    }
}
