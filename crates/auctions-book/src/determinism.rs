//! Determinism verification for order books and clearing output.
//!
//! Two processes that apply the same operation sequence to the same initial
//! book must reach the same state and emit the same fills. The digests here
//! make that cheap to check without comparing full payloads: a book digest
//! covers all four partitions in priority order, and a fill root covers an
//! ordered fill sequence.

use auctions_types::Order;
use auctions_types::constants::{BOOK_DIGEST_DOMAIN, FILL_ROOT_DOMAIN};
use sha2::{Digest, Sha256};

use crate::{Fill, FourHeapOrderBook, Partition};

fn hash_order(hasher: &mut Sha256, order: &Order) {
    hasher.update(order.id().0.as_bytes());
    hasher.update(order.issuer().0.as_bytes());
    hasher.update([u8::from(order.is_bid())]);
    hasher.update(order.limit().value().to_le_bytes());
    let name = order.tradable().name().as_bytes();
    hasher.update((name.len() as u64).to_le_bytes());
    hasher.update(name);
}

fn hash_partition(hasher: &mut Sha256, partition: &Partition) {
    hasher.update((partition.len() as u64).to_le_bytes());
    for order in partition.iter() {
        hash_order(hasher, order);
    }
}

fn finish(hasher: Sha256) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Hash of an ordered fill sequence.
///
/// Depends on each fill's ask, bid and price, in order. The same fills in
/// the same order always produce the same root.
#[must_use]
pub fn fill_root(fills: &[Fill]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(FILL_ROOT_DOMAIN);
    hasher.update((fills.len() as u64).to_le_bytes());
    for fill in fills {
        hash_order(&mut hasher, fill.ask_order());
        hash_order(&mut hasher, fill.bid_order());
        hasher.update(fill.price().value().to_le_bytes());
    }
    finish(hasher)
}

/// Recompute the root of `fills` and compare it with `expected`.
#[must_use]
pub fn verify_fill_root(fills: &[Fill], expected: &[u8; 32]) -> bool {
    fill_root(fills) == *expected
}

/// Hash of the full book state: which orders sit in which partition, in
/// priority order.
///
/// Books built from the same orders always agree, whatever the insertion
/// order, because the four-heap state is a function of the order set.
#[must_use]
pub fn book_digest(book: &FourHeapOrderBook) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(BOOK_DIGEST_DOMAIN);
    for partition in [
        book.matched_asks(),
        book.matched_bids(),
        book.unmatched_asks(),
        book.unmatched_bids(),
    ] {
        hash_partition(&mut hasher, partition);
    }
    finish(hasher)
}
