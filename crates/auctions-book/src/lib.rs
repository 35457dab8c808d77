//! # auctions-book
//!
//! **Four-heap order book and pure clearing engine for single-unit auctions.**
//!
//! The book keeps its orders split into matched and unmatched asks and bids,
//! so the maximal price-consistent matching is always available without a
//! search. On top of it:
//!
//! - **Pricing policies** read the book's two quotes and produce one price
//! - **Clearing** turns the matched pairs into fills, uniform or discriminatory
//! - **Determinism digests** fingerprint book state and fill sequences
//!
//! Every operation is a pure function from book to book. Nothing here keeps
//! state between calls, touches I/O, or knows about auction formats.

pub mod clearing;
pub mod determinism;
pub mod fill;
pub mod orderbook;
pub mod partition;
pub mod pricing;

pub use clearing::{ClearOutcome, ClearingPolicy, clear};
pub use determinism::{book_digest, fill_root, verify_fill_root};
pub use fill::Fill;
pub use orderbook::FourHeapOrderBook;
pub use partition::{Partition, Priority};
pub use pricing::PricingPolicy;
