//! # auctions-engine
//!
//! **Auction facade over the four-heap book and clearing engine.**
//!
//! One generic [`Auction`] covers every supported mechanism. Formats differ
//! only in which side holds a fixed reservation order and whether quotes are
//! public:
//!
//! | Format              | Reservation | Order flow | Quotes |
//! |---------------------|-------------|------------|--------|
//! | sealed-bid          | ask         | bids       | no     |
//! | open-bid            | ask         | bids       | yes    |
//! | sealed-bid reverse  | bid         | asks       | no     |
//! | open-bid reverse    | bid         | asks       | yes    |
//! | sealed double       | none        | both       | no     |
//! | open double         | none        | both       | yes    |
//!
//! ## Components
//!
//! 1. **OrderGate**: stateless checks (tradable, side, tick, reservation price)
//! 2. **Auction**: reference tracking, book updates, clearing rounds
//! 3. **Quote**: read-only projections answered by open formats
//! 4. **AuctionConfig**: JSON-loadable format, policies and protocol
//!
//! Every operation returns a new [`Auction`]. Hold the latest value in one
//! place and hand snapshots to readers.

pub mod auction;
pub mod config;
pub mod format;
pub mod quotes;
pub mod validation;

pub use auction::Auction;
pub use config::AuctionConfig;
pub use format::{AuctionFormat, QuoteVisibility};
pub use quotes::{Quote, QuoteRequest};
pub use validation::OrderGate;
