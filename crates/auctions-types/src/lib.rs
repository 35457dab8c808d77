//! # auctions-types
//!
//! Shared types, errors, and configuration for single-unit auctions.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`IssuerId`], [`Reference`], [`Tradable`]
//! - **Prices**: [`Price`] with `MIN`/`MAX` sentinels, [`Weight`]
//! - **Order model**: [`Order`], [`Side`]
//! - **Protocol**: [`AuctionProtocol`] (tick size, tradable)
//! - **Errors**: [`AuctionError`] with `AUC_ERR_` prefix codes, [`RejectReason`]
//! - **Constants**: defaults and hash domain separators

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod price;

// Re-export all primary types at crate root for ergonomic imports:
//   use auctions_types::{Order, Side, Price, AuctionError, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use order::*;
pub use price::*;

// Constants are accessed via `auctions_types::constants::FOO`
// (not re-exported to avoid name collisions).
