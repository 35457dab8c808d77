//! System-wide constants for the auction engine.

/// Default tick size: every integral price is allowed.
pub const DEFAULT_TICK_SIZE: i64 = 1;

/// Domain separator for order book digests.
pub const BOOK_DIGEST_DOMAIN: &[u8] = b"auctions:book_digest:v1:";

/// Domain separator for fill root hashes.
pub const FILL_ROOT_DOMAIN: &[u8] = b"auctions:fill_root:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "auctions-rs";
