//! Error types for the auction engine.
//!
//! All errors use the `AUC_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Rejected submissions
//! - 2xx: Lookups that found nothing
//! - 3xx: Configuration errors
//! - 4xx: Quote errors
//! - 9xx: General / internal errors
//!
//! "No clearing price" is deliberately absent: an auction that cannot clear
//! reports an empty round, not an error.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{OrderId, Price, Reference, Side, Tradable};

/// Why an insert was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The limit price is not on the auction's tick grid.
    #[error("limit {limit} is not a multiple of tick size {tick_size}")]
    InvalidTick { limit: Price, tick_size: i64 },

    /// The limit price does not meet the auction's reservation price.
    #[error("{side} limit {limit} does not meet reservation price {reservation}")]
    ReservationNotMet {
        side: Side,
        limit: Price,
        reservation: Price,
    },

    /// A single-sided auction received an order for its fixed side.
    #[error("auction accepts {expected} orders only, got {actual}")]
    WrongSide { expected: Side, actual: Side },

    /// The order is for a different good than the auction trades.
    #[error("auction trades {expected}, order is for {actual}")]
    TradableMismatch { expected: Tradable, actual: Tradable },

    /// An order with this ID is already in the book.
    #[error("order {0} already in the book")]
    DuplicateOrder(OrderId),

    /// The submission reference is already tracking a live order.
    #[error("reference {0} already in use")]
    DuplicateReference(Reference),
}

/// Central error enum for all auction operations.
#[derive(Debug, Error)]
pub enum AuctionError {
    // =================================================================
    // Rejections (1xx)
    // =================================================================
    /// An insert failed validation. The auction is left unchanged.
    #[error("AUC_ERR_100: Order rejected: {0}")]
    Rejected(RejectReason),

    // =================================================================
    // Not found (2xx)
    // =================================================================
    /// No order with this ID is in any partition of the book.
    #[error("AUC_ERR_200: Order not found: {0}")]
    OrderNotFound(OrderId),

    /// No live order is tracked under this reference.
    #[error("AUC_ERR_201: Reference not found: {0}")]
    ReferenceNotFound(Reference),

    // =================================================================
    // Configuration (3xx)
    // =================================================================
    /// Weighted-average pricing needs a weight in `[0, 1]`.
    #[error("AUC_ERR_300: Invalid weight {weight}: must lie in [0, 1]")]
    InvalidWeight { weight: Decimal },

    /// Tick size must be strictly positive.
    #[error("AUC_ERR_301: Invalid tick size {tick_size}: must be positive")]
    InvalidTickSize { tick_size: i64 },

    /// Any other inconsistent configuration.
    #[error("AUC_ERR_302: Configuration error: {0}")]
    Configuration(String),

    // =================================================================
    // Quotes (4xx)
    // =================================================================
    /// Sealed auctions do not answer quote requests.
    #[error("AUC_ERR_400: Quotes are not available in a sealed auction")]
    QuotesUnavailable,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// A book invariant does not hold. Always a bug.
    #[error("AUC_ERR_900: Order book invariant violated: {reason}")]
    InvariantViolation { reason: String },

    /// Serialization / deserialization error.
    #[error("AUC_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, AuctionError>;

impl From<RejectReason> for AuctionError {
    fn from(reason: RejectReason) -> Self {
        Self::Rejected(reason)
    }
}

impl From<serde_json::Error> for AuctionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl AuctionError {
    /// The rejection reason, if this is a rejected insert.
    #[must_use]
    pub fn reject_reason(&self) -> Option<&RejectReason> {
        match self {
            Self::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}
