//! Identifiers used throughout the auction engine.
//!
//! Identifiers are always assigned by the caller. The engine only compares
//! them; it never mints new ones. Random constructors exist for tests and
//! order generators behind the `test-helpers` feature.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Unique order identifier.
///
/// Also the final tie-break in price priority: among orders with equal limit
/// prices, the smaller `OrderId` ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// IssuerId
// ---------------------------------------------------------------------------

/// Opaque identity of the participant that issued an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct IssuerId(pub Uuid);

impl IssuerId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for IssuerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "issuer:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// Token a participant attaches to a submission so it can later cancel the
/// order without holding on to the full order value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Reference(pub Uuid);

impl Reference {
    #[must_use]
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ref:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tradable
// ---------------------------------------------------------------------------

/// The good being auctioned. Compared by equality only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tradable(String);

impl Tradable {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tradable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Random identifiers for tests and order generators.
#[cfg(any(test, feature = "test-helpers"))]
mod random {
    use uuid::Uuid;

    use super::{IssuerId, OrderId, Reference};

    impl OrderId {
        #[must_use]
        pub fn random() -> Self {
            Self(Uuid::now_v7())
        }
    }

    impl IssuerId {
        #[must_use]
        pub fn random() -> Self {
            Self(Uuid::now_v7())
        }
    }

    impl Reference {
        #[must_use]
        pub fn random() -> Self {
            Self(Uuid::now_v7())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
