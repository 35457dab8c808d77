//! Auction protocol parameters.

use serde::{Deserialize, Serialize};

use crate::{AuctionError, Result, Tradable, constants};

/// The rules an auction enforces on submitted limit prices.
///
/// Deserialization validates, so a loaded protocol always has a positive
/// tick size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProtocol")]
pub struct AuctionProtocol {
    /// Minimum price increment; every submitted limit must be a multiple.
    tick_size: i64,
    /// The good being auctioned.
    tradable: Tradable,
}

/// Wire form of [`AuctionProtocol`] before validation.
#[derive(Deserialize)]
struct RawProtocol {
    #[serde(default = "default_tick_size")]
    tick_size: i64,
    tradable: Tradable,
}

impl TryFrom<RawProtocol> for AuctionProtocol {
    type Error = AuctionError;

    fn try_from(raw: RawProtocol) -> Result<Self> {
        Self::new(raw.tradable, raw.tick_size)
    }
}

fn default_tick_size() -> i64 {
    constants::DEFAULT_TICK_SIZE
}

impl AuctionProtocol {
    /// Create a protocol, rejecting non-positive tick sizes.
    pub fn new(tradable: Tradable, tick_size: i64) -> Result<Self> {
        let protocol = Self {
            tick_size,
            tradable,
        };
        protocol.validate()?;
        Ok(protocol)
    }

    /// Protocol with the default tick size of one price unit.
    #[must_use]
    pub fn for_tradable(tradable: Tradable) -> Self {
        Self {
            tick_size: constants::DEFAULT_TICK_SIZE,
            tradable,
        }
    }

    /// Parse a protocol from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_size <= 0 {
            return Err(AuctionError::InvalidTickSize {
                tick_size: self.tick_size,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn tick_size(&self) -> i64 {
        self.tick_size
    }

    #[must_use]
    pub fn tradable(&self) -> &Tradable {
        &self.tradable
    }

    /// Same protocol with a different tick size.
    pub fn with_tick_size(&self, tick_size: i64) -> Result<Self> {
        Self::new(self.tradable.clone(), tick_size)
    }
}
