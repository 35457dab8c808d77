//! Integral prices and blending weights.
//!
//! Prices are whole numbers of the smallest price unit. All derived prices
//! (midpoints, weighted averages) are computed exactly and rounded by a fixed
//! rule, so the same inputs always produce the same price on every machine.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{AuctionError, Result};

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// A limit or settlement price in integral price units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub i64);

impl Price {
    /// Sentinel for "sell at any price".
    pub const MIN: Self = Self(i64::MIN);
    /// Sentinel for "buy at any price".
    pub const MAX: Self = Self(i64::MAX);
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Floor of the arithmetic mean. Never overflows, even between the sentinels.
    #[must_use]
    pub fn midpoint(a: Self, b: Self) -> Self {
        let sum = i128::from(a.0) + i128::from(b.0);
        // The floored mean of two i64 values always fits in an i64.
        #[allow(clippy::cast_possible_truncation)]
        Self(sum.div_euclid(2) as i64)
    }

    /// `round(weight * bid + (1 - weight) * ask)`, ties away from zero.
    ///
    /// The result always lies between `ask` and `bid`.
    #[must_use]
    pub fn weighted(ask: Self, bid: Self, weight: Weight) -> Self {
        let w = weight.value();
        let blended = w * Decimal::from(bid.0) + (Decimal::ONE - w) * Decimal::from(ask.0);
        let rounded = blended.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // A convex combination of two i64 values fits in an i64. The clamp
        // absorbs last-digit rounding in the Decimal product.
        let (lo, hi) = if ask <= bid { (ask, bid) } else { (bid, ask) };
        rounded
            .to_i64()
            .map_or(hi, Self)
            .clamp(lo, hi)
    }

    /// Whether this price lies on the tick grid.
    #[must_use]
    pub fn is_multiple_of(self, tick_size: i64) -> bool {
        tick_size > 0 && self.0 % tick_size == 0
    }

    /// Non-negative distance `self - lower`, widened so sentinel pairs never overflow.
    #[must_use]
    pub fn distance_above(self, lower: Self) -> Option<u64> {
        let diff = i128::from(self.0) - i128::from(lower.0);
        u64::try_from(diff).ok()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::MIN => f.write_str("MIN"),
            Self::MAX => f.write_str("MAX"),
            Self(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

// ---------------------------------------------------------------------------
// Weight
// ---------------------------------------------------------------------------

/// Blending weight in `[0, 1]` used by the weighted-average pricing policy.
///
/// The weight applies to the bid quote; `1 - weight` applies to the ask quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Weight(Decimal);

impl Weight {
    pub const HALF: Self = Self(Decimal::from_parts(5, 0, 0, false, 1));

    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(AuctionError::InvalidWeight { weight: value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Weight {
    type Error = AuctionError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Weight> for Decimal {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
