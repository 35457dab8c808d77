//! Auction configuration loaded from JSON.

use auctions_book::{ClearingPolicy, PricingPolicy};
use auctions_types::{AuctionProtocol, Result};
use serde::{Deserialize, Serialize};

use crate::AuctionFormat;

/// Everything needed to build an [`Auction`](crate::Auction) except the
/// reservation order.
///
/// ```json
/// {
///   "format": { "reservation": "Ask", "quotes": "sealed" },
///   "pricing": { "kind": "bid_quote" },
///   "clearing": "uniform",
///   "protocol": { "tradable": "GOOG", "tick_size": 5 }
/// }
/// ```
///
/// `clearing` defaults to uniform and `protocol.tick_size` to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionConfig {
    pub format: AuctionFormat,
    pub pricing: PricingPolicy,
    #[serde(default)]
    pub clearing: ClearingPolicy,
    pub protocol: AuctionProtocol,
}

impl AuctionConfig {
    /// Parse and validate a configuration.
    ///
    /// # Errors
    /// `Serialization` for malformed JSON, an out-of-range weight or a
    /// non-positive tick size.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.protocol.validate()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use auctions_types::{AuctionError, Side, Weight};

    use super::*;
    use crate::QuoteVisibility;

    #[test]
    fn parse_full_config() {
        let config = AuctionConfig::from_json(
            r#"{
                "format": { "reservation": "Bid", "quotes": "open" },
                "pricing": { "kind": "weighted_average", "weight": "0.5" },
                "clearing": "discriminatory",
                "protocol": { "tradable": "GOOG", "tick_size": 5 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.format.reservation, Some(Side::Bid));
        assert_eq!(config.format.quotes, QuoteVisibility::Open);
        assert_eq!(config.pricing, PricingPolicy::WeightedAverage(Weight::HALF));
        assert_eq!(config.clearing, ClearingPolicy::Discriminatory);
        assert_eq!(config.protocol.tick_size(), 5);
    }

    #[test]
    fn defaults_applied() {
        let config = AuctionConfig::from_json(
            r#"{
                "format": { "reservation": null, "quotes": "sealed" },
                "pricing": { "kind": "mid_point" },
                "protocol": { "tradable": "GOOG" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.clearing, ClearingPolicy::Uniform);
        assert_eq!(config.protocol.tick_size(), 1);
    }

    #[test]
    fn invalid_tick_rejected_on_load() {
        let err = AuctionConfig::from_json(
            r#"{
                "format": { "reservation": "Ask", "quotes": "sealed" },
                "pricing": { "kind": "ask_quote" },
                "protocol": { "tradable": "GOOG", "tick_size": -1 }
            }"#,
        );
        assert!(matches!(&err, Err(AuctionError::Serialization(msg)) if msg.contains("tick size -1")));
    }

    #[test]
    fn out_of_range_weight_rejected_on_load() {
        let err = AuctionConfig::from_json(
            r#"{
                "format": { "reservation": "Ask", "quotes": "sealed" },
                "pricing": { "kind": "weighted_average", "weight": "2" },
                "protocol": { "tradable": "GOOG" }
            }"#,
        );
        assert!(matches!(err, Err(AuctionError::Serialization(_))));
    }

    #[test]
    fn json_roundtrip() {
        let config = AuctionConfig {
            format: AuctionFormat::SEALED_DOUBLE,
            pricing: PricingPolicy::AskQuote,
            clearing: ClearingPolicy::Uniform,
            protocol: AuctionProtocol::for_tradable(auctions_types::Tradable::new("GOOG")),
        };
        let json = config.to_json().unwrap();
        assert_eq!(AuctionConfig::from_json(&json).unwrap(), config);
    }
}
