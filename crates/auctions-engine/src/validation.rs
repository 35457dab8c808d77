//! Order gate: the checks every submission passes before it reaches the book.
//!
//! The gate is fail-closed. Checks run in a fixed order and the first
//! failure decides the rejection reason:
//! 1. tradable matches the auction's protocol
//! 2. side is accepted by the auction format
//! 3. limit lies on the tick grid
//! 4. limit meets the reservation price
//!
//! Checks that need auction state (duplicate references and order IDs) run
//! in [`Auction::insert`](crate::Auction::insert) after the gate.

use auctions_types::{AuctionProtocol, Order, RejectReason, Side};

use crate::AuctionFormat;

/// Stateless validator built from an auction's configuration.
#[derive(Debug, Clone, Copy)]
pub struct OrderGate<'a> {
    format: AuctionFormat,
    protocol: &'a AuctionProtocol,
    reservation: Option<&'a Order>,
}

impl<'a> OrderGate<'a> {
    #[must_use]
    pub fn new(
        format: AuctionFormat,
        protocol: &'a AuctionProtocol,
        reservation: Option<&'a Order>,
    ) -> Self {
        Self {
            format,
            protocol,
            reservation,
        }
    }

    /// Validate `order` against every stateless check.
    ///
    /// # Errors
    /// The first [`RejectReason`] that applies.
    pub fn validate(&self, order: &Order) -> Result<(), RejectReason> {
        if order.tradable() != self.protocol.tradable() {
            return Err(RejectReason::TradableMismatch {
                expected: self.protocol.tradable().clone(),
                actual: order.tradable().clone(),
            });
        }

        if let Some(expected) = self.format.accepted_side() {
            if order.side() != expected {
                return Err(RejectReason::WrongSide {
                    expected,
                    actual: order.side(),
                });
            }
        }

        let tick_size = self.protocol.tick_size();
        if !order.limit().is_multiple_of(tick_size) {
            return Err(RejectReason::InvalidTick {
                limit: order.limit(),
                tick_size,
            });
        }

        if let Some(reservation) = self.reservation {
            let meets = match order.side() {
                Side::Bid => order.limit() >= reservation.limit(),
                Side::Ask => order.limit() <= reservation.limit(),
            };
            if !meets {
                return Err(RejectReason::ReservationNotMet {
                    side: order.side(),
                    limit: order.limit(),
                    reservation: reservation.limit(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use auctions_types::{Price, Tradable};

    use super::*;

    fn goog() -> Tradable {
        Tradable::new("GOOG")
    }

    fn protocol(tick: i64) -> AuctionProtocol {
        AuctionProtocol::new(goog(), tick).unwrap()
    }

    #[test]
    fn valid_bid_passes() {
        let protocol = protocol(5);
        let reservation = Order::dummy_ask(10, &goog());
        let gate = OrderGate::new(AuctionFormat::SEALED_BID, &protocol, Some(&reservation));
        assert!(gate.validate(&Order::dummy_bid(15, &goog())).is_ok());
        assert!(gate.validate(&Order::dummy_bid(10, &goog())).is_ok());
    }

    #[test]
    fn tradable_checked_first() {
        let protocol = protocol(5);
        let gate = OrderGate::new(AuctionFormat::SEALED_BID, &protocol, None);
        // Wrong tradable, wrong side and off-grid all at once.
        let order = Order::dummy_ask(7, &Tradable::new("AAPL"));
        assert!(matches!(
            gate.validate(&order),
            Err(RejectReason::TradableMismatch { .. })
        ));
    }

    #[test]
    fn wrong_side_rejected() {
        let protocol = protocol(1);
        let gate = OrderGate::new(AuctionFormat::OPEN_BID_REVERSE, &protocol, None);
        assert_eq!(
            gate.validate(&Order::dummy_bid(5, &goog())),
            Err(RejectReason::WrongSide {
                expected: Side::Ask,
                actual: Side::Bid
            })
        );
    }

    #[test]
    fn off_tick_rejected() {
        let protocol = protocol(5);
        let gate = OrderGate::new(AuctionFormat::OPEN_DOUBLE, &protocol, None);
        assert_eq!(
            gate.validate(&Order::dummy_ask(12, &goog())),
            Err(RejectReason::InvalidTick {
                limit: Price(12),
                tick_size: 5
            })
        );
        assert!(gate.validate(&Order::dummy_ask(-15, &goog())).is_ok());
    }

    #[test]
    fn reservation_price_enforced_both_directions() {
        let protocol = protocol(1);
        let seller = Order::dummy_ask(50, &goog());
        let forward = OrderGate::new(AuctionFormat::SEALED_BID, &protocol, Some(&seller));
        assert!(matches!(
            forward.validate(&Order::dummy_bid(49, &goog())),
            Err(RejectReason::ReservationNotMet { .. })
        ));

        let buyer = Order::dummy_bid(50, &goog());
        let reverse = OrderGate::new(AuctionFormat::SEALED_BID_REVERSE, &protocol, Some(&buyer));
        assert!(reverse.validate(&Order::dummy_ask(50, &goog())).is_ok());
        assert!(matches!(
            reverse.validate(&Order::dummy_ask(51, &goog())),
            Err(RejectReason::ReservationNotMet { .. })
        ));
    }
}
