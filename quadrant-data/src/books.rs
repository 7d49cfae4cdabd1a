use chrono::{DateTime, Utc};
use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalised order book [`Level`] (price and volume at that price).
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Deserialize, Serialize, Constructor,
)]
pub struct Level {
    pub price: Decimal,
    pub amount: Decimal,
}

impl<P, A> From<(P, A)> for Level
where
    P: Into<Decimal>,
    A: Into<Decimal>,
{
    fn from((price, amount): (P, A)) -> Self {
        Self::new(price.into(), amount.into())
    }
}

/// Order book snapshot for one trading pair, captured at a single point in
/// time and consumed immediately (never persisted).
///
/// Sort order invariants: `bids` descending by price, `asks` ascending by
/// price, so the first element of each side is the best quote.
#[derive(Clone, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub struct OrderBookSnapshot {
    pub time_received: DateTime<Utc>,
    pub bids: Vec<Level>,
    pub asks: Vec<Level>,
}

impl OrderBookSnapshot {
    pub fn new(bids: Vec<Level>, asks: Vec<Level>) -> Self {
        Self {
            time_received: Utc::now(),
            bids,
            asks,
        }
    }

    /// Best (highest) bid, if the bid side is non-empty.
    pub fn best_bid(&self) -> Option<&Level> {
        self.bids.first()
    }

    /// Best (lowest) ask, if the ask side is non-empty.
    pub fn best_ask(&self) -> Option<&Level> {
        self.asks.first()
    }

    /// Arithmetic mean of the best bid and best ask price.
    ///
    /// `None` if either side of the book is empty.
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid.price + ask.price) / Decimal::TWO),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mid_price_is_mean_of_best_quotes() {
        let book = OrderBookSnapshot::new(
            vec![Level::from((100, 2)), Level::from((99, 1))],
            vec![Level::from((101, 3)), Level::from((102, 1))],
        );
        assert_eq!(book.mid_price(), Some(dec!(100.5)));
    }

    #[test]
    fn test_mid_price_requires_both_sides() {
        let no_asks = OrderBookSnapshot::new(vec![Level::from((100, 2))], vec![]);
        assert_eq!(no_asks.mid_price(), None);

        let no_bids = OrderBookSnapshot::new(vec![], vec![Level::from((101, 3))]);
        assert_eq!(no_bids.mid_price(), None);
    }
}
