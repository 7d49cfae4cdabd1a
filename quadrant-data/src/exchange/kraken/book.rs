use crate::books::{Level, OrderBookSnapshot};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Kraken order book (depth) snapshot for one pair.
///
/// Kraken guarantees `bids` descending and `asks` ascending by price, the
/// same sort order [`OrderBookSnapshot`] requires.
///
/// #### Raw Payload Examples
/// See docs: <https://docs.kraken.com/api/docs/rest-api/get-order-book>
/// ```json
/// {
///     "asks": [["30384.10000", "2.059", 1688887769]],
///     "bids": [["30297.70000", "1.115", 1688887765]]
/// }
/// ```
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct KrakenDepth {
    pub bids: Vec<KrakenLevel>,
    pub asks: Vec<KrakenLevel>,
}

/// Kraken order book level: `[price, volume, timestamp]` with decimal
/// strings for price and volume.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct KrakenLevel(
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    pub f64,
);

impl From<KrakenLevel> for Level {
    fn from(level: KrakenLevel) -> Self {
        Self::new(level.0, level.1)
    }
}

impl From<KrakenDepth> for OrderBookSnapshot {
    fn from(depth: KrakenDepth) -> Self {
        Self::new(
            depth.bids.into_iter().map(Level::from).collect(),
            depth.asks.into_iter().map(Level::from).collect(),
        )
    }
}
