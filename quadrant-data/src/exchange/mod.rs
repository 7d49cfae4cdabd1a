use crate::{books::OrderBookSnapshot, error::ScanError, universe::PairDescriptor};
use async_trait::async_trait;

/// Kraken public REST connector.
pub mod kraken;

/// Source of tradable pair metadata.
#[async_trait]
pub trait MarketSource {
    /// Fetch the full list of tradable pairs the exchange currently offers.
    async fn fetch_asset_pairs(&self) -> Result<Vec<PairDescriptor>, ScanError>;
}

/// Source of order book snapshots.
///
/// The seam between the scan pipeline and exchange connectivity: production
/// code drives the pipeline with [`kraken::KrakenClient`], tests with a stub.
#[async_trait]
pub trait OrderBookSource {
    /// Fetch a point-in-time order book snapshot for one pair.
    ///
    /// `request_id` is the exchange-native pair identifier
    /// ([`PairDescriptor::request_id`]).
    async fn fetch_order_book(&self, request_id: &str) -> Result<OrderBookSnapshot, ScanError>;
}
