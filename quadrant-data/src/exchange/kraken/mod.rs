use self::{book::KrakenDepth, market::KrakenAssetPair};
use crate::{
    books::OrderBookSnapshot,
    error::ScanError,
    exchange::{MarketSource, OrderBookSource},
    universe::PairDescriptor,
};
use async_trait::async_trait;
use fnv::FnvHashMap;
use serde::{Deserialize, de::DeserializeOwned};
use smol_str::SmolStr;
use url::Url;

/// Order book (depth) types for Kraken.
pub mod book;

/// Asset pair metadata types for Kraken.
pub mod market;

/// Kraken public REST base url.
///
/// See docs: <https://docs.kraken.com/api/docs/rest-api/get-asset-pairs>
pub const BASE_URL_KRAKEN: &str = "https://api.kraken.com";

/// Path for listing tradable asset pairs.
pub const PATH_ASSET_PAIRS: &str = "/0/public/AssetPairs";

/// Path for fetching an order book snapshot.
pub const PATH_DEPTH: &str = "/0/public/Depth";

/// Generic Kraken REST response envelope.
///
/// Kraken always returns HTTP 200 with a populated `error` array on
/// application-level failures, so the envelope is validated explicitly.
#[derive(Debug, Deserialize)]
pub struct KrakenResponse<T> {
    #[serde(default)]
    pub error: Vec<String>,
    pub result: Option<T>,
}

impl<T> KrakenResponse<T> {
    pub fn into_result(self) -> Result<T, ScanError> {
        if !self.error.is_empty() {
            return Err(ScanError::Api(self.error.join(", ")));
        }

        self.result
            .ok_or_else(|| ScanError::Payload("response missing result".to_string()))
    }
}

/// Kraken public REST client.
///
/// Stateless per call: holds only the connection pool and base url, so a
/// single instance constructed at startup can serve every scan.
#[derive(Debug, Clone)]
pub struct KrakenClient {
    http: reqwest::Client,
    base_url: Url,
}

impl KrakenClient {
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self::with_base_url(Url::parse(BASE_URL_KRAKEN)?))
    }

    /// Construct a client against a non-default base url (eg/ a local stub).
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ScanError>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        response
            .json::<KrakenResponse<T>>()
            .await?
            .into_result()
    }
}

#[async_trait]
impl MarketSource for KrakenClient {
    async fn fetch_asset_pairs(&self) -> Result<Vec<PairDescriptor>, ScanError> {
        let pairs: FnvHashMap<SmolStr, KrakenAssetPair> =
            self.get_json(PATH_ASSET_PAIRS, &[]).await?;

        // Pairs without a wsname cannot be decomposed into base/quote and are
        // dropped here rather than surfaced as errors.
        Ok(pairs
            .into_values()
            .filter_map(PairDescriptor::try_from_kraken)
            .collect())
    }
}

#[async_trait]
impl OrderBookSource for KrakenClient {
    async fn fetch_order_book(&self, request_id: &str) -> Result<OrderBookSnapshot, ScanError> {
        let books: FnvHashMap<SmolStr, KrakenDepth> = self
            .get_json(PATH_DEPTH, &[("pair", request_id)])
            .await?;

        // The result is keyed by Kraken's internal pair name; a single-pair
        // request returns exactly one entry.
        books
            .into_values()
            .next()
            .map(OrderBookSnapshot::from)
            .ok_or_else(|| ScanError::Payload(format!("no depth entry returned for {request_id}")))
    }
}

impl PairDescriptor {
    fn try_from_kraken(pair: KrakenAssetPair) -> Option<Self> {
        let active = pair.is_online();
        pair.wsname
            .map(|ticker| Self::new(ticker, pair.altname, active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kraken_response_into_result() {
        let ok: KrakenResponse<u64> = serde_json::from_str(r#"{"error":[],"result":7}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(7));

        let err: KrakenResponse<u64> =
            serde_json::from_str(r#"{"error":["EQuery:Unknown asset pair"]}"#).unwrap();
        assert_eq!(
            err.into_result(),
            Err(ScanError::Api("EQuery:Unknown asset pair".to_string()))
        );

        let empty: KrakenResponse<u64> = serde_json::from_str(r#"{"error":[]}"#).unwrap();
        assert!(matches!(empty.into_result(), Err(ScanError::Payload(_))));
    }
}
