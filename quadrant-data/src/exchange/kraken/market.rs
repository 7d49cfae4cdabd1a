use serde::Deserialize;
use smol_str::SmolStr;

/// Kraken tradable asset pair metadata.
///
/// #### Raw Payload Examples
/// See docs: <https://docs.kraken.com/api/docs/rest-api/get-asset-pairs>
/// ```json
/// {
///     "altname": "XBTUSD",
///     "wsname": "XBT/USD",
///     "base": "XXBT",
///     "quote": "ZUSD",
///     "status": "online"
/// }
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Deserialize)]
pub struct KrakenAssetPair {
    pub altname: SmolStr,
    /// `BASE/QUOTE` name, absent for a small number of legacy pairs.
    #[serde(default)]
    pub wsname: Option<SmolStr>,
    pub base: SmolStr,
    pub quote: SmolStr,
    #[serde(default)]
    pub status: Option<KrakenPairStatus>,
}

impl KrakenAssetPair {
    /// Only `online` pairs accept new orders; every other status is treated
    /// as inactive.
    pub fn is_online(&self) -> bool {
        matches!(self.status, Some(KrakenPairStatus::Online))
    }
}

/// Kraken asset pair trading status.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KrakenPairStatus {
    Online,
    CancelOnly,
    PostOnly,
    LimitOnly,
    ReduceOnly,
    Delisted,
    #[serde(other)]
    Unknown,
}
