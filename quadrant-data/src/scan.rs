use crate::{
    depth::{BAND_TIGHT, BAND_WIDE, normalized_delta},
    exchange::{MarketSource, OrderBookSource},
    universe::{PairDescriptor, STABLECOIN_BASES, eligible_pairs},
};
use chrono::{DateTime, Utc};
use derive_more::{Constructor, Display};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;
use smol_str::SmolStr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fixed pause after each successful snapshot fetch, bounding request rate.
///
/// A policy constant, not adaptive: there is no backoff on error.
pub const SNAPSHOT_PAUSE: Duration = Duration::from_millis(200);

/// Per-pair depth imbalance, created once per snapshot and never mutated.
#[derive(Clone, PartialEq, Debug, Serialize, Constructor)]
pub struct ImbalanceResult {
    #[serde(rename = "Ticker")]
    pub ticker: SmolStr,
    /// Normalized delta within ±2% of mid-price, rounded to 4dp.
    #[serde(rename = "Norm Delta (0-2%)")]
    pub delta_tight: f64,
    /// Normalized delta within ±5% of mid-price, rounded to 4dp.
    #[serde(rename = "Norm Delta (0-5%)")]
    pub delta_wide: f64,
}

/// User-visible record of a pair dropped mid-scan.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Constructor, Display)]
#[display("Skipping {ticker}: {reason}")]
pub struct Diagnostic {
    pub ticker: SmolStr,
    pub reason: String,
}

/// Outcome of one full scan pass.
#[derive(Clone, Debug, Serialize)]
pub struct ScanReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub results: Vec<ImbalanceResult>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Sequentially snapshot every pair and compute its depth imbalance at the
/// tight and wide bands.
///
/// A fetch failure or a book missing a side never aborts the pass: the pair
/// is recorded as a [`Diagnostic`] and the loop continues. Sleeps `pause`
/// after each snapshot that produced a result.
pub async fn collect_results<Source>(
    pairs: &[PairDescriptor],
    source: &Source,
    pause: Duration,
) -> ScanReport
where
    Source: OrderBookSource + Sync,
{
    let started_at = Utc::now();
    let mut results = Vec::with_capacity(pairs.len());
    let mut diagnostics = Vec::new();

    for pair in pairs {
        let book = match source.fetch_order_book(&pair.request_id).await {
            Ok(book) => book,
            Err(error) => {
                warn!(ticker = %pair.ticker, %error, "skipping pair: fetch failed");
                diagnostics.push(Diagnostic::new(pair.ticker.clone(), error.to_string()));
                continue;
            }
        };

        let Some(mid_price) = book.mid_price() else {
            warn!(ticker = %pair.ticker, "skipping pair: order book missing bids or asks");
            diagnostics.push(Diagnostic::new(
                pair.ticker.clone(),
                "order book missing bids or asks".to_string(),
            ));
            continue;
        };

        let delta_tight = round_4dp(normalized_delta(&book, mid_price, BAND_TIGHT));
        let delta_wide = round_4dp(normalized_delta(&book, mid_price, BAND_WIDE));

        debug!(
            ticker = %pair.ticker,
            %mid_price,
            delta_tight,
            delta_wide,
            "snapshot processed"
        );

        results.push(ImbalanceResult::new(
            pair.ticker.clone(),
            delta_tight,
            delta_wide,
        ));

        tokio::time::sleep(pause).await;
    }

    ScanReport {
        started_at,
        finished_at: Utc::now(),
        results,
        diagnostics,
    }
}

/// Run one full scan pass from scratch: fetch pair metadata, reduce it to
/// the eligible universe, then snapshot each pair in sequence.
///
/// Re-invocable with no retained state between calls; failing to list the
/// markets is the only error that aborts a pass.
pub async fn run_scan<Source>(source: &Source) -> Result<ScanReport, crate::error::ScanError>
where
    Source: MarketSource + OrderBookSource + Sync,
{
    let markets = source.fetch_asset_pairs().await?;
    let pairs = eligible_pairs(&markets, &STABLECOIN_BASES);

    info!(
        markets = markets.len(),
        eligible = pairs.len(),
        "scanning eligible USD pairs"
    );

    Ok(collect_results(&pairs, source, SNAPSHOT_PAUSE).await)
}

fn round_4dp(delta: Decimal) -> f64 {
    delta.round_dp(4).to_f64().unwrap_or(0.0)
}
