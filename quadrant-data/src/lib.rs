//! # Quadrant-Data
//! Core library for scanning Kraken USD spot pairs and ranking them by
//! order book depth imbalance.
//!
//! A scan is a single linear pass with no carried state:
//! 1. Fetch tradable pair metadata and reduce it to the eligible universe of
//!    active, USD-quoted, non-stablecoin pairs ([`universe`]).
//! 2. Fetch one order book snapshot per pair, sequentially and rate-limited,
//!    and compute the normalized bid/ask volume delta at the ±2% and ±5%
//!    depth bands ([`scan`], [`depth`]).
//! 3. Keep the pairs where both bands are strictly positive and z-score the
//!    two delta columns for display ([`rank`]).
//!
//! Per-pair failures never abort a scan; they are collected as diagnostics
//! and surfaced to the presentation layer.

/// All errors generated in `quadrant-data`.
pub mod error;

/// Order book snapshot and price level types.
pub mod books;

/// Normalized depth-imbalance calculation and the two band constants.
pub mod depth;

/// Exchange connectivity: the [`MarketSource`](exchange::MarketSource) and
/// [`OrderBookSource`](exchange::OrderBookSource) seams, plus the Kraken
/// public REST implementation.
pub mod exchange;

/// Eligible pair selection and the stablecoin exclusion set.
pub mod universe;

/// Sequential snapshot pipeline producing per-pair imbalance results.
pub mod scan;

/// Ranked table and z-score table derivation.
pub mod rank;

pub use books::{Level, OrderBookSnapshot};
pub use depth::{BAND_TIGHT, BAND_WIDE, normalized_delta};
pub use error::ScanError;
pub use rank::{RankedTables, ZScoreRow, rank};
pub use scan::{Diagnostic, ImbalanceResult, ScanReport, collect_results, run_scan};
pub use universe::{PairDescriptor, STABLECOIN_BASES, eligible_pairs};
