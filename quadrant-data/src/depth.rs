use crate::books::OrderBookSnapshot;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tight depth band: orders within ±2% of mid-price.
pub const BAND_TIGHT: Decimal = dec!(0.02);

/// Wide depth band: orders within ±5% of mid-price.
pub const BAND_WIDE: Decimal = dec!(0.05);

/// Normalized bid/ask volume delta within a percentage band around mid-price.
///
/// Sums bid volume for levels priced at or above `mid_price * (1 - band_pct)`
/// and ask volume for levels priced at or below `mid_price * (1 + band_pct)`,
/// then returns `(bid_volume - ask_volume) / (bid_volume + ask_volume)`.
///
/// Always in `[-1, 1]`. Exactly zero when no volume falls inside the band on
/// either side (explicit guard, never a division by zero). An empty book side
/// contributes zero volume, it is not an error. Negative values mean ask-side
/// pressure exceeds bid-side pressure within the band.
pub fn normalized_delta(book: &OrderBookSnapshot, mid_price: Decimal, band_pct: Decimal) -> Decimal {
    let bid_threshold = mid_price * (Decimal::ONE - band_pct);
    let ask_threshold = mid_price * (Decimal::ONE + band_pct);

    let bid_volume: Decimal = book
        .bids
        .iter()
        .filter(|level| level.price >= bid_threshold)
        .map(|level| level.amount)
        .sum();

    let ask_volume: Decimal = book
        .asks
        .iter()
        .filter(|level| level.price <= ask_threshold)
        .map(|level| level.amount)
        .sum();

    let total_volume = bid_volume + ask_volume;
    if total_volume.is_zero() {
        Decimal::ZERO
    } else {
        (bid_volume - ask_volume) / total_volume
    }
}
