use crate::scan::ImbalanceResult;
use serde::Serialize;
use smol_str::SmolStr;

/// Per-pair standardized deltas over the ranked table.
#[derive(Clone, Debug, Serialize)]
pub struct ZScoreRow {
    #[serde(rename = "Ticker")]
    pub ticker: SmolStr,
    #[serde(rename = "Zscore (0-2%)")]
    pub z_tight: f64,
    #[serde(rename = "Zscore (0-5%)")]
    pub z_wide: f64,
}

/// Read-only display tables derived from one scan's results, recomputed from
/// scratch on every refresh.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RankedTables {
    /// Results where both band deltas are strictly positive.
    pub ranked: Vec<ImbalanceResult>,
    /// Column-wise z-scores over `ranked`, row-aligned with it.
    pub zscores: Vec<ZScoreRow>,
}

impl RankedTables {
    /// True when the scan produced nothing to display ("no data").
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Derive the ranked and z-score tables from a scan's results.
///
/// The ranked table keeps only pairs with strictly positive deltas at both
/// bands. Z-scores use the sample standard deviation; with fewer than two
/// ranked rows, or a zero-variance column, the column's z-scores are NaN
/// rather than a coerced zero.
pub fn rank(results: &[ImbalanceResult]) -> RankedTables {
    let ranked: Vec<ImbalanceResult> = results
        .iter()
        .filter(|result| result.delta_tight > 0.0 && result.delta_wide > 0.0)
        .cloned()
        .collect();

    let tight: Vec<f64> = ranked.iter().map(|result| result.delta_tight).collect();
    let wide: Vec<f64> = ranked.iter().map(|result| result.delta_wide).collect();

    let (mean_tight, std_tight) = column_stats(&tight);
    let (mean_wide, std_wide) = column_stats(&wide);

    let zscores = ranked
        .iter()
        .map(|result| ZScoreRow {
            ticker: result.ticker.clone(),
            z_tight: (result.delta_tight - mean_tight) / std_tight,
            z_wide: (result.delta_wide - mean_wide) / std_wide,
        })
        .collect();

    RankedTables { ranked, zscores }
}

/// Column mean and sample standard deviation.
///
/// The standard deviation is NaN below two observations, and zero for a
/// zero-variance column; both propagate to NaN z-scores through the `0/0`
/// and `x/NaN` divisions in [`rank`].
fn column_stats(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n < 2 {
        return (f64::NAN, f64::NAN);
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (n - 1) as f64;

    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(ticker: &str, delta_tight: f64, delta_wide: f64) -> ImbalanceResult {
        ImbalanceResult::new(SmolStr::new(ticker), delta_tight, delta_wide)
    }

    #[test]
    fn test_rank_keeps_only_strictly_positive_rows() {
        let results = vec![
            result("A/USD", 0.5, 0.2),
            result("B/USD", 0.0, 0.3),
            result("C/USD", 0.4, -0.1),
            result("D/USD", 0.1, 0.6),
            result("E/USD", -0.2, -0.9),
        ];

        let tables = rank(&results);
        assert_eq!(tables.ranked.len(), 2);
        assert!(
            tables
                .ranked
                .iter()
                .all(|row| row.delta_tight > 0.0 && row.delta_wide > 0.0)
        );
    }

    #[test]
    fn test_rank_zscore_columns_are_centred() {
        let results = vec![
            result("A/USD", 0.1, 0.5),
            result("B/USD", 0.2, 0.3),
            result("C/USD", 0.6, 0.1),
        ];

        let tables = rank(&results);
        assert_eq!(tables.zscores.len(), 3);

        let mean_tight: f64 =
            tables.zscores.iter().map(|row| row.z_tight).sum::<f64>() / 3.0;
        let mean_wide: f64 =
            tables.zscores.iter().map(|row| row.z_wide).sum::<f64>() / 3.0;
        assert!(mean_tight.abs() < 1e-12);
        assert!(mean_wide.abs() < 1e-12);

        // Rows stay aligned with the ranked table.
        assert_eq!(tables.zscores[2].ticker, "C/USD");
        assert!(tables.zscores[2].z_tight > 0.0);
    }

    #[test]
    fn test_rank_single_row_is_nan() {
        let tables = rank(&[result("A/USD", 0.4, 0.2)]);
        assert_eq!(tables.ranked.len(), 1);
        assert!(tables.zscores[0].z_tight.is_nan());
        assert!(tables.zscores[0].z_wide.is_nan());
    }

    #[test]
    fn test_rank_zero_variance_column_is_nan() {
        let results = vec![
            result("A/USD", 0.3, 0.5),
            result("B/USD", 0.3, 0.1),
        ];

        let tables = rank(&results);
        // Tight column has zero variance -> NaN; wide column is well-defined.
        assert!(tables.zscores.iter().all(|row| row.z_tight.is_nan()));
        assert!(tables.zscores.iter().all(|row| row.z_wide.is_finite()));
    }

    #[test]
    fn test_rank_empty_results() {
        let tables = rank(&[]);
        assert!(tables.is_empty());
        assert!(tables.ranked.is_empty());
        assert!(tables.zscores.is_empty());
    }
}
