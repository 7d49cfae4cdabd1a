use derive_more::Constructor;
use fnv::FnvHashSet;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::sync::LazyLock;

/// Base assets excluded from the scan universe: stablecoins, fiat-pegged or
/// wrapped assets, and a handful of pairs with chronically thin USD books.
pub static STABLECOIN_BASES: LazyLock<FnvHashSet<&'static str>> = LazyLock::new(|| {
    [
        "USDT", "USDC", "DAI", "BUSD", "TUSD", "PAX", "GUSD", "USDK", "UST", "SUSD", "FRAX",
        "LUSD", "MIM", "USDQ", "TBTC", "WBTC", "EUL", "EUR", "EURT", "USDS", "USTS", "USTC",
        "USDR", "PYUSD", "EURR", "GBP", "AUD", "EURQ", "T", "USDG", "WAXL", "IDEX", "FIS", "CSM",
        "MV", "POWR", "ATLAS", "XCN", "BOBA", "OXY", "BNC", "POLIS", "AIR", "C98", "BODEN", "HDX",
        "MSOL", "REP", "ANLOG",
    ]
    .into_iter()
    .collect()
});

/// Tradable pair metadata, immutable for the duration of one scan.
#[derive(Clone, Eq, PartialEq, Debug, Deserialize, Serialize, Constructor)]
pub struct PairDescriptor {
    /// Display name in `BASE/QUOTE` form, eg/ "XBT/USD".
    pub ticker: SmolStr,
    /// Identifier the exchange expects in request parameters, eg/ "XBTUSD".
    pub request_id: SmolStr,
    /// Whether the pair is currently tradable.
    pub active: bool,
}

/// Select the pairs eligible for a depth scan.
///
/// A pair is kept iff it is active, its ticker decomposes into exactly one
/// base and one quote component, the quote is exactly "USD", and the base is
/// not in `exclusions`. Malformed tickers are skipped silently. Output order
/// follows input order; callers must not rely on any particular ordering.
pub fn eligible_pairs<'a, Markets>(
    markets: Markets,
    exclusions: &FnvHashSet<&str>,
) -> Vec<PairDescriptor>
where
    Markets: IntoIterator<Item = &'a PairDescriptor>,
{
    markets
        .into_iter()
        .filter(|pair| {
            if !pair.active {
                return false;
            }

            let mut components = pair.ticker.split('/');
            let (base, quote) = match (components.next(), components.next(), components.next()) {
                (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
                    (base, quote)
                }
                _ => return false,
            };

            quote == "USD" && !exclusions.contains(base)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(ticker: &str, active: bool) -> PairDescriptor {
        let request_id: String = ticker.split('/').collect();
        PairDescriptor::new(SmolStr::new(ticker), SmolStr::new(request_id), active)
    }

    #[test]
    fn test_eligible_pairs_filtering() {
        struct TestCase {
            input: PairDescriptor,
            expected: bool,
            reason: &'static str,
        }

        let tests = vec![
            TestCase {
                input: pair("XBT/USD", true),
                expected: true,
                reason: "active USD pair with non-stablecoin base",
            },
            TestCase {
                input: pair("USDT/USD", true),
                expected: false,
                reason: "base in exclusion set, regardless of activity",
            },
            TestCase {
                input: pair("BTC/EUR", true),
                expected: false,
                reason: "quote is not USD even though base is eligible",
            },
            TestCase {
                input: pair("SOL/USD", false),
                expected: false,
                reason: "inactive pair",
            },
            TestCase {
                input: pair("ETHUSD", true),
                expected: false,
                reason: "no base/quote separator",
            },
            TestCase {
                input: pair("ETH/USD/PERP", true),
                expected: false,
                reason: "more than one separator",
            },
            TestCase {
                input: pair("/USD", true),
                expected: false,
                reason: "empty base component",
            },
            TestCase {
                input: pair("MSOL/USD", true),
                expected: false,
                reason: "excluded base beyond the plain stablecoins",
            },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let kept = eligible_pairs([&test.input], &STABLECOIN_BASES);
            assert_eq!(
                !kept.is_empty(),
                test.expected,
                "TC{} failed: {}",
                index,
                test.reason
            );
        }
    }

    #[test]
    fn test_eligible_pairs_keeps_descriptors_intact() {
        let markets = vec![pair("XBT/USD", true), pair("USDT/USD", true), pair("ETH/USD", true)];
        let eligible = eligible_pairs(&markets, &STABLECOIN_BASES);

        assert_eq!(eligible.len(), 2);
        assert!(eligible.iter().any(|p| p.ticker == "XBT/USD" && p.request_id == "XBTUSD"));
        assert!(eligible.iter().any(|p| p.ticker == "ETH/USD"));
    }

    #[test]
    fn test_eligible_pairs_custom_exclusions() {
        let markets = vec![pair("XBT/USD", true)];
        let exclusions: FnvHashSet<&str> = ["XBT"].into_iter().collect();
        assert!(eligible_pairs(&markets, &exclusions).is_empty());
    }
}
