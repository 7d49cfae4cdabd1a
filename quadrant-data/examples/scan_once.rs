use quadrant_data::{exchange::kraken::KrakenClient, rank, run_scan};

/// Run one full scan pass against live Kraken and print both tables.
///
/// Issues one Depth request per eligible pair at a 200ms pace, so a full
/// pass takes a couple of minutes.
#[tokio::main]
async fn main() {
    // Initialise INFO logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = KrakenClient::new().expect("failed to construct Kraken client");

    let report = run_scan(&client).await.expect("failed to scan Kraken");
    let tables = rank(&report.results);

    for diagnostic in &report.diagnostics {
        println!("{diagnostic}");
    }

    if tables.is_empty() {
        println!("No valid results fetched.");
        return;
    }

    println!("\nNormalized Delta Table");
    println!("{:<12} {:>18} {:>18}", "Ticker", "Norm Delta (0-2%)", "Norm Delta (0-5%)");
    for row in &tables.ranked {
        println!("{:<12} {:>18.4} {:>18.4}", row.ticker, row.delta_tight, row.delta_wide);
    }

    println!("\nZ-Score Table");
    println!("{:<12} {:>18} {:>18}", "Ticker", "Zscore (0-2%)", "Zscore (0-5%)");
    for row in &tables.zscores {
        println!("{:<12} {:>18.4} {:>18.4}", row.ticker, row.z_tight, row.z_wide);
    }
}
