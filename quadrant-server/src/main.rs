use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use chrono::{DateTime, Utc};
use quadrant_data::{
    ImbalanceResult, RankedTables, ZScoreRow, exchange::kraken::KrakenClient, rank, run_scan,
};
use serde::Serialize;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Response payload for one scan pass.
#[derive(Debug, Serialize)]
struct ScanResponse {
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    ranked: Vec<ImbalanceResult>,
    zscores: Vec<ZScoreRow>,
    /// "Skipping TICKER: reason" lines for user-visible reporting.
    diagnostics: Vec<String>,
    /// True when no pair produced a usable snapshot.
    no_data: bool,
}

#[tokio::main]
async fn main() {
    init_logging();

    info!("Starting quadrant web UI");

    let client = KrakenClient::new().expect("failed to construct Kraken client");
    let state = Arc::new(client);

    let app = Router::new()
        .route("/", get(index))
        .route("/api/scan", get(scan))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Configurable via QUADRANT_ADDR env var (default: 0.0.0.0:8080)
    let addr_str = std::env::var("QUADRANT_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let addr = addr_str
        .parse::<SocketAddr>()
        .unwrap_or_else(|_| "0.0.0.0:8080".parse().unwrap());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind HTTP listener");

    info!("Web UI listening on http://{}", addr);
    info!("A scan issues one order book request per pair, paced at 200ms");

    axum::serve(listener, app).await.expect("server error");
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Run the full pipeline from scratch and return both display tables.
///
/// Every request re-executes filtering and snapshotting; no scan state is
/// retained between calls.
async fn scan(State(client): State<Arc<KrakenClient>>) -> impl IntoResponse {
    match run_scan(client.as_ref()).await {
        Ok(report) => {
            let RankedTables { ranked, zscores } = rank(&report.results);
            let no_data = report.results.is_empty();

            info!(
                results = report.results.len(),
                ranked = ranked.len(),
                skipped = report.diagnostics.len(),
                "scan complete"
            );

            Json(ScanResponse {
                started_at: report.started_at,
                finished_at: report.finished_at,
                ranked,
                zscores,
                diagnostics: report
                    .diagnostics
                    .iter()
                    .map(|diagnostic| diagnostic.to_string())
                    .collect(),
                no_data,
            })
            .into_response()
        }
        Err(err) => {
            error!(error = %err, "scan failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Tickers in Upper Right Quadrant from Kraken</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 56rem; color: #222; }
  table { border-collapse: collapse; margin: 1rem 0; width: 100%; }
  th, td { border: 1px solid #ccc; padding: 0.35rem 0.6rem; text-align: right; }
  th:first-child, td:first-child { text-align: left; }
  th { background: #f4f4f4; }
  button { padding: 0.4rem 1rem; }
  #status { color: #555; }
  #diagnostics li { color: #a33; }
</style>
</head>
<body>
<h1>Tickers in Upper Right Quadrant from Kraken</h1>
<button id="refresh">Refresh Data</button>
<p id="status"></p>
<h3>Normalized Delta Table</h3>
<table id="ranked"></table>
<h3>Z-Score Table</h3>
<table id="zscores"></table>
<h3>Diagnostics</h3>
<ul id="diagnostics"></ul>
<script>
const RANKED_COLUMNS = ["Ticker", "Norm Delta (0-2%)", "Norm Delta (0-5%)"];
const ZSCORE_COLUMNS = ["Ticker", "Zscore (0-2%)", "Zscore (0-5%)"];

function renderTable(id, columns, rows) {
  const header = "<tr>" + columns.map(c => "<th>" + c + "</th>").join("") + "</tr>";
  const body = rows.map(row =>
    "<tr>" + columns.map(c => {
      const value = row[c];
      return "<td>" + (value === null || value === undefined ? "NaN" : value) + "</td>";
    }).join("") + "</tr>"
  ).join("");
  document.getElementById(id).innerHTML = header + body;
}

async function refresh() {
  const status = document.getElementById("status");
  const button = document.getElementById("refresh");
  button.disabled = true;
  status.textContent = "Scanning Kraken USD pairs (one request per pair, this takes a while)...";
  try {
    const response = await fetch("/api/scan");
    if (!response.ok) {
      throw new Error(await response.text());
    }
    const scan = await response.json();
    renderTable("ranked", RANKED_COLUMNS, scan.ranked);
    renderTable("zscores", ZSCORE_COLUMNS, scan.zscores);
    document.getElementById("diagnostics").innerHTML =
      scan.diagnostics.map(line => "<li>" + line + "</li>").join("");
    status.textContent = scan.no_data
      ? "No valid results fetched."
      : "Scan finished at " + scan.finished_at + " (" + scan.ranked.length + " tickers ranked).";
  } catch (err) {
    status.textContent = "Scan failed: " + err.message;
  } finally {
    button.disabled = false;
  }
}

document.getElementById("refresh").addEventListener("click", refresh);
refresh();
</script>
</body>
</html>
"#;
