use thiserror::Error;

/// All errors generated in `quadrant-data`.
///
/// Kept `Clone` so per-pair outcomes can be aggregated and replayed in
/// diagnostics, which is why external error types are flattened to strings.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ScanError {
    #[error("http request failed: {0}")]
    Http(String),

    #[error("exchange API error: {0}")]
    Api(String),

    #[error("malformed exchange payload: {0}")]
    Payload(String),

    #[error("failed to parse url: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl From<reqwest::Error> for ScanError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value.to_string())
    }
}
