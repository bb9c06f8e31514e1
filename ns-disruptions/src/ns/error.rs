//! NS client error types.

use std::path::PathBuf;

/// Errors from fetching disruptions.
///
/// Every variant is fatal to a run: without the disruption list there is
/// nothing to report.
#[derive(Debug, thiserror::Error)]
pub enum NsError {
    /// Transport failure (DNS, connection refused, timeout, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a non-success status. The body is kept for diagnostics.
    #[error("HTTP {status}")]
    Http { status: u16, body: Option<String> },

    /// Response body was not the expected JSON
    #[error("JSON decode error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// API key cannot be sent as a header value
    #[error("invalid API key format")]
    InvalidApiKey,

    /// Mock data file could not be read
    #[error("mock data {path:?}: {source}")]
    MockData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
