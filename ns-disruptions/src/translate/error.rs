//! Translation error types.

/// Errors from a translation backend.
///
/// None of these abort a run: the field translator logs them and keeps the
/// original text.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("translation backend returned HTTP {status}")]
    Http { status: u16 },

    /// Rate limited or over quota
    #[error("rate limited by translation backend")]
    RateLimited,

    /// Text exceeds what the backend accepts in one request
    #[error("text too long to translate ({len} > {max} characters)")]
    TooLong { len: usize, max: usize },

    /// Response did not have the expected shape
    #[error("malformed translation response: {0}")]
    Malformed(String),

    /// Any other backend failure
    #[error("translation backend error: {0}")]
    Backend(String),
}
