//! Google Translate backend.
//!
//! Calls the public `translate_a/single` endpoint used by the web widget
//! (`client=gtx`). No key is needed; the response is a nested JSON array
//! whose first element lists the translated sentence segments.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::backend::Translator;
use super::error::TranslationError;

/// Default base URL for the translation endpoint.
pub const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Longest text accepted in one request.
pub const MAX_CHARS: usize = 5000;

/// Configuration for the Google Translate backend.
#[derive(Debug, Clone)]
pub struct GoogleTranslateConfig {
    /// Base URL for the endpoint (defaults to production)
    pub base_url: String,
}

impl GoogleTranslateConfig {
    /// Create a config pointing at the production endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for GoogleTranslateConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Google Translate client.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    /// Create a new client with the given configuration.
    pub fn new(config: GoogleTranslateConfig) -> Result<Self, TranslationError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslationError> {
        let len = text.chars().count();
        if len > MAX_CHARS {
            return Err(TranslationError::TooLong {
                len,
                max: MAX_CHARS,
            });
        }

        let url = format!("{}/translate_a/single", self.base_url);
        debug!(sl = source, tl = target, chars = len, "google: GET translate_a/single");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslationError::RateLimited);
        }

        if !status.is_success() {
            return Err(TranslationError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        extract_translation(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// The response looks like `[[["Works","Werkzaamheden",null,null,10]],null,"nl"]`;
/// long inputs are split into several segments, each translated separately.
fn extract_translation(body: &str) -> Result<String, TranslationError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| TranslationError::Malformed(e.to_string()))?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslationError::Malformed("missing segment list".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(TranslationError::Malformed(
            "no translated text in response".to_string(),
        ));
    }

    Ok(text)
}
