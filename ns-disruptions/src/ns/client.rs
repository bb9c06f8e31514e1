//! NS disruptions HTTP client.
//!
//! Fetches the disruptions affecting one station from the NS API portal.
//! Exactly one request is made per call; there is no retry or caching.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::domain::StationCode;

use super::error::NsError;
use super::source::DisruptionSource;
use super::types::Disruption;

/// Default base URL for the NS API portal.
pub const DEFAULT_BASE_URL: &str = "https://gateway.apiportal.ns.nl";

/// Header carrying the API portal subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "ocp-apim-subscription-key";

/// Maximum number of body characters kept in a decode error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the NS client.
#[derive(Debug, Clone)]
pub struct NsConfig {
    /// Subscription key for the API portal
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
}

impl NsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// NS disruptions API client.
#[derive(Debug, Clone)]
pub struct NsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NsClient {
    /// Create a new NS client with the given configuration.
    pub fn new(config: NsConfig) -> Result<Self, NsError> {
        let mut headers = HeaderMap::new();

        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| NsError::InvalidApiKey)?;
        headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the disruptions endpoint for a station.
    pub fn disruptions_url(&self, station: &StationCode) -> String {
        format!(
            "{}/disruptions/v3/station/{}",
            self.base_url,
            station.as_str()
        )
    }

    /// Get the disruptions currently affecting a station.
    ///
    /// An empty list means the station is unaffected.
    pub async fn get_disruptions(
        &self,
        station: &StationCode,
    ) -> Result<Vec<Disruption>, NsError> {
        let url = self.disruptions_url(station);
        debug!(%url, "fetching disruptions");

        let response = self.http.get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(NsError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        let disruptions: Vec<Disruption> =
            serde_json::from_str(&body).map_err(|e| NsError::Decode {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
            })?;

        debug!(count = disruptions.len(), "fetched disruptions");
        Ok(disruptions)
    }
}

#[async_trait]
impl DisruptionSource for NsClient {
    async fn fetch_disruptions(&self, station: &StationCode) -> Result<Vec<Disruption>, NsError> {
        self.get_disruptions(station).await
    }
}
