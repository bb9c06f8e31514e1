//! Command-line and environment configuration.
//!
//! Built once in `main` and passed explicitly to the clients; nothing reads
//! the environment after start-up.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::StationCode;
use crate::ns::{self, NsConfig};
use crate::translate::DEFAULT_TARGET_LANGUAGE;

/// Print the NS disruptions affecting a station, translated from Dutch.
#[derive(Debug, Clone, Parser)]
#[command(name = "ns-disruptions", version, about)]
pub struct Config {
    /// NS station code to report on.
    #[arg(short, long, env = "NS_STATION", default_value = "DT")]
    pub station: StationCode,

    /// NS API portal subscription key. Required unless --mock-data is given.
    #[arg(long, env = "NS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Language to translate report text into.
    #[arg(short, long, env = "NS_TARGET_LANG", default_value = DEFAULT_TARGET_LANGUAGE)]
    pub target_lang: String,

    /// Print the Dutch text without translating it.
    #[arg(long)]
    pub no_translate: bool,

    /// Base URL of the NS API portal.
    #[arg(long, env = "NS_BASE_URL", default_value = ns::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Read `<DIR>/<STATION>.json` instead of calling the API.
    #[arg(long, env = "NS_MOCK_DATA", value_name = "DIR")]
    pub mock_data: Option<PathBuf>,
}

/// Error returned when the configuration cannot drive a live fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no API key: set NS_API_KEY or pass --api-key (or use --mock-data)")]
pub struct MissingApiKey;

impl Config {
    /// Client configuration for the live API.
    pub fn ns_config(&self) -> Result<NsConfig, MissingApiKey> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(MissingApiKey)?;
        Ok(NsConfig::new(api_key).with_base_url(&self.base_url))
    }
}
