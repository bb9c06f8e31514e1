//! Mock NS client for running without API access.
//!
//! Loads disruption lists from JSON files and serves them as if they were
//! live API responses.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::StationCode;

use super::error::NsError;
use super::source::DisruptionSource;
use super::types::Disruption;

/// Mock NS client that serves data from JSON files.
///
/// Expects files named `{STATION}.json` (e.g. `DT.json`) holding the same
/// JSON array the live endpoint returns.
#[derive(Debug, Clone)]
pub struct MockNsClient {
    data_dir: PathBuf,
}

impl MockNsClient {
    /// Create a mock client reading from `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing a station.
    pub fn path_for(&self, station: &StationCode) -> PathBuf {
        self.data_dir.join(format!("{}.json", station.as_str()))
    }

    /// Load the disruptions for a station from disk.
    pub fn load(&self, station: &StationCode) -> Result<Vec<Disruption>, NsError> {
        let path = self.path_for(station);

        let json = std::fs::read_to_string(&path).map_err(|source| NsError::MockData {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|e| NsError::Decode {
            message: format!("{}: {e}", path.display()),
            body: None,
        })
    }
}

#[async_trait]
impl DisruptionSource for MockNsClient {
    async fn fetch_disruptions(&self, station: &StationCode) -> Result<Vec<Disruption>, NsError> {
        self.load(station)
    }
}
