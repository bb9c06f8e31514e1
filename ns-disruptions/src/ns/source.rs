//! Abstraction over where disruptions come from.

use async_trait::async_trait;

use crate::domain::StationCode;

use super::error::NsError;
use super::types::Disruption;

/// Something that can list the disruptions affecting a station.
///
/// Implemented by the live [`NsClient`](super::NsClient) and by
/// [`MockNsClient`](super::MockNsClient) for offline runs.
#[async_trait]
pub trait DisruptionSource: Send + Sync {
    /// Fetch the disruptions currently affecting `station`, in API order.
    async fn fetch_disruptions(&self, station: &StationCode) -> Result<Vec<Disruption>, NsError>;
}
