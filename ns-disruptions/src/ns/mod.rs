//! NS disruptions API client.
//!
//! This module provides an HTTP client for the NS (Nederlandse Spoorwegen)
//! API portal's `disruptions/v3` endpoint, which lists the disruptions and
//! engineering works currently affecting a station.
//!
//! Key characteristics of the API:
//! - Authentication is a subscription key in the `Ocp-Apim-Subscription-Key`
//!   header
//! - Text fields are in Dutch
//! - Times carry an offset without a colon, e.g. `2024-11-23T14:20:38+0100`
//! - Almost every field is optional

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{DEFAULT_BASE_URL, NsClient, NsConfig};
pub use error::NsError;
pub use mock::MockNsClient;
pub use source::DisruptionSource;
pub use types::{Disruption, ExpectedDuration, Impact, Label, Phase, Timespan};
