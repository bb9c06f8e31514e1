//! Domain types for the disruption report.
//!
//! Station codes and operator timestamps are validated here, so the client
//! and the renderer only ever handle well-formed values.

mod station;
mod time;

pub use station::{InvalidStationCode, StationCode};
pub use time::{TimestampParseError, format_report_time, parse_timestamp, parse_timestamp_lenient};
