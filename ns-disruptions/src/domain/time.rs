//! Timestamp handling for the NS disruptions API.
//!
//! NS sends times as `2024-11-23T14:20:38+0100`: an ISO 8601 date-time with
//! the UTC offset appended without a colon. The offset is kept on the parsed
//! value so the report shows the time as the operator published it.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use tracing::warn;

/// Format of a timestamp with the offset directly adjacent (`±HHMM`).
const ADJACENT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Format of the date-time prefix once the offset has been split off.
/// `%.f` also accepts a missing fractional part.
const NAIVE_PREFIX_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Length of a `±HHMM` suffix.
const OFFSET_SUFFIX_LEN: usize = 5;

/// Format used when printing a timestamp in the report.
const REPORT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Error returned when a timestamp matches neither accepted shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse timestamp {input:?}: {reason}")]
pub struct TimestampParseError {
    input: String,
    reason: &'static str,
}

impl TimestampParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse an NS timestamp into a timezone-aware point in time.
///
/// Tries the adjacent-offset format first. Inputs it rejects (for example
/// ones carrying fractional seconds) are retried by splitting off the last
/// five characters as a `±HHMM` offset and parsing the rest as a naive
/// date-time.
///
/// # Examples
///
/// ```
/// use ns_disruptions::domain::parse_timestamp;
///
/// let t = parse_timestamp("2024-11-23T14:20:38+0100").unwrap();
/// assert_eq!(t.offset().local_minus_utc(), 3600);
///
/// let t = parse_timestamp("2024-11-23T14:20:38.250+0100").unwrap();
/// assert_eq!(t.format("%H:%M").to_string(), "14:20");
///
/// assert!(parse_timestamp("not-a-date").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, TimestampParseError> {
    parse_adjacent_offset(s).or_else(|_| parse_split_offset(s))
}

/// Parse an NS timestamp, logging a warning and returning `None` on failure.
///
/// This is the entry point used by the report: an unparseable time leaves
/// the field out rather than failing the run.
pub fn parse_timestamp_lenient(s: &str) -> Option<DateTime<FixedOffset>> {
    match parse_timestamp(s) {
        Ok(t) => Some(t),
        Err(e) => {
            warn!(input = e.input(), "{e}");
            None
        }
    }
}

/// Format a timestamp as `YYYY-MM-DD HH:MM` in its own offset.
pub fn format_report_time(t: &DateTime<FixedOffset>) -> String {
    t.format(REPORT_FORMAT).to_string()
}

/// Primary path: offset directly after the seconds.
pub(crate) fn parse_adjacent_offset(
    s: &str,
) -> Result<DateTime<FixedOffset>, TimestampParseError> {
    DateTime::parse_from_str(s, ADJACENT_OFFSET_FORMAT)
        .map_err(|_| TimestampParseError::new(s, "does not match YYYY-MM-DDTHH:MM:SS±HHMM"))
}

/// Fallback path: split into a naive prefix and a `±HHMM` suffix.
pub(crate) fn parse_split_offset(s: &str) -> Result<DateTime<FixedOffset>, TimestampParseError> {
    if s.len() <= OFFSET_SUFFIX_LEN || !s.is_char_boundary(s.len() - OFFSET_SUFFIX_LEN) {
        return Err(TimestampParseError::new(s, "too short for a ±HHMM offset"));
    }

    let (prefix, suffix) = s.split_at(s.len() - OFFSET_SUFFIX_LEN);

    let naive = NaiveDateTime::parse_from_str(prefix, NAIVE_PREFIX_FORMAT)
        .map_err(|_| TimestampParseError::new(s, "invalid date-time before offset"))?;

    let offset_minutes =
        parse_offset_minutes(suffix).ok_or_else(|| TimestampParseError::new(s, "invalid ±HHMM offset"))?;

    let offset = FixedOffset::east_opt(offset_minutes * 60)
        .ok_or_else(|| TimestampParseError::new(s, "offset out of range"))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| TimestampParseError::new(s, "ambiguous local time"))
}

/// Parse `±HHMM` into signed minutes east of UTC.
///
/// The sign applies to the whole offset, so `-0130` is -90 minutes.
fn parse_offset_minutes(suffix: &str) -> Option<i32> {
    let bytes = suffix.as_bytes();
    if bytes.len() != OFFSET_SUFFIX_LEN {
        return None;
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    let hours = parse_two_digits(&bytes[1..3])?;
    let minutes = parse_two_digits(&bytes[3..5])?;
    if minutes > 59 {
        return None;
    }

    Some(sign * (hours * 60 + minutes))
}

fn parse_two_digits(bytes: &[u8]) -> Option<i32> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(i32::from(a - b'0') * 10 + i32::from(b - b'0'))
        }
        _ => None,
    }
}
