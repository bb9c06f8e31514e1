//! Station code type.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// An NS station code, e.g. `DT` for Delft or `ASD` for Amsterdam Centraal.
///
/// Station codes are non-empty runs of ASCII letters and digits. This type
/// guarantees that any `StationCode` value is valid by construction, so it
/// can be spliced into a request path without further escaping.
///
/// # Examples
///
/// ```
/// use ns_disruptions::domain::StationCode;
///
/// let delft = StationCode::parse("DT").unwrap();
/// assert_eq!(delft.as_str(), "DT");
///
/// // Empty codes are rejected
/// assert!(StationCode::parse("").is_err());
///
/// // Path separators and punctuation are rejected
/// assert!(StationCode::parse("DT/../x").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be one or more ASCII alphanumeric characters.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStationCode {
                reason: "must be ASCII letters and digits",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StationCode {
    /// Delft.
    fn default() -> Self {
        StationCode("DT".to_string())
    }
}

impl FromStr for StationCode {
    type Err = InvalidStationCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("DT").is_ok());
        assert!(StationCode::parse("ASD").is_ok());
        assert!(StationCode::parse("GVC").is_ok());
        assert!(StationCode::parse("ut").is_ok());
        assert!(StationCode::parse("8400170").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationCode::parse("").is_err());
    }

    #[test]
    fn reject_non_alphanumeric() {
        assert!(StationCode::parse("D T").is_err());
        assert!(StationCode::parse("DT/").is_err());
        assert!(StationCode::parse("D-T").is_err());
        assert!(StationCode::parse("DÖ").is_err());
        assert!(StationCode::parse("DT?x=1").is_err());
    }

    #[test]
    fn default_is_delft() {
        assert_eq!(StationCode::default().as_str(), "DT");
    }

    #[test]
    fn from_str_matches_parse() {
        let code: StationCode = "ASD".parse().unwrap();
        assert_eq!(code, StationCode::parse("ASD").unwrap());
        assert!("".parse::<StationCode>().is_err());
    }

    #[test]
    fn display() {
        let code = StationCode::parse("DT").unwrap();
        assert_eq!(format!("{}", code), "DT");
    }

    #[test]
    fn debug() {
        let code = StationCode::parse("ASD").unwrap();
        assert_eq!(format!("{:?}", code), "StationCode(ASD)");
    }

    #[test]
    fn error_display() {
        let err = StationCode::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid station code: must not be empty");
    }
}
