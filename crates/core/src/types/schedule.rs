//! Requested delivery time.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error parsing a [`RequestedTime`].
#[derive(thiserror::Error, Debug, Clone)]
#[error("requested time must be \"asap\" or an RFC 3339 timestamp (got {input:?})")]
pub struct RequestedTimeError {
    input: String,
}

/// When the customer wants the order delivered.
///
/// On the wire this is either the literal string `"asap"` or an RFC 3339
/// timestamp, matching what the ordering form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequestedTime {
    /// Deliver as soon as the order is ready.
    Asap,
    /// Deliver at a chosen time.
    At(DateTime<Utc>),
}

impl Default for RequestedTime {
    fn default() -> Self {
        Self::Asap
    }
}

impl fmt::Display for RequestedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asap => write!(f, "asap"),
            Self::At(time) => write!(f, "{}", time.to_rfc3339()),
        }
    }
}

impl std::str::FromStr for RequestedTime {
    type Err = RequestedTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asap") {
            return Ok(Self::Asap);
        }
        DateTime::parse_from_rfc3339(s)
            .map(|time| Self::At(time.with_timezone(&Utc)))
            .map_err(|_| RequestedTimeError {
                input: s.to_owned(),
            })
    }
}

impl TryFrom<String> for RequestedTime {
    type Error = RequestedTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RequestedTime> for String {
    fn from(time: RequestedTime) -> Self {
        time.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asap() {
        assert_eq!("asap".parse::<RequestedTime>().unwrap(), RequestedTime::Asap);
        assert_eq!("ASAP".parse::<RequestedTime>().unwrap(), RequestedTime::Asap);
    }

    #[test]
    fn test_parse_timestamp() {
        let parsed: RequestedTime = "2026-08-04T18:30:00Z".parse().unwrap();
        let RequestedTime::At(time) = parsed else {
            panic!("expected explicit time");
        };
        assert_eq!(time.to_rfc3339(), "2026-08-04T18:30:00+00:00");
    }

    #[test]
    fn test_parse_garbage() {
        assert!("tomorrow-ish".parse::<RequestedTime>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&RequestedTime::Asap).unwrap();
        assert_eq!(json, "\"asap\"");

        let parsed: RequestedTime = serde_json::from_str("\"2026-08-04T18:30:00+00:00\"").unwrap();
        assert!(matches!(parsed, RequestedTime::At(_)));
    }
}
