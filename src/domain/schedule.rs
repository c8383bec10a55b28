//! Normalization of free-form schedule strings into UTC instants.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while normalizing a schedule string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A non-blank schedule string did not resolve to a valid instant.
    #[error("invalid schedule time: '{0}'")]
    InvalidSchedule(String),
}

/// An absolute publish instant in UTC. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleInstant(DateTime<Utc>);

impl ScheduleInstant {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Returns the underlying UTC datetime.
    pub const fn get(self) -> DateTime<Utc> {
        self.0
    }

    /// ISO-8601 rendering with millisecond precision, e.g.
    /// `2024-06-01T10:00:00.000Z`.
    pub fn to_iso8601(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Parses an optional schedule string into a UTC instant.
///
/// Blank input (absent, empty, or whitespace-only) is "no schedule", not an
/// error. Everything else is normalized into an unambiguous RFC 3339 string
/// first: input already ending in `Z` or carrying a `+` offset parses as-is;
/// input with three or more colon-delimited segments gets `Z` appended;
/// shorter input is assumed to omit seconds and gets `:00Z`. The heuristic
/// is preserved as-is even for inputs with stray colons.
pub fn parse_schedule(raw: Option<&str>) -> Result<Option<ScheduleInstant>, ScheduleError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let normalized = if trimmed.ends_with('Z') || trimmed.contains('+') {
        trimmed.to_string()
    } else if trimmed.split(':').count() >= 3 {
        format!("{trimmed}Z")
    } else {
        format!("{trimmed}:00Z")
    };

    DateTime::parse_from_rfc3339(&normalized)
        .map(|parsed| Some(ScheduleInstant::new(parsed.with_timezone(&Utc))))
        .map_err(|_| ScheduleError::InvalidSchedule(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_no_schedule() {
        assert_eq!(parse_schedule(None).unwrap(), None);
        assert_eq!(parse_schedule(Some("")).unwrap(), None);
        assert_eq!(parse_schedule(Some("   ")).unwrap(), None);
    }

    #[test]
    fn minutes_only_input_round_trips_to_the_explicit_form() {
        let short = parse_schedule(Some("2024-06-01T10:00")).unwrap().unwrap();
        let full = parse_schedule(Some("2024-06-01T10:00:00Z")).unwrap().unwrap();
        assert_eq!(short, full);
    }

    #[test]
    fn input_with_seconds_gets_a_bare_zone_suffix() {
        let instant = parse_schedule(Some("2024-06-01T10:00:30")).unwrap().unwrap();
        assert_eq!(instant.to_iso8601(), "2024-06-01T10:00:30.000Z");
    }

    #[test]
    fn explicit_offsets_are_converted_to_utc() {
        let instant = parse_schedule(Some("2024-06-01T10:00:00+02:00"))
            .unwrap()
            .unwrap();
        assert_eq!(instant.to_iso8601(), "2024-06-01T08:00:00.000Z");
    }

    #[test]
    fn trailing_zone_marker_parses_as_is() {
        let instant = parse_schedule(Some("2030-01-02T03:04:05Z")).unwrap().unwrap();
        assert_eq!(instant.to_iso8601(), "2030-01-02T03:04:05.000Z");
    }

    #[test]
    fn malformed_input_is_rejected() {
        let err = parse_schedule(Some("not-a-date")).unwrap_err();
        assert_eq!(err, ScheduleError::InvalidSchedule("not-a-date".to_string()));
    }

    #[test]
    fn invalid_calendar_instants_are_rejected() {
        assert!(parse_schedule(Some("2024-02-30T10:00")).is_err());
        assert!(parse_schedule(Some("2024-06-01T25:00")).is_err());
    }
}
