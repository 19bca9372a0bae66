//! Date and time literals found in responses.

use crate::response::error::ParseError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// A literal format used by one or more response fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalFormat {
    /// `YYYY-MM-DD`, read as midnight.
    Date,
    /// `YYYY-MM-DD:HH`.
    DateHour,
    /// `YYYY-MM-DDTHH:MM:SS`.
    Timestamp,
    /// `HH:MM`.
    ClockTime,
    /// `HH:MM:SS`.
    ClockTimeSeconds,
}

/// A parsed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl TemporalFormat {
    /// Human-readable pattern, used in error messages.
    pub fn pattern(&self) -> &'static str {
        match self {
            TemporalFormat::Date => "YYYY-MM-DD",
            TemporalFormat::DateHour => "YYYY-MM-DD:HH",
            TemporalFormat::Timestamp => "YYYY-MM-DDTHH:MM:SS",
            TemporalFormat::ClockTime => "HH:MM",
            TemporalFormat::ClockTimeSeconds => "HH:MM:SS",
        }
    }

    /// `Date` or `DateHour`, whichever `text` looks like.
    pub fn for_calendar_literal(text: &str) -> Self {
        if text.contains(':') {
            TemporalFormat::DateHour
        } else {
            TemporalFormat::Date
        }
    }

    /// Parses `text` in this format.
    ///
    /// # Errors
    ///
    /// [`ParseError::MalformedTimestamp`] naming `field` when `text` does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveTime;
    /// use weatherbit::{Temporal, TemporalFormat};
    ///
    /// let sunset = TemporalFormat::ClockTimeSeconds.parse("sunset", "19:42:07").unwrap();
    /// assert_eq!(sunset, Temporal::Time(NaiveTime::from_hms_opt(19, 42, 7).unwrap()));
    /// assert!(TemporalFormat::ClockTime.parse("sunset", "7pm").is_err());
    /// ```
    pub fn parse(&self, field: &'static str, text: &str) -> Result<Temporal, ParseError> {
        match self {
            TemporalFormat::Date | TemporalFormat::DateHour | TemporalFormat::Timestamp => {
                self.parse_datetime(field, text).map(Temporal::DateTime)
            }
            TemporalFormat::ClockTime | TemporalFormat::ClockTimeSeconds => {
                self.parse_time(field, text).map(Temporal::Time)
            }
        }
    }

    pub(crate) fn parse_datetime(
        &self,
        field: &'static str,
        text: &str,
    ) -> Result<NaiveDateTime, ParseError> {
        let parsed = match self {
            TemporalFormat::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0)),
            TemporalFormat::DateHour => parse_date_hour(text),
            TemporalFormat::Timestamp => NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").ok(),
            TemporalFormat::ClockTime | TemporalFormat::ClockTimeSeconds => None,
        };
        parsed.ok_or_else(|| self.malformed(field, text))
    }

    pub(crate) fn parse_time(&self, field: &'static str, text: &str) -> Result<NaiveTime, ParseError> {
        let parsed = match self {
            TemporalFormat::ClockTime => NaiveTime::parse_from_str(text, "%H:%M").ok(),
            TemporalFormat::ClockTimeSeconds => NaiveTime::parse_from_str(text, "%H:%M:%S").ok(),
            _ => None,
        };
        parsed.ok_or_else(|| self.malformed(field, text))
    }

    fn malformed(&self, field: &'static str, text: &str) -> ParseError {
        ParseError::MalformedTimestamp {
            field,
            value: text.to_string(),
            expected: self.pattern(),
        }
    }
}

impl fmt::Display for TemporalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

// chrono needs minutes to build a time, so the hour is split off by hand.
fn parse_date_hour(text: &str) -> Option<NaiveDateTime> {
    let (date, hour) = text.split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    date.and_hms_opt(hour.parse().ok()?, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_calendar_literals() {
        let format = TemporalFormat::for_calendar_literal("2024-01-03");
        assert_eq!(format, TemporalFormat::Date);
        assert_eq!(
            format.parse_datetime("datetime", "2024-01-03").unwrap(),
            at(2024, 1, 3, 0, 0, 0)
        );

        let format = TemporalFormat::for_calendar_literal("2024-01-03:17");
        assert_eq!(format, TemporalFormat::DateHour);
        assert_eq!(
            format.parse_datetime("datetime", "2024-01-03:17").unwrap(),
            at(2024, 1, 3, 17, 0, 0)
        );
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(
            TemporalFormat::Timestamp
                .parse_datetime("timestamp_utc", "2024-01-03T17:30:05")
                .unwrap(),
            at(2024, 1, 3, 17, 30, 5)
        );
    }

    #[test]
    fn test_clock_times() {
        assert_eq!(
            TemporalFormat::ClockTime.parse_time("sunrise", "06:12").unwrap(),
            NaiveTime::from_hms_opt(6, 12, 0).unwrap()
        );
        assert!(TemporalFormat::ClockTime.parse_time("sunrise", "06:12:30").is_err());
    }

    #[test]
    fn test_malformed_values_name_the_field_and_format() {
        assert_eq!(
            TemporalFormat::DateHour.parse_datetime("datetime", "2024-01-03:25"),
            Err(ParseError::MalformedTimestamp {
                field: "datetime",
                value: "2024-01-03:25".to_string(),
                expected: "YYYY-MM-DD:HH"
            })
        );
        assert!(TemporalFormat::Timestamp
            .parse_datetime("timestamp_local", "2024-01-03 17:30:05")
            .is_err());
        assert!(TemporalFormat::Date.parse_datetime("datetime", "Jan 3").is_err());
    }
}
