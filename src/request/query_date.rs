//! Date and day-of-year parameters accepted by the history and normals endpoints.

use crate::request::error::RequestValidationError;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static DAY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{2}$").expect("MM-DD pattern compiles"));

/// A `start_date`/`end_date` value as supplied by the caller.
///
/// Convertible from chrono dates and date-times, or from text. Text is only
/// validated when the URL is built.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weatherbit::DateParam;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(DateParam::from(day), DateParam::Date(day));
/// assert_eq!(
///     DateParam::from(day.and_hms_opt(6, 30, 0).unwrap()),
///     DateParam::DateHour(day, 6)
/// );
/// // Midnight collapses to a plain date.
/// assert_eq!(DateParam::from(day.and_hms_opt(0, 0, 0).unwrap()), DateParam::Date(day));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParam {
    Date(NaiveDate),
    DateHour(NaiveDate, u32),
    Text(String),
}

impl From<NaiveDate> for DateParam {
    fn from(value: NaiveDate) -> Self {
        DateParam::Date(value)
    }
}

impl From<NaiveDateTime> for DateParam {
    fn from(value: NaiveDateTime) -> Self {
        if value.hour() > 0 {
            DateParam::DateHour(value.date(), value.hour())
        } else {
            DateParam::Date(value.date())
        }
    }
}

impl From<DateTime<Utc>> for DateParam {
    fn from(value: DateTime<Utc>) -> Self {
        value.naive_utc().into()
    }
}

impl From<DateTime<FixedOffset>> for DateParam {
    fn from(value: DateTime<FixedOffset>) -> Self {
        value.naive_utc().into()
    }
}

impl From<&str> for DateParam {
    fn from(value: &str) -> Self {
        DateParam::Text(value.to_string())
    }
}

impl From<String> for DateParam {
    fn from(value: String) -> Self {
        DateParam::Text(value)
    }
}

impl DateParam {
    /// Validates the parameter into a [`QueryDate`].
    ///
    /// `param` names the query parameter for the error message.
    pub(crate) fn resolve(&self, param: &'static str) -> Result<QueryDate, RequestValidationError> {
        let invalid = || RequestValidationError::InvalidDate {
            param,
            value: self.to_string(),
        };
        match self {
            DateParam::Date(date) => Ok(QueryDate {
                date: *date,
                hour: None,
            }),
            DateParam::DateHour(date, hour) if *hour < 24 => Ok(QueryDate {
                date: *date,
                hour: Some(*hour),
            }),
            DateParam::DateHour(..) => Err(invalid()),
            DateParam::Text(text) => QueryDate::parse(text).ok_or_else(invalid),
        }
    }
}

impl fmt::Display for DateParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParam::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            DateParam::DateHour(date, hour) => write!(f, "{}:{:02}", date.format("%Y-%m-%d"), hour),
            DateParam::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A validated history date, optionally pinned to an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryDate {
    pub date: NaiveDate,
    pub hour: Option<u32>,
}

impl QueryDate {
    /// Parses `YYYY-MM-DD` or `YYYY-MM-DD:HH`.
    pub fn parse(text: &str) -> Option<Self> {
        let (date_part, hour_part) = match text.split_once(':') {
            Some((date, hour)) => (date, Some(hour)),
            None => (text, None),
        };
        if date_part.len() != 10 {
            return None;
        }
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
        let hour = match hour_part {
            None => None,
            Some(hour) if hour.len() == 2 && hour.bytes().all(|b| b.is_ascii_digit()) => {
                let hour: u32 = hour.parse().ok()?;
                if hour > 23 {
                    return None;
                }
                Some(hour)
            }
            Some(_) => return None,
        };
        Some(QueryDate { date, hour })
    }
}

impl fmt::Display for QueryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hour {
            Some(hour) => write!(f, "{}:{:02}", self.date.format("%Y-%m-%d"), hour),
            None => write!(f, "{}", self.date.format("%Y-%m-%d")),
        }
    }
}

/// A calendar day without a year, as used by `start_day`/`end_day` on climate normals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear {
    pub month: u32,
    pub day: u32,
}

impl DayOfYear {
    /// Parses an `MM-DD` string naming a real calendar day. `02-29` is accepted.
    pub(crate) fn parse(param: &'static str, text: &str) -> Result<Self, RequestValidationError> {
        let invalid = || RequestValidationError::InvalidDayFormat {
            param,
            value: text.to_string(),
        };
        if !DAY_PATTERN.is_match(text) {
            return Err(invalid());
        }
        let (month, day) = text.split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        // 2000 is a leap year, so every real month/day pair resolves.
        let date = NaiveDate::from_ymd_opt(2000, month, day).ok_or_else(invalid)?;
        Ok(DayOfYear {
            month: date.month(),
            day: date.day(),
        })
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}
