//! Canonical string keys for calendar days.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::constants::DAY_KEY_FORMAT;
use crate::error::{MarkdaysError, MarkdaysResult};

/// Identifies one calendar day.
///
/// Keys built from dates are ISO-8601 (`2024-01-02`). Keys read back from a
/// store are kept verbatim, even if they don't parse as a date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(String);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date.format(DAY_KEY_FORMAT).to_string())
    }

    /// Key of the calendar day `instant` falls on in the reference timezone `tz`.
    pub fn for_instant<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> Self {
        Self::from_date(instant.with_timezone(tz).date_naive())
    }

    /// Parse a `YYYY-MM-DD` string into a date key.
    pub fn parse(s: &str) -> MarkdaysResult<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
            .map_err(|_| MarkdaysError::InvalidDate(s.to_string()))?;
        Ok(Self::from_date(date))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The date this key denotes, if it is a well-formed ISO date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DAY_KEY_FORMAT).ok()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        DayKey::from_date(date)
    }
}

impl From<String> for DayKey {
    fn from(raw: String) -> Self {
        DayKey(raw)
    }
}

impl From<&str> for DayKey {
    fn from(raw: &str) -> Self {
        DayKey(raw.to_string())
    }
}

impl FromStr for DayKey {
    type Err = MarkdaysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayKey::parse(s)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
