//! Date range for filtering marked days.

use chrono::NaiveDate;

use crate::constants::DAY_KEY_FORMAT;
use crate::day_key::DayKey;
use crate::error::{MarkdaysError, MarkdaysResult};

/// Inclusive date range.
/// None values mean unbounded in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Parse `--from` / `--to` arguments (YYYY-MM-DD).
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> MarkdaysResult<Self> {
        let range = DateRange {
            from: from.map(parse_date).transpose()?,
            to: to.map(parse_date).transpose()?,
        };

        if let (Some(from), Some(to)) = (range.from, range.to)
            && from > to
        {
            return Err(MarkdaysError::InvalidRange { from, to });
        }

        Ok(range)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// Whether a day key falls in the range. Keys that aren't ISO dates only
    /// match an unbounded range.
    pub fn contains_key(&self, key: &DayKey) -> bool {
        match key.to_date() {
            Some(date) => self.contains(date),
            None => self.is_unbounded(),
        }
    }
}

fn parse_date(s: &str) -> MarkdaysResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
        .map_err(|_| MarkdaysError::InvalidDate(s.to_string()))
}
