//! Inclusive date range covered by a run.

use chrono::{Datelike, Days, Duration, NaiveDate};

use crate::error::{MenuCalError, MenuCalResult};

/// Inclusive range of calendar dates.
///
/// `start > end` is allowed and describes an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// `days` days forward from `from`, both ends included.
    pub fn rolling(from: NaiveDate, days: i64) -> MenuCalResult<Self> {
        let end = u64::try_from(days)
            .ok()
            .and_then(|days| from.checked_add_days(Days::new(days)))
            .ok_or_else(|| {
                MenuCalError::DateRange(format!(
                    "A window of {} days from {} is outside the supported date range",
                    days, from
                ))
            })?;

        Ok(DateRange { start: from, end })
    }

    /// Build a range from CLI-style arguments.
    /// - `from`: YYYY-MM-DD, defaults to `today`
    /// - `days`: window length, defaults to `default_days`
    pub fn from_args(
        from: Option<&str>,
        days: Option<i64>,
        today: NaiveDate,
        default_days: i64,
    ) -> MenuCalResult<Self> {
        let start = match from {
            Some(s) => parse_date(s)?,
            None => today,
        };
        let days = days.unwrap_or(default_days);
        if days < 0 {
            return Err(MenuCalError::DateRange(format!(
                "Window must not be negative (got {} days)",
                days
            )));
        }
        Self::rolling(start, days)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Mondays of every week that overlaps the range, in ascending order.
    pub fn weeks(&self) -> Weeks {
        Weeks {
            next: week_monday(self.start),
            end: self.end,
            done: self.is_empty(),
        }
    }
}

/// Iterator over week-anchoring Mondays, see [`DateRange::weeks`].
#[derive(Debug, Clone)]
pub struct Weeks {
    next: NaiveDate,
    end: NaiveDate,
    done: bool,
}

impl Iterator for Weeks {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.done || self.next > self.end {
            return None;
        }
        let monday = self.next;
        match monday.checked_add_signed(Duration::days(7)) {
            Some(next) => self.next = next,
            None => self.done = true,
        }
        Some(monday)
    }
}

/// Monday of the ISO week containing `date`.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> MenuCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        MenuCalError::DateRange(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}
