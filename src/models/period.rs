//! Calendar month keys and the reporting period cursor
//!
//! Every bucketing decision in the reports compares a record's calendar month
//! and year, never its exact day. [`MonthKey`] is that bucket: months are
//! zero-based in memory (January is `0`) and one-based in text (`2025-01`).

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month bucket, ordered by (year, month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// Zero-based month, 0 through 11
    pub month: u32,
}

impl MonthKey {
    /// Create a key from a year and a zero-based month
    ///
    /// Months outside 0..=11 roll over into neighbouring years.
    pub fn new(year: i32, month: u32) -> Self {
        Self::from_index(year as i64 * 12 + month as i64)
    }

    /// The bucket a calendar date falls into
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The bucket containing today's local date
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Check if a date falls in this calendar month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    pub fn next(&self) -> Self {
        self.shift(1)
    }

    pub fn prev(&self) -> Self {
        self.shift(-1)
    }

    /// Move by `months` calendar months, crossing year boundaries as needed
    pub fn shift(&self, months: i64) -> Self {
        Self::from_index(self.index() + months)
    }

    /// First day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Full English month name ("March")
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize % 12]
    }

    /// Chart label with a two-digit year ("March 24")
    pub fn short_label(&self) -> String {
        format!("{} {:02}", self.month_name(), self.year.rem_euclid(100))
    }

    /// Heading label with the full year ("March 2024")
    pub fn long_label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Parse a `YYYY-MM` string (one-based month)
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }

        Ok(Self {
            year,
            month: month - 1,
        })
    }

    fn index(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

/// The month currently selected for report views
///
/// Navigated with prev/next independently of the real calendar month, which is
/// what the dashboard summary cards use instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub month: u32,
    pub year: i32,
}

impl ReportingPeriod {
    pub fn new(key: MonthKey) -> Self {
        Self {
            month: key.month,
            year: key.year,
        }
    }

    pub fn current() -> Self {
        Self::new(MonthKey::current())
    }

    pub fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }

    /// Step back one month; January steps to December of the previous year
    pub fn prev(&self) -> Self {
        Self::new(self.key().prev())
    }

    /// Step forward one month; December steps to January of the next year
    pub fn next(&self) -> Self {
        Self::new(self.key().next())
    }
}

impl Default for ReportingPeriod {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key().long_label())
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => {
                write!(f, "Invalid period format: {} (expected YYYY-MM)", s)
            }
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
