use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date used to key day buckets.
///
/// Ordering derives from field order (year, then month, then day), so
/// comparing two keys compares calendar dates. The integer key form
/// `YYYYMMDD` is kept as an explicit conversion for stable external
/// representation; it is computed arithmetically, so it stays a true inverse
/// of `from_key` for any component values.
///
/// Construction is permissive: components are stored verbatim with no
/// calendar validation (a day of 40 is accepted), matching the tolerance of
/// the log format this key is parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateKey {
    year: i64,
    month: u32,
    day: u32,
}

impl DateKey {
    pub fn from_ymd(year: i64, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Integer key form: `year * 10_000 + month * 100 + day`.
    pub fn as_key(&self) -> i64 {
        self.year * 10_000 + i64::from(self.month) * 100 + i64::from(self.day)
    }

    /// Inverse of [`as_key`](Self::as_key).
    pub fn from_key(key: i64) -> Self {
        Self {
            year: key / 10_000,
            month: (key / 100 % 100) as u32,
            day: (key % 100) as u32,
        }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: i64::from(date.year()),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for DateKey {
    /// Display form `MM/DD/YYYY`, components zero-padded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}
