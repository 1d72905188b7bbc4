use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::date::DateKey;

/// Wall-clock display format of a persisted record: `MM/DD/YYYY HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// One persisted trip event, kept as the raw log line.
///
/// Records are immutable once written; the parser re-attaches them to hour
/// buckets verbatim so a rewrite reproduces the original bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimestampRecord(String);

impl TimestampRecord {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Format a record for the given local instant.
    pub fn from_local(instant: &DateTime<Local>) -> Self {
        Self(instant.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Format a record for the current local time.
    pub fn now() -> Self {
        Self::from_local(&Local::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimestampRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference point for partitioning: a calendar date plus an hour of day.
///
/// Buckets strictly before the mark are expired; the mark's own hour is
/// still accumulating and stays retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourMark {
    pub date: DateKey,
    pub hour: u32,
}

impl HourMark {
    pub fn new(date: DateKey, hour: u32) -> Self {
        Self { date, hour }
    }

    /// Mark for the given local instant.
    pub fn from_local(instant: &DateTime<Local>) -> Self {
        Self {
            date: DateKey::from(instant.date_naive()),
            hour: instant.hour(),
        }
    }

    /// Mark for the current local time.
    pub fn now() -> Self {
        Self::from_local(&Local::now())
    }
}
