use serde::{Deserialize, Serialize};

use crate::date::DateKey;
use crate::record::TimestampRecord;

/// Events recorded within one hour of one day.
///
/// `count` tracks `timestamps.len()` explicitly; it is only mutated through
/// [`push`](Self::push), so the two stay in lockstep through parsing and
/// partitioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    pub hour: u32,
    pub count: u64,
    pub timestamps: Vec<TimestampRecord>,
}

impl HourBucket {
    pub fn new(hour: u32) -> Self {
        Self {
            hour,
            count: 0,
            timestamps: Vec::new(),
        }
    }

    pub fn push(&mut self, record: TimestampRecord) {
        self.count += 1;
        self.timestamps.push(record);
    }
}

/// All hour buckets for one calendar date.
///
/// At most one bucket exists per hour value; buckets keep the order in which
/// their hour was first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub day: DateKey,
    pub hours: Vec<HourBucket>,
}

impl DayBucket {
    pub fn new(day: DateKey) -> Self {
        Self {
            day,
            hours: Vec::new(),
        }
    }

    /// Find-or-create the bucket for an hour value.
    pub fn hour_mut(&mut self, hour: u32) -> &mut HourBucket {
        let idx = match self.hours.iter().position(|h| h.hour == hour) {
            Some(idx) => idx,
            None => {
                self.hours.push(HourBucket::new(hour));
                self.hours.len() - 1
            }
        };
        &mut self.hours[idx]
    }

    pub fn hour(&self, hour: u32) -> Option<&HourBucket> {
        self.hours.iter().find(|h| h.hour == hour)
    }

    pub fn count(&self) -> u64 {
        self.hours.iter().map(|h| h.count).sum()
    }
}

/// The parsed day/hour model of one sensor's log.
///
/// Rebuilt from the persisted file on every read; lives for a single
/// parse-partition-rewrite cycle. Days keep first-seen order, not calendar
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    pub days: Vec<DayBucket>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.hours.is_empty())
    }

    /// Find-or-create the bucket group for a date.
    pub fn day_mut(&mut self, day: DateKey) -> &mut DayBucket {
        let idx = match self.days.iter().position(|d| d.day == day) {
            Some(idx) => idx,
            None => {
                self.days.push(DayBucket::new(day));
                self.days.len() - 1
            }
        };
        &mut self.days[idx]
    }

    pub fn day(&self, day: DateKey) -> Option<&DayBucket> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Append one record under its day and hour.
    pub fn push(&mut self, day: DateKey, hour: u32, record: TimestampRecord) {
        self.day_mut(day).hour_mut(hour).push(record);
    }

    /// Move a whole hour bucket under a date, as the partitioner does when
    /// re-homing classified buckets.
    pub fn push_bucket(&mut self, day: DateKey, bucket: HourBucket) {
        self.day_mut(day).hours.push(bucket);
    }

    pub fn total_count(&self) -> u64 {
        self.days.iter().map(|d| d.count()).sum()
    }

    /// Flat iteration over every record, in day order then hour order then
    /// record order.
    pub fn records(&self) -> impl Iterator<Item = &TimestampRecord> {
        self.days
            .iter()
            .flat_map(|d| d.hours.iter())
            .flat_map(|h| h.timestamps.iter())
    }
}
