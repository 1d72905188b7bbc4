use tripline_types::{EventLog, HourMark};

/// Result of splitting a parsed log at an hour mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Buckets whose hour has fully elapsed: to be reported, then purged.
    pub expired: EventLog,
    /// Buckets still accumulating: written back to the log.
    pub retained: EventLog,
}

/// Split a parsed log into expired and retained halves.
///
/// A day strictly before the mark's date expires wholesale. On the mark's
/// date (or a later one), each hour bucket expires only if its hour is
/// strictly below the mark's hour; the mark's own hour stays retained.
/// Every record of the input lands in exactly one half.
pub fn partition(log: EventLog, mark: HourMark) -> Partition {
    let mut split = Partition::default();

    for day in log.days {
        if day.day < mark.date {
            for bucket in day.hours {
                split.expired.push_bucket(day.day, bucket);
            }
        } else {
            for bucket in day.hours {
                if bucket.hour < mark.hour {
                    split.expired.push_bucket(day.day, bucket);
                } else {
                    split.retained.push_bucket(day.day, bucket);
                }
            }
        }
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_log;
    use tripline_types::DateKey;

    fn mark(year: i64, month: u32, day: u32, hour: u32) -> HourMark {
        HourMark::new(DateKey::from_ymd(year, month, day), hour)
    }

    #[test]
    fn test_prior_day_expires_wholesale() {
        let log = parse_log("01/14/2024 23:10:00\n01/14/2024 08:00:00\n");
        let split = partition(log, mark(2024, 1, 15, 0));

        assert!(split.retained.is_empty());
        assert_eq!(split.expired.total_count(), 2);
    }

    #[test]
    fn test_same_day_splits_by_hour() {
        let log = parse_log("01/15/2024 09:30:00\n01/15/2024 14:05:00\n01/15/2024 16:00:00\n");
        let split = partition(log, mark(2024, 1, 15, 14));

        let expired = split.expired.day(DateKey::from_ymd(2024, 1, 15)).unwrap();
        assert!(expired.hour(9).is_some());
        assert!(expired.hour(14).is_none());

        let retained = split.retained.day(DateKey::from_ymd(2024, 1, 15)).unwrap();
        assert!(retained.hour(14).is_some());
        assert!(retained.hour(16).is_some());
    }

    #[test]
    fn test_current_hour_is_retained_never_expired() {
        let log = parse_log("01/15/2024 14:00:00\n");
        let split = partition(log, mark(2024, 1, 15, 14));

        assert!(split.expired.is_empty());
        assert_eq!(split.retained.total_count(), 1);
    }

    #[test]
    fn test_future_day_is_retained() {
        // A clock rollback leaves future-dated entries; they are not expired
        let log = parse_log("01/16/2024 03:00:00\n");
        let split = partition(log, mark(2024, 1, 15, 14));

        assert!(split.expired.is_empty());
        assert_eq!(split.retained.total_count(), 1);
    }

    #[test]
    fn test_split_is_complete_and_disjoint() {
        let text = "01/14/2024 23:10:00\n01/15/2024 09:30:00\n01/15/2024 09:45:00\n\
                    01/15/2024 14:00:00\n01/16/2024 01:00:00\n";
        let log = parse_log(text);
        let before = log.total_count();
        let mut original: Vec<String> = log.records().map(|r| r.to_string()).collect();
        original.sort_unstable();

        let split = partition(log, mark(2024, 1, 15, 14));

        assert_eq!(split.expired.total_count() + split.retained.total_count(), before);

        let mut after: Vec<String> = split
            .expired
            .records()
            .chain(split.retained.records())
            .map(|r| r.to_string())
            .collect();
        after.sort_unstable();
        assert_eq!(after, original);
    }

    #[test]
    fn test_counts_hold_after_partition() {
        let log = parse_log("01/14/2024 23:10:00\n01/15/2024 09:30:00\n01/15/2024 09:45:00\n");
        let split = partition(log, mark(2024, 1, 15, 14));

        for log in [&split.expired, &split.retained] {
            for day in &log.days {
                for hour in &day.hours {
                    assert_eq!(hour.count as usize, hour.timestamps.len());
                }
            }
        }
    }

    #[test]
    fn test_empty_log_partitions_to_empty_halves() {
        let split = partition(EventLog::new(), mark(2024, 1, 15, 14));
        assert!(split.expired.is_empty());
        assert!(split.retained.is_empty());
    }
}
