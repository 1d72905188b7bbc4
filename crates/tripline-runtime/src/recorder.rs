use tripline_engine::{hour_range_label, parse_log, partition, render_log};
use tripline_sink::ReportSink;
use tripline_types::{EventLog, HourMark, TimestampRecord};

use crate::config::Config;
use crate::store::LogStore;
use crate::{Error, Result};

/// What one recording pass did.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    /// The line appended for this event.
    pub record: TimestampRecord,
    /// Events still in the log after rotation (not yet reported).
    pub retained: u64,
    /// Expired hour windows successfully forwarded to the sink.
    pub forwarded: usize,
    /// Expired hour windows the sink rejected. Their log entries are purged
    /// regardless: forwarding is best-effort, the purge is authoritative.
    pub failed: usize,
}

/// Drives the append / parse / partition / rewrite / forward cycle for one
/// event, and the read-only count path.
///
/// The recorder holds no per-sensor state between calls; the log file is the
/// only durable state and is re-read in full on every pass.
pub struct Recorder {
    store: LogStore,
    config: Config,
    sink: Box<dyn ReportSink>,
}

impl Recorder {
    pub fn new(store: LogStore, config: Config, sink: Box<dyn ReportSink>) -> Self {
        Self {
            store,
            config,
            sink,
        }
    }

    /// Record a trip event for the current local time.
    pub fn record_event(&self, sensor: &str) -> Result<RecordOutcome> {
        self.record_event_at(sensor, TimestampRecord::now(), HourMark::now())
    }

    /// Record a trip event with an explicit timestamp and rotation mark.
    ///
    /// Pipeline order is fixed: append, re-parse the whole log, partition at
    /// the mark, rewrite the retained half, then forward the expired half.
    /// Sink failures do not abort the call and are not retried; they are
    /// tallied in the outcome.
    pub fn record_event_at(
        &self,
        sensor: &str,
        record: TimestampRecord,
        mark: HourMark,
    ) -> Result<RecordOutcome> {
        self.store.append(sensor, &record)?;

        let log = parse_log(&self.store.read(sensor)?);
        let split = partition(log, mark);

        self.store.replace(sensor, &render_log(&split.retained))?;

        let (forwarded, failed) = self.forward_expired(sensor, &split.expired);

        Ok(RecordOutcome {
            record,
            retained: split.retained.total_count(),
            forwarded,
            failed,
        })
    }

    /// Events not yet reported elsewhere plus the sink's running total for
    /// this sensor's display label. Read-only: no rewrite, no forwarding.
    pub fn outstanding_count(&self, sensor: &str) -> Result<u64> {
        self.outstanding_count_at(sensor, HourMark::now())
    }

    pub fn outstanding_count_at(&self, sensor: &str, mark: HourMark) -> Result<u64> {
        let label = self.config.display_label(sensor);
        let reported = self.sink.total_for(label).map_err(Error::Sink)?;

        let split = partition(parse_log(&self.store.read(sensor)?), mark);
        Ok(reported + split.retained.total_count())
    }

    /// Read-only view of the buckets still accumulating in the log.
    pub fn retained_buckets(&self, sensor: &str) -> Result<EventLog> {
        self.retained_buckets_at(sensor, HourMark::now())
    }

    pub fn retained_buckets_at(&self, sensor: &str, mark: HourMark) -> Result<EventLog> {
        let split = partition(parse_log(&self.store.read(sensor)?), mark);
        Ok(split.retained)
    }

    /// Read-only view of what the next recording pass would report: the
    /// expired half of the current log, without purging or forwarding.
    pub fn expired_preview(&self, sensor: &str) -> Result<EventLog> {
        self.expired_preview_at(sensor, HourMark::now())
    }

    pub fn expired_preview_at(&self, sensor: &str, mark: HourMark) -> Result<EventLog> {
        let split = partition(parse_log(&self.store.read(sensor)?), mark);
        Ok(split.expired)
    }

    fn forward_expired(&self, sensor: &str, expired: &EventLog) -> (usize, usize) {
        let mut forwarded = 0;
        let mut failed = 0;

        for day in &expired.days {
            for bucket in &day.hours {
                let window = hour_range_label(day.day, bucket.hour);
                match self.sink.report(sensor, &window, bucket.count) {
                    Ok(()) => forwarded += 1,
                    Err(_) => failed += 1,
                }
            }
        }

        (forwarded, failed)
    }
}
