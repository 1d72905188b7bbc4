use std::sync::Arc;
use tempfile::TempDir;
use tripline_runtime::{Config, LogStore, Recorder, SensorConfig};
use tripline_sink::{MemorySink, NoopSink, ReportSink};
use tripline_types::{DateKey, HourMark, TimestampRecord};

fn mark(year: i64, month: u32, day: u32, hour: u32) -> HourMark {
    HourMark::new(DateKey::from_ymd(year, month, day), hour)
}

fn seed_log(store: &LogStore, sensor: &str, lines: &[&str]) {
    for line in lines {
        store.append(sensor, &TimestampRecord::new(*line)).unwrap();
    }
}

#[test]
fn test_record_event_rotates_and_forwards() {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path());
    seed_log(
        &store,
        "lab",
        &[
            "01/15/2024 09:30:00",
            "01/15/2024 09:45:00",
            "01/14/2024 23:10:00",
        ],
    );

    let sink = Arc::new(MemorySink::new());
    let recorder = Recorder::new(store.clone(), Config::default(), Box::new(sink.clone()));

    let outcome = recorder
        .record_event_at(
            "lab",
            TimestampRecord::new("01/15/2024 14:05:00"),
            mark(2024, 1, 15, 14),
        )
        .unwrap();

    // Two windows elapsed: 01/14 hour 23 (one event) and 01/15 hour 9 (two)
    assert_eq!(outcome.forwarded, 2);
    assert_eq!(outcome.failed, 0);
    assert_eq!(outcome.retained, 1);

    // Windows report in the order their day was first seen in the log
    let reports = sink.reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].sensor, "lab");
    assert_eq!(reports[0].window, "01/15/2024 9:00 - 9:59");
    assert_eq!(reports[0].count, 2);
    assert_eq!(reports[1].window, "01/14/2024 23:00 - 23:59");
    assert_eq!(reports[1].count, 1);

    // Only the fresh record survives in the file
    assert_eq!(store.read("lab").unwrap(), "01/15/2024 14:05:00\n");
}

#[test]
fn test_record_event_mid_hour_keeps_current_bucket() {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path());
    seed_log(
        &store,
        "lab",
        &["01/15/2024 09:30:00", "01/14/2024 23:10:00"],
    );

    let sink = Arc::new(MemorySink::new());
    let recorder = Recorder::new(store.clone(), Config::default(), Box::new(sink.clone()));

    recorder
        .record_event_at(
            "lab",
            TimestampRecord::new("01/15/2024 09:45:00"),
            mark(2024, 1, 15, 9),
        )
        .unwrap();

    // Hour 9 is the mark's own hour: retained, never reported
    assert_eq!(sink.reports().len(), 1);
    assert_eq!(sink.reports()[0].window, "01/14/2024 23:00 - 23:59");
    assert_eq!(
        store.read("lab").unwrap(),
        "01/15/2024 09:30:00\n01/15/2024 09:45:00\n"
    );
}

#[test]
fn test_outstanding_count_blends_sink_total() {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path());
    seed_log(
        &store,
        "lab",
        &["01/15/2024 14:05:00", "01/15/2024 14:20:00"],
    );

    let sink = Arc::new(MemorySink::new());
    sink.set_total("lab", 40);
    let recorder = Recorder::new(store.clone(), Config::default(), Box::new(sink.clone()));

    let count = recorder
        .outstanding_count_at("lab", mark(2024, 1, 15, 14))
        .unwrap();
    assert_eq!(count, 42);

    // The read path must not rewrite or forward
    assert_eq!(
        store.read("lab").unwrap(),
        "01/15/2024 14:05:00\n01/15/2024 14:20:00\n"
    );
    assert!(sink.reports().is_empty());
}

#[test]
fn test_outstanding_count_uses_display_label() {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path());

    let mut config = Config::default();
    config.set_sensor(
        "lab".to_string(),
        SensorConfig {
            display_label: Some("Main Lab Laser".to_string()),
        },
    );

    let sink = Arc::new(MemorySink::new());
    sink.set_total("Main Lab Laser", 7);
    let recorder = Recorder::new(store, config, Box::new(sink));

    let count = recorder
        .outstanding_count_at("lab", mark(2024, 1, 15, 14))
        .unwrap();
    assert_eq!(count, 7);
}

#[test]
fn test_missing_log_counts_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path());
    let recorder = Recorder::new(store.clone(), Config::default(), Box::new(NoopSink));

    let count = recorder
        .outstanding_count_at("brand-new", mark(2024, 1, 15, 14))
        .unwrap();
    assert_eq!(count, 0);
    assert!(store.log_path("brand-new").exists());
}

#[test]
fn test_malformed_lines_are_dropped_on_rotation() {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path());
    store.replace("lab", "01/15\nnot a timestamp\n01/15/2024 14:05:00\n").unwrap();

    let recorder = Recorder::new(store.clone(), Config::default(), Box::new(NoopSink));
    let outcome = recorder
        .record_event_at(
            "lab",
            TimestampRecord::new("01/15/2024 14:20:00"),
            mark(2024, 1, 15, 14),
        )
        .unwrap();

    assert_eq!(outcome.retained, 2);
    // Rotation rewrites only what parsed; the junk lines fall away
    assert_eq!(
        store.read("lab").unwrap(),
        "01/15/2024 14:05:00\n01/15/2024 14:20:00\n"
    );
}

struct FailingSink;

impl ReportSink for FailingSink {
    fn report(&self, _sensor: &str, _window: &str, _count: u64) -> anyhow::Result<()> {
        anyhow::bail!("sink offline")
    }

    fn total_for(&self, _label: &str) -> anyhow::Result<u64> {
        Ok(0)
    }
}

#[test]
fn test_sink_failure_does_not_abort_or_unpurge() {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path());
    seed_log(&store, "lab", &["01/14/2024 23:10:00"]);

    let recorder = Recorder::new(store.clone(), Config::default(), Box::new(FailingSink));
    let outcome = recorder
        .record_event_at(
            "lab",
            TimestampRecord::new("01/15/2024 14:05:00"),
            mark(2024, 1, 15, 14),
        )
        .unwrap();

    assert_eq!(outcome.forwarded, 0);
    assert_eq!(outcome.failed, 1);
    // The expired window is gone from the log even though its report failed
    assert_eq!(store.read("lab").unwrap(), "01/15/2024 14:05:00\n");
}

#[test]
fn test_expired_preview_leaves_log_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let store = LogStore::new(temp_dir.path());
    seed_log(
        &store,
        "lab",
        &["01/14/2024 23:10:00", "01/15/2024 14:05:00"],
    );

    let recorder = Recorder::new(store.clone(), Config::default(), Box::new(NoopSink));
    let expired = recorder
        .expired_preview_at("lab", mark(2024, 1, 15, 14))
        .unwrap();

    assert_eq!(expired.total_count(), 1);
    assert_eq!(
        store.read("lab").unwrap(),
        "01/14/2024 23:10:00\n01/15/2024 14:05:00\n"
    );
}
