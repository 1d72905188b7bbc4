use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;

use crate::traits::ReportSink;

// NOTE: Sink Storage Rationale
//
// The database here is report history, not system state. The timestamp log
// file stays the single source of truth for unreported events; rows land
// here only after their hour bucket was purged from the log. Losing this
// database loses reported history, never pending events.
//
// Totals are a separate table rather than SUM(reports.count) so a label's
// running total survives report-row cleanup and stays a single-row read.

/// SQLite-backed sink: every report appends a row and bumps the running
/// total of the sensor's label.
pub struct SqliteSink {
    conn: Mutex<Connection>,
}

impl SqliteSink {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open report database: {}", db_path.display()))?;

        let sink = Self {
            conn: Mutex::new(conn),
        };
        sink.init_schema()?;
        Ok(sink)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let sink = Self {
            conn: Mutex::new(conn),
        };
        sink.init_schema()?;
        Ok(sink)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock().expect("connection poisoned");
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                sensor TEXT NOT NULL,
                window TEXT NOT NULL,
                count INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS totals (
                label TEXT PRIMARY KEY,
                total INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_reports_sensor ON reports(sensor);
            "#,
        )?;

        Ok(())
    }

    /// Number of report rows stored for a sensor.
    pub fn report_count(&self, sensor: &str) -> Result<u64> {
        let conn = self.conn.lock().expect("connection poisoned");
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM reports WHERE sensor = ?1",
            params![sensor],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

impl ReportSink for SqliteSink {
    fn report(&self, sensor: &str, window: &str, count: u64) -> Result<()> {
        let conn = self.conn.lock().expect("connection poisoned");

        conn.execute(
            "INSERT INTO reports (sensor, window, count) VALUES (?1, ?2, ?3)",
            params![sensor, window, count as i64],
        )?;

        conn.execute(
            r#"
            INSERT INTO totals (label, total)
            VALUES (?1, ?2)
            ON CONFLICT(label) DO UPDATE SET
                total = total + ?2
            "#,
            params![sensor, count as i64],
        )?;

        Ok(())
    }

    fn total_for(&self, label: &str) -> Result<u64> {
        let conn = self.conn.lock().expect("connection poisoned");
        let total: Option<i64> = conn
            .query_row(
                "SELECT total FROM totals WHERE label = ?1",
                params![label],
                |row| row.get(0),
            )
            .optional()?;
        Ok(total.unwrap_or(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_and_total() {
        let sink = SqliteSink::open_in_memory().unwrap();
        sink.report("lab", "01/14/2024 23:00 - 23:59", 1).unwrap();
        sink.report("lab", "01/15/2024 9:00 - 9:59", 2).unwrap();

        assert_eq!(sink.total_for("lab").unwrap(), 3);
        assert_eq!(sink.report_count("lab").unwrap(), 2);
    }

    #[test]
    fn test_unknown_label_total_is_zero() {
        let sink = SqliteSink::open_in_memory().unwrap();
        assert_eq!(sink.total_for("never-reported").unwrap(), 0);
    }

    #[test]
    fn test_totals_survive_reopen() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("reports.db");

        {
            let sink = SqliteSink::open(&db_path).unwrap();
            sink.report("lab", "01/14/2024 23:00 - 23:59", 4).unwrap();
        }

        let sink = SqliteSink::open(&db_path).unwrap();
        assert_eq!(sink.total_for("lab").unwrap(), 4);
        assert_eq!(sink.report_count("lab").unwrap(), 1);
    }
}
