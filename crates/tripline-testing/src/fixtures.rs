//! Well-formed sample data for seeding sensor logs.

/// Build one log line in the persisted `MM/DD/YYYY HH:MM:SS` format.
pub fn timestamp_line(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> String {
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
        month, day, year, hour, minute, second
    )
}
