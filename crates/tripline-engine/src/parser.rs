use regex::Regex;
use std::sync::LazyLock;
use tripline_types::{DateKey, EventLog, TimestampRecord};

static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D+").unwrap());

/// Build the day/hour bucket model from raw log text.
///
/// Each non-blank line is tokenized by splitting on runs of non-digit
/// characters. A line yielding fewer than four numeric tokens is skipped
/// without error; otherwise the tokens are read as month, day, year, hour
/// and the full original line is appended to its bucket. Trailing tokens
/// (minutes, seconds) are ignored for bucketing.
pub fn parse_log(text: &str) -> EventLog {
    let mut log = EventLog::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((day, hour)) = classify_line(line) {
            log.push(day, hour, TimestampRecord::new(line));
        }
    }

    log
}

/// Extract the (date, hour) bucket key from one line, or None for a line
/// that does not carry four numeric tokens.
fn classify_line(line: &str) -> Option<(DateKey, u32)> {
    let tokens: Vec<&str> = DIGIT_RUNS.split(line).filter(|t| !t.is_empty()).collect();
    if tokens.len() < 4 {
        return None;
    }

    let month: u32 = tokens[0].parse().ok()?;
    let day: u32 = tokens[1].parse().ok()?;
    let year: i64 = tokens[2].parse().ok()?;
    let hour: u32 = tokens[3].parse().ok()?;

    Some((DateKey::from_ymd(year, month, day), hour))
}
