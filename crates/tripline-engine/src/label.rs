use tripline_types::DateKey;

/// Display label for one reported hour window: `MM/DD/YYYY H:00 - H:59`.
/// The hour is intentionally not zero-padded.
pub fn hour_range_label(date: DateKey, hour: u32) -> String {
    format!("{} {}:00 - {}:59", date, hour, hour)
}
