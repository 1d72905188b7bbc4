use tripline_types::EventLog;

/// Serialize a model back to log-file text: one record per line, in model
/// iteration order (days as first seen, hours as first seen, records in
/// append order). Ends with a newline when any record exists, so re-parsing
/// the output reproduces the same buckets and counts.
pub fn render_log(log: &EventLog) -> String {
    let mut out = String::new();
    for record in log.records() {
        out.push_str(record.as_str());
        out.push('\n');
    }
    out
}
