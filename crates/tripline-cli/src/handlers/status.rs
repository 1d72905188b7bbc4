use anyhow::Result;
use tripline_runtime::Recorder;

use crate::presentation::{faint, strong};
use crate::types::OutputFormat;

pub fn handle(recorder: &Recorder, sensor: &str, format: &OutputFormat) -> Result<()> {
    let retained = recorder.retained_buckets(sensor)?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "sensor": sensor,
                "retained": retained,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            if retained.is_empty() {
                println!("No events awaiting rotation for {}", strong(sensor));
                return Ok(());
            }

            println!("{}", strong(sensor));
            for day in &retained.days {
                println!("{}", day.day);
                for bucket in &day.hours {
                    println!(
                        "  {:>2}:00 - {:>2}:59  {}",
                        bucket.hour,
                        bucket.hour,
                        strong(&bucket.count.to_string())
                    );
                }
            }
            println!(
                "{}",
                faint(&format!("total: {}", retained.total_count()))
            );
        }
    }

    Ok(())
}
