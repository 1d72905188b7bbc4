use anyhow::Result;
use tripline_runtime::Recorder;

use crate::presentation::strong;
use crate::types::OutputFormat;

pub fn handle(recorder: &Recorder, sensor: &str, format: &OutputFormat) -> Result<()> {
    let count = recorder.outstanding_count(sensor)?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "sensor": sensor,
                "count": count,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            println!("{}", strong(&count.to_string()));
        }
    }

    Ok(())
}
