use anyhow::Result;
use tripline_runtime::Recorder;

use crate::presentation::{faint, strong};
use crate::types::OutputFormat;

pub fn handle(recorder: &Recorder, sensor: &str, format: &OutputFormat) -> Result<()> {
    let outcome = recorder.record_event(sensor)?;

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "sensor": sensor,
                "record": outcome.record.as_str(),
                "retained": outcome.retained,
                "forwarded": outcome.forwarded,
                "failed": outcome.failed,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Plain => {
            println!("Recorded {} {}", strong(sensor), faint(outcome.record.as_str()));
            println!("  {} event(s) in the current log", outcome.retained);
            if outcome.forwarded > 0 {
                println!("  reported {} elapsed hour window(s)", outcome.forwarded);
            }
            if outcome.failed > 0 {
                eprintln!(
                    "Warning: {} report(s) failed; those counts were purged from the log and are lost",
                    outcome.failed
                );
            }
        }
    }

    Ok(())
}
