use anyhow::Result;
use tripline_runtime::LogStore;

use crate::types::OutputFormat;

pub fn handle(store: &LogStore, format: &OutputFormat) -> Result<()> {
    let sensors = store.sensors()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sensors)?);
        }
        OutputFormat::Plain => {
            if sensors.is_empty() {
                println!("No sensor logs found in {}", store.data_dir().display());
                return Ok(());
            }
            for sensor in sensors {
                println!("{}", sensor);
            }
        }
    }

    Ok(())
}
