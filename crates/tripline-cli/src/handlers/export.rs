use anyhow::Result;
use std::path::Path;
use tripline_engine::hour_range_label;
use tripline_runtime::Recorder;

pub fn handle(recorder: &Recorder, sensor: &str, output: Option<&Path>) -> Result<()> {
    let expired = recorder.expired_preview(sensor)?;

    let mut writer: csv::Writer<Box<dyn std::io::Write>> = match output {
        Some(path) => csv::Writer::from_writer(Box::new(std::fs::File::create(path)?)),
        None => csv::Writer::from_writer(Box::new(std::io::stdout())),
    };

    writer.write_record(["sensor", "window", "count"])?;
    for day in &expired.days {
        for bucket in &day.hours {
            writer.write_record([
                sensor,
                &hour_range_label(day.day, bucket.hour),
                &bucket.count.to_string(),
            ])?;
        }
    }
    writer.flush()?;

    Ok(())
}
