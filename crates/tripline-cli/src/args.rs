use crate::types::{OutputFormat, SinkKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tripline")]
#[command(about = "Record sensor trip events and roll them into hourly counts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding sensor logs and config (defaults to the system
    /// data directory, or TRIPLINE_PATH)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Where expired hour counts are reported
    #[arg(long, default_value = "noop", global = true)]
    pub sink: SinkKind,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record one trip event now and rotate elapsed hours out of the log
    Record {
        /// Sensor name, also the log file prefix
        sensor: String,
    },

    /// Show the outstanding count: events still in the log plus the sink's
    /// reported running total
    Count {
        sensor: String,
    },

    /// Show the per-day, per-hour breakdown of events still in the log
    Status {
        sensor: String,
    },

    /// List sensors that have a log file in the data directory
    Sensors,

    /// Write the elapsed-hour windows the next rotation would report, as
    /// CSV, without purging or reporting them
    Export {
        sensor: String,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
