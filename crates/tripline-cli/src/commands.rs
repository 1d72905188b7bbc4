use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use tripline_runtime::{Config, LogStore, Recorder, resolve_data_dir};
use tripline_sink::{NoopSink, ReportSink, SqliteSink};

use crate::types::SinkKind;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        handlers::guidance::handle(&data_dir);
        return Ok(());
    };

    let store = LogStore::new(&data_dir);
    let config = Config::load_from(&Config::default_path(&data_dir))?;

    let sink: Box<dyn ReportSink> = match cli.sink {
        SinkKind::Noop => Box::new(NoopSink),
        SinkKind::Sqlite => Box::new(SqliteSink::open(&data_dir.join("reports.db"))?),
    };

    let recorder = Recorder::new(store.clone(), config, sink);

    match command {
        Commands::Record { sensor } => handlers::record::handle(&recorder, &sensor, &cli.format),
        Commands::Count { sensor } => handlers::count::handle(&recorder, &sensor, &cli.format),
        Commands::Status { sensor } => handlers::status::handle(&recorder, &sensor, &cli.format),
        Commands::Sensors => handlers::sensors::handle(&store, &cli.format),
        Commands::Export { sensor, output } => {
            handlers::export::handle(&recorder, &sensor, output.as_deref())
        }
    }
}
