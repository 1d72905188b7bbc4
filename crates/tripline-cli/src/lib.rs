// NOTE: CLI Architecture Rationale
//
// Why a flat text log per sensor (not a database)?
// - The log file is the whole durable state of the recorder; anything that
//   can append a line can produce events, and rotation rewrites the file in
//   full each pass, so there is no index to keep in sync
// - Aggregated history is the sink backend's business, not the recorder's
//
// Why one process, no daemon?
// - Recording is a single append + rotate pass; wiring it to a sensor is a
//   cron line or a GPIO hook invoking `tripline record <sensor>`
// - Single-writer discipline per sensor is the deployment's contract; the
//   CLI does not serialize concurrent invocations

mod args;
mod commands;
mod handlers;
mod presentation;
mod types;

pub use args::{Cli, Commands};
pub use commands::run;
pub use types::{OutputFormat, SinkKind};
