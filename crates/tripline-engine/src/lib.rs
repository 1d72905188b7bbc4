// NOTE: Pipeline Design Rationale
//
// Why re-parse the whole log on every pass (not an in-memory cache)?
// - The flat text file is the only durable state; the model is a view of it
// - A fresh parse per cycle keeps rewrite output trivially consistent with
//   what was read, with no cache invalidation to get wrong
// - Logs stay small by construction: expired hours are purged every pass
//
// Why strict `<` at the partition boundary?
// - The current hour is still accumulating; reporting it early would
//   undercount the window. A record stamped in the mark's own hour is
//   always retained.
//
// Why digit-run tokenization (not a timestamp grammar)?
// - Separator bytes in the log carry no information; every field is numeric
// - Splitting on non-digit runs tolerates separator drift across writers
//   while rejecting lines without enough numeric material

mod label;
mod parser;
mod partition;
mod render;

pub use label::hour_range_label;
pub use parser::parse_log;
pub use partition::{Partition, partition};
pub use render::render_log;
