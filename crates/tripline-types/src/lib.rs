pub mod bucket;
pub mod date;
pub mod record;

pub use bucket::{DayBucket, EventLog, HourBucket};
pub use date::DateKey;
pub use record::{HourMark, TimestampRecord};
