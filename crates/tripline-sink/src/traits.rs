use anyhow::Result;

/// Destination for expired hour-window counts.
///
/// Responsibilities:
/// - Accept one report per expired hour bucket (fire-and-forget: the caller
///   neither retries nor buffers on failure, and the purged log entries are
///   gone either way)
/// - Answer the running total previously reported under a display label
///
/// Implementations decide what "reported" means: dropped on the floor,
/// written to a local database, or shipped to a remote system.
pub trait ReportSink: Send + Sync {
    /// Record `count` events for one elapsed hour window of a sensor.
    /// `window` is the display label of the range, e.g.
    /// `01/14/2024 23:00 - 23:59`.
    fn report(&self, sensor: &str, window: &str, count: u64) -> Result<()>;

    /// Running total of all counts reported under `label`.
    fn total_for(&self, label: &str) -> Result<u64>;
}

/// Shared handles forward to the underlying sink, so a caller can keep a
/// handle for inspection while the recorder owns another.
impl<S: ReportSink + ?Sized> ReportSink for std::sync::Arc<S> {
    fn report(&self, sensor: &str, window: &str, count: u64) -> Result<()> {
        (**self).report(sensor, window, count)
    }

    fn total_for(&self, label: &str) -> Result<u64> {
        (**self).total_for(label)
    }
}
