use anyhow::Result;

use crate::traits::ReportSink;

/// Sink that discards every report and knows no totals.
///
/// The default when no reporting backend is configured; recording and
/// rotation behave normally, the aggregated counts just go nowhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ReportSink for NoopSink {
    fn report(&self, _sensor: &str, _window: &str, _count: u64) -> Result<()> {
        Ok(())
    }

    fn total_for(&self, _label: &str) -> Result<u64> {
        Ok(0)
    }
}
