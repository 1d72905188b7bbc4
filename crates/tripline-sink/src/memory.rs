use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::traits::ReportSink;

/// One report as the sink received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedWindow {
    pub sensor: String,
    pub window: String,
    pub count: u64,
}

/// In-memory sink for tests and dry runs.
///
/// Keeps every report in arrival order and maintains running totals keyed by
/// sensor name, so `total_for` answers for labels that coincide with the
/// reporting sensor.
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    reports: Vec<ReportedWindow>,
    totals: HashMap<String, u64>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a label's running total, as if prior runs had reported it.
    pub fn set_total(&self, label: &str, total: u64) {
        let mut state = self.state.lock().expect("sink state poisoned");
        state.totals.insert(label.to_string(), total);
    }

    /// Snapshot of every report received so far.
    pub fn reports(&self) -> Vec<ReportedWindow> {
        self.state.lock().expect("sink state poisoned").reports.clone()
    }
}

impl ReportSink for MemorySink {
    fn report(&self, sensor: &str, window: &str, count: u64) -> Result<()> {
        let mut state = self.state.lock().expect("sink state poisoned");
        state.reports.push(ReportedWindow {
            sensor: sensor.to_string(),
            window: window.to_string(),
            count,
        });
        *state.totals.entry(sensor.to_string()).or_insert(0) += count;
        Ok(())
    }

    fn total_for(&self, label: &str) -> Result<u64> {
        let state = self.state.lock().expect("sink state poisoned");
        Ok(state.totals.get(label).copied().unwrap_or(0))
    }
}
