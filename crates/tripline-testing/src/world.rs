//! TestWorld pattern for integration test setup.
//!
//! Provides an isolated data directory per test, helpers to seed sensor
//! logs, and a CLI command builder already pointed at that directory.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tripline_runtime::LOG_FILE_SUFFIX;

/// Isolated test environment.
///
/// # Example
/// ```no_run
/// use tripline_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.seed_log("lab", &["01/15/2024 09:30:00"]);
/// world.command().args(["count", "lab"]).assert().success();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("tripline-data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a sensor's log file inside the data directory.
    pub fn log_path(&self, sensor: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}", sensor, LOG_FILE_SUFFIX))
    }

    /// Write a sensor log containing exactly the given lines.
    pub fn seed_log(&self, sensor: &str, lines: &[&str]) {
        let mut contents = lines.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        std::fs::write(self.log_path(sensor), contents).expect("Failed to seed log");
    }

    /// Read a sensor's log back.
    pub fn read_log(&self, sensor: &str) -> String {
        std::fs::read_to_string(self.log_path(sensor)).expect("Failed to read log")
    }

    /// CLI command builder already pointed at this world's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tripline").expect("tripline binary not built");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("TRIPLINE_PATH");
        cmd
    }
}
