use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tripline_types::TimestampRecord;
use walkdir::WalkDir;

use crate::{Error, Result};

/// End of file name used for each sensor's timestamp log.
pub const LOG_FILE_SUFFIX: &str = "_SerialCounterTimestampData.txt";

/// Resolve the data directory holding sensor logs, based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TRIPLINE_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.tripline (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: TRIPLINE_PATH environment variable
    if let Ok(env_path) = std::env::var("TRIPLINE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("tripline"));
    }

    // Priority 4: Fallback to ~/.tripline (last resort for systems without
    // a standard data directory)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tripline"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Flat-file timestamp log storage, one file per sensor name.
///
/// The store owns no in-memory state: every read hits the file, every write
/// goes straight through. Single-writer discipline is the caller's job.
#[derive(Debug, Clone)]
pub struct LogStore {
    data_dir: PathBuf,
}

impl LogStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of one sensor's log file: `<data_dir>/<sensor><suffix>`.
    pub fn log_path(&self, sensor: &str) -> PathBuf {
        self.data_dir.join(format!("{}{}", sensor, LOG_FILE_SUFFIX))
    }

    /// Read a sensor's full log text, creating an empty log first if the
    /// file does not exist yet.
    pub fn read(&self, sensor: &str) -> Result<String> {
        let path = self.log_path(sensor);
        self.ensure_exists(&path)?;
        Ok(std::fs::read_to_string(&path)?)
    }

    /// Append one record line, creating the log if absent.
    pub fn append(&self, sensor: &str, record: &TimestampRecord) -> Result<()> {
        let path = self.log_path(sensor);
        self.ensure_parent()?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", record)?;
        Ok(())
    }

    /// Replace a sensor's log contents in full (truncate and write).
    pub fn replace(&self, sensor: &str, contents: &str) -> Result<()> {
        self.ensure_parent()?;
        std::fs::write(self.log_path(sensor), contents)?;
        Ok(())
    }

    /// Discover sensor names from log files present in the data directory.
    pub fn sensors(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        if !self.data_dir.exists() {
            return Ok(names);
        }

        for entry in WalkDir::new(&self.data_dir).max_depth(1) {
            let entry = entry.map_err(|err| Error::Io(err.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str()
                && let Some(sensor) = name.strip_suffix(LOG_FILE_SUFFIX)
                && !sensor.is_empty()
            {
                names.push(sensor.to_string());
            }
        }

        names.sort_unstable();
        Ok(names)
    }

    fn ensure_parent(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    fn ensure_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            self.ensure_parent()?;
            std::fs::File::create(path)?;
        }
        Ok(())
    }
}
