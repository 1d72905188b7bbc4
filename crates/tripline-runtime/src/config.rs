use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SensorConfig {
    /// Display label the sink's running total is queried under. Defaults to
    /// the sensor name; point several sensors at one label to aggregate
    /// their reported totals.
    #[serde(default)]
    pub display_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sensors: HashMap<String, SensorConfig>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Label used when querying the sink's running total for a sensor.
    pub fn display_label<'a>(&'a self, sensor: &'a str) -> &'a str {
        self.sensors
            .get(sensor)
            .and_then(|c| c.display_label.as_deref())
            .unwrap_or(sensor)
    }

    pub fn set_sensor(&mut self, name: String, sensor: SensorConfig) {
        self.sensors.insert(name, sensor);
    }
}
