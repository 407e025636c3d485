use serde::Deserialize;
use std::fs;

use crate::errors::{ConfigError, ConfigResult};

/// Root configuration struct expecting `[[sensor]]` TOML array format
#[derive(Debug, Deserialize)]
pub struct SensorConfig {
    #[serde(rename = "sensor")]
    pub sensors: Vec<SensorEntry>,
}

/// One sensor entry, matching each `[[sensor]]` section. Every sensor
/// names its own bus device file; drivers do not share bus handles.
#[derive(Debug, Deserialize)]
pub struct SensorEntry {
    pub id: String,
    pub driver: String,
    pub devfile: String,
    pub address: u16,
    /// Publish frequency in Hz, default 1.
    pub frequency: Option<u32>,
    /// ALS analog gain name, e.g. "5x". Driver default when absent.
    pub gain: Option<String>,
    /// Upper bound on status-poll reads per measurement. Absent means
    /// the measurement blocks until the sensor answers.
    pub max_poll: Option<u32>,
}

/// Loads config from a TOML file
pub fn load_sensor_config(path: &str) -> ConfigResult<SensorConfig> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadError {
        path: path.to_string(),
        source: e,
    })?;
    parse_sensor_config(&content)
}

fn parse_sensor_config(content: &str) -> ConfigResult<SensorConfig> {
    Ok(toml::from_str(content)?)
}
