use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::logging::DEFAULT_LOG_LEVEL;
use crate::observer::Measurement;

/// Readings published by the weather demo, in order.
pub const DEFAULT_READINGS: [Measurement; 3] = [
    Measurement::new(80.0, 65.0, 30.4),
    Measurement::new(70.0, 60.0, 30.4),
    Measurement::new(60.0, 55.0, 30.4),
];

/// Optional scenario file for the weather demo. Anything left out keeps
/// the default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub log_level: String,
    pub readings: Vec<Measurement>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            readings: DEFAULT_READINGS.to_vec(),
        }
    }
}

impl Scenario {
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content)
    }
}
