//! JSON file configuration adapter.
//!
//! Implements [`ConfigPort`] over a single JSON document on disk.  Both
//! directions validate: a file with out-of-range values is rejected on
//! load, and an invalid config is never written.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::ThermostatConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file, or fall back to defaults if it does not exist.
    pub fn load_or_default(&self) -> Result<ThermostatConfig, ConfigError> {
        match self.load() {
            Err(ConfigError::NotFound) => {
                info!("{} not found, using defaults", self.path.display());
                Ok(ThermostatConfig::default())
            }
            other => other,
        }
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<ThermostatConfig, ConfigError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError,
        })?;
        let config: ThermostatConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("{}: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self, config: &ThermostatConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        std::fs::write(&self.path, json).map_err(|_| ConfigError::IoError)?;
        info!("config saved to {}", self.path.display());
        Ok(())
    }
}
