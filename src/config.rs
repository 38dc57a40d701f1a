//! Thermostat configuration parameters
//!
//! All tunable parameters for the control loop.  These are startup
//! configuration, not runtime-mutable state; load them from JSON via
//! [`JsonConfigFile`](crate::adapters::config_file::JsonConfigFile) or use
//! the defaults.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Longest record kind tag accepted.
pub const RECORD_KIND_CAP: usize = 16;

/// Core control-loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermostatConfig {
    // --- Timing ---
    /// Seconds between sensing/decision ticks
    pub check_interval_secs: u32,
    /// Seconds a short-cycle lockout lasts after the heater turns off
    pub suppression_secs: u32,

    // --- Reporting ---
    /// Kind tag stamped on every state report
    pub record_kind: heapless::String<RECORD_KIND_CAP>,

    // --- Setpoint ---
    /// Setpoint used at construction
    pub initial_setpoint: f32,
}

impl Default for ThermostatConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 5,
            suppression_secs: 300, // 5 min compressor-style lockout
            // Fixed literal, always within RECORD_KIND_CAP.
            record_kind: heapless::String::try_from("heat").unwrap_or_default(),
            initial_setpoint: 20.0,
        }
    }
}

impl ThermostatConfig {
    /// Reject invalid values.  Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.check_interval_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "check_interval_secs must be > 0",
            ));
        }
        if self.suppression_secs == 0 {
            return Err(ConfigError::ValidationFailed("suppression_secs must be > 0"));
        }
        if self.record_kind.is_empty() {
            return Err(ConfigError::ValidationFailed("record_kind must not be empty"));
        }
        if !self.initial_setpoint.is_finite() {
            return Err(ConfigError::ValidationFailed(
                "initial_setpoint must be finite",
            ));
        }
        Ok(())
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.check_interval_secs))
    }

    pub fn suppression_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.suppression_secs))
    }

    /// Replace the record kind tag.  Fails if it does not fit.
    pub fn set_record_kind(&mut self, kind: &str) -> Result<(), ConfigError> {
        let mut tag = heapless::String::new();
        tag.push_str(kind)
            .map_err(|()| ConfigError::ValidationFailed("record_kind too long"))?;
        self.record_kind = tag;
        Ok(())
    }
}
