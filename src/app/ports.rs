//! Port traits: the hexagonal boundary between the control loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ThermoController (domain)
//! ```
//!
//! Driven adapters (sensor driver, heater relay, clock, log sink, config
//! storage) implement these traits.  The
//! [`ThermoController`](super::controller::ThermoController) owns them via
//! generics, so the decision logic never touches hardware directly.

use core::time::Duration;

use crate::config::ThermostatConfig;
use crate::error::{ActuatorError, SensorError};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// One humidity/temperature sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Relative humidity (%).
    pub humidity: f32,
    /// Temperature in the sensor's unit, used consistently with the setpoint.
    pub temperature: f32,
}

impl Reading {
    pub fn new(humidity: f32, temperature: f32) -> Self {
        Self {
            humidity,
            temperature,
        }
    }
}

/// Read-side port: the controller calls this at most once per tick.
pub trait SensorPort {
    /// Take a fresh synchronous reading.
    fn read(&mut self) -> Result<Reading, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Heater port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: called exactly once per heater transition.
pub trait HeaterPort {
    /// Switch the heating element on or off.
    fn enable(&mut self, on: bool) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic time source.
///
/// Returns the time elapsed since an arbitrary fixed origin.  Must never
/// go backward; wall-clock adjustments must not leak through.
pub trait Clock {
    fn now(&self) -> Duration;
}

// ───────────────────────────────────────────────────────────────
// Report sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits [`StateReport`](super::events::StateReport)s
/// through this port.  Delivery is fire-and-forget.
pub trait ReportSink {
    fn emit(&mut self, report: &super::events::StateReport);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists thermostat configuration.
///
/// Implementations MUST validate before returning or persisting.
/// Invalid values are rejected with [`ConfigError::ValidationFailed`],
/// never clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<ThermostatConfig, ConfigError>;

    fn save(&self, config: &ThermostatConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from configuration validation and [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No stored config exists.
    NotFound,
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
