//! Heating thermostat control library.
//!
//! Exposes the pure control logic (polling cadence, heater decision,
//! short-cycle suppression, state reporting) behind port traits, plus
//! host adapters for clocks, logging and configuration files.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;

pub use app::controller::ThermoController;
pub use app::events::StateReport;
pub use app::ports::Reading;
pub use config::ThermostatConfig;
pub use error::{Error, Result};
