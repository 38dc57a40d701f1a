//! Application core: pure control logic, zero I/O.
//!
//! This module contains the heating rules: polling cadence, the heater
//! on/off decision and the wiring of short-cycle suppression and state
//! reporting.  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod controller;
pub mod events;
pub mod ports;
