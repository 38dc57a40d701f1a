//! Outbound state reports.
//!
//! The [`ThermoController`](super::controller::ThermoController) emits a
//! [`StateReport`] through the [`ReportSink`](super::ports::ReportSink)
//! port whenever the temperature, heater state or setpoint changed.
//! Adapters decide where it goes (serial log, JSON line, MQTT...).

use serde::{Deserialize, Serialize};

use crate::config::RECORD_KIND_CAP;

/// A structured state-change record.
///
/// Optional fields are present only on the tick where the corresponding
/// value changed; they are never re-sent on later unchanged ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateReport {
    /// Tag distinguishing heating records from others sharing the sink.
    pub kind: heapless::String<RECORD_KIND_CAP>,
    /// Temperature from the reading used for this tick's decision.
    pub current_temp: f32,
    /// Humidity from the same reading.
    pub humidity: f32,
    /// New setpoint, present only if it changed since the last report.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub desired_temp: Option<f32>,
    /// New heater state, present only if it changed this tick.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub heat_state: Option<bool>,
}
