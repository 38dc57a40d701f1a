//! State-change reporter.
//!
//! Decides, per tick, whether a [`StateReport`] is warranted and builds
//! its payload.  A report goes out if ANY of these hold:
//!
//! - the temperature differs from the one in the previous report
//!   (exact inequality, no debounce),
//! - the heater switched this tick,
//! - the setpoint changed since the previous report.
//!
//! The reporter owns its own "changed" flag and previous-temperature
//! snapshot, so the reporting policy can be tested without the heating
//! decision.

use crate::app::events::StateReport;
use crate::app::ports::Reading;
use crate::config::RECORD_KIND_CAP;

#[derive(Debug, Clone)]
pub struct StateChangeReporter {
    kind: heapless::String<RECORD_KIND_CAP>,
    previous_temp: Option<f32>,
    setpoint_changed: bool,
}

impl StateChangeReporter {
    /// The setpoint starts out "changed" so the first report carries it.
    pub fn new(kind: heapless::String<RECORD_KIND_CAP>) -> Self {
        Self {
            kind,
            previous_temp: None,
            setpoint_changed: true,
        }
    }

    /// Flag the setpoint for inclusion in the next report.
    /// Repeated calls collapse into one.
    pub fn mark_setpoint_changed(&mut self) {
        self.setpoint_changed = true;
    }

    pub fn setpoint_pending(&self) -> bool {
        self.setpoint_changed
    }

    pub fn previous_temp(&self) -> Option<f32> {
        self.previous_temp
    }

    /// Evaluate one tick.
    ///
    /// `heat_change` is `Some(new_state)` only on a tick where the heater
    /// switched.  On emit the setpoint flag is cleared and the temperature
    /// snapshot updated.
    pub fn evaluate(
        &mut self,
        reading: Reading,
        setpoint: f32,
        heat_change: Option<bool>,
    ) -> Option<StateReport> {
        #[allow(clippy::float_cmp)]
        let temp_changed = self.previous_temp != Some(reading.temperature);

        if !(temp_changed || heat_change.is_some() || self.setpoint_changed) {
            return None;
        }

        let report = StateReport {
            kind: self.kind.clone(),
            current_temp: reading.temperature,
            humidity: reading.humidity,
            desired_temp: self.setpoint_changed.then_some(setpoint),
            heat_state: heat_change,
        };

        self.previous_temp = Some(reading.temperature);
        self.setpoint_changed = false;
        Some(report)
    }
}
