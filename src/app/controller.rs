//! Control loop: the hexagonal core.
//!
//! [`ThermoController`] owns the setpoint, the last reading, the heater
//! belief, the suppression slot and the tick schedule.  All I/O flows
//! through the port traits it is generic over, making the whole loop
//! testable with mock adapters and a manual clock.
//!
//! ```text
//!   SensorPort ──▶ ┌──────────────────────────────┐ ──▶ ReportSink
//!                  │       ThermoController        │
//!   HeaterPort ◀── │ schedule · decide · suppress  │
//!                  └──────────────────────────────┘
//!                                ▲
//!                              Clock
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded and cooperative: an external loop calls [`update`]
//! at least as often as the check interval.  The controller never sleeps
//! or spawns; all methods take `&mut self`, so concurrent use needs an
//! external owner or lock.
//!
//! [`update`]: ThermoController::update

use core::time::Duration;

use log::{debug, info, warn};

use crate::config::ThermostatConfig;
use crate::control::heater_should_be_on;
use crate::control::reporter::StateChangeReporter;
use crate::control::suppression::{self, SuppressionWindow};
use crate::error::{Result, SensorError};

use super::commands::ControlCommand;
use super::events::StateReport;
use super::ports::{Clock, HeaterPort, Reading, ReportSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// ThermoController
// ───────────────────────────────────────────────────────────────

/// Heating thermostat control loop.
pub struct ThermoController<S, H, C, R> {
    sensor: S,
    heater: H,
    clock: C,
    sink: R,
    config: ThermostatConfig,
    desired_temp: f32,
    last_reading: Option<Reading>,
    /// Last value acknowledged by the heater.  `None` after an actuator
    /// fault, until the next successful `enable()`.
    heater_on: Option<bool>,
    suppression: Option<SuppressionWindow>,
    reporter: StateChangeReporter,
    next_tick_at: Duration,
    tick_count: u64,
}

impl<S, H, C, R> ThermoController<S, H, C, R>
where
    S: SensorPort,
    H: HeaterPort,
    C: Clock,
    R: ReportSink,
{
    /// Build a controller.  Fails with `Error::Config` on invalid
    /// configuration.  The first [`update`](Self::update) always ticks.
    pub fn new(sensor: S, heater: H, clock: C, sink: R, config: ThermostatConfig) -> Result<Self> {
        config.validate()?;
        let next_tick_at = clock.now();
        let reporter = StateChangeReporter::new(config.record_kind.clone());
        info!(
            "ThermoController: setpoint={} check={}s suppression={}s",
            config.initial_setpoint, config.check_interval_secs, config.suppression_secs
        );
        Ok(Self {
            sensor,
            heater,
            clock,
            sink,
            desired_temp: config.initial_setpoint,
            config,
            last_reading: None,
            heater_on: Some(false),
            suppression: None,
            reporter,
            next_tick_at,
            tick_count: 0,
        })
    }

    // ── Per-call orchestration ────────────────────────────────

    /// Run one sensing/decision cycle if the next tick is due.
    ///
    /// Returns the report emitted this call, if any.  Calls before the
    /// scheduled time are no-ops.  Sensor and heater faults are returned
    /// to the caller; the schedule still advances, so the next attempt
    /// happens one check interval later.
    pub fn update(&mut self) -> Result<Option<StateReport>> {
        let now = self.clock.now();
        if now < self.next_tick_at {
            return Ok(None);
        }
        self.next_tick_at = now.saturating_add(self.config.check_interval());
        self.tick_count += 1;
        self.manage_temperature(now)
    }

    // ── Setpoint ──────────────────────────────────────────────

    /// Replace the setpoint and force a cycle on the next `update()`.
    /// No range validation is done here.
    pub fn set_desired_temp(&mut self, temperature: f32) {
        self.desired_temp = temperature;
        self.next_tick_at = self.clock.now();
        self.reporter.mark_setpoint_changed();
        debug!("setpoint -> {}", temperature);
    }

    /// Shift the setpoint by `amount`.
    pub fn change_desired_temp(&mut self, amount: f32) {
        self.set_desired_temp(self.desired_temp + amount);
    }

    /// Apply an external command.
    pub fn handle_command(&mut self, cmd: ControlCommand) {
        match cmd {
            ControlCommand::SetDesiredTemp(t) => self.set_desired_temp(t),
            ControlCommand::ChangeDesiredTemp(delta) => self.change_desired_temp(delta),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn desired_temp(&self) -> f32 {
        self.desired_temp
    }

    /// Temperature from the last successful reading.
    pub fn current_temp(&self) -> Option<f32> {
        self.last_reading.map(|r| r.temperature)
    }

    pub fn current_humidity(&self) -> Option<f32> {
        self.last_reading.map(|r| r.humidity)
    }

    /// Believed heater state; `None` while unknown after a heater fault.
    pub fn heater_on(&self) -> Option<bool> {
        self.heater_on
    }

    /// Whether a short-cycle lockout is in force right now.
    pub fn is_suppressed(&self) -> bool {
        suppression::is_suppressed(self.suppression.as_ref(), self.clock.now())
    }

    pub fn suppression(&self) -> Option<&SuppressionWindow> {
        self.suppression.as_ref()
    }

    /// Time at which the next cycle is due.
    pub fn next_tick_at(&self) -> Duration {
        self.next_tick_at
    }

    /// Cycles run since construction (including faulted ones).
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &ThermostatConfig {
        &self.config
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn heater(&self) -> &H {
        &self.heater
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    // ── Internal ──────────────────────────────────────────────

    fn manage_temperature(&mut self, now: Duration) -> Result<Option<StateReport>> {
        if self.suppression.is_some_and(|w| w.has_expired(now)) {
            info!("suppression window expired");
            self.suppression = None;
        }

        let reading = self.read_sensor()?;
        self.last_reading = Some(reading);

        let deficit = self.desired_temp - reading.temperature;
        let suppressed = suppression::is_suppressed(self.suppression.as_ref(), now);
        let should_be_on = heater_should_be_on(deficit, suppressed);
        if let Some(window) = self.suppression.filter(|_| suppressed && deficit > 0.0) {
            debug!(
                "heat needed ({:.2}) but suppressed for {}s more",
                deficit,
                window.remaining(now).as_secs()
            );
        }

        let heat_change = if self.heater_on == Some(should_be_on) {
            None
        } else {
            self.switch_heater(should_be_on, now)?;
            Some(should_be_on)
        };

        let report = self
            .reporter
            .evaluate(reading, self.desired_temp, heat_change);
        if let Some(report) = &report {
            self.sink.emit(report);
        }
        Ok(report)
    }

    fn read_sensor(&mut self) -> Result<Reading> {
        let reading = self.sensor.read().inspect_err(|e| {
            warn!("sensor read failed: {}", e);
        })?;
        if !reading.temperature.is_finite() || !(0.0..=100.0).contains(&reading.humidity) {
            warn!(
                "sensor reading rejected: T={} RH={}",
                reading.temperature, reading.humidity
            );
            return Err(SensorError::OutOfRange.into());
        }
        Ok(reading)
    }

    /// Actuate the heater once and update the belief.
    ///
    /// An off command arms the lockout before the relay is touched, so a
    /// shutoff that fails to acknowledge still blocks re-heating.
    fn switch_heater(&mut self, on: bool, now: Duration) -> Result<()> {
        if !on && self.suppression.is_none() {
            let window = SuppressionWindow::start(now, self.config.suppression_duration());
            info!("suppression armed for {}s", self.config.suppression_secs);
            self.suppression = Some(window);
        }

        self.heater_on = None;
        self.heater.enable(on).inspect_err(|e| {
            warn!("heater enable({}) failed: {}; state unknown", on, e);
        })?;
        self.heater_on = Some(on);

        if on {
            self.suppression = None;
            info!("heater ON");
        } else {
            info!("heater OFF");
        }
        Ok(())
    }
}
