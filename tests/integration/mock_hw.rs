//! Mock adapters for integration tests.
//!
//! Every mock is a cheap handle over shared state, so a test keeps one
//! handle while the controller owns another and can script readings,
//! advance time and inspect the full actuator/report history.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use thermocontrol::app::events::StateReport;
use thermocontrol::app::ports::{Clock, HeaterPort, Reading, ReportSink, SensorPort};
use thermocontrol::config::ThermostatConfig;
use thermocontrol::error::{ActuatorError, SensorError};
use thermocontrol::ThermoController;

// ── ManualClock ───────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<Duration>>);

impl ManualClock {
    pub fn advance_secs(&self, secs: u64) {
        self.0.set(self.0.get() + Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}

// ── MockSensor ────────────────────────────────────────────────

/// Returns the current scripted temperature on every read, or the next
/// queued fault if one is pending.
#[derive(Clone)]
pub struct MockSensor {
    temperature: Rc<Cell<f32>>,
    humidity: Rc<Cell<f32>>,
    faults: Rc<RefCell<VecDeque<SensorError>>>,
    reads: Rc<Cell<u32>>,
}

#[allow(dead_code)]
impl MockSensor {
    pub fn new(temperature: f32) -> Self {
        Self {
            temperature: Rc::new(Cell::new(temperature)),
            humidity: Rc::new(Cell::new(40.0)),
            faults: Rc::default(),
            reads: Rc::default(),
        }
    }

    pub fn set_temp(&self, t: f32) {
        self.temperature.set(t);
    }

    pub fn set_humidity(&self, h: f32) {
        self.humidity.set(h);
    }

    pub fn fail_next(&self, e: SensorError) {
        self.faults.borrow_mut().push_back(e);
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl SensorPort for MockSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        self.reads.set(self.reads.get() + 1);
        if let Some(e) = self.faults.borrow_mut().pop_front() {
            return Err(e);
        }
        Ok(Reading::new(self.humidity.get(), self.temperature.get()))
    }
}

// ── MockHeater ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockHeater {
    pub calls: Rc<RefCell<Vec<bool>>>,
    fail_next: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl MockHeater {
    pub fn calls(&self) -> Vec<bool> {
        self.calls.borrow().clone()
    }

    pub fn is_on(&self) -> bool {
        self.calls.borrow().last().copied().unwrap_or(false)
    }

    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }
}

impl HeaterPort for MockHeater {
    fn enable(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.calls.borrow_mut().push(on);
        if self.fail_next.replace(false) {
            return Err(ActuatorError::NotAcknowledged);
        }
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingSink {
    pub reports: Rc<RefCell<Vec<StateReport>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    pub fn last(&self) -> Option<StateReport> {
        self.reports.borrow().last().cloned()
    }
}

impl ReportSink for RecordingSink {
    fn emit(&mut self, report: &StateReport) {
        self.reports.borrow_mut().push(report.clone());
    }
}

// ── Rig ───────────────────────────────────────────────────────

pub type MockController = ThermoController<MockSensor, MockHeater, ManualClock, RecordingSink>;

pub struct Rig {
    pub ctl: MockController,
    pub clock: ManualClock,
    pub sensor: MockSensor,
    pub heater: MockHeater,
    pub sink: RecordingSink,
}

/// Controller with check interval 5 s and suppression 60 s.
pub fn rig(setpoint: f32, temperature: f32) -> Rig {
    let config = ThermostatConfig {
        check_interval_secs: 5,
        suppression_secs: 60,
        initial_setpoint: setpoint,
        ..ThermostatConfig::default()
    };
    rig_with(config, temperature)
}

pub fn rig_with(config: ThermostatConfig, temperature: f32) -> Rig {
    let clock = ManualClock::default();
    let sensor = MockSensor::new(temperature);
    let heater = MockHeater::default();
    let sink = RecordingSink::default();
    let ctl = ThermoController::new(
        sensor.clone(),
        heater.clone(),
        clock.clone(),
        sink.clone(),
        config,
    )
    .expect("valid config");
    Rig {
        ctl,
        clock,
        sensor,
        heater,
        sink,
    }
}
