//! Simulated room for host runs.
//!
//! A first-order thermal model: the room loses heat toward the outside
//! temperature and gains a fixed rate while the heater is on.  The sensor
//! and heater adapters share one [`SimRoom`] so heater commands show up in
//! later readings.

use core::time::Duration;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::app::ports::{Clock, HeaterPort, Reading, SensorPort};
use crate::error::{ActuatorError, SensorError};

#[derive(Debug, Clone)]
pub struct SimRoom {
    pub temperature: f32,
    pub humidity: f32,
    pub outside_temp: f32,
    /// Fraction of the inside/outside gap lost per second.
    pub loss_per_sec: f32,
    /// Degrees gained per second with the heater on.
    pub heat_per_sec: f32,
    pub heater_on: bool,
}

impl Default for SimRoom {
    fn default() -> Self {
        Self {
            temperature: 17.0,
            humidity: 45.0,
            outside_temp: 5.0,
            loss_per_sec: 0.002,
            heat_per_sec: 0.05,
            heater_on: false,
        }
    }
}

impl SimRoom {
    /// Advance the model by `dt_secs`.
    pub fn step(&mut self, dt_secs: f32) {
        let loss = (self.temperature - self.outside_temp) * self.loss_per_sec * dt_secs;
        let gain = if self.heater_on {
            self.heat_per_sec * dt_secs
        } else {
            0.0
        };
        self.temperature += gain - loss;
    }

    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }
}

/// Sensor reading the shared room, rounded to 0.1 like a real probe.
pub struct SimSensor(pub Rc<RefCell<SimRoom>>);

impl SensorPort for SimSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        let room = self.0.try_borrow().map_err(|_| SensorError::ReadFailed)?;
        Ok(Reading::new(
            room.humidity.round(),
            (room.temperature * 10.0).round() / 10.0,
        ))
    }
}

/// Heater relay driving the shared room.
pub struct SimHeater(pub Rc<RefCell<SimRoom>>);

impl HeaterPort for SimHeater {
    fn enable(&mut self, on: bool) -> Result<(), ActuatorError> {
        let mut room = self
            .0
            .try_borrow_mut()
            .map_err(|_| ActuatorError::WriteFailed)?;
        room.heater_on = on;
        Ok(())
    }
}

/// Manually advanced clock for accelerated simulation.
#[derive(Debug, Clone, Default)]
pub struct SimClock(Rc<Cell<Duration>>);

impl SimClock {
    pub fn advance(&self, by: Duration) {
        self.0.set(self.0.get().saturating_add(by));
    }
}

impl Clock for SimClock {
    fn now(&self) -> Duration {
        self.0.get()
    }
}
