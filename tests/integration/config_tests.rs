//! Configuration wiring: file → validation → controller construction.

use thermocontrol::adapters::config_file::JsonConfigFile;
use thermocontrol::app::ports::{ConfigError, ConfigPort};
use thermocontrol::config::ThermostatConfig;
use thermocontrol::error::Error;
use thermocontrol::ThermoController;

use crate::mock_hw::{rig_with, ManualClock, MockHeater, MockSensor, RecordingSink};

#[test]
fn non_positive_suppression_fails_construction() {
    let config = ThermostatConfig {
        suppression_secs: 0,
        ..ThermostatConfig::default()
    };
    let result = ThermoController::new(
        MockSensor::new(18.0),
        MockHeater::default(),
        ManualClock::default(),
        RecordingSink::default(),
        config,
    );
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ValidationFailed(_)))
    ));
}

#[test]
fn loaded_config_drives_interval_and_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thermo.json");
    std::fs::write(
        &path,
        r#"{"check_interval_secs": 30, "suppression_secs": 90, "record_kind": "boiler", "initial_setpoint": 19.0}"#,
    )
    .unwrap();
    let config = JsonConfigFile::new(&path).load().unwrap();

    let mut r = rig_with(config, 18.0);
    let report = r.ctl.update().unwrap().unwrap();
    assert_eq!(report.kind.as_str(), "boiler");
    assert_eq!(report.desired_temp, Some(19.0));

    r.clock.advance_secs(29);
    assert!(r.ctl.update().unwrap().is_none());
    r.clock.advance_secs(1);
    r.sensor.set_temp(20.0);
    r.ctl.update().unwrap();
    assert_eq!(r.ctl.suppression().unwrap().ends_at().as_secs(), 120);
}
