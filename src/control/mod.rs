//! Control primitives used by the
//! [`ThermoController`](crate::app::controller::ThermoController).

pub mod reporter;
pub mod suppression;

/// Heating decision rule.
///
/// Heat is needed only when the deficit is strictly positive; a deficit of
/// exactly zero means off.  An active suppression window forces off
/// regardless of the deficit.
pub fn heater_should_be_on(deficit: f32, suppressed: bool) -> bool {
    deficit > 0.0 && !suppressed
}
