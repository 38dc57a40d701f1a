//! Inbound commands to the control loop.
//!
//! These represent setpoint changes requested by the outside world (UI,
//! remote, schedule) that the
//! [`ThermoController`](super::controller::ThermoController) applies via
//! [`handle_command`](super::controller::ThermoController::handle_command).

/// Commands that external adapters can send into the control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    /// Replace the setpoint.
    SetDesiredTemp(f32),

    /// Adjust the setpoint by a signed delta.
    ChangeDesiredTemp(f32),
}
