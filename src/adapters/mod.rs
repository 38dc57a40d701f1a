//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements             | Connects to               |
//! |---------------|------------------------|---------------------------|
//! | `config_file` | ConfigPort             | JSON file on disk         |
//! | `log_sink`    | ReportSink             | `log` facade (text/JSON)  |
//! | `time`        | Clock                  | `std::time::Instant`      |
//! | `sim`         | SensorPort, HeaterPort | Simulated room model      |

pub mod config_file;
pub mod log_sink;
#[cfg(feature = "sim")]
pub mod sim;
pub mod time;
