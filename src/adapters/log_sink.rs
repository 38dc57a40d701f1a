//! Log-based report sink adapter.
//!
//! Implements [`ReportSink`] by writing each [`StateReport`] to the `log`
//! facade, either as a human-readable line or as a single JSON object
//! (one per line) for downstream collectors.

use core::fmt::Write as _;

use log::{info, warn};

use crate::app::events::StateReport;
use crate::app::ports::ReportSink;

/// Output format for [`LogReportSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `STATE | kind=heat | T=18.0 RH=40 | set=20.0 | heat=ON`
    #[default]
    Text,
    /// `{"kind":"heat","current_temp":18.0,...}`
    Json,
}

/// Adapter that logs every [`StateReport`].
#[derive(Debug, Default)]
pub struct LogReportSink {
    format: LogFormat,
}

impl LogReportSink {
    pub fn new(format: LogFormat) -> Self {
        Self { format }
    }
}

/// Render the text form of a report.
pub fn format_text(report: &StateReport) -> String {
    let mut line = format!(
        "STATE | kind={} | T={:.1} RH={:.0}",
        report.kind, report.current_temp, report.humidity
    );
    if let Some(t) = report.desired_temp {
        let _ = write!(line, " | set={:.1}", t);
    }
    if let Some(on) = report.heat_state {
        let _ = write!(line, " | heat={}", if on { "ON" } else { "OFF" });
    }
    line
}

impl ReportSink for LogReportSink {
    fn emit(&mut self, report: &StateReport) {
        match self.format {
            LogFormat::Text => info!("{}", format_text(report)),
            LogFormat::Json => match serde_json::to_string(report) {
                Ok(json) => info!("{}", json),
                Err(e) => warn!("report serialisation failed: {}", e),
            },
        }
    }
}
