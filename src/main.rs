//! ThermoControl: host simulation entry point.
//!
//! Drives a [`ThermoController`] against a simulated room, either in
//! accelerated simulated time (default) or in real time.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  SimSensor   SimHeater   LogReportSink   JsonConfigFile  │
//! │  SimClock / MonotonicClock                               │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ───────────────    │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │         ThermoController (pure logic)              │  │
//! │  │  schedule · decide · suppress · report             │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use tracing_subscriber::filter::LevelFilter;

use thermocontrol::ThermoController;
use thermocontrol::adapters::config_file::JsonConfigFile;
use thermocontrol::adapters::log_sink::{LogFormat, LogReportSink};
use thermocontrol::adapters::sim::{SimClock, SimHeater, SimRoom, SimSensor};
use thermocontrol::adapters::time::MonotonicClock;
use thermocontrol::app::ports::{Clock, ReportSink};
use thermocontrol::config::ThermostatConfig;

#[derive(Debug, Parser)]
#[command(name = "thermocontrol", version, about = "Heating thermostat simulation")]
struct Args {
    /// JSON configuration file (defaults are used if absent)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the initial setpoint
    #[arg(short, long)]
    setpoint: Option<f32>,

    /// Starting room temperature
    #[arg(long, default_value_t = 17.0)]
    room_temp: f32,

    /// Outside temperature the room leaks toward
    #[arg(long, default_value_t = 5.0)]
    outside_temp: f32,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 3600)]
    duration_secs: u64,

    /// Simulated seconds per real second (ignored with --realtime)
    #[arg(long, default_value_t = 600)]
    speedup: u32,

    /// Use the monotonic wall clock instead of simulated time
    #[arg(long)]
    realtime: bool,

    /// Emit state reports as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        })
        .init();

    info!("ThermoControl v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Load config (or defaults) ──────────────────────────
    let mut config = match &args.config {
        Some(path) => JsonConfigFile::new(path)
            .load_or_default()
            .with_context(|| format!("loading {}", path.display()))?,
        None => ThermostatConfig::default(),
    };
    if let Some(setpoint) = args.setpoint {
        config.initial_setpoint = setpoint;
    }

    // ── 2. Build adapters ─────────────────────────────────────
    let room = SimRoom {
        temperature: args.room_temp,
        outside_temp: args.outside_temp,
        ..SimRoom::default()
    }
    .shared();
    let sink = LogReportSink::new(if args.json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    // ── 3. Run the cooperative loop ───────────────────────────
    if args.realtime {
        let clock = MonotonicClock::new();
        let ctl = ThermoController::new(
            SimSensor(room.clone()),
            SimHeater(room.clone()),
            clock,
            sink,
            config,
        )?;
        run(ctl, &room, args.duration_secs, |step| {
            std::thread::sleep(step);
        })
    } else {
        let clock = SimClock::default();
        let ctl = ThermoController::new(
            SimSensor(room.clone()),
            SimHeater(room.clone()),
            clock.clone(),
            sink,
            config,
        )?;
        let pause = Duration::from_secs(1) / args.speedup.max(1);
        run(ctl, &room, args.duration_secs, |step| {
            clock.advance(step);
            std::thread::sleep(pause);
        })
    }
}

/// Step the room and poll the controller once per second of model time.
fn run<C: Clock, R: ReportSink>(
    mut ctl: ThermoController<SimSensor, SimHeater, C, R>,
    room: &Rc<RefCell<SimRoom>>,
    duration_secs: u64,
    mut advance: impl FnMut(Duration),
) -> Result<()> {
    let step = Duration::from_secs(1);
    for _ in 0..duration_secs {
        advance(step);
        room.borrow_mut().step(step.as_secs_f32());
        if let Err(e) = ctl.update() {
            // Faults are retried on the next scheduled tick.
            warn!("tick failed: {}", e);
        }
    }
    info!(
        "done: {} ticks, T={:?} set={} heater={:?}",
        ctl.tick_count(),
        ctl.current_temp(),
        ctl.desired_temp(),
        ctl.heater_on()
    );
    Ok(())
}
