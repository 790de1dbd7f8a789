//! Air-quality monitor.
//!
//! Polls a PurpleAir sensor every ten minutes, converts the raw PM2.5
//! concentration to the US EPA Air Quality Index and shows it on a 320x240
//! display whose background follows the AQI category color.
//!
//! # Running
//!
//! ```bash
//! # Headless: every new frame is written to aqi-frame.png
//! cargo run --release
//!
//! # Desktop window (needs SDL2)
//! cargo run --release --features window
//!
//! # Offline demo signal, single frame (development only)
//! AQI_SOURCE=demo cargo run --features demo -- --once
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`). See [`config`] for the
//! other environment overrides.

mod config;
#[cfg(feature = "demo")]
mod demo;
mod monitor;
mod sink;
mod source;

use anyhow::Context;
use log::info;

use crate::config::{MonitorConfig, SourceKind};
#[cfg(feature = "demo")]
use crate::demo::DemoSource;
use crate::monitor::PollLoop;
use crate::sink::SimulatorSink;
use crate::source::{PurpleAirSource, ReadingSource};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MonitorConfig::from_env().context("invalid configuration")?;
    let once = std::env::args().skip(1).any(|arg| arg == "--once");

    info!("AQI monitor for {} (sensor {})", config.sensor_name, config.sensor_id);

    match config.source {
        SourceKind::PurpleAir => {
            let source = PurpleAirSource::new(config.data_url());
            info!("Polling {} every {}s", source.url(), config.poll_interval.as_secs());
            run(source, &config, once);
        }
        #[cfg(feature = "demo")]
        SourceKind::Demo => {
            info!("Using the offline demo signal");
            run(DemoSource::new(), &config, once);
        }
    }

    Ok(())
}

fn run<S: ReadingSource>(
    source: S,
    config: &MonitorConfig,
    once: bool,
) {
    let sink = SimulatorSink::new(config.frame_path.clone());
    #[cfg(not(feature = "window"))]
    info!("Writing frames to {}", config.frame_path.display());

    let mut poll_loop = PollLoop::new(source, sink, config);
    poll_loop.run(once.then_some(1));

    info!(
        "Stopped after {} frames, last AQI {}",
        poll_loop.sink().frames(),
        poll_loop.screen().value()
    );
}
