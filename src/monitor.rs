//! The poll loop: fetch -> convert -> classify -> render -> sleep.
//!
//! # Delays
//!
//! | Outcome | Next attempt |
//! |---------|--------------|
//! | Reading displayed | poll interval |
//! | Transient fetch failure | retry delay |
//! | Permanent fetch failure | poll interval |
//! | Conversion failure | poll interval |
//!
//! Failures never end the loop. They are logged, written to the status line,
//! and the previous AQI and background stay on screen.

use std::time::Duration;

use aqi_common::{AqiCategory, AqiScreen, classify, convert_to_epa_aqi};
use log::{debug, error, info, warn};

use crate::config::MonitorConfig;
use crate::sink::DisplaySink;
use crate::source::ReadingSource;

/// What happened during one cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CycleOutcome {
    /// A reading was converted and shown.
    Displayed {
        pm25: f64,
        aqi: i32,
        /// `Some` for every AQI the converter produces (0..=500). `None` is
        /// handled anyway and keeps the previous background.
        category: Option<AqiCategory>,
    },
    /// The source failed.
    FetchFailed { transient: bool },
    /// The reading had no AQI.
    ConversionFailed { pm25: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    /// Delay before the next cycle.
    pub next_poll: Duration,
}

pub struct PollLoop<S, D> {
    source: S,
    sink: D,
    screen: AqiScreen,
    poll_interval: Duration,
    retry_delay: Duration,
}

impl<S, D> PollLoop<S, D>
where
    S: ReadingSource,
    D: DisplaySink,
{
    pub fn new(
        source: S,
        sink: D,
        config: &MonitorConfig,
    ) -> Self {
        Self {
            source,
            sink,
            screen: AqiScreen::new(&config.sensor_name),
            poll_interval: config.poll_interval,
            retry_delay: config.retry_delay,
        }
    }

    pub const fn screen(&self) -> &AqiScreen { &self.screen }

    pub const fn sink(&self) -> &D { &self.sink }

    /// Run one fetch/convert/render cycle.
    pub fn run_cycle(&mut self) -> CycleReport {
        let report = match self.source.fetch() {
            Ok(pm25) => self.handle_reading(pm25),
            Err(e) if e.is_transient() => {
                warn!("Fetch failed, retrying in {}s - {e}", self.retry_delay.as_secs());
                self.screen.set_status("Fetch failed, retrying");
                CycleReport {
                    outcome: CycleOutcome::FetchFailed { transient: true },
                    next_poll: self.retry_delay,
                }
            }
            Err(e) => {
                error!("Fetch failed: {e}");
                self.screen.set_status("Sensor data unavailable");
                CycleReport {
                    outcome: CycleOutcome::FetchFailed { transient: false },
                    next_poll: self.poll_interval,
                }
            }
        };

        if let Err(e) = self.sink.show(&mut self.screen) {
            warn!("Failed to render: {e}");
        }

        report
    }

    fn handle_reading(
        &mut self,
        pm25: f64,
    ) -> CycleReport {
        let outcome = match convert_to_epa_aqi(pm25) {
            Ok(aqi) => {
                let category = classify(aqi);
                match category {
                    Some(c) => info!("PM2.5 {pm25:.1} -> AQI {aqi} ({})", c.label()),
                    None => warn!("AQI {aqi} has no category, keeping current background"),
                }
                self.screen.apply_reading(aqi, category);
                self.screen.clear_status();
                CycleOutcome::Displayed { pm25, aqi, category }
            }
            Err(e) => {
                error!("Conversion failed: {e}");
                self.screen.set_status(&format!("No AQI for PM2.5 {pm25:.1}"));
                CycleOutcome::ConversionFailed { pm25 }
            }
        };

        CycleReport {
            outcome,
            next_poll: self.poll_interval,
        }
    }

    /// Poll until `max_cycles` cycles have run or the display is closed.
    ///
    /// `None` polls forever.
    pub fn run(
        &mut self,
        max_cycles: Option<u64>,
    ) {
        let mut cycles = 0u64;
        loop {
            let report = self.run_cycle();
            cycles += 1;

            if max_cycles.is_some_and(|max| cycles >= max) {
                debug!("Stopping after {cycles} cycles");
                break;
            }

            debug!("{:?}, next poll in {}s", report.outcome, report.next_poll.as_secs());
            if !self.sink.idle(report.next_poll) {
                info!("Display closed");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use aqi_common::colors::{DEFAULT_BG, GOOD, HAZARDOUS, MODERATE};
    use embedded_graphics::pixelcolor::Rgb565;

    use super::*;
    use crate::sink::SinkError;
    use crate::source::FetchError;

    struct ScriptedSource {
        script: VecDeque<Result<f64, FetchError>>,
    }

    impl ScriptedSource {
        fn new(script: Vec<Result<f64, FetchError>>) -> Self { Self { script: script.into() } }
    }

    impl ReadingSource for ScriptedSource {
        fn fetch(&mut self) -> Result<f64, FetchError> {
            self.script.pop_front().unwrap_or_else(|| Err(FetchError::Transport("script exhausted".into())))
        }
    }

    /// Records what would have been drawn and how long the loop slept.
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(String, Rgb565, String)>,
        idles: Vec<Duration>,
        quit_after: Option<usize>,
    }

    impl DisplaySink for RecordingSink {
        fn show(
            &mut self,
            screen: &mut AqiScreen,
        ) -> Result<(), SinkError> {
            if screen.is_dirty() {
                self.frames
                    .push((screen.value().to_owned(), screen.background(), screen.status().to_owned()));
                screen.mark_drawn();
            }
            Ok(())
        }

        fn idle(
            &mut self,
            duration: Duration,
        ) -> bool {
            self.idles.push(duration);
            self.quit_after.is_none_or(|n| self.idles.len() < n)
        }
    }

    fn poll_loop(script: Vec<Result<f64, FetchError>>) -> PollLoop<ScriptedSource, RecordingSink> {
        PollLoop::new(ScriptedSource::new(script), RecordingSink::default(), &MonitorConfig::default())
    }

    #[test]
    fn test_reading_is_displayed() {
        let mut lp = poll_loop(vec![Ok(12.0)]);
        let report = lp.run_cycle();

        assert_eq!(
            report.outcome,
            CycleOutcome::Displayed {
                pm25: 12.0,
                aqi: 50,
                category: Some(AqiCategory::Good)
            }
        );
        assert_eq!(report.next_poll, Duration::from_secs(600));
        assert_eq!(lp.screen().value(), "50");
        assert_eq!(lp.screen().background(), GOOD);
        assert_eq!(lp.sink().frames.len(), 1);
    }

    #[test]
    fn test_transient_failure_retries_quickly() {
        let mut lp = poll_loop(vec![Err(FetchError::Status(503)), Ok(35.4)]);

        let report = lp.run_cycle();
        assert_eq!(report.outcome, CycleOutcome::FetchFailed { transient: true });
        assert_eq!(report.next_poll, Duration::from_secs(5));
        assert_eq!(lp.screen().background(), DEFAULT_BG);
        assert_eq!(lp.screen().status(), "Fetch failed, retrying");

        let report = lp.run_cycle();
        assert!(matches!(report.outcome, CycleOutcome::Displayed { aqi: 100, .. }));
        assert_eq!(lp.screen().background(), MODERATE);
        assert_eq!(lp.screen().status(), "", "status cleared after success");
    }

    #[test]
    fn test_permanent_failure_waits_full_interval() {
        let mut lp = poll_loop(vec![Err(FetchError::MissingField("$.data[0][1]".into()))]);
        let report = lp.run_cycle();
        assert_eq!(report.outcome, CycleOutcome::FetchFailed { transient: false });
        assert_eq!(report.next_poll, Duration::from_secs(600));
    }

    #[test]
    fn test_conversion_failure_keeps_previous_reading() {
        let mut lp = poll_loop(vec![Ok(300.0), Ok(500.4)]);
        lp.run_cycle();
        assert_eq!(lp.screen().background(), HAZARDOUS);
        let shown = lp.screen().value().to_owned();

        let report = lp.run_cycle();
        assert_eq!(report.outcome, CycleOutcome::ConversionFailed { pm25: 500.4 });
        assert_eq!(report.next_poll, Duration::from_secs(600));
        assert_eq!(lp.screen().value(), shown, "value is sticky");
        assert_eq!(lp.screen().background(), HAZARDOUS, "background is sticky");
        assert_eq!(lp.screen().status(), "No AQI for PM2.5 500.4");
    }

    #[test]
    fn test_run_sleeps_between_cycles() {
        let mut lp = poll_loop(vec![Ok(5.0), Err(FetchError::Transport("reset".into())), Ok(60.0)]);
        lp.run(Some(3));

        assert_eq!(
            lp.sink().idles,
            vec![Duration::from_secs(600), Duration::from_secs(5)],
            "no sleep after the last cycle"
        );
        let values: Vec<&str> = lp.sink().frames.iter().map(|(v, _, _)| v.as_str()).collect();
        assert_eq!(values, vec!["20", "20", "153"]);
    }

    #[test]
    fn test_run_stops_when_display_closes() {
        let sink = RecordingSink {
            quit_after: Some(2),
            ..RecordingSink::default()
        };
        let mut lp = PollLoop::new(
            ScriptedSource::new(vec![Ok(1.0), Ok(2.0), Ok(3.0), Ok(4.0)]),
            sink,
            &MonitorConfig::default(),
        );
        lp.run(None);
        assert_eq!(lp.sink().idles.len(), 2);
    }
}
