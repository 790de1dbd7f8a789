//! Display sinks: where the rendered screen goes.
//!
//! [`SimulatorSink`] draws into an `embedded-graphics-simulator` framebuffer
//! with the same drawing code a panel would use. With the `window` feature the
//! frame is shown in an SDL window; otherwise each new frame is written to a
//! PNG file, which makes the monitor usable on a headless host.

use std::path::PathBuf;
use std::time::Duration;
#[cfg(not(feature = "window"))]
use std::thread;

use aqi_common::AqiScreen;
use aqi_common::colors::DEFAULT_BG;
use aqi_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use aqi_common::widgets::draw_aqi_screen;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
#[cfg(feature = "window")]
use embedded_graphics_simulator::{SimulatorEvent, Window};
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay};
use thiserror::Error;

#[cfg(feature = "window")]
use crate::config::{FRAME_TIME, WINDOW_TITLE};
use crate::config::DISPLAY_SCALE;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write frame to {path}: {reason}")]
    Frame { path: PathBuf, reason: String },
}

/// Accepts screen updates and owns the passage of time between polls.
pub trait DisplaySink {
    /// Draw `screen` if it changed since the last call.
    fn show(
        &mut self,
        screen: &mut AqiScreen,
    ) -> Result<(), SinkError>;

    /// Wait for `duration`. Returns `false` if the user asked to quit.
    fn idle(
        &mut self,
        duration: Duration,
    ) -> bool;
}

/// Simulator-backed display.
pub struct SimulatorSink {
    display: SimulatorDisplay<Rgb565>,
    #[cfg_attr(feature = "window", allow(dead_code))]
    output_settings: OutputSettings,
    #[cfg(feature = "window")]
    window: Window,
    #[cfg_attr(feature = "window", allow(dead_code))]
    frame_path: PathBuf,
    frames: u32,
}

impl SimulatorSink {
    pub fn new(frame_path: PathBuf) -> Self {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let output_settings = OutputSettingsBuilder::new().scale(DISPLAY_SCALE).build();
        display.clear(DEFAULT_BG).ok();

        #[cfg(feature = "window")]
        let window = {
            let mut window = Window::new(WINDOW_TITLE, &output_settings);
            window.update(&display);
            window
        };

        Self {
            display,
            output_settings,
            #[cfg(feature = "window")]
            window,
            frame_path,
            frames: 0,
        }
    }

    /// Number of frames presented so far.
    pub const fn frames(&self) -> u32 { self.frames }

    #[cfg(feature = "window")]
    fn present(&mut self) -> Result<(), SinkError> {
        self.window.update(&self.display);
        Ok(())
    }

    #[cfg(not(feature = "window"))]
    fn present(&mut self) -> Result<(), SinkError> {
        self.display
            .to_rgb_output_image(&self.output_settings)
            .save_png(&self.frame_path)
            .map_err(|e| SinkError::Frame {
                path: self.frame_path.clone(),
                reason: e.to_string(),
            })
    }
}

impl DisplaySink for SimulatorSink {
    fn show(
        &mut self,
        screen: &mut AqiScreen,
    ) -> Result<(), SinkError> {
        if !screen.is_dirty() {
            return Ok(());
        }
        let Ok(()) = draw_aqi_screen(&mut self.display, screen);
        // A failed write leaves the screen dirty so the next call retries it.
        self.present()?;
        self.frames = self.frames.wrapping_add(1);
        screen.mark_drawn();
        Ok(())
    }

    #[cfg(feature = "window")]
    fn idle(
        &mut self,
        duration: Duration,
    ) -> bool {
        let deadline = std::time::Instant::now() + duration;
        while std::time::Instant::now() < deadline {
            self.window.update(&self.display);
            if self.window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
                return false;
            }
            std::thread::sleep(FRAME_TIME);
        }
        true
    }

    #[cfg(not(feature = "window"))]
    fn idle(
        &mut self,
        duration: Duration,
    ) -> bool {
        thread::sleep(duration);
        true
    }
}

#[cfg(all(test, not(feature = "window")))]
mod tests {
    use aqi_common::AqiCategory;

    use super::*;

    fn temp_frame_path(name: &str) -> PathBuf { std::env::temp_dir().join(format!("aqi-monitor-{}-{name}.png", std::process::id())) }

    #[test]
    fn test_show_writes_png_once_per_change() {
        let path = temp_frame_path("show");
        let _ = std::fs::remove_file(&path);

        let mut sink = SimulatorSink::new(path.clone());
        let mut screen = AqiScreen::new("Test");
        screen.apply_reading(42, Some(AqiCategory::Good));

        sink.show(&mut screen).unwrap();
        assert!(path.exists(), "frame written to {}", path.display());
        assert_eq!(sink.frames(), 1);

        sink.show(&mut screen).unwrap();
        assert_eq!(sink.frames(), 1, "unchanged screen is not redrawn");

        screen.apply_reading(160, Some(AqiCategory::Unhealthy));
        sink.show(&mut screen).unwrap();
        assert_eq!(sink.frames(), 2);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_show_reports_unwritable_path() {
        let path = std::env::temp_dir().join("aqi-monitor-missing-dir").join("nested").join("frame.png");
        let mut sink = SimulatorSink::new(path);
        let mut screen = AqiScreen::new("Test");
        let err = sink.show(&mut screen).unwrap_err();
        assert!(err.to_string().contains("failed to write frame"), "{err}");
    }

    #[test]
    fn test_failed_write_is_retried() {
        let dir = std::env::temp_dir().join(format!("aqi-monitor-{}-retry", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("frame.png");

        let mut sink = SimulatorSink::new(path.clone());
        let mut screen = AqiScreen::new("Test");
        screen.apply_reading(42, Some(AqiCategory::Good));

        assert!(sink.show(&mut screen).is_err());
        assert!(screen.is_dirty(), "screen stays dirty after a failed write");
        assert_eq!(sink.frames(), 0);

        std::fs::create_dir_all(&dir).unwrap();
        screen.apply_reading(42, Some(AqiCategory::Good));
        sink.show(&mut screen).unwrap();
        assert!(path.exists(), "same reading written once the directory exists");
        assert!(!screen.is_dirty());
        assert_eq!(sink.frames(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
