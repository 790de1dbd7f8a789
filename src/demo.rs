//! Offline reading source for development (`demo` feature).
//!
//! Sweeps slowly across the PM2.5 scale so every category color can be checked
//! on the display without a sensor or network access.

use crate::source::{FetchError, ReadingSource};

/// Lowest demo concentration.
const DEMO_MIN: f64 = 0.0;

/// Highest demo concentration (top of the last paired band).
const DEMO_MAX: f64 = 350.0;

/// Phase advance per reading.
const DEMO_FREQ: f64 = 0.3;

/// Offline sine sweep between [`DEMO_MIN`] and [`DEMO_MAX`].
#[derive(Debug, Default)]
pub struct DemoSource {
    t: f64,
}

impl DemoSource {
    pub fn new() -> Self { Self::default() }
}

fn fake_signal(
    t: f64,
    min: f64,
    max: f64,
    freq: f64,
) -> f64 {
    // Starts at the bottom of the range.
    let normalized = (t * freq - std::f64::consts::FRAC_PI_2).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

impl ReadingSource for DemoSource {
    fn fetch(&mut self) -> Result<f64, FetchError> {
        let value = fake_signal(self.t, DEMO_MIN, DEMO_MAX, DEMO_FREQ);
        self.t += 1.0;
        Ok(value)
    }
}
