//! Monitor configuration.
//!
//! Compile-time defaults for the sensor, data source and timing, plus
//! [`MonitorConfig`] which applies the few environment overrides the monitor
//! accepts:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `AQI_SENSOR_ID` | `19671` | PurpleAir sensor to poll |
//! | `AQI_SENSOR_NAME` | `Civic Center(ish)` | Name shown in the caption |
//! | `AQI_SOURCE` | `purpleair` | `purpleair`, or `demo` with the `demo` feature |
//! | `AQI_FRAME_PATH` | `aqi-frame.png` | PNG written per frame without the `window` feature |

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// =============================================================================
// Sensor Configuration
// =============================================================================

/// PurpleAir sensor ID (the `select=` number on the PurpleAir map).
pub const SENSOR_ID: &str = "19671";

/// Sensor name for the caption.
pub const SENSOR_NAME: &str = "Civic Center(ish)";

/// PurpleAir JSON endpoint; the sensor ID is appended.
pub const DATA_SOURCE: &str = "https://www.purpleair.com/data.json?show=";

/// Location of the raw PM2.5 value inside the response: `data[0][1]`.
pub const DATA_LOCATION: &[JsonStep] = &[JsonStep::Key("data"), JsonStep::Index(0), JsonStep::Index(1)];

/// One step of a JSON path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonStep {
    /// Object member.
    Key(&'static str),
    /// Array element.
    Index(usize),
}

// =============================================================================
// Timing Configuration
// =============================================================================

/// Delay between successful polls (10 minutes).
pub const POLL_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Delay before retrying a transient fetch failure.
pub const RETRY_DELAY: Duration = Duration::from_secs(5);

/// HTTP request timeout.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Event-pump step while idling with a window open (~50 FPS).
#[cfg(feature = "window")]
pub const FRAME_TIME: Duration = Duration::from_millis(20);

const _: () = assert!(RETRY_DELAY.as_secs() < POLL_INTERVAL.as_secs());
const _: () = assert!(HTTP_TIMEOUT.as_secs() < POLL_INTERVAL.as_secs());

// =============================================================================
// Display Configuration
// =============================================================================

/// Window title for the simulator display.
#[cfg(feature = "window")]
pub const WINDOW_TITLE: &str = "AQI Monitor";

/// Pixel scale of the simulator window / PNG frame.
pub const DISPLAY_SCALE: u32 = 2;

/// Default PNG frame output path.
pub const FRAME_PATH: &str = "aqi-frame.png";

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Where readings come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// PurpleAir JSON endpoint.
    #[default]
    PurpleAir,
    /// Offline sine-wave signal.
    #[cfg(feature = "demo")]
    Demo,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported AQI_SOURCE `{0}`")]
    UnknownSource(String),
    #[error("AQI_SENSOR_ID must be numeric, got `{0}`")]
    InvalidSensorId(String),
}

/// Settings for one monitor run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorConfig {
    pub sensor_id: String,
    pub sensor_name: String,
    pub source: SourceKind,
    pub frame_path: PathBuf,
    pub poll_interval: Duration,
    pub retry_delay: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sensor_id: SENSOR_ID.to_owned(),
            sensor_name: SENSOR_NAME.to_owned(),
            source: SourceKind::default(),
            frame_path: PathBuf::from(FRAME_PATH),
            poll_interval: POLL_INTERVAL,
            retry_delay: RETRY_DELAY,
        }
    }
}

impl MonitorConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Defaults with overrides from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(id) = lookup("AQI_SENSOR_ID") {
            let id = id.trim();
            if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::InvalidSensorId(id.to_owned()));
            }
            config.sensor_id = id.to_owned();
        }

        if let Some(name) = lookup("AQI_SENSOR_NAME") {
            config.sensor_name = name;
        }

        if let Some(source) = lookup("AQI_SOURCE") {
            config.source = match source.trim().to_ascii_lowercase().as_str() {
                "purpleair" => SourceKind::PurpleAir,
                #[cfg(feature = "demo")]
                "demo" => SourceKind::Demo,
                _ => return Err(ConfigError::UnknownSource(source)),
            };
        }

        if let Some(path) = lookup("AQI_FRAME_PATH") {
            config.frame_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Full PurpleAir URL for the configured sensor.
    pub fn data_url(&self) -> String { format!("{DATA_SOURCE}{}", self.sensor_id) }
}
