//! Reading sources: where raw PM2.5 values come from.
//!
//! - [`PurpleAirSource`] fetches the sensor's JSON document over HTTPS and walks
//!   a fixed JSON path to the raw PM2.5 value.
//! - `DemoSource` (`demo` feature, see `crate::demo`) is a development
//!   stand-in that needs no network.
//!
//! Every failure is a [`FetchError`]; [`FetchError::is_transient`] tells the
//! poll loop whether a quick retry makes sense.

use serde_json::Value;
use thiserror::Error;

use crate::config::{DATA_LOCATION, HTTP_TIMEOUT, JsonStep};

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no value at {0}")]
    MissingField(String),
    #[error("value at {path} is not a number: {value}")]
    NotANumber { path: String, value: String },
}

impl FetchError {
    /// Worth retrying after a short delay (network trouble, overload).
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Body(_) => true,
            Self::Status(code) => *code == 429 || *code >= 500,
            Self::Json(_) | Self::MissingField(_) | Self::NotANumber { .. } => false,
        }
    }
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => Self::Status(code),
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

// =============================================================================
// Source Trait
// =============================================================================

/// Produces one raw PM2.5 reading [µg/m³] per call.
pub trait ReadingSource {
    fn fetch(&mut self) -> Result<f64, FetchError>;
}

// =============================================================================
// JSON Path
// =============================================================================

fn format_path(path: &[JsonStep]) -> String {
    let mut out = String::from("$");
    for step in path {
        match step {
            JsonStep::Key(key) => {
                out.push('.');
                out.push_str(key);
            }
            JsonStep::Index(idx) => out.push_str(&format!("[{idx}]")),
        }
    }
    out
}

/// Walk `path` through `json` and read the value there as a number.
///
/// Accepts JSON numbers and numeric strings.
pub fn extract_reading(
    json: &Value,
    path: &[JsonStep],
) -> Result<f64, FetchError> {
    let mut node = json;
    for step in path {
        let next = match step {
            JsonStep::Key(key) => node.get(*key),
            JsonStep::Index(idx) => node.get(*idx),
        };
        node = next.ok_or_else(|| FetchError::MissingField(format_path(path)))?;
    }

    let number = match node {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number.ok_or_else(|| FetchError::NotANumber {
        path: format_path(path),
        value: node.to_string(),
    })
}

// =============================================================================
// PurpleAir
// =============================================================================

/// Fetches a PurpleAir sensor document and extracts the raw PM2.5 value.
pub struct PurpleAirSource {
    agent: ureq::Agent,
    url: String,
}

impl PurpleAirSource {
    pub fn new(url: String) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build();
        Self { agent, url }
    }

    pub fn url(&self) -> &str { &self.url }
}

impl ReadingSource for PurpleAirSource {
    fn fetch(&mut self) -> Result<f64, FetchError> {
        let body = self.agent.get(&self.url).call()?.into_string()?;
        let json: Value = serde_json::from_str(&body)?;
        extract_reading(&json, DATA_LOCATION)
    }
}
