//! PM2.5 concentration to EPA Air Quality Index conversion.
//!
//! ```text
//! AQI = ((index_high - index_low) / (raw_high - raw_low)) * (c - raw_low) + index_low
//! ```
//!
//! where `c` is the concentration truncated to one decimal place and the band is
//! the first entry of [`PM25_BANDS`] whose inclusive range contains `c`. The
//! result is truncated toward zero.
//!
//! # Failure Modes
//!
//! | Input | Result |
//! |-------|--------|
//! | negative, NaN, above 500.4 | [`ConversionError::OutOfRange`] |
//! | 350.5 - 500.4 | [`ConversionError::UnpairedBand`] |
//!
//! Both are returned to the caller; nothing here panics or divides by zero.

use core::fmt;

use crate::breakpoints::{PM25_BANDS, band};

// =============================================================================
// Errors
// =============================================================================

/// Reasons a concentration cannot be turned into an AQI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConversionError {
    /// The concentration lies outside every breakpoint band.
    OutOfRange {
        /// Concentration as received.
        value: f64,
    },
    /// The concentration matched a band that has no AQI partner.
    UnpairedBand {
        /// Concentration as received.
        value: f64,
        /// Position of the matched row in [`PM25_BANDS`].
        band: usize,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::OutOfRange { value } => write!(f, "PM2.5 {value} outside all breakpoint bands"),
            Self::UnpairedBand { value, band } => {
                write!(f, "PM2.5 {value} falls in band {band} which has no AQI range")
            }
        }
    }
}

impl core::error::Error for ConversionError {}

// =============================================================================
// Conversion
// =============================================================================

/// Truncate a concentration to one decimal place (12.05 -> 12.0).
///
/// Identity for values already at 0.1 resolution.
#[inline]
pub fn truncate_concentration(value: f64) -> f64 { libm::trunc(value * 10.0) / 10.0 }

/// Find the first concentration band containing `value`.
pub fn find_band(value: f64) -> Option<usize> { PM25_BANDS.iter().position(|&(lo, hi)| value >= lo.min(hi) && value <= lo.max(hi)) }

/// Convert a raw PM2.5 concentration [µg/m³] to an EPA AQI value.
pub fn convert_to_epa_aqi(value: f64) -> Result<i32, ConversionError> {
    // Checked before truncation, which would round (-0.1, 0) up to -0.0.
    if value < 0.0 {
        return Err(ConversionError::OutOfRange { value });
    }
    let concentration = truncate_concentration(value);
    let idx = find_band(concentration).ok_or(ConversionError::OutOfRange { value })?;
    let band = band(idx).ok_or(ConversionError::UnpairedBand { value, band: idx })?;
    Ok(band.interpolate(concentration))
}

// =============================================================================
// Unit Tests
// =============================================================================
