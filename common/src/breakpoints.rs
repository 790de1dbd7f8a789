//! EPA breakpoint tables for PM2.5.
//!
//! All breakpoints are compile-time constants with validation assertions, in the
//! same spirit as the sensor thresholds: if a table is edited into the wrong
//! order, compilation fails.
//!
//! # Table Layout
//!
//! | # | PM2.5 [µg/m³] | AQI |
//! |---|---------------|-----|
//! | 0 | 0.0 - 12.0 | 0 - 50 |
//! | 1 | 12.1 - 35.4 | 51 - 100 |
//! | 2 | 35.5 - 55.4 | 101 - 150 |
//! | 3 | 55.5 - 150.4 | 151 - 200 |
//! | 4 | 150.5 - 250.4 | 201 - 300 |
//! | 5 | 250.5 - 350.4 | 301 - 500 |
//! | 6 | 350.5 - 500.4 | *(none)* |
//!
//! The concentration table has one more row than the index table. Row 6 has no
//! AQI partner; a reading that lands there is reported as
//! [`ConversionError::UnpairedBand`](crate::aqi::ConversionError::UnpairedBand)
//! by the converter.

// =============================================================================
// Breakpoint Band
// =============================================================================

/// A concentration range paired with the AQI range it maps onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakpointBand {
    /// Lower concentration bound (inclusive).
    pub raw_low: f64,
    /// Upper concentration bound (inclusive).
    pub raw_high: f64,
    /// AQI at `raw_low`.
    pub index_low: i32,
    /// AQI at `raw_high`.
    pub index_high: i32,
}

impl BreakpointBand {
    /// Pair a concentration range with an index range.
    pub const fn new(
        raw: (f64, f64),
        index: (i32, i32),
    ) -> Self {
        Self {
            raw_low: raw.0,
            raw_high: raw.1,
            index_low: index.0,
            index_high: index.1,
        }
    }

    /// Inclusive containment test, independent of endpoint order.
    #[inline]
    pub fn contains(
        &self,
        value: f64,
    ) -> bool {
        value >= self.raw_low.min(self.raw_high) && value <= self.raw_low.max(self.raw_high)
    }

    /// Linear interpolation inside the band, truncated toward zero.
    #[inline]
    pub fn interpolate(
        &self,
        value: f64,
    ) -> i32 {
        let slope = f64::from(self.index_high - self.index_low) / (self.raw_high - self.raw_low);
        (slope * (value - self.raw_low) + f64::from(self.index_low)) as i32
    }
}

// =============================================================================
// PM2.5 Concentration Bands
// =============================================================================

/// Number of concentration bands.
pub const PM25_BAND_COUNT: usize = 7;

/// PM2.5 concentration bands in µg/m³, ascending.
pub const PM25_BANDS: [(f64, f64); PM25_BAND_COUNT] = [
    (0.0, 12.0),
    (12.1, 35.4),
    (35.5, 55.4),
    (55.5, 150.4),
    (150.5, 250.4),
    (250.5, 350.4),
    (350.5, 500.4),
];

// =============================================================================
// AQI Index Bands
// =============================================================================

/// Number of index bands.
pub const AQI_BAND_COUNT: usize = 6;

/// AQI bands, ascending and paired by position with [`PM25_BANDS`].
pub const AQI_BANDS: [(i32, i32); AQI_BAND_COUNT] = [(0, 50), (51, 100), (101, 150), (151, 200), (201, 300), (301, 500)];

/// Look up the paired band at `idx`.
///
/// Returns `None` for a concentration row with no index partner.
pub const fn band(idx: usize) -> Option<BreakpointBand> {
    if idx < AQI_BAND_COUNT && idx < PM25_BAND_COUNT {
        Some(BreakpointBand::new(PM25_BANDS[idx], AQI_BANDS[idx]))
    } else {
        None
    }
}

// =============================================================================
// Compile-Time Validation
// =============================================================================

const fn raw_bands_ascending() -> bool {
    let mut i = 0;
    while i < PM25_BAND_COUNT {
        if PM25_BANDS[i].0 > PM25_BANDS[i].1 {
            return false;
        }
        if i > 0 && PM25_BANDS[i].0 <= PM25_BANDS[i - 1].1 {
            return false;
        }
        i += 1;
    }
    true
}

const fn index_bands_contiguous() -> bool {
    let mut i = 0;
    while i < AQI_BAND_COUNT {
        if AQI_BANDS[i].0 > AQI_BANDS[i].1 {
            return false;
        }
        if i > 0 && AQI_BANDS[i].0 != AQI_BANDS[i - 1].1 + 1 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(raw_bands_ascending());
const _: () = assert!(index_bands_contiguous());
const _: () = assert!(AQI_BANDS[0].0 == 0);
const _: () = assert!(PM25_BAND_COUNT == AQI_BAND_COUNT + 1);

// =============================================================================
// Unit Tests
// =============================================================================
