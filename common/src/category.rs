//! EPA severity categories and the AQI classification table.
//!
//! | Category | AQI | Color |
//! |----------|-----|-------|
//! | Good | 0 - 50 | `0x66BB6A` green |
//! | Moderate | 51 - 100 | `0xFFEB3B` yellow |
//! | Sensitive | 101 - 150 | `0xF39C12` orange |
//! | Unhealthy | 151 - 200 | `0xFF5722` red-orange |
//! | Very Unhealthy | 201 - 300 | `0x8E24AA` purple |
//! | Hazardous | 301 - 500 | `0xB71C1C` maroon |
//!
//! An AQI outside `0..=500` has no category: [`classify`] returns `None` and the
//! screen keeps whatever background it already shows.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{
    GOOD,
    GOOD_HEX,
    HAZARDOUS,
    HAZARDOUS_HEX,
    MODERATE,
    MODERATE_HEX,
    SENSITIVE,
    SENSITIVE_HEX,
    UNHEALTHY,
    UNHEALTHY_HEX,
    VERY_UNHEALTHY,
    VERY_UNHEALTHY_HEX,
};

/// The six EPA AQI severity tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AqiCategory {
    /// AQI 0-50.
    Good,
    /// AQI 51-100.
    Moderate,
    /// AQI 101-150, unhealthy for sensitive groups.
    Sensitive,
    /// AQI 151-200.
    Unhealthy,
    /// AQI 201-300.
    VeryUnhealthy,
    /// AQI 301-500.
    Hazardous,
}

/// All categories from best to worst.
pub const ALL_CATEGORIES: [AqiCategory; 6] = [
    AqiCategory::Good,
    AqiCategory::Moderate,
    AqiCategory::Sensitive,
    AqiCategory::Unhealthy,
    AqiCategory::VeryUnhealthy,
    AqiCategory::Hazardous,
];

/// Lowest AQI with a category.
pub const AQI_MIN: i32 = 0;

/// Highest AQI with a category.
pub const AQI_MAX: i32 = 500;

impl AqiCategory {
    /// Inclusive AQI range covered by this category.
    pub const fn range(self) -> (i32, i32) {
        match self {
            Self::Good => (0, 50),
            Self::Moderate => (51, 100),
            Self::Sensitive => (101, 150),
            Self::Unhealthy => (151, 200),
            Self::VeryUnhealthy => (201, 300),
            Self::Hazardous => (301, 500),
        }
    }

    /// Background color as a 24-bit `0xRRGGBB` value.
    pub const fn hex(self) -> u32 {
        match self {
            Self::Good => GOOD_HEX,
            Self::Moderate => MODERATE_HEX,
            Self::Sensitive => SENSITIVE_HEX,
            Self::Unhealthy => UNHEALTHY_HEX,
            Self::VeryUnhealthy => VERY_UNHEALTHY_HEX,
            Self::Hazardous => HAZARDOUS_HEX,
        }
    }

    /// Background color for the panel.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Good => GOOD,
            Self::Moderate => MODERATE,
            Self::Sensitive => SENSITIVE,
            Self::Unhealthy => UNHEALTHY,
            Self::VeryUnhealthy => VERY_UNHEALTHY,
            Self::Hazardous => HAZARDOUS,
        }
    }

    /// Full EPA name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Sensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Name short enough for one line on the 320px panel.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::Moderate => "MODERATE",
            Self::Sensitive => "SENSITIVE",
            Self::Unhealthy => "UNHEALTHY",
            Self::VeryUnhealthy => "VERY UNHEALTHY",
            Self::Hazardous => "HAZARDOUS",
        }
    }

    #[inline]
    pub const fn contains(
        self,
        aqi: i32,
    ) -> bool {
        let (lo, hi) = self.range();
        aqi >= lo && aqi <= hi
    }
}

/// Classify an AQI value. Returns `None` outside `0..=500`.
pub fn classify(aqi: i32) -> Option<AqiCategory> { ALL_CATEGORIES.into_iter().find(|c| c.contains(aqi)) }

// Ranges must tile 0..=500 with no gaps.
const fn ranges_contiguous() -> bool {
    let mut i = 0;
    while i < ALL_CATEGORIES.len() {
        let (lo, hi) = ALL_CATEGORIES[i].range();
        if lo > hi {
            return false;
        }
        if i > 0 && lo != ALL_CATEGORIES[i - 1].range().1 + 1 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(ranges_contiguous());
const _: () = assert!(AqiCategory::Good.range().0 == AQI_MIN);
const _: () = assert!(AqiCategory::Hazardous.range().1 == AQI_MAX);
