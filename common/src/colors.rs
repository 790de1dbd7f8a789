//! Color constants for the AQI display.
//!
//! The severity colors are specified as 24-bit `0xRRGGBB` values and packed into
//! Rgb565 at compile time by [`rgb565_from_hex`], keeping the top 5/6/5 bits of
//! each channel. Rgb565 is the native format of the ST7789-class panels this
//! screen targets, so frames need no conversion when flushed.
//!
//! Text color on top of a severity background is picked by perceptual luminance
//! (ITU-R BT.601), see [`text_color_for_bg`].

use embedded_graphics::pixelcolor::{IntoStorage, Rgb565, RgbColor};

// =============================================================================
// Conversion
// =============================================================================

/// Pack a `0xRRGGBB` value into Rgb565.
pub const fn rgb565_from_hex(hex: u32) -> Rgb565 {
    let r = ((hex >> 16) & 0xFF) as u8;
    let g = ((hex >> 8) & 0xFF) as u8;
    let b = (hex & 0xFF) as u8;
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Text on light backgrounds.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Near-black text for light backgrounds (`0x111111`).
pub const INK: Rgb565 = rgb565_from_hex(0x11_11_11);

// =============================================================================
// Screen Colors
// =============================================================================

/// Background shown before the first reading arrives.
pub const DEFAULT_BG_HEX: u32 = 0x55_00_55;

/// [`DEFAULT_BG_HEX`] as Rgb565.
pub const DEFAULT_BG: Rgb565 = rgb565_from_hex(DEFAULT_BG_HEX);

// =============================================================================
// Severity Colors
// =============================================================================

/// Good (AQI 0-50).
pub const GOOD_HEX: u32 = 0x66_BB_6A;
/// Moderate (AQI 51-100).
pub const MODERATE_HEX: u32 = 0xFF_EB_3B;
/// Unhealthy for sensitive groups (AQI 101-150).
pub const SENSITIVE_HEX: u32 = 0xF3_9C_12;
/// Unhealthy (AQI 151-200).
pub const UNHEALTHY_HEX: u32 = 0xFF_57_22;
/// Very unhealthy (AQI 201-300).
pub const VERY_UNHEALTHY_HEX: u32 = 0x8E_24_AA;
/// Hazardous (AQI 301-500).
pub const HAZARDOUS_HEX: u32 = 0xB7_1C_1C;

pub const GOOD: Rgb565 = rgb565_from_hex(GOOD_HEX);
pub const MODERATE: Rgb565 = rgb565_from_hex(MODERATE_HEX);
pub const SENSITIVE: Rgb565 = rgb565_from_hex(SENSITIVE_HEX);
pub const UNHEALTHY: Rgb565 = rgb565_from_hex(UNHEALTHY_HEX);
pub const VERY_UNHEALTHY: Rgb565 = rgb565_from_hex(VERY_UNHEALTHY_HEX);
pub const HAZARDOUS: Rgb565 = rgb565_from_hex(HAZARDOUS_HEX);

// =============================================================================
// Contrast
// =============================================================================

/// Perceptual luminance (0-255) using the integer BT.601 approximation
/// `(77*R + 150*G + 29*B) >> 8`.
pub fn calculate_luminance(color: Rgb565) -> u32 {
    let raw = color.into_storage();
    let r5 = u32::from((raw >> 11) & 0x1F);
    let g6 = u32::from((raw >> 5) & 0x3F);
    let b5 = u32::from(raw & 0x1F);

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (77 * r8 + 150 * g8 + 29 * b8) >> 8
}

/// Readable text color for a background: white on dark, ink on light.
pub fn text_color_for_bg(bg_color: Rgb565) -> Rgb565 {
    let luma = calculate_luminance(bg_color);
    if luma < 128 { WHITE } else { INK }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_from_hex_extremes() {
        assert_eq!(rgb565_from_hex(0x00_00_00), BLACK);
        assert_eq!(rgb565_from_hex(0xFF_FF_FF), WHITE);
        assert_eq!(rgb565_from_hex(0xFF_00_00), Rgb565::RED);
    }

    #[test]
    fn test_rgb565_from_hex_channels() {
        // 0x66 >> 3 = 12, 0xBB >> 2 = 46, 0x6A >> 3 = 13
        assert_eq!(GOOD, Rgb565::new(12, 46, 13));
        // 0xB7 >> 3 = 22, 0x1C >> 2 = 7, 0x1C >> 3 = 3
        assert_eq!(HAZARDOUS, Rgb565::new(22, 7, 3));
    }

    #[test]
    fn test_luminance_bounds() {
        assert_eq!(calculate_luminance(BLACK), 0);
        assert_eq!(calculate_luminance(WHITE), 255);
    }

    #[test]
    fn test_text_color_for_severity_backgrounds() {
        assert_eq!(text_color_for_bg(GOOD), INK, "green is light");
        assert_eq!(text_color_for_bg(MODERATE), INK, "yellow is light");
        assert_eq!(text_color_for_bg(SENSITIVE), INK, "orange is light");
        assert_eq!(text_color_for_bg(VERY_UNHEALTHY), WHITE, "purple is dark");
        assert_eq!(text_color_for_bg(HAZARDOUS), WHITE, "maroon is dark");
        assert_eq!(text_color_for_bg(DEFAULT_BG), WHITE);
    }
}
