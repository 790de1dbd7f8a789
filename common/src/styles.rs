//! Pre-computed text styles.
//!
//! Alignment styles are `const` so they live in read-only data. Character
//! styles depend on the background (see
//! [`text_color_for_bg`](crate::colors::text_color_for_bg)), so only the fonts
//! are shared here and callers build `MonoTextStyle::new(FONT, color)`.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_6X10, FONT_10X20},
    },
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Value and category label.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Caption and status line.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Fonts
// =============================================================================

/// Large font for the AQI value (`ProFont` 24pt).
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Category label under the value (`ProFont` 18pt).
pub const CATEGORY_FONT: &MonoFont = &PROFONT_18_POINT;

/// Caption along the bottom edge (10x20).
pub const CAPTION_FONT: &MonoFont = &FONT_10X20;

/// Small status font (6x10).
pub const STATUS_FONT: &MonoFont = &FONT_6X10;
