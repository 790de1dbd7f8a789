//! Display and layout configuration constants.
//!
//! Layout for a 320x240 landscape panel (PyPortal-sized) with the AQI value in
//! the middle and a caption naming the sensor along the bottom edge.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Text Placement (baseline positions)
// =============================================================================

/// Baseline of the large AQI value.
pub const VALUE_Y: i32 = CENTER_Y - 8;

/// Baseline of the category label under the value.
pub const CATEGORY_Y: i32 = CENTER_Y + 28;

/// Left edge of the caption.
pub const CAPTION_X: i32 = 15;

/// Baseline of the caption.
pub const CAPTION_Y: i32 = 220;

/// Baseline of the status line at the top of the screen.
pub const STATUS_Y: i32 = 16;

const _: () = assert!(VALUE_Y < CATEGORY_Y);
const _: () = assert!(CATEGORY_Y < CAPTION_Y);
const _: () = assert!(CAPTION_Y < SCREEN_HEIGHT as i32);
const _: () = assert!(STATUS_Y < VALUE_Y);

// =============================================================================
// Text Capacity
// =============================================================================

/// Capacity of the value text ("-1234567890" fits).
pub const VALUE_TEXT_LEN: usize = 12;

/// Capacity of the caption ("AQI for " + sensor name).
pub const CAPTION_LEN: usize = 48;

/// Capacity of the status line.
pub const STATUS_LEN: usize = 48;
