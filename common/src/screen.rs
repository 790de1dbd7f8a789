//! Screen state for the AQI display.
//!
//! [`AqiScreen`] holds everything the panel shows: the value text, the
//! background color, the category label, the sensor caption and a one-line
//! status message. Drawing lives in [`crate::widgets`]; this module only tracks
//! state and whether it changed since the last draw.
//!
//! # Sticky Background
//!
//! [`AqiScreen::apply_reading`] always updates the value text but only replaces
//! the background when a category is known. An AQI with no category leaves the
//! last severity color on screen.
//!
//! # Initial State
//!
//! | Field | Value |
//! |-------|-------|
//! | value | `--` |
//! | background | [`DEFAULT_BG`] (`0x550055`) |
//! | category | none |
//! | status | empty |

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::category::AqiCategory;
use crate::colors::DEFAULT_BG;
use crate::config::{CAPTION_LEN, STATUS_LEN, VALUE_TEXT_LEN};

/// Value text shown before the first reading.
pub const NO_VALUE: &str = "--";

/// Copy `src` into a fixed-capacity string, truncating on a char boundary.
fn copy_truncated<const N: usize>(src: &str) -> String<N> {
    let mut out: String<N> = String::new();
    for c in src.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Display state for one sensor.
#[derive(Clone, Debug)]
pub struct AqiScreen {
    value: String<VALUE_TEXT_LEN>,
    background: Rgb565,
    category: Option<AqiCategory>,
    caption: String<CAPTION_LEN>,
    status: String<STATUS_LEN>,
    dirty: bool,
}

impl AqiScreen {
    /// Create a screen captioned `AQI for <sensor_name>`.
    pub fn new(sensor_name: &str) -> Self {
        let mut caption: String<CAPTION_LEN> = String::new();
        // Overflow only truncates the caption.
        let _ = write!(caption, "AQI for ");
        for c in sensor_name.chars() {
            if caption.push(c).is_err() {
                break;
            }
        }

        Self {
            value: copy_truncated(NO_VALUE),
            background: DEFAULT_BG,
            category: None,
            caption,
            status: String::new(),
            dirty: true,
        }
    }

    /// Replace the value text.
    pub fn set_text(
        &mut self,
        text: &str,
    ) {
        if self.value.as_str() != text {
            self.value = copy_truncated(text);
            self.dirty = true;
        }
    }

    /// Replace the background color.
    pub fn set_background(
        &mut self,
        color: Rgb565,
    ) {
        if self.background != color {
            self.background = color;
            self.dirty = true;
        }
    }

    /// Show a converted reading.
    ///
    /// The background (and category label) change only when `category` is
    /// `Some`; otherwise the previous severity stays on screen.
    pub fn apply_reading(
        &mut self,
        aqi: i32,
        category: Option<AqiCategory>,
    ) {
        let mut text: String<VALUE_TEXT_LEN> = String::new();
        let _ = write!(text, "{aqi}");
        self.set_text(&text);

        if let Some(category) = category {
            self.set_background(category.color());
            if self.category != Some(category) {
                self.category = Some(category);
                self.dirty = true;
            }
        }
    }

    /// Set the status line (truncated to fit).
    pub fn set_status(
        &mut self,
        message: &str,
    ) {
        if self.status.as_str() != message {
            self.status = copy_truncated(message);
            self.dirty = true;
        }
    }

    /// Clear the status line.
    pub fn clear_status(&mut self) { self.set_status(""); }

    pub fn value(&self) -> &str { &self.value }

    pub const fn background(&self) -> Rgb565 { self.background }

    pub const fn category(&self) -> Option<AqiCategory> { self.category }

    pub fn caption(&self) -> &str { &self.caption }

    pub fn status(&self) -> &str { &self.status }

    /// True when something changed since the last [`mark_drawn`](Self::mark_drawn).
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    /// Record that the current state has been drawn.
    #[inline]
    pub fn mark_drawn(&mut self) { self.dirty = false; }
}
