//! Shared AQI logic for the air-quality monitor.
//!
//! This crate contains the platform-agnostic part of the monitor:
//!
//! - [`breakpoints`]: PM2.5 / AQI breakpoint tables
//! - [`aqi`]: PM2.5 concentration to EPA AQI conversion
//! - [`category`]: AQI severity categories and their colors
//! - [`colors`]: Rgb565 color constants and contrast helpers
//! - [`config`]: Screen layout constants
//! - [`styles`]: Text alignment and fonts
//! - [`screen`]: Display state (value, background, caption, status)
//! - [`widgets`]: Drawing the screen onto any `DrawTarget`
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` so the same conversion and drawing code can run on a
//! microcontroller. Tests run on the host with `std`.
//!
//! ```bash
//! cargo test -p aqi-common
//! ```

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod aqi;
pub mod breakpoints;
pub mod category;
pub mod colors;
pub mod config;
pub mod screen;
pub mod styles;
pub mod widgets;

// Re-export commonly used items
pub use aqi::{ConversionError, convert_to_epa_aqi};
pub use category::{AqiCategory, classify};
pub use screen::AqiScreen;
