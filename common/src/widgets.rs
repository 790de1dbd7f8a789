//! Drawing for the AQI screen.
//!
//! Generic over `DrawTarget<Color = Rgb565>` so the same code draws into the
//! desktop simulator and into a panel framebuffer.
//!
//! ```text
//! +--------------------------------------+
//! | status line (small)                  |
//! |                                      |
//! |                 123                  |  value (ProFont 24)
//! |              SENSITIVE               |  category (ProFont 18)
//! |                                      |
//! | AQI for Civic Center(ish)            |  caption (10x20)
//! +--------------------------------------+
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::text_color_for_bg;
use crate::config::{CAPTION_X, CAPTION_Y, CATEGORY_Y, CENTER_X, STATUS_Y, VALUE_Y};
use crate::screen::AqiScreen;
use crate::styles::{CAPTION_FONT, CATEGORY_FONT, CENTERED, LEFT_ALIGNED, STATUS_FONT, VALUE_FONT};

const VALUE_POS: Point = Point::new(CENTER_X, VALUE_Y);
const CATEGORY_POS: Point = Point::new(CENTER_X, CATEGORY_Y);
const CAPTION_POS: Point = Point::new(CAPTION_X, CAPTION_Y);
const STATUS_POS: Point = Point::new(CAPTION_X, STATUS_Y);

/// Draw the whole screen: background, value, category, caption and status.
pub fn draw_aqi_screen<D>(
    display: &mut D,
    screen: &AqiScreen,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let bg = screen.background();
    let fg = text_color_for_bg(bg);

    display.clear(bg)?;

    Text::with_text_style(screen.value(), VALUE_POS, MonoTextStyle::new(VALUE_FONT, fg), CENTERED).draw(display)?;

    if let Some(category) = screen.category() {
        Text::with_text_style(
            category.short_label(),
            CATEGORY_POS,
            MonoTextStyle::new(CATEGORY_FONT, fg),
            CENTERED,
        )
        .draw(display)?;
    }

    Text::with_text_style(
        screen.caption(),
        CAPTION_POS,
        MonoTextStyle::new(CAPTION_FONT, fg),
        LEFT_ALIGNED,
    )
    .draw(display)?;

    if !screen.status().is_empty() {
        Text::with_text_style(screen.status(), STATUS_POS, MonoTextStyle::new(STATUS_FONT, fg), LEFT_ALIGNED)
            .draw(display)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::category::AqiCategory;
    use crate::colors::{DEFAULT_BG, GOOD, INK, VERY_UNHEALTHY, WHITE};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    /// Plain in-memory framebuffer.
    struct FrameBuffer {
        pixels: std::vec::Vec<Rgb565>,
    }

    impl FrameBuffer {
        fn new() -> Self {
            Self {
                pixels: std::vec![Rgb565::BLACK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
            }
        }

        fn get(
            &self,
            x: u32,
            y: u32,
        ) -> Rgb565 {
            self.pixels[(y * SCREEN_WIDTH + x) as usize]
        }

        fn count(
            &self,
            color: Rgb565,
        ) -> usize {
            self.pixels.iter().filter(|&&p| p == color).count()
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x >= 0 && point.y >= 0 && (point.x as u32) < SCREEN_WIDTH && (point.y as u32) < SCREEN_HEIGHT {
                    self.pixels[(point.y as u32 * SCREEN_WIDTH + point.x as u32) as usize] = color;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_background_fills_corners() {
        let mut display = FrameBuffer::new();
        let mut screen = AqiScreen::new("x");
        screen.apply_reading(10, Some(AqiCategory::Good));
        draw_aqi_screen(&mut display, &screen).unwrap();

        assert_eq!(display.get(0, 0), GOOD);
        assert_eq!(display.get(SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1), GOOD);
    }

    #[test]
    fn test_value_text_uses_contrast_color() {
        let mut display = FrameBuffer::new();
        let mut screen = AqiScreen::new("x");
        screen.apply_reading(250, Some(AqiCategory::VeryUnhealthy));
        draw_aqi_screen(&mut display, &screen).unwrap();

        assert!(display.count(WHITE) > 0, "white text on purple");
        assert_eq!(display.count(INK), 0);
        assert!(display.count(VERY_UNHEALTHY) > 0);
    }

    #[test]
    fn test_light_background_uses_ink() {
        let mut display = FrameBuffer::new();
        let mut screen = AqiScreen::new("x");
        screen.apply_reading(12, Some(AqiCategory::Good));
        draw_aqi_screen(&mut display, &screen).unwrap();

        assert!(display.count(INK) > 0, "dark text on green");
        assert_eq!(display.count(WHITE), 0);
    }

    #[test]
    fn test_initial_screen_draws_default_background() {
        let mut display = FrameBuffer::new();
        let screen = AqiScreen::new("x");
        draw_aqi_screen(&mut display, &screen).unwrap();
        assert_eq!(display.get(0, 0), DEFAULT_BG);
    }

    #[test]
    fn test_status_line_adds_pixels() {
        let mut plain = FrameBuffer::new();
        let mut with_status = FrameBuffer::new();
        let mut screen = AqiScreen::new("x");
        draw_aqi_screen(&mut plain, &screen).unwrap();
        screen.set_status("fetch failed, retrying");
        draw_aqi_screen(&mut with_status, &screen).unwrap();

        assert!(with_status.count(WHITE) > plain.count(WHITE));
    }
}
