//! Status bar at the top of the screen.
//!
//! The bar is a spacer painted with the background gradient. When FPS
//! display is enabled, the counter sits on the right edge.

use core::fmt::Write;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle, text::Text};
use heapless::String;

use super::primitives::fill_background;
use crate::{
    config::{SCREEN_WIDTH, STATUS_BAR_HEIGHT},
    styles::{LABEL_STYLE_WHITE, RIGHT_ALIGNED},
};

/// Area covered by the status bar.
pub const STATUS_BAR_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, STATUS_BAR_HEIGHT));

/// Position of the FPS counter (right-aligned, 16px from edge, vertically centered).
const FPS_POS: Point = Point::new(SCREEN_WIDTH as i32 - 16, (STATUS_BAR_HEIGHT / 2) as i32);

/// Draw the status bar, with `fps` on the right when given.
pub fn draw_status_bar<D>(
    display: &mut D,
    fps: Option<u32>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_background(display, &STATUS_BAR_AREA);

    if let Some(fps) = fps {
        let mut fps_str: String<16> = String::new();
        let _ = write!(fps_str, "{fps} FPS");
        Text::with_text_style(&fps_str, FPS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::test_support::Framebuffer;

    #[test]
    fn test_status_bar_without_fps_has_no_text() {
        let mut fb = Framebuffer::new(SCREEN_WIDTH, 60, BLACK);
        draw_status_bar(&mut fb, None);
        assert_eq!(fb.count_in(&STATUS_BAR_AREA, WHITE), 0, "No FPS text when disabled");
        assert_eq!(fb.pixel(Point::new(0, STATUS_BAR_HEIGHT as i32)), Some(BLACK), "Bar stays within its area");
    }

    #[test]
    fn test_status_bar_with_fps_draws_right_side() {
        let mut fb = Framebuffer::new(SCREEN_WIDTH, 60, BLACK);
        draw_status_bar(&mut fb, Some(60));

        let right = Rectangle::new(Point::new(SCREEN_WIDTH as i32 / 2, 0), Size::new(SCREEN_WIDTH / 2, STATUS_BAR_HEIGHT));
        let left = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH / 2, STATUS_BAR_HEIGHT));
        assert!(fb.count_in(&right, WHITE) > 0, "FPS text should be drawn on the right");
        assert_eq!(fb.count_in(&left, WHITE), 0, "Nothing should be drawn on the left");
    }
}
