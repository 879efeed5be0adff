//! Bottom navigation bar with three tabs.
//!
//! Each tab gets an equal-width slot holding a small icon above its label.
//! The selected tab is drawn in the accent color, the others dimmed.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, ContainsPoint, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use crate::colors::{CYAN, NAV_BAR, NAV_INACTIVE};
use crate::config::{NAV_BAR_HEIGHT, NAV_BAR_Y, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_FONT};
use crate::tabs::Tab;

/// Area covered by the navigation bar.
pub const NAV_BAR_AREA: Rectangle = Rectangle::new(Point::new(0, NAV_BAR_Y), Size::new(SCREEN_WIDTH, NAV_BAR_HEIGHT));

/// Width of one tab slot.
const SLOT_WIDTH: u32 = SCREEN_WIDTH / Tab::COUNT as u32;

/// Vertical center of the tab icons.
const ICON_CENTER_Y: i32 = NAV_BAR_Y + 28;

/// Top of the tab labels.
const LABEL_Y: i32 = NAV_BAR_Y + 48;

const BAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(NAV_BAR);

/// Horizontal center of `tab`'s slot.
pub const fn slot_center_x(tab: Tab) -> i32 { (tab.index() as u32 * SLOT_WIDTH + SLOT_WIDTH / 2) as i32 }

/// Color of `tab` when `selected` is highlighted.
pub fn tab_color(
    tab: Tab,
    selected: Tab,
) -> Rgb565 {
    if tab == selected { CYAN } else { NAV_INACTIVE }
}

/// Tab under `point`, if the point is on the navigation bar.
pub fn hit_test(point: Point) -> Option<Tab> {
    if !NAV_BAR_AREA.contains(point) {
        return None;
    }
    let slot = (point.x as u32 / SLOT_WIDTH) as usize;
    Tab::from_index(slot.min(Tab::COUNT - 1))
}

/// Draw the navigation bar with `selected` highlighted.
pub fn draw_nav_bar<D>(
    display: &mut D,
    selected: Tab,
) where
    D: DrawTarget<Color = Rgb565>,
{
    NAV_BAR_AREA.into_styled(BAR_FILL).draw(display).ok();

    for tab in Tab::ALL {
        let color = tab_color(tab, selected);
        let center = Point::new(slot_center_x(tab), ICON_CENTER_Y);
        draw_tab_icon(display, tab, center, color);

        Text::with_text_style(
            tab.label(),
            Point::new(center.x, LABEL_Y),
            MonoTextStyle::new(LABEL_FONT, color),
            CENTERED,
        )
        .draw(display)
        .ok();
    }
}

fn draw_tab_icon<D>(
    display: &mut D,
    tab: Tab,
    center: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    match tab {
        Tab::Home => {
            // Roof over a square body with a door cut out
            Triangle::new(center + Point::new(-11, -1), center + Point::new(0, -11), center + Point::new(11, -1))
                .into_styled(fill)
                .draw(display)
                .ok();
            Rectangle::new(center + Point::new(-7, -1), Size::new(15, 11))
                .into_styled(fill)
                .draw(display)
                .ok();
            Rectangle::new(center + Point::new(-2, 4), Size::new(5, 6))
                .into_styled(BAR_FILL)
                .draw(display)
                .ok();
        }
        Tab::Statistics => {
            for (dx, height) in [(-9, 8), (-2, 18), (5, 12)] {
                Rectangle::new(center + Point::new(dx, 10 - height), Size::new(5, height as u32))
                    .into_styled(fill)
                    .draw(display)
                    .ok();
            }
        }
        Tab::Settings => {
            // Gear: eight teeth around a ring with a hollow hub
            for (dx, dy) in [(0, -9), (0, 9), (-9, 0), (9, 0), (-6, -6), (6, -6), (-6, 6), (6, 6)] {
                Circle::with_center(center + Point::new(dx, dy), 5).into_styled(fill).draw(display).ok();
            }
            Circle::with_center(center, 16).into_styled(fill).draw(display).ok();
            Circle::with_center(center, 6).into_styled(BAR_FILL).draw(display).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BLACK;
    use crate::config::SCREEN_HEIGHT;
    use crate::test_support::Framebuffer;

    fn slot_area(tab: Tab) -> Rectangle {
        Rectangle::new(
            Point::new(tab.index() as i32 * SLOT_WIDTH as i32, NAV_BAR_Y),
            Size::new(SLOT_WIDTH, NAV_BAR_HEIGHT),
        )
    }

    // -------------------------------------------------------------------------
    // Hit Testing
    // -------------------------------------------------------------------------

    #[test]
    fn test_hit_test_slots() {
        assert_eq!(hit_test(Point::new(10, NAV_BAR_Y + 10)), Some(Tab::Home));
        assert_eq!(hit_test(Point::new(200, NAV_BAR_Y + 40)), Some(Tab::Statistics));
        assert_eq!(hit_test(Point::new(390, SCREEN_HEIGHT as i32 - 1)), Some(Tab::Settings));
    }

    #[test]
    fn test_hit_test_last_column_pixel() {
        // 400 / 3 leaves one spare column at the right edge
        assert_eq!(hit_test(Point::new(SCREEN_WIDTH as i32 - 1, NAV_BAR_Y)), Some(Tab::Settings));
    }

    #[test]
    fn test_hit_test_outside_bar() {
        assert_eq!(hit_test(Point::new(200, NAV_BAR_Y - 1)), None, "Above the bar");
        assert_eq!(hit_test(Point::new(200, 100)), None, "Rings region");
        assert_eq!(hit_test(Point::new(-1, NAV_BAR_Y + 10)), None, "Left of the screen");
        assert_eq!(hit_test(Point::new(200, SCREEN_HEIGHT as i32)), None, "Below the screen");
    }

    #[test]
    fn test_slot_centers_inside_slots() {
        for tab in Tab::ALL {
            assert_eq!(hit_test(Point::new(slot_center_x(tab), LABEL_Y)), Some(tab));
        }
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    #[test]
    fn test_tab_color() {
        assert_eq!(tab_color(Tab::Home, Tab::Home), CYAN);
        assert_eq!(tab_color(Tab::Settings, Tab::Home), NAV_INACTIVE);
    }

    #[test]
    fn test_selected_tab_highlighted() {
        let mut fb = Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT, BLACK);
        draw_nav_bar(&mut fb, Tab::Statistics);

        assert!(fb.count_in(&slot_area(Tab::Statistics), CYAN) > 0, "Selected tab should be cyan");
        assert_eq!(fb.count_in(&slot_area(Tab::Home), CYAN), 0, "Unselected tab should not be cyan");
        assert!(fb.count_in(&slot_area(Tab::Home), NAV_INACTIVE) > 0);
        assert_eq!(fb.count_in(&slot_area(Tab::Settings), CYAN), 0);
    }

    #[test]
    fn test_nav_bar_fills_its_area_only() {
        let mut fb = Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT, BLACK);
        draw_nav_bar(&mut fb, Tab::Home);
        assert_eq!(fb.pixel(Point::new(0, NAV_BAR_Y)), Some(NAV_BAR));
        assert_eq!(fb.pixel(Point::new(0, NAV_BAR_Y - 1)), Some(BLACK));
    }
}
