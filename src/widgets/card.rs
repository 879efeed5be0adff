//! "Smart assistant" recommendation card below the rings.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use super::primitives::{chars_per_line, fill_background, wrap_text};
use crate::colors::{CARD, CARD_ICON_TILE, CYAN};
use crate::config::{CARD_HEIGHT, CARD_MARGIN_X, CARD_PADDING, CARD_WIDTH, CARD_Y};
use crate::styles::{BODY_FONT, CARD_BODY_STYLE, CARD_TITLE_STYLE, LABEL_FONT, LEFT_ALIGNED};

pub const ASSISTANT_TITLE: &str = "AKILLI ASİSTAN";

/// Recommendation text.
///
/// The currency sign is spelled out since the panel fonts lack `₺`; a
/// no-break space keeps the amount and currency on one line.
pub const ASSISTANT_MESSAGE: &str = "Haftalık limit aşıldı. Ev dışı şarj öneriliyor. Tahmini ek maliyet: 120\u{a0}TL.";

const CARD_POS: Point = Point::new(CARD_MARGIN_X as i32, CARD_Y);
const CARD_SIZE: Size = Size::new(CARD_WIDTH, CARD_HEIGHT);
const CARD_CORNER: Size = Size::new(20, 20);

const ICON_SIZE: u32 = 60;
const ICON_CORNER: Size = Size::new(12, 12);
const ICON_POS: Point = Point::new(CARD_POS.x + CARD_PADDING as i32, CARD_Y + CARD_PADDING as i32);

/// Gap between the icon tile and the text column.
const TEXT_GAP: u32 = 12;
const TEXT_X: i32 = ICON_POS.x + (ICON_SIZE + TEXT_GAP) as i32;
const TEXT_WIDTH: u32 = CARD_WIDTH - 2 * CARD_PADDING - ICON_SIZE - TEXT_GAP;
const TITLE_POS: Point = Point::new(TEXT_X, ICON_POS.y);

/// Space between the title and the first message line.
const TITLE_GAP: i32 = 6;
const LINE_SPACING: i32 = 2;

/// Equalizer bars drawn in the icon tile: (x offset, height).
const EQUALIZER_BARS: [(i32, u32); 3] = [(20, 12), (28, 22), (36, 16)];
const EQUALIZER_BAR_WIDTH: u32 = 5;

const CARD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CARD);
const ICON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CARD_ICON_TILE);
const EQUALIZER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CYAN);

/// Area covered by the card.
pub const CARD_AREA: Rectangle = Rectangle::new(CARD_POS, CARD_SIZE);

/// Draw the assistant card.
///
/// The corners outside the rounded rectangle are repainted with the
/// background first, so the card can be redrawn in place.
pub fn draw_assistant_card<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_background(display, &CARD_AREA);
    RoundedRectangle::with_equal_corners(CARD_AREA, CARD_CORNER)
        .into_styled(CARD_FILL)
        .draw(display)
        .ok();

    draw_icon_tile(display);

    Text::with_text_style(ASSISTANT_TITLE, TITLE_POS, CARD_TITLE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let line_height = BODY_FONT.character_size.height as i32 + LINE_SPACING;
    let mut y = TITLE_POS.y + LABEL_FONT.character_size.height as i32 + TITLE_GAP;
    for line in wrap_text(ASSISTANT_MESSAGE, chars_per_line(BODY_FONT, TEXT_WIDTH)) {
        Text::with_text_style(line, Point::new(TEXT_X, y), CARD_BODY_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
        y += line_height;
    }
}

fn draw_icon_tile<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let tile = Rectangle::new(ICON_POS, Size::new(ICON_SIZE, ICON_SIZE));
    RoundedRectangle::with_equal_corners(tile, ICON_CORNER)
        .into_styled(ICON_FILL)
        .draw(display)
        .ok();

    // Bars share a baseline 12px above the tile bottom
    let baseline = ICON_POS.y + ICON_SIZE as i32 - 12;
    for (dx, height) in EQUALIZER_BARS {
        Rectangle::new(
            Point::new(ICON_POS.x + dx, baseline - height as i32),
            Size::new(EQUALIZER_BAR_WIDTH, height),
        )
        .into_styled(EQUALIZER_FILL)
        .draw(display)
        .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, WHITE};
    use crate::config::{NAV_BAR_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::test_support::Framebuffer;

    #[test]
    fn test_message_fits_card() {
        let lines = wrap_text(ASSISTANT_MESSAGE, chars_per_line(BODY_FONT, TEXT_WIDTH));
        assert!(lines.len() >= 2, "Message should wrap");
        let line_height = BODY_FONT.character_size.height as i32 + LINE_SPACING;
        let text_bottom =
            TITLE_POS.y + LABEL_FONT.character_size.height as i32 + TITLE_GAP + lines.len() as i32 * line_height;
        assert!(
            text_bottom <= CARD_Y + (CARD_HEIGHT - CARD_PADDING / 2) as i32,
            "Message should end inside the card (bottom {text_bottom})"
        );
    }

    #[test]
    fn test_message_lines_keep_every_word() {
        let lines = wrap_text(ASSISTANT_MESSAGE, chars_per_line(BODY_FONT, TEXT_WIDTH));
        let words: usize = lines.iter().map(|l| l.split(' ').count()).sum();
        assert_eq!(words, ASSISTANT_MESSAGE.split(' ').count());
        assert!(lines.last().unwrap().ends_with("120\u{a0}TL."));
    }

    #[test]
    fn test_card_drawn_within_area() {
        let mut fb = Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT, BLACK);
        draw_assistant_card(&mut fb);

        let center = CARD_POS + Point::new(CARD_WIDTH as i32 / 2, CARD_HEIGHT as i32 - 4);
        assert_eq!(fb.pixel(center), Some(CARD), "Card fill near the bottom edge");
        assert!(fb.count_in(&CARD_AREA, WHITE) > 0, "Message text should be drawn");
        assert!(fb.count_in(&CARD_AREA, CYAN) > 0, "Equalizer glyph should be drawn");
        assert_eq!(fb.pixel(Point::new(CARD_POS.x, NAV_BAR_Y)), Some(BLACK), "Card must not touch the nav bar");
        assert_eq!(fb.pixel(CARD_POS - Point::new(1, 1)), Some(BLACK));
    }

    #[test]
    fn test_icon_tile_size() {
        let mut fb = Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT, BLACK);
        draw_assistant_card(&mut fb);

        // Middle of each tile edge; the rounded corners are skipped
        let half = ICON_SIZE as i32 / 2;
        let last = ICON_SIZE as i32 - 1;
        for edge in [Point::new(half, 0), Point::new(half, last), Point::new(0, half), Point::new(last, half)] {
            assert_eq!(fb.pixel(ICON_POS + edge), Some(CARD_ICON_TILE), "Tile edge at {edge:?}");
        }
        assert_eq!(fb.pixel(ICON_POS + Point::new(ICON_SIZE as i32, half)), Some(CARD), "Card fill past the tile");
        assert_eq!(ICON_SIZE, 60);
    }
}
