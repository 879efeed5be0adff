//! Low-level drawing primitives shared across widgets.
//!
//! # Background Gradient
//!
//! The screen background is a vertical gradient spanning the whole display.
//! Widgets that repaint only part of the screen call [`fill_background`] with
//! their own area; each row gets the color it would have in a full-screen
//! fill, so partial repaints leave no seams.
//!
//! # Text Measuring and Wrapping
//!
//! Mono fonts have a fixed advance, so text width is a character count times
//! the glyph pitch. [`wrap_text`] splits on spaces without allocating.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::colors::{BACKGROUND_STOPS, gradient};
use crate::config::SCREEN_HEIGHT;

/// Maximum number of lines [`wrap_text`] returns.
pub const MAX_WRAPPED_LINES: usize = 6;

/// Background color of screen row `y`.
pub fn background_at(y: i32) -> Rgb565 {
    let fraction = y as f32 / (SCREEN_HEIGHT - 1) as f32;
    gradient(&BACKGROUND_STOPS, fraction)
}

/// Repaint `area` with the screen background, one row at a time.
pub fn fill_background<D>(
    display: &mut D,
    area: &Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if area.is_zero_sized() {
        return;
    }
    for y in area.rows() {
        let row = Rectangle::new(Point::new(area.top_left.x, y), Size::new(area.size.width, 1));
        display.fill_solid(&row, background_at(y)).ok();
    }
}

/// Width in pixels of `text` set in `font`.
pub fn text_width(
    font: &MonoFont,
    text: &str,
) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * font.character_size.width + (chars - 1) * font.character_spacing
}

/// Characters of `font` that fit in `width` pixels.
pub fn chars_per_line(
    font: &MonoFont,
    width: u32,
) -> usize {
    let pitch = font.character_size.width + font.character_spacing;
    ((width + font.character_spacing) / pitch.max(1)) as usize
}

/// Split `text` at spaces into lines of at most `max_chars` characters.
///
/// A single word longer than `max_chars` gets a line of its own. Lines past
/// [`MAX_WRAPPED_LINES`] are dropped.
pub fn wrap_text(
    text: &str,
    max_chars: usize,
) -> Vec<&str, MAX_WRAPPED_LINES> {
    let mut lines = Vec::new();
    // Byte range and character count of the line being built
    let mut line: Option<(usize, usize)> = None;
    let mut line_chars = 0;
    let mut offset = 0;

    for word in text.split(' ') {
        let word_start = offset;
        let word_end = word_start + word.len();
        offset = word_end + 1;
        if word.is_empty() {
            continue;
        }
        let word_chars = word.chars().count();

        match line {
            Some((start, _)) if line_chars + 1 + word_chars <= max_chars => {
                line = Some((start, word_end));
                line_chars += 1 + word_chars;
            }
            Some((start, end)) => {
                if lines.push(&text[start..end]).is_err() {
                    return lines;
                }
                line = Some((word_start, word_end));
                line_chars = word_chars;
            }
            None => {
                line = Some((word_start, word_end));
                line_chars = word_chars;
            }
        }
    }

    if let Some((start, end)) = line {
        lines.push(&text[start..end]).ok();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BACKGROUND, BACKGROUND_MID};
    use crate::test_support::Framebuffer;
    use embedded_graphics::mono_font::iso_8859_9::FONT_7X13;
    use profont::PROFONT_24_POINT;

    // -------------------------------------------------------------------------
    // Background Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_background_at_edges_and_middle() {
        assert_eq!(background_at(0), BACKGROUND, "Top row should be the darkest tone");
        assert_eq!(background_at(SCREEN_HEIGHT as i32 - 1), BACKGROUND, "Bottom row should be the darkest tone");
        // First row past the midpoint lands on the middle stop
        assert_eq!(background_at(SCREEN_HEIGHT as i32 / 2), BACKGROUND_MID);
    }

    #[test]
    fn test_fill_background_rows() {
        let mut fb = Framebuffer::new(20, 40, Rgb565::RED);
        fill_background(&mut fb, &Rectangle::new(Point::new(5, 10), Size::new(10, 20)));

        assert_eq!(fb.pixel(Point::new(5, 10)), Some(background_at(10)));
        assert_eq!(fb.pixel(Point::new(14, 29)), Some(background_at(29)));
        assert_eq!(fb.pixel(Point::new(4, 10)), Some(Rgb565::RED), "Left of the area should be untouched");
        assert_eq!(fb.pixel(Point::new(5, 30)), Some(Rgb565::RED), "Below the area should be untouched");
        assert_eq!(fb.draw_calls(), 20, "One fill per row");
    }

    #[test]
    fn test_fill_background_empty_area() {
        let mut fb = Framebuffer::new(10, 10, Rgb565::RED);
        fill_background(&mut fb, &Rectangle::new(Point::zero(), Size::zero()));
        assert_eq!(fb.draw_calls(), 0);
    }

    // -------------------------------------------------------------------------
    // Measuring Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_text_width_counts_chars_not_bytes() {
        assert_eq!(text_width(&FONT_7X13, ""), 0);
        assert_eq!(text_width(&FONT_7X13, "kWh"), 21);
        // "AŞ" is three bytes but two glyphs
        assert_eq!(text_width(&FONT_7X13, "AŞ"), 14);
    }

    #[test]
    fn test_text_width_includes_spacing() {
        let font = &PROFONT_24_POINT;
        let expected = 3 * font.character_size.width + 2 * font.character_spacing;
        assert_eq!(text_width(font, "-17"), expected);
    }

    #[test]
    fn test_chars_per_line() {
        assert_eq!(chars_per_line(&FONT_7X13, 70), 10);
        assert_eq!(chars_per_line(&FONT_7X13, 6), 0);
    }

    // -------------------------------------------------------------------------
    // Wrapping Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_wrap_text_greedy() {
        let lines = wrap_text("Ev dışı şarj öneriliyor.", 12);
        assert_eq!(lines.as_slice(), ["Ev dışı şarj", "öneriliyor."]);
    }

    #[test]
    fn test_wrap_text_fits_on_one_line() {
        let lines = wrap_text("Tahmini ek maliyet", 40);
        assert_eq!(lines.as_slice(), ["Tahmini ek maliyet"]);
    }

    #[test]
    fn test_wrap_text_long_word_and_extra_spaces() {
        let lines = wrap_text("a  İstatistikler b", 5);
        assert_eq!(lines.as_slice(), ["a", "İstatistikler", "b"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_text_caps_line_count() {
        let lines = wrap_text("a b c d e f g h", 1);
        assert_eq!(lines.len(), MAX_WRAPPED_LINES);
        assert_eq!(lines[MAX_WRAPPED_LINES - 1], "f");
    }
}
