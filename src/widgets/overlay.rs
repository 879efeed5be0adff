//! Center overlay: per-ring figures and the car placeholder.
//!
//! # Metric Column
//!
//! Three blocks stacked top to bottom, one per ring:
//!
//! ```text
//!        OUTER RING          <- label, ring accent
//!       1,260 kWh            <- value (white) + unit (dimmed)
//!      65 kWh 80%            <- percentage, ring accent
//!      YILLIK KALAN          <- caption (dimmed)
//! ```
//!
//! Value rows are centered as a whole: value, unit and optional percentage
//! are measured first, then drawn left to right with their bottoms aligned.
//! Value fonts shrink from the outer to the inner ring.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle},
    text::Text,
};

use super::primitives::text_width;
use crate::{
    colors::{CAR_DARK, CAR_ICON, CAR_LIGHT, WHITE, lerp},
    config::{CAR_OFFSET_Y, CENTER_X, OVERLAY_OFFSET_Y, RINGS_CENTER_Y},
    metrics::{DISPLAY_METRICS, DisplayMetric},
    rings::RingId,
    styles::{
        CAPTION_STYLE, CENTERED, LABEL_FONT, LEFT_ALIGNED, UNIT_FONT, UNIT_STYLE, UNIT_STYLE_LARGE,
        VALUE_FONT_LARGE, VALUE_FONT_MEDIUM, VALUE_FONT_SMALL,
    },
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Vertical center of the metric column.
pub const OVERLAY_CENTER: Point = Point::new(CENTER_X, RINGS_CENTER_Y + OVERLAY_OFFSET_Y);

/// Space between a value and its unit.
const UNIT_GAP: u32 = 4;

/// Space between the unit and the percentage.
const PERCENT_GAP: u32 = 8;

/// Space between label, value row and caption inside a block.
const LINE_GAP: u32 = 2;

/// Space between blocks.
const BLOCK_GAP: u32 = 8;

/// Center of the car placeholder.
pub const CAR_CENTER: Point = Point::new(CENTER_X, RINGS_CENTER_Y + CAR_OFFSET_Y);

/// Car placeholder box size.
pub const CAR_SIZE: Size = Size::new(120, 60);

/// Corner radius of the car placeholder.
const CAR_CORNER: Size = Size::new(8, 8);

/// Insets of the concentric fills that approximate the radial gradient.
const CAR_GRADIENT_INSETS: [u32; 3] = [0, 6, 14];

const CAR_ICON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CAR_ICON);
const CAR_WHEEL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CAR_DARK);

// =============================================================================
// Metric Column
// =============================================================================

/// Value font and unit style for each ring, outermost first.
const fn value_fonts(ring: RingId) -> (&'static MonoFont<'static>, MonoTextStyle<'static, Rgb565>) {
    match ring {
        RingId::Outer => (VALUE_FONT_LARGE, UNIT_STYLE_LARGE),
        RingId::Middle => (VALUE_FONT_MEDIUM, UNIT_STYLE),
        RingId::Inner => (VALUE_FONT_SMALL, UNIT_STYLE),
    }
}

/// Height of one metric block in pixels.
fn block_height(metric: &DisplayMetric) -> u32 {
    let (value_font, _) = value_fonts(metric.ring);
    2 * LABEL_FONT.character_size.height + value_font.character_size.height + 2 * LINE_GAP
}

/// Height of the whole metric column.
pub fn column_height() -> u32 {
    let blocks: u32 = DISPLAY_METRICS.iter().map(block_height).sum();
    blocks + BLOCK_GAP * (DISPLAY_METRICS.len() as u32 - 1)
}

/// Width of a metric's value row.
pub fn value_row_width(metric: &DisplayMetric) -> u32 {
    let (value_font, unit_style) = value_fonts(metric.ring);
    let mut width = text_width(value_font, metric.value) + UNIT_GAP + text_width(unit_style.font, metric.unit);
    if let Some(percentage) = metric.percentage {
        width += PERCENT_GAP + text_width(UNIT_FONT, percentage);
    }
    width
}

/// Draw all three metric blocks centered on [`OVERLAY_CENTER`].
pub fn draw_metric_overlay<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut top = OVERLAY_CENTER.y - (column_height() / 2) as i32;
    for metric in &DISPLAY_METRICS {
        draw_metric_block(display, metric, top);
        top += (block_height(metric) + BLOCK_GAP) as i32;
    }
}

fn draw_metric_block<D>(
    display: &mut D,
    metric: &DisplayMetric,
    top: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (value_font, unit_style) = value_fonts(metric.ring);
    let label_h = LABEL_FONT.character_size.height as i32;
    let value_h = value_font.character_size.height as i32;
    let gap = LINE_GAP as i32;

    let label_style = MonoTextStyle::new(LABEL_FONT, metric.accent);
    Text::with_text_style(metric.label, Point::new(OVERLAY_CENTER.x, top), label_style, CENTERED)
        .draw(display)
        .ok();

    // Value row: every part shares the bottom edge of the value glyphs
    let row_top = top + label_h + gap;
    let row_bottom = row_top + value_h;
    let mut x = OVERLAY_CENTER.x - (value_row_width(metric) / 2) as i32;

    let value_style = MonoTextStyle::new(value_font, WHITE);
    Text::with_text_style(metric.value, Point::new(x, row_top), value_style, LEFT_ALIGNED)
        .draw(display)
        .ok();
    x += (text_width(value_font, metric.value) + UNIT_GAP) as i32;

    let unit_top = row_bottom - unit_style.font.character_size.height as i32;
    Text::with_text_style(metric.unit, Point::new(x, unit_top), unit_style, LEFT_ALIGNED)
        .draw(display)
        .ok();

    if let Some(percentage) = metric.percentage {
        x += (text_width(unit_style.font, metric.unit) + PERCENT_GAP) as i32;
        let percent_top = row_bottom - UNIT_FONT.character_size.height as i32;
        let percent_style = MonoTextStyle::new(UNIT_FONT, metric.accent);
        Text::with_text_style(percentage, Point::new(x, percent_top), percent_style, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    Text::with_text_style(metric.caption, Point::new(OVERLAY_CENTER.x, row_bottom + gap), CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
}

// =============================================================================
// Car Placeholder
// =============================================================================

/// Bounding box of the car placeholder.
pub fn car_area() -> Rectangle { Rectangle::with_center(CAR_CENTER, CAR_SIZE) }

/// Draw the rounded car placeholder with a simple car glyph.
pub fn draw_car_placeholder<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let area = car_area();
    let steps = CAR_GRADIENT_INSETS.len() - 1;
    for (i, inset) in CAR_GRADIENT_INSETS.iter().enumerate() {
        let color = lerp(CAR_DARK, CAR_LIGHT, i as f32 / steps as f32);
        let rect = area.offset(-(*inset as i32));
        RoundedRectangle::with_equal_corners(rect, CAR_CORNER)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }

    draw_car_glyph(display, CAR_CENTER);
}

/// Side view of a car, 40×20, centered on `center`.
fn draw_car_glyph<D>(
    display: &mut D,
    center: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let body = Rectangle::new(center + Point::new(-20, -2), Size::new(40, 9));
    RoundedRectangle::with_equal_corners(body, Size::new(3, 3))
        .into_styled(CAR_ICON_FILL)
        .draw(display)
        .ok();

    // Cabin: a slanted roof over the body
    let roof = Rectangle::new(center + Point::new(-8, -9), Size::new(15, 7));
    roof.into_styled(CAR_ICON_FILL).draw(display).ok();
    Triangle::new(center + Point::new(-14, -2), center + Point::new(-8, -9), center + Point::new(-8, -2))
        .into_styled(CAR_ICON_FILL)
        .draw(display)
        .ok();
    Triangle::new(center + Point::new(7, -9), center + Point::new(13, -2), center + Point::new(7, -2))
        .into_styled(CAR_ICON_FILL)
        .draw(display)
        .ok();

    for wheel_x in [-11, 11] {
        let wheel = center + Point::new(wheel_x, 8);
        Circle::with_center(wheel, 9).into_styled(CAR_WHEEL_FILL).draw(display).ok();
        Circle::with_center(wheel, 5).into_styled(CAR_ICON_FILL).draw(display).ok();
    }
}
