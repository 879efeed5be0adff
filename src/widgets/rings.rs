//! Rasterizes ring [`DrawCommand`]s onto a draw target.
//!
//! # Gradient Arcs
//!
//! embedded-graphics strokes an `Arc` in a single color, so a sweep-gradient
//! stroke is split into short segments of at most [`ARC_SEGMENT_DEG`], each
//! filled with the brush color at its midpoint. Neighbouring segments overlap
//! by [`SEGMENT_OVERLAP_DEG`] so rounding never leaves a hairline gap.
//!
//! # Round Caps
//!
//! Open arcs get a filled circle of the stroke width at each end.
//!
//! # Opacity
//!
//! Every color is blended against `backdrop` before it is drawn.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle};

use crate::animations::RingAngles;
use crate::colors::blend;
use crate::render::{ArcStroke, Brush, DrawCommand, Dot, ring_commands};

/// Longest gradient segment, in degrees.
pub const ARC_SEGMENT_DEG: f32 = 6.0;

/// Extra sweep added to each gradient segment.
const SEGMENT_OVERLAP_DEG: f32 = 0.5;

/// Pixel diameter of a circle with `radius`, at least 1.
#[inline]
fn diameter(radius: f32) -> u32 { (libm::roundf(radius * 2.0) as u32).max(1) }

/// Pixel stroke width, at least 1.
#[inline]
fn stroke_px(width: f32) -> u32 { (libm::roundf(width) as u32).max(1) }

/// Paint `commands` with the canvas placed at `origin`.
pub fn draw_ring_commands<D>(
    display: &mut D,
    origin: Point,
    commands: &[DrawCommand],
    backdrop: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for command in commands {
        match command {
            DrawCommand::StrokeArc(arc) => draw_arc(display, origin, arc, backdrop),
            DrawCommand::FillCircle(dot) => draw_dot(display, origin, dot, backdrop),
        }
    }
}

/// Build and paint the rings for a `canvas`-sized area at `origin`.
///
/// Returns the number of commands painted; zero for an empty canvas.
pub fn draw_rings<D>(
    display: &mut D,
    origin: Point,
    canvas: Size,
    angles: &RingAngles,
    backdrop: Rgb565,
) -> usize
where
    D: DrawTarget<Color = Rgb565>,
{
    let commands = ring_commands(canvas, angles);
    draw_ring_commands(display, origin, &commands, backdrop);
    commands.len()
}

fn draw_arc<D>(
    display: &mut D,
    origin: Point,
    arc: &ArcStroke,
    backdrop: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = origin + arc.center.round();
    let size = diameter(arc.radius);
    let width = stroke_px(arc.width);

    match arc.brush {
        Brush::Solid(color) => {
            let style = PrimitiveStyle::with_stroke(blend(color, backdrop, arc.opacity), width);
            if arc.is_closed() {
                Circle::with_center(center, size).into_styled(style).draw(display).ok();
            } else {
                Arc::with_center(center, size, arc.start_deg.deg(), arc.sweep_deg.deg())
                    .into_styled(style)
                    .draw(display)
                    .ok();
            }
        }
        Brush::Sweep { .. } => {
            let segments = libm::ceilf(arc.sweep_deg / ARC_SEGMENT_DEG).max(1.0);
            let step = arc.sweep_deg / segments;
            for i in 0..segments as u32 {
                let start = arc.start_deg + i as f32 * step;
                let color = blend(arc.brush.color_at(start + step / 2.0), backdrop, arc.opacity);
                let is_last = i + 1 == segments as u32;
                let sweep = if is_last && !arc.is_closed() { step } else { step + SEGMENT_OVERLAP_DEG };
                Arc::with_center(center, size, start.deg(), sweep.deg())
                    .into_styled(PrimitiveStyle::with_stroke(color, width))
                    .draw(display)
                    .ok();
            }
        }
    }

    if arc.round_caps && !arc.is_closed() {
        let cap = diameter(arc.width / 2.0);
        for end in [arc.start_deg, arc.start_deg + arc.sweep_deg] {
            let color = blend(arc.brush.color_at(end), backdrop, arc.opacity);
            let position = origin + arc.center.polar(arc.radius, end).round();
            Circle::with_center(position, cap)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display)
                .ok();
        }
    }
}

fn draw_dot<D>(
    display: &mut D,
    origin: Point,
    dot: &Dot,
    backdrop: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(origin + dot.center.round(), diameter(dot.radius))
        .into_styled(PrimitiveStyle::with_fill(blend(dot.color, backdrop, dot.opacity)))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animations::{RingAngle, RingAnimator};
    use crate::colors::{BLACK, CYAN, PINK};
    use crate::rings::{GLOW_OPACITY, PointF, RingId};
    use crate::test_support::Framebuffer;
    use core::time::Duration;
    use embedded_graphics::primitives::Rectangle;

    const CANVAS: Size = Size::new(400, 400);

    fn painted(angles: &RingAngles) -> Framebuffer {
        let mut fb = Framebuffer::new(400, 400, BLACK);
        draw_rings(&mut fb, Point::zero(), CANVAS, angles, BLACK);
        fb
    }

    fn on_ring(ring: RingId, degrees: f32) -> Point {
        PointF::new(200.0, 200.0).polar(ring.spec().radius, degrees).round()
    }

    #[test]
    fn test_zero_canvas_draws_nothing() {
        let mut fb = Framebuffer::new(400, 400, BLACK);
        let angles = RingAnimator::new().angles(Duration::from_millis(777));
        let count = draw_rings(&mut fb, Point::zero(), Size::zero(), &angles, BLACK);

        assert_eq!(count, 0, "No commands for an empty canvas");
        assert_eq!(fb.draw_calls(), 0, "No draw calls for an empty canvas");
        assert_eq!(fb.pixels_written(), 0);
    }

    #[test]
    fn test_draw_rings_reports_command_count() {
        let mut fb = Framebuffer::new(400, 400, BLACK);
        let count = draw_rings(&mut fb, Point::zero(), CANVAS, &RingAngles::ZERO, BLACK);
        assert_eq!(count, crate::render::MAX_RING_COMMANDS);
        assert!(fb.draw_calls() > count, "Gradient arcs paint several segments each");
    }

    #[test]
    fn test_outer_ring_fully_painted() {
        let fb = painted(&RingAngles::ZERO);
        for step in 0..36 {
            let point = on_ring(RingId::Outer, step as f32 * 10.0 + 5.0);
            let color = fb.pixel(point).unwrap();
            assert_ne!(color, BLACK, "Outer ring should have no gap at {point:?}");
        }
    }

    #[test]
    fn test_outer_ring_stroke_is_cyan() {
        let fb = painted(&RingAngles::ZERO);
        // The first stop sits at the ring angle (3 o'clock at 0°); 20° is between particles
        let color = fb.pixel(on_ring(RingId::Outer, 20.0)).unwrap();
        assert!(color.g() >= CYAN.g() - 4, "Stroke near the first stop should be close to cyan, got {color:?}");
    }

    #[test]
    fn test_middle_ring_gap_left_unpainted() {
        // Unrotated middle arc covers -90° .. 198°, leaving 198° .. 270° open
        let fb = painted(&RingAngles::ZERO);
        assert_eq!(fb.pixel(on_ring(RingId::Middle, 234.0)), Some(BLACK), "Middle ring gap should stay empty");
        assert_ne!(fb.pixel(on_ring(RingId::Middle, 90.0)), Some(BLACK), "Middle arc should be painted");
    }

    #[test]
    fn test_inner_arc_rotates() {
        // Inner arc covers -90° .. 54° unrotated; rotated by 180° it covers 90° .. 234°
        let rotated = RingAngles::new(RingAngle::ZERO, RingAngle::ZERO, RingAngle::from_degrees(180.0));
        let still = painted(&RingAngles::ZERO);
        let moved = painted(&rotated);

        let top = on_ring(RingId::Inner, -20.0);
        let bottom = on_ring(RingId::Inner, 160.0);
        assert_ne!(still.pixel(top), Some(BLACK));
        assert_eq!(still.pixel(bottom), Some(BLACK));
        assert_eq!(moved.pixel(top), Some(BLACK), "Rotated arc should leave its old position");
        assert_ne!(moved.pixel(bottom), Some(BLACK), "Rotated arc should reach its new position");
    }

    #[test]
    fn test_glow_blended_against_backdrop() {
        // Glow pixel just outside the inner ring stroke, away from particles
        let fb = painted(&RingAngles::ZERO);
        let glow = PointF::new(200.0, 200.0).polar(90.0 + 5.0, 20.0).round();
        assert_eq!(fb.pixel(glow), Some(blend(PINK, BLACK, GLOW_OPACITY)));
    }

    #[test]
    fn test_origin_offsets_painting() {
        let mut fb = Framebuffer::new(400, 500, BLACK);
        draw_rings(&mut fb, Point::new(0, 100), CANVAS, &RingAngles::ZERO, BLACK);
        let above = Rectangle::new(Point::zero(), Size::new(400, 100));
        assert_eq!(fb.count_in(&above, BLACK), 400 * 100, "Nothing should be painted above the origin");
    }
}
