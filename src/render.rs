//! Ring draw commands and render state tracking.
//!
//! # Draw Commands
//!
//! [`ring_commands`] turns the three ring angles into a flat list of
//! [`DrawCommand`]s for a canvas of a given size. The list is a plain value:
//! it can be inspected in tests and painted onto any `DrawTarget` by
//! [`draw_ring_commands`](crate::widgets::draw_ring_commands).
//!
//! Per ring, in paint order:
//!
//! | Command | Brush | Opacity |
//! |---------|-------|---------|
//! | Glow arc | Base color | 0.3 |
//! | Stroke arc | Sweep gradient | 1.0 |
//! | Particle dots | Base color | 0.6 |
//!
//! The glow is emitted first so the main stroke paints over its center.
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Rings region | Every frame | Always redraw (rings animate) |
//! | Status bar | On FPS change | Conditional redraw |
//! | Assistant card | Once | Draw-once tracking |
//! | Navigation bar | On tab change | Conditional redraw |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Size;
use heapless::Vec;

use crate::animations::{FULL_TURN, RingAngle, RingAngles};
use crate::colors::gradient;
use crate::rings::{GLOW_OPACITY, PARTICLE_OPACITY, PointF, RING_COUNT, RING_SPECS, RingId, RingLayout, TOTAL_PARTICLES};
use crate::tabs::Tab;

// =============================================================================
// Draw Commands
// =============================================================================

/// Glow and main stroke per ring, plus one command per particle.
pub const MAX_RING_COMMANDS: usize = RING_COUNT * 2 + TOTAL_PARTICLES;

/// Fixed-capacity command list for one frame.
pub type RingCommands = Vec<DrawCommand, MAX_RING_COMMANDS>;

/// How a stroke colors its pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    /// A single color.
    Solid(Rgb565),
    /// Angular gradient around the canvas center.
    ///
    /// The first stop sits at `origin_deg` and the stops are spread evenly
    /// clockwise around the full circle, the last one meeting the first.
    Sweep {
        stops: &'static [Rgb565],
        origin_deg: f32,
    },
}

impl Brush {
    /// Color of the brush at `degrees` around the center.
    pub fn color_at(&self, degrees: f32) -> Rgb565 {
        match *self {
            Self::Solid(color) => color,
            Self::Sweep { stops, origin_deg } => {
                let offset = RingAngle::from_degrees(degrees - origin_deg).degrees();
                gradient(stops, offset / FULL_TURN)
            }
        }
    }
}

/// A stroked circular arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcStroke {
    pub ring: RingId,
    pub center: PointF,
    pub radius: f32,
    /// Start angle in degrees (clockwise from 3 o'clock).
    pub start_deg: f32,
    /// Sweep in degrees; 360 draws a closed circle.
    pub sweep_deg: f32,
    pub width: f32,
    pub brush: Brush,
    pub opacity: f32,
    /// Whether the open ends get round caps.
    pub round_caps: bool,
}

impl ArcStroke {
    /// Whether the arc closes on itself (no ends, no caps).
    #[inline]
    pub fn is_closed(&self) -> bool { self.sweep_deg >= FULL_TURN }
}

/// A filled dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub ring: RingId,
    pub center: PointF,
    pub radius: f32,
    pub color: Rgb565,
    pub opacity: f32,
}

/// One primitive to paint, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    StrokeArc(ArcStroke),
    FillCircle(Dot),
}

/// Build the draw commands for all rings on a canvas of `canvas` size.
///
/// Returns an empty list for a canvas with a zero side. The output depends
/// only on `canvas` and `angles`.
pub fn ring_commands(
    canvas: Size,
    angles: &RingAngles,
) -> RingCommands {
    let mut commands = RingCommands::new();
    let Some(layout) = RingLayout::for_canvas(canvas) else {
        return commands;
    };

    for spec in &RING_SPECS {
        let angle = angles.get(spec.id);
        let arc = ArcStroke {
            ring: spec.id,
            center: layout.center,
            radius: layout.radius(spec),
            start_deg: spec.arc_start(angle),
            sweep_deg: spec.sweep_degrees(),
            width: layout.length(spec.glow_width),
            brush: Brush::Solid(spec.base_color),
            opacity: GLOW_OPACITY,
            round_caps: true,
        };
        let stroke = ArcStroke {
            width: layout.length(spec.stroke_width),
            brush: Brush::Sweep { stops: spec.palette, origin_deg: angle.degrees() },
            opacity: 1.0,
            ..arc
        };
        // Capacity is sized from RING_SPECS, pushes cannot fail
        commands.push(DrawCommand::StrokeArc(arc)).ok();
        commands.push(DrawCommand::StrokeArc(stroke)).ok();

        let dot_radius = layout.length(spec.particle_radius);
        for center in layout.particles(spec, angle) {
            commands
                .push(DrawCommand::FillCircle(Dot {
                    ring: spec.id,
                    center,
                    radius: dot_radius,
                    color: spec.base_color,
                    opacity: PARTICLE_OPACITY,
                }))
                .ok();
        }
    }

    commands
}

// =============================================================================
// Render State
// =============================================================================

/// Tracks render state for optimized display updates.
///
/// Manages conditional redraws for the static parts of the screen. The rings
/// region is not tracked: it animates and is repainted every frame.
pub struct RenderState {
    /// Whether the assistant card has been drawn (only need to draw once).
    card_drawn: bool,

    /// Previous FPS display state.
    prev_show_fps: bool,

    /// Previous FPS value as displayed.
    prev_fps: u32,

    /// Tab highlighted in the last drawn navigation bar.
    prev_tab: Option<Tab>,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            card_drawn: false,
            prev_show_fps: false,
            prev_fps: 0,
            prev_tab: None,
            first_frame: true,
        }
    }

    /// Check if the assistant card needs drawing.
    #[inline]
    pub const fn need_card(&self) -> bool { !self.card_drawn || self.first_frame }

    /// Mark the assistant card as drawn.
    #[inline]
    pub const fn mark_card_drawn(&mut self) { self.card_drawn = true; }

    /// Check if the status bar needs redrawing.
    ///
    /// `fps` is the value as it will be displayed (already rounded).
    pub const fn check_status_dirty(
        &mut self,
        show_fps: bool,
        fps: u32,
    ) -> bool {
        let dirty = self.first_frame
            || show_fps != self.prev_show_fps
            || (show_fps && fps != self.prev_fps);

        self.prev_show_fps = show_fps;
        self.prev_fps = fps;
        dirty
    }

    /// Check if the navigation bar needs redrawing for `tab`.
    pub fn check_nav_dirty(&mut self, tab: Tab) -> bool {
        let dirty = self.first_frame || self.prev_tab != Some(tab);
        self.prev_tab = Some(tab);
        dirty
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) { self.first_frame = false; }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
