//! Ring specifications and geometry.
//!
//! The dashboard shows three concentric rings. Each ring is fully described
//! by a compile-time [`RingSpec`]; the only per-frame input is its current
//! rotation angle (see [`animations`](crate::animations)).
//!
//! # Angle Convention
//!
//! Angles are in degrees, measured clockwise from the positive X axis in
//! screen coordinates (Y grows downward). `-90°` therefore points straight
//! up, which is where every arc starts before rotation.
//!
//! # Scaling
//!
//! Radii and stroke widths are specified for a 400×400 reference canvas.
//! [`RingLayout`] scales them to the actual canvas by the shorter side.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{Point, Size};

use crate::animations::RingAngle;
use crate::colors::{CYAN, CYAN_STOPS, ORANGE, ORANGE_STOPS, PINK, PINK_STOPS};
use crate::config::REFERENCE_CANVAS;

/// Number of rings on the dashboard.
pub const RING_COUNT: usize = 3;

/// Angle at which every arc starts before rotation (12 o'clock).
pub const ARC_START_DEG: f32 = -90.0;

/// Opacity of the glow stroke relative to the ring's base color.
pub const GLOW_OPACITY: f32 = 0.3;

/// Opacity of particle dots relative to the ring's base color.
pub const PARTICLE_OPACITY: f32 = 0.6;

// =============================================================================
// Ring Identity
// =============================================================================

/// Identifies one of the three rings, outermost first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RingId {
    /// Cyan full circle, slowest rotation.
    Outer,
    /// Orange 80% arc.
    Middle,
    /// Pink 40% arc, fastest rotation.
    Inner,
}

impl RingId {
    /// All rings in draw order (outermost first).
    pub const ALL: [Self; RING_COUNT] = [Self::Outer, Self::Middle, Self::Inner];

    /// Position of this ring in [`RING_SPECS`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Outer => 0,
            Self::Middle => 1,
            Self::Inner => 2,
        }
    }

    /// Static specification of this ring.
    #[inline]
    pub const fn spec(self) -> &'static RingSpec { &RING_SPECS[self.index()] }
}

// =============================================================================
// Ring Specification
// =============================================================================

/// Constant attributes of one ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSpec {
    pub id: RingId,
    /// Radius on the reference canvas, in pixels.
    pub radius: f32,
    /// Portion of the full circle covered by the arc (0.0-1.0].
    pub sweep_fraction: f32,
    /// Main stroke width on the reference canvas.
    pub stroke_width: f32,
    /// Glow stroke width on the reference canvas.
    pub glow_width: f32,
    /// Base color; glow and particles are derived from it.
    pub base_color: Rgb565,
    /// Sweep gradient stops, evenly spaced around the ring.
    pub palette: &'static [Rgb565],
    /// Number of particle dots.
    pub particle_count: usize,
    /// Angular distance between consecutive particles, in degrees.
    pub particle_spacing_deg: f32,
    /// Phase offset of particle 0 relative to the ring angle, in degrees.
    pub particle_phase_deg: f32,
    /// Particle dot radius on the reference canvas.
    pub particle_radius: f32,
    /// Duration of one full rotation in milliseconds.
    pub period_ms: u32,
}

impl RingSpec {
    /// Arc sweep in degrees (360 for a full circle).
    #[inline]
    pub fn sweep_degrees(&self) -> f32 { self.sweep_fraction * 360.0 }

    /// Start angle of the arc after rotating by `angle`.
    #[inline]
    pub fn arc_start(&self, angle: RingAngle) -> f32 { ARC_START_DEG + angle.degrees() }

    /// Angle of particle `i` for the current ring angle, in degrees.
    ///
    /// `θ = angle + phase + i * spacing`. Not wrapped; callers only feed it to
    /// `cos`/`sin`.
    #[inline]
    pub fn particle_angle(&self, angle: RingAngle, i: usize) -> f32 {
        angle.degrees() + self.particle_phase_deg + i as f32 * self.particle_spacing_deg
    }
}

/// Outer, middle and inner ring specifications.
pub const RING_SPECS: [RingSpec; RING_COUNT] = [
    RingSpec {
        id: RingId::Outer,
        radius: 180.0,
        sweep_fraction: 1.0,
        stroke_width: 8.0,
        glow_width: 16.0,
        base_color: CYAN,
        palette: &CYAN_STOPS,
        particle_count: 9,
        particle_spacing_deg: 40.0,
        particle_phase_deg: 0.0,
        particle_radius: 2.0,
        period_ms: 20_000,
    },
    RingSpec {
        id: RingId::Middle,
        radius: 135.0,
        sweep_fraction: 0.8,
        stroke_width: 7.0,
        glow_width: 14.0,
        base_color: ORANGE,
        palette: &ORANGE_STOPS,
        particle_count: 7,
        particle_spacing_deg: 45.0,
        particle_phase_deg: ARC_START_DEG,
        particle_radius: 1.8,
        period_ms: 15_000,
    },
    RingSpec {
        id: RingId::Inner,
        radius: 90.0,
        sweep_fraction: 0.4,
        stroke_width: 6.0,
        glow_width: 12.0,
        base_color: PINK,
        palette: &PINK_STOPS,
        particle_count: 5,
        particle_spacing_deg: 35.0,
        particle_phase_deg: ARC_START_DEG,
        particle_radius: 1.5,
        period_ms: 10_000,
    },
];

/// Total particle dots across all rings.
pub const TOTAL_PARTICLES: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < RING_COUNT {
        total += RING_SPECS[i].particle_count;
        i += 1;
    }
    total
};

// =============================================================================
// Geometry
// =============================================================================

/// A sub-pixel position on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    /// Point at `radius` from `self` in direction `degrees`.
    pub fn polar(self, radius: f32, degrees: f32) -> Self {
        let theta = degrees.to_radians();
        Self::new(
            self.x + radius * libm::cosf(theta),
            self.y + radius * libm::sinf(theta),
        )
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }

    /// Nearest integer pixel.
    pub fn round(self) -> Point { Point::new(libm::roundf(self.x) as i32, libm::roundf(self.y) as i32) }
}

/// Ring placement for a concrete canvas size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    /// Canvas center, relative to the canvas origin.
    pub center: PointF,
    /// Multiplier from reference-canvas units to canvas pixels.
    pub scale: f32,
}

impl RingLayout {
    /// Compute the layout for a canvas of `size`.
    ///
    /// Returns `None` when either side is zero; callers draw nothing then.
    pub fn for_canvas(size: Size) -> Option<Self> {
        if size.width == 0 || size.height == 0 {
            return None;
        }
        let side = size.width.min(size.height) as f32;
        Some(Self {
            center: PointF::new(size.width as f32 / 2.0, size.height as f32 / 2.0),
            scale: side / REFERENCE_CANVAS as f32,
        })
    }

    /// Scaled ring radius.
    #[inline]
    pub fn radius(&self, spec: &RingSpec) -> f32 { spec.radius * self.scale }

    /// Scaled length (stroke width, dot radius). Never below one pixel.
    #[inline]
    pub fn length(&self, reference: f32) -> f32 { (reference * self.scale).max(1.0) }

    /// Position of particle `i` of `spec` at `angle`.
    pub fn particle_position(&self, spec: &RingSpec, angle: RingAngle, i: usize) -> PointF {
        self.center.polar(self.radius(spec), spec.particle_angle(angle, i))
    }

    /// Positions of every particle of `spec` at `angle`.
    pub fn particles<'a>(&'a self, spec: &'a RingSpec, angle: RingAngle) -> impl Iterator<Item = PointF> + 'a {
        (0..spec.particle_count).map(move |i| self.particle_position(spec, angle, i))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
