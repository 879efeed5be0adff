//! Ring rotation animation.
//!
//! Each ring spins clockwise at a constant angular velocity, completing one
//! turn per [`RingSpec::period_ms`](crate::rings::RingSpec). The angle is a
//! pure function of elapsed time:
//!
//! ```text
//! angle(t) = (360 * t / period) mod 360
//! ```
//!
//! # No Accumulator
//!
//! Angles are never advanced frame by frame. The frame loop reads the clock
//! once and every ring derives its angle from that reading, so dropped or
//! slow frames cannot introduce drift and the three rings always agree on
//! the time.
//!
//! # Precision
//!
//! The phase is reduced modulo the period in integer microseconds before any
//! float math, so the angle stays exact for arbitrarily long uptimes. Only
//! the final scaling to degrees uses floating point.

use core::time::Duration;

use crate::rings::{RING_COUNT, RingId};

/// Degrees in a full turn.
pub const FULL_TURN: f32 = 360.0;

// =============================================================================
// Ring Angle
// =============================================================================

/// A rotation angle in degrees, always in `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct RingAngle(f32);

impl RingAngle {
    /// The unrotated position.
    pub const ZERO: Self = Self(0.0);

    /// Angle of a ring with `period_ms` after `elapsed` time.
    ///
    /// A zero period never rotates.
    pub fn at(
        elapsed: Duration,
        period_ms: u32,
    ) -> Self {
        if period_ms == 0 {
            return Self::ZERO;
        }
        let period_us = u128::from(period_ms) * 1_000;
        let phase_us = elapsed.as_micros() % period_us;
        let degrees = (phase_us as f64 * f64::from(FULL_TURN) / period_us as f64) as f32;
        // The f32 cast can round a phase just below the period up to 360.0
        if degrees >= FULL_TURN { Self::ZERO } else { Self(degrees) }
    }

    /// Wrap an arbitrary degree value into `[0, 360)`.
    ///
    /// Non-finite input maps to [`RingAngle::ZERO`].
    pub fn from_degrees(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return Self::ZERO;
        }
        let mut wrapped = degrees % FULL_TURN;
        if wrapped < 0.0 {
            wrapped += FULL_TURN;
        }
        if wrapped >= FULL_TURN { Self::ZERO } else { Self(wrapped) }
    }

    /// Angle in degrees.
    #[inline]
    pub const fn degrees(self) -> f32 { self.0 }
}

// =============================================================================
// Ring Animator
// =============================================================================

/// Angles of all three rings for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingAngles([RingAngle; RING_COUNT]);

impl RingAngles {
    /// All rings unrotated.
    pub const ZERO: Self = Self([RingAngle::ZERO; RING_COUNT]);

    /// Build from explicit outer, middle and inner angles.
    pub const fn new(
        outer: RingAngle,
        middle: RingAngle,
        inner: RingAngle,
    ) -> Self {
        Self([outer, middle, inner])
    }

    /// Angle of `ring`.
    #[inline]
    pub const fn get(&self, ring: RingId) -> RingAngle { self.0[ring.index()] }
}

/// Derives every ring's angle from a single clock reading.
///
/// Holds only the rotation periods; there is no timer to start, stop or
/// tear down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingAnimator {
    periods_ms: [u32; RING_COUNT],
}

impl RingAnimator {
    /// Animator using each ring's configured period.
    pub const fn new() -> Self {
        let mut periods_ms = [0; RING_COUNT];
        let mut i = 0;
        while i < RING_COUNT {
            periods_ms[i] = RingId::ALL[i].spec().period_ms;
            i += 1;
        }
        Self { periods_ms }
    }

    /// Rotation period of `ring` in milliseconds.
    #[inline]
    pub const fn period_ms(&self, ring: RingId) -> u32 { self.periods_ms[ring.index()] }

    /// Angle of a single ring at `elapsed`.
    #[inline]
    pub fn angle(
        &self,
        ring: RingId,
        elapsed: Duration,
    ) -> RingAngle {
        RingAngle::at(elapsed, self.period_ms(ring))
    }

    /// Angles of all rings at `elapsed`.
    pub fn angles(&self, elapsed: Duration) -> RingAngles {
        RingAngles(RingId::ALL.map(|ring| self.angle(ring, elapsed)))
    }
}

impl Default for RingAnimator {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
