//! Figures shown in the center of the rings.
//!
//! These are fixed display strings. Nothing here is computed from the ring
//! angles or from any data source.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{CYAN, ORANGE, PINK};
use crate::rings::{RING_COUNT, RingId};

/// One row of the center overlay, tied to a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayMetric {
    pub ring: RingId,
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    /// Share of the period budget, shown next to the unit.
    pub percentage: Option<&'static str>,
    pub caption: &'static str,
    /// Label color, matching the ring.
    pub accent: Rgb565,
}

/// Overlay rows, outermost ring first.
pub const DISPLAY_METRICS: [DisplayMetric; RING_COUNT] = [
    DisplayMetric {
        ring: RingId::Outer,
        label: "OUTER RING",
        value: "1,260",
        unit: "kWh",
        percentage: None,
        caption: "YILLIK KALAN",
        accent: CYAN,
    },
    DisplayMetric {
        ring: RingId::Middle,
        label: "MIDDLE RING",
        value: "65",
        unit: "kWh",
        percentage: Some("80%"),
        caption: "BU AY KALAN",
        accent: ORANGE,
    },
    DisplayMetric {
        ring: RingId::Inner,
        label: "INNER RING",
        value: "-17",
        unit: "kWh",
        percentage: Some("40%"),
        caption: "HAFTA LİMİTİ AŞILDI",
        accent: PINK,
    },
];

impl DisplayMetric {
    /// Overlay row for `ring`.
    #[inline]
    pub const fn for_ring(ring: RingId) -> &'static Self { &DISPLAY_METRICS[ring.index()] }
}
