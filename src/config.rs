//! Application configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! The screen is a fixed portrait layout, so every region origin and size is
//! a `const` derived from the ones above it. Widgets import these instead of
//! recomputing positions each frame.
//!
//! ```text
//! ┌──────────────────────────────┐ 0
//! │         STATUS BAR           │ 40
//! ├──────────────────────────────┤
//! │                              │
//! │    RINGS (400x400 canvas)    │ 500
//! │    + metric overlay + car    │
//! │                              │
//! ├──────────────────────────────┤ 540
//! │            gap               │ 32
//! │    ASSISTANT CARD            │ 104
//! ├──────────────────────────────┤ 680
//! │    NAVIGATION BAR            │ 80
//! └──────────────────────────────┘ 760
//! ```

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Display Configuration
// =============================================================================

/// Screen width in pixels.
pub const SCREEN_WIDTH: u32 = 400;

/// Screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 760;

/// Horizontal screen center.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Status Bar
// =============================================================================

/// Height of the status bar spacer at the top of the screen.
pub const STATUS_BAR_HEIGHT: u32 = 40;

// =============================================================================
// Rings Region
// =============================================================================

/// Top of the region holding the rings, overlay and car placeholder.
pub const RINGS_REGION_Y: i32 = STATUS_BAR_HEIGHT as i32;

/// Height of the rings region.
pub const RINGS_REGION_HEIGHT: u32 = 500;

/// Vertical center of the rings region.
pub const RINGS_CENTER_Y: i32 = RINGS_REGION_Y + (RINGS_REGION_HEIGHT / 2) as i32;

/// Side of the square ring canvas. Ring radii are specified for this size.
pub const REFERENCE_CANVAS: u32 = 400;

/// Ring canvas size on screen.
pub const RING_CANVAS_SIZE: Size = Size::new(REFERENCE_CANVAS, REFERENCE_CANVAS);

/// Top-left corner of the ring canvas (centered in the rings region).
pub const RING_CANVAS_ORIGIN: Point = Point::new(
    CENTER_X - (REFERENCE_CANVAS / 2) as i32,
    RINGS_CENTER_Y - (REFERENCE_CANVAS / 2) as i32,
);

/// The metric overlay column is centered this far above the region center.
pub const OVERLAY_OFFSET_Y: i32 = -40;

/// The car placeholder is centered this far below the region center.
pub const CAR_OFFSET_Y: i32 = 140;

// =============================================================================
// Assistant Card
// =============================================================================

/// Gap between the rings region and the card.
pub const CARD_GAP: u32 = 32;

/// Horizontal margin on both sides of the card.
pub const CARD_MARGIN_X: u32 = 24;

/// Top edge of the card.
pub const CARD_Y: i32 = RINGS_REGION_Y + RINGS_REGION_HEIGHT as i32 + CARD_GAP as i32;

/// Card width.
pub const CARD_WIDTH: u32 = SCREEN_WIDTH - 2 * CARD_MARGIN_X;

/// Card height.
pub const CARD_HEIGHT: u32 = 104;

/// Inner padding of the card.
pub const CARD_PADDING: u32 = 16;

// =============================================================================
// Navigation Bar
// =============================================================================

/// Height of the bottom navigation bar.
pub const NAV_BAR_HEIGHT: u32 = 80;

/// Top edge of the navigation bar.
pub const NAV_BAR_Y: i32 = (SCREEN_HEIGHT - NAV_BAR_HEIGHT) as i32;

// =============================================================================
// Unit Tests
// =============================================================================
