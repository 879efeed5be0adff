//! The dashboard screen: rings, overlay, card and navigation bar.
//!
//! [`DashboardScreen`] owns the only mutable UI state (the selected tab and
//! the redraw bookkeeping) and draws one frame per call. The host supplies
//! the elapsed time, so the screen itself never reads a clock.
//!
//! # Frame Order
//!
//! 1. First frame only: clear the whole screen to the background gradient
//! 2. Status bar, if the FPS display changed
//! 3. Rings region: background, rings, metric overlay, car placeholder
//! 4. Assistant card, once
//! 5. Navigation bar, if the tab changed

use core::time::Duration;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::animations::RingAnimator;
use crate::config::{RING_CANVAS_ORIGIN, RING_CANVAS_SIZE, RINGS_CENTER_Y, RINGS_REGION_HEIGHT, RINGS_REGION_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render::RenderState;
use crate::tabs::{Tab, TabState};
use crate::widgets::{
    background_at,
    draw_assistant_card,
    draw_car_placeholder,
    draw_metric_overlay,
    draw_nav_bar,
    draw_rings,
    draw_status_bar,
    fill_background,
    hit_test,
};

/// Whole screen.
pub const SCREEN_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Area repainted every frame.
pub const RINGS_REGION: Rectangle =
    Rectangle::new(Point::new(0, RINGS_REGION_Y), Size::new(SCREEN_WIDTH, RINGS_REGION_HEIGHT));

/// What a call to [`DashboardScreen::draw_frame`] painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Ring draw commands painted this frame.
    pub ring_commands: usize,
    pub cleared: bool,
    pub status_redrawn: bool,
    pub card_redrawn: bool,
    pub nav_redrawn: bool,
}

/// State and drawing for the single dashboard screen.
pub struct DashboardScreen {
    animator: RingAnimator,
    tabs: TabState,
    render_state: RenderState,
}

impl DashboardScreen {
    pub const fn new(initial_tab: Tab) -> Self {
        Self {
            animator: RingAnimator::new(),
            tabs: TabState::new(initial_tab),
            render_state: RenderState::new(),
        }
    }

    /// Currently highlighted tab.
    #[inline]
    pub const fn selected_tab(&self) -> Tab { self.tabs.selected() }

    /// Highlight the tab at `index`.
    ///
    /// Returns `None` and keeps the current tab for an out-of-range index.
    /// The navigation bar repaints on the next frame.
    pub fn select_tab(&mut self, index: usize) -> Option<Tab> { self.tabs.select(index) }

    /// Select the tab under a click at `point`, if any.
    pub fn click(&mut self, point: Point) -> Option<Tab> {
        let tab = hit_test(point)?;
        self.tabs.select(tab.index())
    }

    /// Draw one frame at `elapsed` since the animation started.
    ///
    /// `fps` is shown in the status bar when given.
    pub fn draw_frame<D>(
        &mut self,
        display: &mut D,
        elapsed: Duration,
        fps: Option<u32>,
    ) -> FrameReport
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut report = FrameReport::default();

        if self.render_state.is_first_frame() {
            fill_background(display, &SCREEN_AREA);
            report.cleared = true;
        }

        if self.render_state.check_status_dirty(fps.is_some(), fps.unwrap_or(0)) {
            draw_status_bar(display, fps);
            report.status_redrawn = true;
        }

        fill_background(display, &RINGS_REGION);
        let angles = self.animator.angles(elapsed);
        report.ring_commands = draw_rings(
            display,
            RING_CANVAS_ORIGIN,
            RING_CANVAS_SIZE,
            &angles,
            background_at(RINGS_CENTER_Y),
        );
        draw_metric_overlay(display);
        draw_car_placeholder(display);

        if self.render_state.need_card() {
            draw_assistant_card(display);
            self.render_state.mark_card_drawn();
            report.card_redrawn = true;
        }

        if self.render_state.check_nav_dirty(self.tabs.selected()) {
            draw_nav_bar(display, self.tabs.selected());
            report.nav_redrawn = true;
        }

        self.render_state.end_frame();
        report
    }
}

impl Default for DashboardScreen {
    fn default() -> Self { Self::new(Tab::default()) }
}

// =============================================================================
// Unit Tests
// =============================================================================
