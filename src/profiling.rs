//! Frame timing statistics for the simulator loop.
//!
//! # Usage
//!
//! ```ignore
//! let mut stats = FrameStats::new();
//! let mut fps = FpsCounter::new(Instant::now());
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! let report = screen.draw_frame(&mut display, elapsed, cli.show_fps.then(|| fps.rounded()));
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! stats.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! stats.record_report(&report);
//! fps.tick(Instant::now());
//! ```

use std::time::{Duration, Instant};

use heapless::String;
use smart_energy_dashboard::screen::FrameReport;

// =============================================================================
// Frame Statistics
// =============================================================================

/// Frame timing and redraw counters.
///
/// Redraw counters stay near zero while dirty tracking works; only the
/// rings region repaints every frame.
pub struct FrameStats {
    // Last frame (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    pub ring_commands: u64,
    pub full_clears: u32,
    pub status_redraws: u32,
    pub card_redraws: u32,
    pub nav_redraws: u32,

    start_time: Instant,
}

impl FrameStats {
    /// Exponential moving average weight of the newest frame.
    const EMA_ALPHA: f32 = 0.1;

    /// Empty statistics; the uptime clock starts now.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            ring_commands: 0,
            full_clears: 0,
            status_redraws: 0,
            card_redraws: 0,
            nav_redraws: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = micros(total_time);
        self.frame_time_us = total_us;
        self.render_time_us = micros(render_time);
        self.sleep_time_us = micros(sleep_time);

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Add what a frame painted to the counters.
    pub fn record_report(&mut self, report: &FrameReport) {
        self.ring_commands += report.ring_commands as u64;
        self.full_clears += u32::from(report.cleared);
        self.status_redraws += u32::from(report.status_redrawn);
        self.card_redraws += u32::from(report.card_redrawn);
        self.nav_redraws += u32::from(report.nav_redrawn);
    }

    /// Smoothed frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime()) }
}

impl Default for FrameStats {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// FPS Counter
// =============================================================================

/// Frames per second, recomputed once per second.
pub struct FpsCounter {
    frames: u32,
    window_start: Instant,
    current: f32,
}

impl FpsCounter {
    /// Sampling window length.
    const WINDOW: Duration = Duration::from_secs(1);

    pub const fn new(now: Instant) -> Self { Self { frames: 0, window_start: now, current: 0.0 } }

    /// Count a finished frame at `now`.
    ///
    /// Returns the new rate when a sampling window closed.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let window = now.saturating_duration_since(self.window_start);
        if window < Self::WINDOW {
            return None;
        }
        self.current = self.frames as f32 / window.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(self.current)
    }

    /// Last computed rate; zero until the first window closes.
    #[inline]
    pub const fn current(&self) -> f32 { self.current }

    /// Rate rounded for the status bar.
    #[inline]
    pub fn rounded(&self) -> u32 { libm::roundf(self.current) as u32 }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn micros(duration: Duration) -> u32 { u32::try_from(duration.as_micros()).unwrap_or(u32::MAX) }

fn format_hms(duration: Duration) -> String<12> {
    use core::fmt::Write;

    let secs = duration.as_secs();
    let mut s = String::new();
    write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60).ok();
    s
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn us(micros: u64) -> Duration { Duration::from_micros(micros) }

    // -------------------------------------------------------------------------
    // FrameStats Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_frame_stats_new() {
        let stats = FrameStats::new();
        assert_eq!(stats.total_frames, 0);
        assert_eq!(stats.frame_time_min_us, u32::MAX);
        assert_eq!(stats.frame_time_max_us, 0);
        assert_eq!(stats.ring_commands, 0);
    }

    #[test]
    fn test_record_frame() {
        let mut stats = FrameStats::new();
        stats.record_frame(us(20_000), us(15_000), us(5_000));

        assert_eq!(stats.total_frames, 1);
        assert_eq!(stats.frame_time_us, 20_000);
        assert_eq!(stats.render_time_us, 15_000);
        assert_eq!(stats.sleep_time_us, 5_000);
        assert_eq!(stats.frame_time_avg_us(), 20_000, "First frame seeds the average");
    }

    #[test]
    fn test_frame_min_max_and_average() {
        let mut stats = FrameStats::new();
        stats.record_frame(us(20_000), us(15_000), us(5_000));
        stats.record_frame(us(15_000), us(10_000), us(5_000));
        stats.record_frame(us(25_000), us(20_000), us(5_000));

        assert_eq!(stats.frame_time_min_us, 15_000);
        assert_eq!(stats.frame_time_max_us, 25_000);
        let avg = stats.frame_time_avg_us();
        assert!((15_000..=25_000).contains(&avg), "Average {avg} should stay within min/max");
    }

    #[test]
    fn test_record_frame_saturates_huge_durations() {
        let mut stats = FrameStats::new();
        stats.record_frame(Duration::from_secs(10_000), Duration::ZERO, Duration::ZERO);
        assert_eq!(stats.frame_time_us, u32::MAX);
    }

    #[test]
    fn test_record_report_counts_redraws() {
        let mut stats = FrameStats::new();
        let first = FrameReport {
            ring_commands: 27,
            cleared: true,
            status_redrawn: true,
            card_redrawn: true,
            nav_redrawn: true,
        };
        let steady = FrameReport { ring_commands: 27, ..FrameReport::default() };

        stats.record_report(&first);
        for _ in 0..9 {
            stats.record_report(&steady);
        }

        assert_eq!(stats.ring_commands, 270);
        assert_eq!(stats.full_clears, 1);
        assert_eq!(stats.card_redraws, 1, "Card should only be drawn once");
        assert_eq!(stats.status_redraws, 1);
        assert_eq!(stats.nav_redraws, 1);
    }

    #[test]
    fn test_uptime_string_format() {
        assert_eq!(format_hms(Duration::ZERO).as_str(), "00:00:00");
        assert_eq!(format_hms(Duration::from_secs(3_725)).as_str(), "01:02:05");
        assert_eq!(FrameStats::new().uptime_string().len(), 8);
    }

    // -------------------------------------------------------------------------
    // FpsCounter Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fps_counter_updates_once_per_second() {
        let start = Instant::now();
        let mut fps = FpsCounter::new(start);

        for frame in 1..50u64 {
            assert_eq!(fps.tick(start + Duration::from_millis(frame * 20)), None, "frame {frame}");
        }
        let rate = fps.tick(start + Duration::from_secs(1)).unwrap();
        assert!((rate - 50.0).abs() < 0.01, "50 frames in 1 s should be 50 FPS, got {rate}");
        assert_eq!(fps.rounded(), 50);
    }

    #[test]
    fn test_fps_counter_starts_new_window() {
        let start = Instant::now();
        let mut fps = FpsCounter::new(start);
        assert_eq!(fps.current(), 0.0);

        fps.tick(start + Duration::from_secs(2));
        assert!((fps.current() - 0.5).abs() < 0.01, "One frame in 2 s");

        let next = start + Duration::from_secs(2);
        for i in 1..=30u64 {
            fps.tick(next + Duration::from_millis(i * 1_000 / 30));
        }
        assert_eq!(fps.rounded(), 30);
    }
}
