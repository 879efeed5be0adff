// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // f32->u32 for the rounded FPS readout
#![allow(clippy::cast_precision_loss)] // u32->f32 in frame statistics
#![allow(clippy::cast_sign_loss)] // rounded FPS is never negative

//! Smart energy dashboard simulator.
//!
//! Opens a window showing the energy rings screen: three concentric rings
//! rotating at their own speeds, the metric overlay, the assistant card and
//! the bottom navigation bar.
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | A / S / D | Select Ana Sayfa / İstatistikler / Ayarlar |
//! | Click on the navigation bar | Select the tab under the cursor |
//! | Close window | Quit |
//!
//! # Screenshot Mode
//!
//! `--screenshot out.png` renders one frame at `--start-ms` and exits
//! without opening a window.
//!
//! # Logging
//!
//! Uses `tracing`. `RUST_LOG` overrides the default `simulator=info`
//! filter; `--verbose` lowers the default to debug, which adds periodic
//! frame statistics.

mod cli;
mod error;
mod profiling;

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use smart_energy_dashboard::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use smart_energy_dashboard::screen::DashboardScreen;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::error::SimulatorError;
use crate::profiling::{FpsCounter, FrameStats};

const WINDOW_TITLE: &str = "Smart Energy Dashboard";

/// How often frame statistics are logged at debug level.
const STATS_INTERVAL: Duration = Duration::from_secs(5);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.validate()?;

    let mut screen = DashboardScreen::new(cli.initial_tab()?);
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();

    info!(
        scale = cli.scale,
        fps = cli.fps,
        start_ms = cli.start_ms,
        tab = screen.selected_tab().label(),
        "starting simulator"
    );

    if let Some(path) = &cli.screenshot {
        return save_screenshot(&mut display, &mut screen, &output_settings, cli.start_offset(), path);
    }

    run_window(&mut display, &mut screen, &output_settings, &cli);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "simulator=debug" } else { "simulator=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Render one frame at `elapsed` and write it to `path` as PNG.
fn save_screenshot(
    display: &mut SimulatorDisplay<Rgb565>,
    screen: &mut DashboardScreen,
    output_settings: &OutputSettings,
    elapsed: Duration,
    path: &Path,
) -> anyhow::Result<()> {
    let report = screen.draw_frame(display, elapsed, None);
    display
        .to_rgb_output_image(output_settings)
        .save_png(path)
        .map_err(|e| SimulatorError::Screenshot { path: path.to_path_buf(), message: e.to_string() })
        .context("screenshot mode")?;

    info!(path = %path.display(), ring_commands = report.ring_commands, "screenshot saved");
    Ok(())
}

/// Run the windowed frame loop until the window closes.
fn run_window(
    display: &mut SimulatorDisplay<Rgb565>,
    screen: &mut DashboardScreen,
    output_settings: &OutputSettings,
    cli: &Cli,
) {
    let mut window = Window::new(WINDOW_TITLE, output_settings);
    let frame_time = cli.frame_time();
    let start_offset = cli.start_offset();

    let clock = Instant::now();
    let mut stats = FrameStats::new();
    let mut fps = FpsCounter::new(clock);
    let mut last_stats_log = clock;

    'running: loop {
        let frame_start = Instant::now();

        // Single clock reading per frame; every ring derives its angle from it
        let elapsed = start_offset + clock.elapsed();
        let shown_fps = cli.show_fps.then(|| fps.rounded());
        let report = screen.draw_frame(display, elapsed, shown_fps);
        window.update(display);
        let render_time = frame_start.elapsed();

        // The window only delivers events after its first update
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    let index = match keycode {
                        Keycode::A => 0,
                        Keycode::S => 1,
                        Keycode::D => 2,
                        _ => continue,
                    };
                    if let Some(tab) = screen.select_tab(index) {
                        info!(tab = tab.label(), "tab selected");
                    }
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    if let Some(tab) = screen.click(point) {
                        info!(tab = tab.label(), x = point.x, y = point.y, "tab clicked");
                    }
                }
                _ => {}
            }
        }

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = frame_time.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        } else if stats.total_frames > 0 {
            debug!(frame_us = pre_sleep.as_micros() as u64, "frame over budget");
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        stats.record_frame(frame_start.elapsed(), render_time, sleep_time);
        stats.record_report(&report);
        fps.tick(Instant::now());

        if last_stats_log.elapsed() >= STATS_INTERVAL {
            last_stats_log = Instant::now();
            debug!(
                fps = fps.current(),
                avg_us = stats.frame_time_avg_us(),
                min_us = stats.frame_time_min_us,
                max_us = stats.frame_time_max_us,
                render_us = stats.render_time_us,
                sleep_us = stats.sleep_time_us,
                "frame stats"
            );
            if stats.card_redraws > 1 {
                warn!(card_redraws = stats.card_redraws, "assistant card repainted more than once");
            }
        }
    }

    info!(
        uptime = %stats.uptime_string(),
        frames = stats.total_frames,
        ring_commands = stats.ring_commands,
        full_clears = stats.full_clears,
        status_redraws = stats.status_redraws,
        card_redraws = stats.card_redraws,
        nav_redraws = stats.nav_redraws,
        avg_frame_us = stats.frame_time_avg_us(),
        "simulator stopped"
    );
}
