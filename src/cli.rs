//! Command-line options for the simulator.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use smart_energy_dashboard::tabs::Tab;

use crate::error::SimulatorError;

/// Accepted window scale factors.
const SCALE_RANGE: std::ops::RangeInclusive<u32> = 1..=8;

/// Accepted target frame rates.
const FPS_RANGE: std::ops::RangeInclusive<u32> = 1..=240;

#[derive(Parser, Debug)]
#[command(author, version, about = "Animated energy rings dashboard simulator", long_about = None)]
pub struct Cli {
    /// Window pixel scale.
    #[arg(long, default_value_t = 2)]
    pub scale: u32,

    /// Target frame rate. The loop sleeps when a frame finishes early.
    #[arg(long, default_value_t = 50)]
    pub fps: u32,

    /// Animation clock offset at startup, in milliseconds.
    #[arg(long, default_value_t = 0)]
    pub start_ms: u64,

    /// Initially highlighted tab (0 = Ana Sayfa, 1 = İstatistikler, 2 = Ayarlar).
    #[arg(long, default_value_t = 0)]
    pub tab: usize,

    /// Show the frame rate in the status bar.
    #[arg(long)]
    pub show_fps: bool,

    /// Render a single frame at --start-ms to this PNG file instead of opening a window.
    #[arg(long, value_name = "PATH")]
    pub screenshot: Option<PathBuf>,

    /// Log at debug level (ignored when RUST_LOG is set).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check option ranges that clap cannot express.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if !SCALE_RANGE.contains(&self.scale) {
            return Err(SimulatorError::invalid_option("scale", self.scale, "must be between 1 and 8"));
        }
        if !FPS_RANGE.contains(&self.fps) {
            return Err(SimulatorError::invalid_option("fps", self.fps, "must be between 1 and 240"));
        }
        self.initial_tab().map(|_| ())
    }

    /// Tab selected by `--tab`.
    pub fn initial_tab(&self) -> Result<Tab, SimulatorError> {
        Tab::from_index(self.tab).ok_or_else(|| SimulatorError::invalid_option("tab", self.tab, "must be 0, 1 or 2"))
    }

    /// Target duration of one frame.
    pub fn frame_time(&self) -> Duration { Duration::from_secs(1) / self.fps.max(1) }

    /// Animation clock value at startup.
    pub fn start_offset(&self) -> Duration { Duration::from_millis(self.start_ms) }
}
