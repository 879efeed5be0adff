//! Smart energy dashboard - drawing core.
//!
//! This library renders the dashboard on any `embedded_graphics` draw target
//! with `Rgb565` color and has no platform dependencies. The simulator binary
//! (`main.rs`) adds the desktop window, the frame loop and logging.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the library itself stays `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Configuration
pub mod colors;
pub mod config;
pub mod styles;

// Ring model and animation
pub mod animations;
pub mod rings;

// Rendering
pub mod render;
pub mod screen;
pub mod widgets;

// Static content and UI state
pub mod metrics;
pub mod tabs;

#[cfg(test)]
mod test_support;
