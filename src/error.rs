//! Error types for the simulator binary.
//!
//! The drawing library cannot fail; everything here comes from the host:
//! command-line values out of range and screenshot I/O.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    /// A command-line option is outside its accepted range.
    #[error("invalid value {value} for --{option}: {reason}")]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Writing the PNG screenshot failed.
    #[error("failed to save screenshot to {}: {message}", path.display())]
    Screenshot { path: PathBuf, message: String },
}

impl SimulatorError {
    pub fn invalid_option(
        option: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidOption { option, value: value.to_string(), reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_message() {
        let err = SimulatorError::invalid_option("fps", 0, "must be between 1 and 240");
        assert_eq!(err.to_string(), "invalid value 0 for --fps: must be between 1 and 240");
    }

    #[test]
    fn test_screenshot_message_includes_path() {
        let err = SimulatorError::Screenshot { path: PathBuf::from("/tmp/out.png"), message: "denied".into() };
        assert_eq!(err.to_string(), "failed to save screenshot to /tmp/out.png: denied");
    }
}
