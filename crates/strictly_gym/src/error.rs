//! Environment error types.

use derive_more::{Display, Error, From};
use strictly_xs_and_os::StepError;
use tracing::instrument;

/// Error raised by [`XsAndOsEnv`](crate::XsAndOsEnv).
#[derive(Debug, Display, Error, From)]
pub enum EnvError {
    /// The configuration failed validation.
    #[display("Invalid configuration: {}", _0)]
    Config(ConfigError),

    /// The driver broke the step protocol.
    #[display("Step rejected: {}", _0)]
    Step(StepError),

    /// The terminal could not be driven.
    #[display("Terminal error: {}", _0)]
    Terminal(std::io::Error),

    /// A frame was requested from a session that was already closed.
    #[display("Display session is closed")]
    #[from(skip)]
    DisplayClosed,
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::new(format!("Failed to serialize config: {}", err))
    }
}
