//! Environment configuration.

use crate::error::ConfigError;
use crate::render::RenderMode;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_xs_and_os::{Player, ResetOptions, RewardScheme};
use tracing::{debug, info, instrument};

/// Largest accepted `window_size`, in pixels.
pub const MAX_WINDOW_SIZE: u32 = 4096;

/// Configuration for an [`XsAndOsEnv`](crate::XsAndOsEnv).
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EnvConfig {
    /// Render mode; `None` renders nothing.
    #[serde(default)]
    #[setters(strip_option)]
    render_mode: Option<RenderMode>,

    /// Side length of pixel frames.
    #[serde(default = "default_window_size")]
    window_size: u32,

    /// Frame rate for human-mode rendering.
    #[serde(default = "default_render_fps")]
    render_fps: u32,

    /// Player who moves first when `reset` gets no options.
    #[serde(default)]
    starting_player: Player,

    /// Reward table.
    #[serde(default)]
    rewards: RewardScheme,
}

#[instrument]
fn default_window_size() -> u32 {
    512
}

#[instrument]
fn default_render_fps() -> u32 {
    4
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            render_mode: None,
            window_size: default_window_size(),
            render_fps: default_render_fps(),
            starting_player: Player::default(),
            rewards: RewardScheme::default(),
        }
    }
}

impl EnvConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(render_mode = ?config.render_mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Checks value ranges that serde cannot express.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(3..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(ConfigError::new(format!(
                "window_size must be between 3 and {} pixels, got {}",
                MAX_WINDOW_SIZE, self.window_size
            )));
        }
        if self.render_mode == Some(RenderMode::Human) && self.render_fps == 0 {
            return Err(ConfigError::new("render_fps must be positive in human mode"));
        }
        Ok(())
    }

    /// Reset options implied by this configuration.
    pub fn reset_options(&self) -> ResetOptions {
        ResetOptions::new(self.starting_player)
    }
}
