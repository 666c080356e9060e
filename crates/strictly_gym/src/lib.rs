//! Strictly Gym - Xs and Os as a reinforcement-learning environment
//!
//! Wraps the pure [`strictly_xs_and_os`] engine with the pieces an RL loop
//! expects: action and observation spaces, reset options, render modes and
//! a display session for watching games in the terminal.
//!
//! # Example
//!
//! ```
//! use strictly_gym::{EnvConfig, RenderMode, XsAndOsEnv};
//!
//! # fn main() -> Result<(), strictly_gym::EnvError> {
//! let config = EnvConfig::default()
//!     .with_render_mode(RenderMode::RgbArray)
//!     .with_window_size(96);
//! let mut env = XsAndOsEnv::new(config)?;
//!
//! env.reset(None)?;
//! let result = env.step(4)?;
//! assert!(!result.terminated());
//!
//! let frame = env.render()?.expect("rgb_array mode returns frames");
//! assert_eq!(frame.shape(), (96, 96, 3));
//! env.close();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod env;
mod error;
pub mod render;

pub use config::{EnvConfig, MAX_WINDOW_SIZE};
pub use env::{BoxSpace, Discrete, EnvMetadata, XsAndOsEnv};
pub use error::{ConfigError, EnvError};
pub use render::{PixelFrame, RenderMode};

pub use strictly_xs_and_os::{
    BoardSnapshot, Observation, Phase, Player, ResetOptions, RewardScheme, StepError, StepInfo,
    StepResult,
};
