//! Gym-style environment around the Xs and Os engine.

use crate::config::EnvConfig;
use crate::error::EnvError;
use crate::render::{DisplaySession, PixelFrame, PixelRenderer, RenderMode, Renderer};
use serde::{Deserialize, Serialize};
use strictly_xs_and_os::{
    ACTION_COUNT, BOARD_SIZE, BoardSnapshot, GameEngine, Observation, ResetOptions, StepInfo,
    StepResult,
};
use tracing::{debug, instrument};

/// Static facts about the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvMetadata {
    /// Supported render modes.
    pub render_modes: [RenderMode; 2],
    /// Frame rate used in human mode unless configured otherwise.
    pub render_fps: u32,
}

/// Discrete action space `{0, .., n - 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    /// Number of actions.
    pub n: usize,
}

impl Discrete {
    /// True if `action` belongs to the space.
    pub fn contains(&self, action: usize) -> bool {
        action < self.n
    }
}

/// Bounded integer grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSpace {
    /// Lowest value of any element.
    pub low: i8,
    /// Highest value of any element.
    pub high: i8,
    /// `(rows, columns)`.
    pub shape: (usize, usize),
}

impl BoxSpace {
    /// True if every element of `observation` is within bounds.
    pub fn contains(&self, observation: &Observation) -> bool {
        observation
            .iter()
            .flatten()
            .all(|v| (self.low..=self.high).contains(v))
    }
}

/// Xs and Os environment: engine plus presentation.
///
/// In human mode a frame is drawn after every `reset` and `step`. In
/// `rgb_array` mode frames are produced on demand by [`render`](Self::render).
#[derive(Debug)]
pub struct XsAndOsEnv {
    engine: GameEngine,
    config: EnvConfig,
    pixels: PixelRenderer,
    display: Option<DisplaySession>,
}

impl XsAndOsEnv {
    /// Environment metadata.
    pub const METADATA: EnvMetadata = EnvMetadata {
        render_modes: [RenderMode::Human, RenderMode::RgbArray],
        render_fps: 4,
    };

    /// Creates an environment. Nothing is rendered until the first reset.
    ///
    /// # Errors
    ///
    /// [`EnvError::Config`] if `config` fails [`EnvConfig::validate`].
    #[instrument(skip(config), fields(render_mode = ?config.render_mode()))]
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: EnvConfig) -> Self {
        Self {
            engine: GameEngine::with_rewards(*config.rewards()),
            pixels: PixelRenderer::new(*config.window_size()),
            config,
            display: None,
        }
    }

    /// Action space: one action per cell.
    pub fn action_space(&self) -> Discrete {
        Discrete { n: ACTION_COUNT }
    }

    /// Observation space: 3x3 grid of marks in `[-1, 1]`.
    pub fn observation_space(&self) -> BoxSpace {
        BoxSpace {
            low: -1,
            high: 1,
            shape: (BOARD_SIZE, BOARD_SIZE),
        }
    }

    /// Configured render mode.
    pub fn render_mode(&self) -> Option<RenderMode> {
        *self.config.render_mode()
    }

    /// Starts a new episode.
    ///
    /// Without options the configured starting player moves first.
    #[instrument(skip(self))]
    pub fn reset(
        &mut self,
        options: Option<ResetOptions>,
    ) -> Result<(Observation, StepInfo), EnvError> {
        let options = options.unwrap_or_else(|| self.config.reset_options());
        let out = self.engine.reset(options);
        self.present()?;
        Ok(out)
    }

    /// Plays one action.
    ///
    /// # Errors
    ///
    /// [`EnvError::Step`] for actions outside the action space, or a
    /// terminal error in human mode.
    #[instrument(skip(self))]
    pub fn step(&mut self, action: usize) -> Result<StepResult, EnvError> {
        let result = self.engine.step(action)?;
        debug!(
            reward = result.reward(),
            terminated = result.terminated(),
            "Step complete"
        );
        self.present()?;
        Ok(result)
    }

    /// Returns a pixel frame in `rgb_array` mode and `None` otherwise.
    ///
    /// Human mode draws during `reset` and `step`, so there is nothing to
    /// return here.
    #[instrument(skip(self))]
    pub fn render(&mut self) -> Result<Option<PixelFrame>, EnvError> {
        match self.render_mode() {
            Some(RenderMode::RgbArray) => {
                let snapshot = self.engine.snapshot();
                Ok(Some(self.pixels.draw(&snapshot)?))
            }
            Some(RenderMode::Human) | None => Ok(None),
        }
    }

    fn present(&mut self) -> Result<(), EnvError> {
        if self.render_mode() != Some(RenderMode::Human) {
            return Ok(());
        }
        if self.display.is_none() {
            self.display = Some(DisplaySession::open(*self.config.render_fps())?);
        }
        let snapshot = self.engine.snapshot();
        match self.display.as_mut() {
            Some(display) => display.draw(&snapshot),
            None => Err(EnvError::DisplayClosed),
        }
    }

    /// Releases the display session, if one was opened.
    #[instrument(skip(self))]
    pub fn close(&mut self) {
        if let Some(mut display) = self.display.take() {
            display.close();
        }
    }

    /// True while a human-mode display session is open.
    pub fn has_display_session(&self) -> bool {
        self.display.as_ref().is_some_and(DisplaySession::is_open)
    }

    /// Read-only snapshot of the game.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.engine.snapshot()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The configuration in use.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }
}

impl Default for XsAndOsEnv {
    fn default() -> Self {
        Self::from_valid(EnvConfig::default())
    }
}
