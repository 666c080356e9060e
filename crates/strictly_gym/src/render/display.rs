//! Human-mode display session.
//!
//! The session is owned by the environment, opened on the first human-mode
//! frame and restored exactly once on close or drop.

use super::{BoardWidget, Renderer};
use crate::error::EnvError;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use strictly_xs_and_os::BoardSnapshot;
use tracing::{debug, info, instrument};

/// Paces frames to a fixed rate by sleeping out the rest of each period.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    last: Option<Instant>,
}

impl FrameClock {
    /// Clock for `fps` frames per second. Zero disables pacing.
    pub fn new(fps: u32) -> Self {
        let period = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / fps as f64)
        };
        Self { period, last: None }
    }

    /// Target time between frames.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until a full period has passed since the previous tick.
    ///
    /// Returns how long it slept. The first tick never sleeps.
    pub fn tick(&mut self) -> Duration {
        let slept = match self.last {
            Some(last) => {
                let remaining = self.period.saturating_sub(last.elapsed());
                if !remaining.is_zero() {
                    std::thread::sleep(remaining);
                }
                remaining
            }
            None => Duration::ZERO,
        };
        self.last = Some(Instant::now());
        slept
    }
}

/// Terminal window used for human-mode rendering.
pub struct DisplaySession {
    terminal: Option<DefaultTerminal>,
    clock: FrameClock,
}

impl DisplaySession {
    /// Takes over the terminal.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot enter raw mode or the alternate screen.
    #[instrument]
    pub fn open(fps: u32) -> Result<Self, EnvError> {
        let terminal = ratatui::try_init()?;
        info!(fps, "Display session opened");
        Ok(Self {
            terminal: Some(terminal),
            clock: FrameClock::new(fps),
        })
    }

    /// True until the session is closed.
    pub fn is_open(&self) -> bool {
        self.terminal.is_some()
    }

    /// Draws one frame and waits out the frame period.
    #[instrument(skip_all)]
    pub fn present(&mut self, snapshot: &BoardSnapshot) -> Result<(), EnvError> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Err(EnvError::DisplayClosed);
        };
        terminal.draw(|frame| frame.render_widget(BoardWidget::new(snapshot), frame.area()))?;
        let slept = self.clock.tick();
        debug!(?slept, "Frame presented");
        Ok(())
    }

    /// Restores the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if self.terminal.take().is_some() {
            ratatui::restore();
            info!("Display session closed");
        }
    }
}

impl Renderer for DisplaySession {
    type Output = ();

    fn draw(&mut self, snapshot: &BoardSnapshot) -> Result<(), EnvError> {
        self.present(snapshot)
    }
}

impl Drop for DisplaySession {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for DisplaySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplaySession")
            .field("open", &self.is_open())
            .field("clock", &self.clock)
            .finish()
    }
}
