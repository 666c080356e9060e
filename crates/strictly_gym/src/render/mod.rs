//! Rendering for the environment.
//!
//! Renderers only ever see a [`BoardSnapshot`]; they have no path back into
//! the engine.

mod board;
mod display;
mod pixels;

pub use board::BoardWidget;
pub use display::{DisplaySession, FrameClock};
pub use pixels::{PixelFrame, PixelRenderer, Rgb};

use crate::error::EnvError;
use serde::{Deserialize, Serialize};
use strictly_xs_and_os::BoardSnapshot;
use strum::{Display, EnumIter, EnumString};

/// How the environment presents frames.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RenderMode {
    /// Draw to the terminal after every reset and step.
    Human,
    /// Return pixel frames from `render`.
    RgbArray,
}

/// Turns a board snapshot into some kind of frame.
pub trait Renderer {
    /// What a draw call produces.
    type Output;

    /// Draws one frame.
    fn draw(&mut self, snapshot: &BoardSnapshot) -> Result<Self::Output, EnvError>;
}
