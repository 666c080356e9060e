//! Off-screen pixel rendering (`rgb_array` mode).

use super::Renderer;
use crate::error::EnvError;
use serde::{Deserialize, Serialize};
use strictly_xs_and_os::{BoardSnapshot, Player, Position, Square, BOARD_SIZE};
use tracing::instrument;

/// An RGB8 color.
pub type Rgb = [u8; 3];

const WHITE: Rgb = [255, 255, 255];
const BLACK: Rgb = [0, 0, 0];
const BLUE: Rgb = [0, 0, 255];
const RED: Rgb = [255, 0, 0];

const GRID_LINE_WIDTH: f32 = 3.0;

/// A rendered frame, row-major with shape `(height, width, 3)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelFrame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelFrame {
    fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let data = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, 3)
    }

    /// Raw RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Encodes the frame as a binary PPM (P6) image.
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.extend_from_slice(&self.data);
        out
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        if x < self.width && y < self.height {
            let i = (y as usize * self.width as usize + x as usize) * 3;
            self.data[i..i + 3].copy_from_slice(&color);
        }
    }

    /// Fills the pixels whose centres fall inside the rectangle.
    fn fill_rect(&mut self, left: f32, top: f32, width: f32, height: f32, color: Rgb) {
        let x0 = left.round().max(0.0) as u32;
        let y0 = top.round().max(0.0) as u32;
        let x1 = ((left + width).round().max(0.0) as u32).min(self.width);
        let y1 = ((top + height).round().max(0.0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let x0 = (cx - radius).floor().max(0.0) as u32;
        let y0 = (cy - radius).floor().max(0.0) as u32;
        let x1 = ((cx + radius).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((cy + radius).ceil().max(0.0) as u32).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.put(x, y, color);
                }
            }
        }
    }
}

/// Rasterizes a board into a square [`PixelFrame`].
///
/// X marks are blue discs, O marks red squares, on a white canvas with
/// black grid lines. Board rows run down the frame, columns across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRenderer {
    window_size: u32,
}

impl PixelRenderer {
    /// Renderer producing `window_size` x `window_size` frames.
    pub fn new(window_size: u32) -> Self {
        Self { window_size }
    }

    /// Side length of produced frames.
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// Draws the snapshot.
    #[instrument(skip(self, snapshot), fields(window_size = self.window_size))]
    pub fn rasterize(&self, snapshot: &BoardSnapshot) -> PixelFrame {
        let size = self.window_size as f32;
        let cell = size / BOARD_SIZE as f32;
        let mut frame = PixelFrame::filled(self.window_size, self.window_size, WHITE);

        for pos in Position::ALL {
            let x = pos.col() as f32 * cell;
            let y = pos.row() as f32 * cell;
            match snapshot.board.get(pos) {
                Square::Occupied(Player::X) => {
                    frame.fill_circle(x + cell * 0.5, y + cell * 0.5, cell / 3.0, BLUE);
                }
                Square::Occupied(Player::O) => {
                    frame.fill_rect(x + cell * 0.25, y + cell * 0.25, cell / 2.0, cell / 2.0, RED);
                }
                Square::Empty => {}
            }
        }

        let half = GRID_LINE_WIDTH / 2.0;
        for i in 0..=BOARD_SIZE {
            let at = cell * i as f32;
            frame.fill_rect(0.0, at - half, size, GRID_LINE_WIDTH, BLACK);
            frame.fill_rect(at - half, 0.0, GRID_LINE_WIDTH, size, BLACK);
        }

        frame
    }
}

impl Renderer for PixelRenderer {
    type Output = PixelFrame;

    fn draw(&mut self, snapshot: &BoardSnapshot) -> Result<Self::Output, EnvError> {
        Ok(self.rasterize(snapshot))
    }
}
