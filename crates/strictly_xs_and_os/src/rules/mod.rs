//! Game rules for Xs and Os.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the engine so invariants and renderers can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, line_sum, winning_line};
