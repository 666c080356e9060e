//! Terminal board rendering (`human` mode).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use strictly_xs_and_os::{BoardSnapshot, Phase, Player, Position, Square};

const SEPARATOR: &str = "───┼───┼───";

/// Draws a board snapshot and a status line.
///
/// Empty squares show their action index in gray so a human can read off
/// moves.
#[derive(Debug, Clone, Copy)]
pub struct BoardWidget<'a> {
    snapshot: &'a BoardSnapshot,
}

impl<'a> BoardWidget<'a> {
    /// Widget over the given snapshot.
    pub fn new(snapshot: &'a BoardSnapshot) -> Self {
        Self { snapshot }
    }

    fn square(&self, pos: Position) -> Span<'static> {
        match self.snapshot.board.get(pos) {
            Square::Empty => Span::styled(
                pos.to_index().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(Player::X) => Span::styled(
                "X",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => Span::styled(
                "O",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        }
    }

    fn status(&self) -> String {
        match self.snapshot.phase {
            Phase::InProgress => format!("Player {} to move", self.snapshot.to_move),
            phase => format!("Game over. {}", phase),
        }
    }

    /// Text lines making up the widget.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let sep = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::with_capacity(7);

        for row in 0..3 {
            let mut spans = Vec::with_capacity(7);
            for col in 0..3 {
                if col > 0 {
                    spans.push(Span::styled(" │ ", sep));
                } else {
                    spans.push(Span::raw(" "));
                }
                if let Some(pos) = Position::from_row_col(row, col) {
                    spans.push(self.square(pos));
                }
            }
            lines.push(Line::from(spans));
            if row < 2 {
                lines.push(Line::styled(SEPARATOR, sep));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(self.status()));
        lines
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
