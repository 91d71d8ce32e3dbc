use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::game::{GameState, Position};
use crate::metrics::GameMetrics;

/// What occupies a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Head,
    Body,
    Food,
    Empty,
}

impl Cell {
    /// Classify `pos`; the snake hides food spawned underneath it
    pub fn at(state: &GameState, pos: Position) -> Self {
        if state.board.is_wall(pos) {
            Cell::Wall
        } else if pos == state.snake.head() {
            Cell::Head
        } else if state.snake.occupies(pos) {
            Cell::Body
        } else if pos == state.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Cell::Wall => Span::styled("#", Style::default().fg(Color::Red)),
            Cell::Head => Span::styled(
                "@",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Body => Span::styled("o", Style::default().fg(Color::Yellow)),
            Cell::Food => Span::styled(
                "O",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Empty => Span::raw(" "),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);
        frame.render_widget(self.render_board(state), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// The board as text, walls included, one line per row
    pub fn board_lines(&self, state: &GameState) -> Vec<Line<'static>> {
        (0..=state.board.height)
            .map(|y| {
                let spans: Vec<Span> = (0..=state.board.width)
                    .map(|x| Cell::at(state, Position::new(x, y)).span())
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'static> {
        Paragraph::new(self.board_lines(state)).alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let stats = Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.length().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Delay: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{} ms", state.tick_delay_ms),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.ticks.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Food: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.food_eaten.to_string(),
                Style::default().fg(Color::White),
            ),
        ]);

        Paragraph::new(vec![stats, self.status_line(state, metrics)]).alignment(Alignment::Center)
    }

    fn status_line(&self, state: &GameState, metrics: &GameMetrics) -> Line<'static> {
        if state.terminated {
            let reason = state
                .end_reason
                .map(|reason| reason.describe())
                .unwrap_or("stopped");
            Line::from(Span::styled(
                format!("GAME OVER - snake {reason}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else if metrics.is_paused() {
            Line::from(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        } else if state.is_waiting() {
            Line::from(Span::styled(
                "Press an arrow key to start",
                Style::default().fg(Color::Gray),
            ))
        } else {
            Line::from("")
        }
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
