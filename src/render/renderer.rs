use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, FoodColor, GameConfig, GameState};
use crate::metrics::SessionStats;

const SNAKE_COLOR: Color = Color::Rgb(0xcf, 0xde, 0xf3);

fn food_color(color: FoodColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Pure rendering pass over the game state; never mutates it.
///
/// The board's pixel grid is mapped one cell to one terminal cell. The
/// movement step that belongs to the draw phase runs in the driver after the
/// frame is drawn.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        config: &GameConfig,
        state: &GameState,
        highscore: u32,
        stats: &SessionStats,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let scores = self.render_scores(chunks[0], state, highscore, stats);
        frame.render_widget(scores, chunks[0]);

        // Center the board horizontally
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let board = self.render_board(board_area, config, state);
        frame.render_widget(board, board_area);

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board(&self, _area: Rect, config: &GameConfig, state: &GameState) -> Paragraph<'_> {
        let cell_size = config.cell_size;
        let mut lines = Vec::new();

        for row in 0..config.rows() {
            let mut spans = Vec::new();

            for col in 0..config.columns() {
                let cell = Cell::new(col * cell_size, row * cell_size);

                let span = if cell == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(SNAKE_COLOR)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.hits_body(cell) {
                    Span::styled("□ ", Style::default().fg(SNAKE_COLOR))
                } else if cell == state.food.cell {
                    Span::styled(
                        "O ",
                        Style::default()
                            .fg(food_color(state.food.color))
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_scores(
        &self,
        _area: Rect,
        state: &GameState,
        highscore: u32,
        stats: &SessionStats,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Highscore: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                highscore.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
