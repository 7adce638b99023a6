use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::Scene;
use crate::game::{Controls, Difficulty, Position, RunState};

/// Everything outside the board that the view displays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub high_score: u32,
    pub difficulty: Difficulty,
    pub speed_percent: u16,
    pub run_state: RunState,
    pub controls: Controls,
}

/// Paints a [`Scene`] and its [`Hud`] into a terminal frame
pub struct View;

impl View {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene, hud: &Hud) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(hud), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_grid(scene, hud), game_area);

        // The overlay sits on top of the last frame
        if let Some(score) = scene.game_over {
            let popup = centered_rect(game_area, 40, 9);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(score), popup);
        }

        frame.render_widget(self.render_controls(hud), chunks[2]);
    }

    fn render_grid(&self, scene: &Scene, hud: &Hud) -> Paragraph<'static> {
        let mut lines = Vec::new();

        if scene.grid {
            for y in 0..hud.grid_height {
                let mut spans = Vec::new();

                for x in 0..hud.grid_width {
                    let pos = Position::new(x as i32, y as i32);

                    let cell = if scene.is_head(pos) {
                        // Snake head - darker than the body
                        Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Rgb(0x38, 0x8e, 0x3c))
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if scene.is_snake(pos) {
                        Span::styled("■ ", Style::default().fg(Color::Rgb(0x4c, 0xaf, 0x50)))
                    } else if scene.is_food(pos) {
                        Span::styled(
                            "● ",
                            Style::default()
                                .fg(Color::Rgb(0xf4, 0x43, 0x36))
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        // Empty cell
                        Span::styled("· ", Style::default().fg(Color::DarkGray))
                    };

                    spans.push(cell);
                }

                lines.push(Line::from(spans));
            }
        }

        let title = match hud.run_state {
            RunState::Paused => " Snake (paused) ",
            _ => " Snake ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, hud: &Hud) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                hud.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High score: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Difficulty: ", Style::default().fg(Color::Yellow)),
            Span::styled(hud.difficulty.as_str(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}%", hud.speed_percent),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, score: u32) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, hud: &Hud) -> Paragraph<'static> {
        let pause_style = if hud.controls.pause_enabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let text = vec![Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {} | ", hud.controls.start_label)),
            Span::styled("Space", pause_style),
            Span::styled(format!(" {}", hud.controls.pause_label), pause_style),
            Span::raw(" | "),
            Span::styled("↑↓←→/WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" move | "),
            Span::styled("1-3", Style::default().fg(Color::Cyan)),
            Span::raw(" difficulty | "),
            Span::styled("+/-", Style::default().fg(Color::Cyan)),
            Span::raw(" speed | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
