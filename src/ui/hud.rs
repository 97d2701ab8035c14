use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::{GameStatus, Snapshot};

/// Renders the one-line status bar and returns the play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot<'_>) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(Paragraph::new(status_line(snapshot)), status_area);

    play_area
}

fn status_line(snapshot: &Snapshot<'_>) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(" Length ", label),
        Span::styled(snapshot.body_length.to_string(), value),
        Span::styled("  Difficulty ", label),
        Span::styled(snapshot.difficulty.level().to_string(), value),
        Span::styled("  ", label),
        Span::styled(status_label(snapshot.status), status_style(snapshot.status)),
    ])
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Init => "READY",
        GameStatus::Playing => "PLAYING",
        GameStatus::Suspended => "SUSPENDED",
        GameStatus::Gameover => "GAME OVER",
    }
}

fn status_style(status: GameStatus) -> Style {
    let color = match status {
        GameStatus::Init => Color::Cyan,
        GameStatus::Playing => Color::Green,
        GameStatus::Suspended => Color::Yellow,
        GameStatus::Gameover => Color::Red,
    };
    Style::default().fg(color)
}
