use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::difficulty::Difficulty;
use crate::game::EndReason;

/// Draws the ready screen, including the difficulty picker.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, difficulty: Difficulty) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from(format!(
            "Difficulty: {} ({} ms)",
            difficulty.level(),
            difficulty.interval().as_millis()
        )),
        Line::from(format!(
            "[{}-{}] Change difficulty",
            Difficulty::MIN,
            Difficulty::MAX
        )),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Use arrows/WASD to move"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer_row,
    );
}

/// Draws the suspended screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("SUSPENDED"),
        Line::from(""),
        Line::from("[Enter]/[Space] Resume"),
        Line::from("[R] Reset"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" paused ")),
        popup,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    length: usize,
    end_reason: Option<EndReason>,
) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(if end_reason == Some(EndReason::BoardFull) {
            "BOARD CLEARED"
        } else {
            "GAME OVER"
        }),
        Line::from(""),
        Line::from(format!("Length: {length}")),
        Line::from(end_reason_text(end_reason)),
        Line::from(""),
        Line::from("[R] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn end_reason_text(end_reason: Option<EndReason>) -> &'static str {
    match end_reason {
        Some(EndReason::OutOfBounds) => "Cause: hit wall",
        Some(EndReason::SelfCollision) => "Cause: hit yourself",
        Some(EndReason::BoardFull) => "No room left for food",
        None => "",
    }
}

/// Carves a popup of the given share of `area` out of its middle.
fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);

    popup
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::game::EndReason;

    use super::{centered_popup, end_reason_text};

    #[test]
    fn popup_stays_inside_area() {
        let area = Rect::new(0, 0, 80, 40);
        let popup = centered_popup(area, 70, 40);

        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!((popup.width, popup.height), (56, 16));
        assert_eq!(popup.x - area.x, area.right() - popup.right());
        assert_eq!(popup.y - area.y, area.bottom() - popup.bottom());
    }

    #[test]
    fn end_reasons_are_described() {
        assert_eq!(end_reason_text(Some(EndReason::OutOfBounds)), "Cause: hit wall");
        assert_eq!(end_reason_text(None), "");
    }
}
