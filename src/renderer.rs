use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::food::RandomSource;
use crate::game::{Game, GameStatus};
use crate::grid::Cell;
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_SNAKE_BODY: &str = "██";
const GLYPH_FOOD: &str = "◆ ";
const GLYPH_SNAKE_HEAD_UP: &str = "▲ ";
const GLYPH_SNAKE_HEAD_DOWN: &str = "▼ ";
const GLYPH_SNAKE_HEAD_LEFT: &str = "◀ ";
const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶ ";

/// Renders the full game frame from immutable state.
pub fn render<R: RandomSource>(frame: &mut Frame<'_>, game: &Game<R>) {
    let area = frame.area();
    let snapshot = game.snapshot();
    let play_area = render_hud(frame, area, &snapshot);

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(Color::White));
    let board_area = board_rect(play_area, snapshot.grid.size());
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let head = game.snake().head();
    let head_glyph = head_glyph(game.direction());
    let buffer = frame.buffer_mut();

    for (y, row) in snapshot.grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let position = Position::new(x as i32, y as i32);
            let Some((column, line)) = logical_to_terminal(inner, position) else {
                continue;
            };

            match cell {
                Cell::Empty => {}
                Cell::Food => {
                    buffer.set_string(column, line, GLYPH_FOOD, Style::new().fg(Color::Red));
                }
                Cell::Snake if position == head => {
                    buffer.set_string(
                        column,
                        line,
                        head_glyph,
                        Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
                    );
                }
                Cell::Snake => {
                    buffer.set_string(column, line, GLYPH_SNAKE_BODY, Style::new().fg(Color::Blue));
                }
            }
        }
    }

    match snapshot.status {
        GameStatus::Init => render_start_menu(frame, play_area, snapshot.difficulty),
        GameStatus::Suspended => render_pause_menu(frame, play_area),
        GameStatus::Gameover => {
            render_game_over_menu(frame, play_area, snapshot.body_length, game.end_reason());
        }
        GameStatus::Playing => {}
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Bordered board rectangle, clipped to `area` and centred horizontally.
fn board_rect(area: Rect, size: u16) -> Rect {
    let width = size
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
        .min(area.width);
    let height = size.saturating_add(2).min(area.height);
    let x = area.x + (area.width - width) / 2;

    Rect::new(x, area.y, width, height)
}

fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
