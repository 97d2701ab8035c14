use crate::grid::{Cell, Grid};
use crate::snake::Position;

/// Returns true when `position` lies outside a `size * size` board.
#[must_use]
pub fn is_out_of_bounds(size: u16, position: Position) -> bool {
    let size = i32::from(size);
    position.x < 0 || position.y < 0 || position.x >= size || position.y >= size
}

/// Returns true when the cell at `position` currently holds the snake.
///
/// `position` must already be known to be in bounds.
#[must_use]
pub fn is_self_collision(grid: &Grid, position: Position) -> bool {
    grid.get(position) == Cell::Snake
}
