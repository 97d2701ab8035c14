use crate::snake::Position;

/// Content of one board cell.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Snake,
    Food,
}

/// Square board of `size * size` cells, stored row-major.
///
/// Accessors index directly and panic on positions outside the board;
/// callers check bounds with [`crate::collision::is_out_of_bounds`] first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a board with every cell empty.
    #[must_use]
    pub fn new(size: u16) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; usize::from(size) * usize::from(size)],
        }
    }

    /// Re-derives a board from a snake body and an optional food cell.
    #[must_use]
    pub fn from_body<'a>(
        size: u16,
        body: impl IntoIterator<Item = &'a Position>,
        food: Option<Position>,
    ) -> Self {
        let mut grid = Self::new(size);
        if let Some(food) = food {
            grid.set(food, Cell::Food);
        }
        for segment in body {
            grid.set(*segment, Cell::Snake);
        }
        grid
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    #[must_use]
    pub fn get(&self, position: Position) -> Cell {
        self.cells[self.index(position)]
    }

    pub fn set(&mut self, position: Position, cell: Cell) {
        let index = self.index(position);
        self.cells[index] = cell;
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.size.max(1)))
    }

    /// Counts the cells currently holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|candidate| **candidate == cell).count()
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(
            position.x >= 0
                && position.y >= 0
                && position.x < i32::from(self.size)
                && position.y < i32::from(self.size),
            "grid access out of bounds: {position:?}"
        );
        position.y as usize * usize::from(self.size) + position.x as usize
    }
}
