//! Toroidal cursor over a grid.

/// Movement direction for cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A (row, col) position into a grid. Every move wraps modulo the grid
/// dimensions, so stepping past an edge lands on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Cursor at the origin cell (0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one cell in `direction`, wrapping around the given dimensions.
    /// Dimensions must be positive (guaranteed by `Grid` construction).
    pub fn step(&mut self, direction: Direction, height: usize, width: usize) {
        match direction {
            Direction::Up => self.row = (self.row + height - 1) % height,
            Direction::Down => self.row = (self.row + 1) % height,
            Direction::Left => self.col = (self.col + width - 1) % width,
            Direction::Right => self.col = (self.col + 1) % width,
        }
    }
}
