use serde::{Deserialize, Serialize};

/// A square on the board.
///
/// Both coordinates are zero-based and lie in `[0, n)` for an n×n board.
/// Row 0 is drawn at the top of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether `(row + col)` is even, i.e. whether this is a light square.
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Absolute row and column distance to another square.
    pub fn distance(&self, other: Coordinate) -> (usize, usize) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The label of a column: `A` for column 0, `B` for column 1 and so on.
pub fn column_label(col: usize) -> char {
    char::from_u32('A' as u32 + col as u32).unwrap_or('?')
}

/// The label of a row, counting from 1.
pub fn row_label(row: usize) -> String {
    (row + 1).to_string()
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", column_label(self.col), row_label(self.row))
    }
}
