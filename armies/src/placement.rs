use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Coordinate, PieceKind};

/// The largest army found for one piece kind and board size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementResult {
    /// The occupied squares, in the order they were produced.
    ///
    /// For bishops this list is longer than `count`, see
    /// [`Self::truncated_to_count()`].
    pub squares: Vec<Coordinate>,
    /// How many pieces the army has.
    pub count: usize,
    /// The closed-form maximum, or a note when there is none.
    pub formula: String,
}

impl PlacementResult {
    fn new(squares: Vec<Coordinate>, count: usize, formula: &str) -> Self {
        Self {
            squares,
            count,
            formula: String::from(formula),
        }
    }

    /// Keeps only the first `count` squares.
    ///
    /// The engine reports both edge columns for bishops, which is `2n`
    /// squares for an army of `2n - 2`. Callers apply this before
    /// rendering.
    pub fn truncated_to_count(mut self) -> Self {
        self.squares.truncate(self.count);
        self
    }

    /// True if no army could be placed, e.g. queens on a 3×3 board.
    pub fn is_no_solution(&self) -> bool {
        self.count == 0
    }
}

/// Computes the largest army of `kind` on an `n`×`n` board.
pub fn compute_placements(kind: PieceKind, n: usize) -> PlacementResult {
    let result = kind.placements(n);
    debug!(piece = kind.name(), n, count = result.count, "Computed placements");
    result
}

/// One rook per row and column, along the main diagonal.
pub fn rook_placements(n: usize) -> PlacementResult {
    let squares = (0..n).map(|i| Coordinate::new(i, i)).collect();
    PlacementResult::new(squares, n, "n")
}

/// Every light square. A knight always moves to a square of the other
/// color, so these never attack each other.
pub fn knight_placements(n: usize) -> PlacementResult {
    let squares = all_squares(n).filter(Coordinate::is_light).collect();
    PlacementResult::new(squares, (n * n).div_ceil(2), "⌈n²/2⌉")
}

/// The first and the last column.
///
/// The returned list contains all `2n` squares of both columns while the
/// army has `2n - 2` bishops, so callers must truncate.
pub fn bishop_placements(n: usize) -> PlacementResult {
    let mut squares = Vec::with_capacity(2 * n);
    squares.extend((0..n).map(|i| Coordinate::new(i, 0)));
    squares.extend((0..n).map(|i| Coordinate::new(i, n.saturating_sub(1))));
    let count = if n > 1 { 2 * n - 2 } else { n };
    PlacementResult::new(squares, count, "2n − 2")
}

/// Every square whose row and column are both even.
pub fn king_placements(n: usize) -> PlacementResult {
    let squares = all_squares(n)
        .filter(|sq| sq.row % 2 == 0 && sq.col % 2 == 0)
        .collect();
    let per_line = n.div_ceil(2);
    PlacementResult::new(squares, per_line * per_line, "⌈n/2⌉²")
}

/// The first solution of the n-queens puzzle found by backtracking.
pub fn queen_placements(n: usize) -> PlacementResult {
    if n == 2 || n == 3 {
        return PlacementResult::new(Vec::new(), 0, "n (no solution for n=2,3)");
    }
    if n == 0 {
        return PlacementResult::new(Vec::new(), 0, "n");
    }
    let mut solver = QueenSolver::new(n);
    if !solver.solve() {
        debug!(n, visited = solver.visited, "No queen placement exists");
        return PlacementResult::new(Vec::new(), 0, "n");
    }
    debug!(n, visited = solver.visited, "Found queen placement");
    PlacementResult::new(solver.to_squares(), n, "n")
}

fn all_squares(n: usize) -> impl Iterator<Item = Coordinate> {
    (0..n).flat_map(move |row| (0..n).map(move |col| Coordinate::new(row, col)))
}

/// Depth-first search placing one queen per column, left to right.
struct QueenSolver {
    n: usize,
    /// `rows[col]` is the row of the queen in column `col`. Only the
    /// columns left of the cursor are meaningful.
    rows: Vec<usize>,
    /// Number of (row, column) candidates tried.
    visited: u64,
}

impl QueenSolver {
    fn new(n: usize) -> Self {
        Self {
            n,
            rows: Vec::with_capacity(n),
            visited: 0,
        }
    }

    fn solve(&mut self) -> bool {
        self.place_from(0)
    }

    fn place_from(&mut self, col: usize) -> bool {
        if col >= self.n {
            return true;
        }
        for row in 0..self.n {
            self.visited += 1;
            if self.is_safe(row, col) {
                self.rows.push(row);
                if self.place_from(col + 1) {
                    return true;
                }
                trace!(row, col, "Backtracking");
                self.rows.pop();
            }
        }
        false
    }

    /// Only checks the columns to the left, which is where all the
    /// other queens are during a left-to-right search.
    fn is_safe(&self, row: usize, col: usize) -> bool {
        self.rows.iter().enumerate().all(|(other_col, &other_row)| {
            other_row != row && other_row.abs_diff(row) != col - other_col
        })
    }

    /// The solved board, read in row-major order.
    fn to_squares(&self) -> Vec<Coordinate> {
        let mut squares: Vec<Coordinate> = self
            .rows
            .iter()
            .enumerate()
            .map(|(col, &row)| Coordinate::new(row, col))
            .collect();
        squares.sort();
        squares
    }
}
