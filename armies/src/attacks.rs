use itertools::Itertools;

use crate::{Coordinate, PieceKind};

impl PieceKind {
    /// Would a piece of this kind on `from` attack `to` on an otherwise
    /// empty board?
    ///
    /// Pieces in between are not considered, so this is slightly stricter
    /// than the rules of chess for the sliding pieces.
    pub fn attacks(self, from: Coordinate, to: Coordinate) -> bool {
        if from == to {
            return false;
        }
        let (d_row, d_col) = from.distance(to);
        let straight = d_row == 0 || d_col == 0;
        let diagonal = d_row == d_col;
        match self {
            PieceKind::Rook => straight,
            PieceKind::Knight => (d_row, d_col) == (1, 2) || (d_row, d_col) == (2, 1),
            PieceKind::Bishop => diagonal,
            PieceKind::King => d_row <= 1 && d_col <= 1,
            PieceKind::Queen => straight || diagonal,
        }
    }
}

/// All pairs of squares whose pieces attack each other.
///
/// Pairs are reported in the order of `squares`, with the earlier square
/// first.
pub fn attacking_pairs(kind: PieceKind, squares: &[Coordinate]) -> Vec<(Coordinate, Coordinate)> {
    squares
        .iter()
        .copied()
        .tuple_combinations()
        .filter(|&(a, b)| kind.attacks(a, b))
        .collect()
}
