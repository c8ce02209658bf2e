use serde::{Deserialize, Serialize};

use crate::{Coordinate, PieceKind, PlacementResult};

/// A summary of one army, ready to be shown to a user or written as JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub piece: PieceKind,
    pub board_size: usize,
    /// The number of pieces shown on the board.
    pub count: usize,
    pub formula: String,
    pub construction: String,
    /// The squares in algebraic notation, e.g. `A1`.
    pub squares: Vec<String>,
}

impl PlacementReport {
    /// Builds the report from an already truncated result.
    pub fn new(piece: PieceKind, board_size: usize, result: &PlacementResult) -> Self {
        Self {
            piece,
            board_size,
            count: result.squares.len(),
            formula: result.formula.clone(),
            construction: String::from(piece.construction()),
            squares: result.squares.iter().map(Coordinate::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_placements;

    #[test]
    fn bishop_report_counts_displayed_squares() {
        let result = compute_placements(PieceKind::Bishop, 3).truncated_to_count();
        let report = PlacementReport::new(PieceKind::Bishop, 3, &result);
        assert_eq!(report.count, 4);
        assert_eq!(report.squares, vec!["A1", "A2", "A3", "C1"]);
        assert_eq!(report.formula, "2n − 2");
    }

    #[test]
    fn json_shape() {
        let result = compute_placements(PieceKind::Rook, 2);
        let report = PlacementReport::new(PieceKind::Rook, 2, &result);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "piece": "rook",
                "board_size": 2,
                "count": 2,
                "formula": "n",
                "construction": PieceKind::Rook.construction(),
                "squares": ["A1", "B2"],
            })
        );
    }

    #[test]
    fn queens_without_solution() {
        let result = compute_placements(PieceKind::Queen, 3).truncated_to_count();
        let report = PlacementReport::new(PieceKind::Queen, 3, &result);
        assert_eq!(report.count, 0);
        assert!(report.squares.is_empty());
    }
}
