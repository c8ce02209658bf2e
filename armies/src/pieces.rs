use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{placement, PieceKindFromStrErr, PlacementResult};

/// The kind of piece that an army is made of.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Queen,
    ];

    /// Computes the largest army of this kind on an `n`×`n` board.
    pub fn placements(self, n: usize) -> PlacementResult {
        match self {
            PieceKind::Rook => placement::rook_placements(n),
            PieceKind::Knight => placement::knight_placements(n),
            PieceKind::Bishop => placement::bishop_placements(n),
            PieceKind::King => placement::king_placements(n),
            PieceKind::Queen => placement::queen_placements(n),
        }
    }

    /// The white chess symbol of this piece.
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Rook => '♖',
            PieceKind::Knight => '♘',
            PieceKind::Bishop => '♗',
            PieceKind::King => '♔',
            PieceKind::Queen => '♕',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
        }
    }

    /// A one-sentence description of how the army is built.
    pub fn construction(self) -> &'static str {
        match self {
            PieceKind::Rook => {
                "Place one rook in each row and column, often along the main diagonal."
            }
            PieceKind::Knight => {
                "Place knights on all squares of the same color. They can never attack each other this way."
            }
            PieceKind::Bishop => {
                "Place bishops along two edges of the board, like the first and last columns."
            }
            PieceKind::King => {
                "Place kings with a one-square buffer between them in all directions."
            }
            PieceKind::Queen => {
                "No simple formula exists. This solution is found using a backtracking algorithm to search for a valid placement."
            }
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PieceKind {
    type Err = PieceKindFromStrErr;

    /// Accepts the English name in any case, or the piece's glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PieceKind::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(trimmed)
                    || trimmed.chars().eq(std::iter::once(kind.glyph()))
            })
            .ok_or_else(|| PieceKindFromStrErr {
                input: String::from(s),
            })
    }
}
