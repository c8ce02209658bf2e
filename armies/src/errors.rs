/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Rgb`](crate::Rgb).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFromStrErr {
    Empty,
    InvalidLength { len: usize },
    InvalidHexDigit { digit: char },
}

impl std::error::Error for ColorFromStrErr {}

impl std::fmt::Display for ColorFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorFromStrErr::Empty => write!(f, "Color is empty"),
            ColorFromStrErr::InvalidLength { len } => write!(
                f,
                "Color must have 3 or 6 hex digits after the optional '#', but has {}",
                len
            ),
            ColorFromStrErr::InvalidHexDigit { digit } => {
                write!(f, "Color contains '{}', which is not a hex digit", digit)
            }
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of
/// [`PieceKind`](crate::PieceKind).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceKindFromStrErr {
    pub input: String,
}

impl std::error::Error for PieceKindFromStrErr {}

impl std::fmt::Display for PieceKindFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown piece '{}', expected one of rook, knight, bishop, king, queen",
            self.input
        )
    }
}
