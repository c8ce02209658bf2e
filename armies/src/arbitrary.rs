use crate::{BoardTheme, Coordinate, PieceKind, Rgb};

/// A board size small enough for the queens search to stay fast.
#[derive(Clone, Copy, Debug)]
pub struct BoardSize(pub usize);

impl quickcheck::Arbitrary for BoardSize {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        BoardSize(usize::arbitrary(g) % 12 + 1)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((1..self.0).rev().map(BoardSize))
    }
}

impl quickcheck::Arbitrary for Coordinate {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Coordinate {
            row: usize::arbitrary(g) % 20,
            col: usize::arbitrary(g) % 20,
        }
    }
}

impl quickcheck::Arbitrary for PieceKind {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&PieceKind::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Rgb {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Rgb::new(u8::arbitrary(g), u8::arbitrary(g), u8::arbitrary(g))
    }
}

impl quickcheck::Arbitrary for BoardTheme {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            piece_color: Rgb::arbitrary(g),
            light_square_color: Rgb::arbitrary(g),
            dark_square_color: Rgb::arbitrary(g),
        }
    }
}
