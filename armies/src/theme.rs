use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ColorFromStrErr;

/// A 24-bit color.
///
/// Parsed from and printed as a hex string like `#f0d9b5`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorFromStrErr;

    /// Accepts `#RRGGBB` and the short form `#RGB`. The `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.is_empty() {
            return Err(ColorFromStrErr::Empty);
        }
        let mut digits = Vec::with_capacity(6);
        for c in hex.chars() {
            let digit = c
                .to_digit(16)
                .ok_or(ColorFromStrErr::InvalidHexDigit { digit: c })?;
            digits.push(digit as u8);
        }
        match digits[..] {
            [r, g, b] => Ok(Rgb::new(r * 0x11, g * 0x11, b * 0x11)),
            [r1, r0, g1, g0, b1, b0] => {
                Ok(Rgb::new((r1 << 4) | r0, (g1 << 4) | g0, (b1 << 4) | b0))
            }
            _ => Err(ColorFromStrErr::InvalidLength { len: digits.len() }),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorFromStrErr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> String {
        color.to_string()
    }
}

/// The colors used to draw a board.
///
/// Missing fields fall back to the [default](BoardTheme::default) when
/// deserializing, so a theme file only needs to name what it changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardTheme {
    pub piece_color: Rgb,
    pub light_square_color: Rgb,
    pub dark_square_color: Rgb,
}

impl BoardTheme {
    /// The color of the square at `(row, col)`.
    pub fn square_color(&self, row: usize, col: usize) -> Rgb {
        if (row + col) % 2 == 0 {
            self.light_square_color
        } else {
            self.dark_square_color
        }
    }
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            piece_color: Rgb::BLACK,
            light_square_color: Rgb::new(0xf0, 0xd9, 0xb5),
            dark_square_color: Rgb::new(0xb5, 0x88, 0x63),
        }
    }
}
