use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{column_label, row_label, BoardTheme, Coordinate, Rgb};

/// Side length of the drawn board (without labels), in pixels.
pub const BOARD_PIXELS: f32 = 480.0;
/// Space around the board for the axis labels, in pixels.
pub const LABEL_MARGIN: f32 = 32.0;
/// The glyph font size is `GLYPH_SCALE / n`, so that glyphs shrink with
/// the squares on larger boards.
pub const GLYPH_SCALE: f32 = 360.0;

const GRID_LINE_WIDTH: f32 = 1.5;
const LABEL_FONT_SIZE: f32 = 14.0;

/// Everything that determines a rendered board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub n: usize,
    pub squares: Vec<Coordinate>,
    pub glyph: String,
    pub theme: BoardTheme,
}

/// One background square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub coordinate: Coordinate,
    pub fill: Rgb,
}

/// A piece glyph centered on a square.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphMark {
    pub coordinate: Coordinate,
    pub glyph: String,
    pub color: Rgb,
    pub font_size: f32,
}

/// An in-memory picture of a board.
///
/// Row 0 is at the top. Column labels run `A, B, ...` from the left,
/// row labels `1, 2, ...` from the top.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardImage {
    pub n: usize,
    /// Exactly `n * n` tiles, row-major.
    pub tiles: Vec<Tile>,
    /// One mark per rendered square, in input order.
    pub marks: Vec<GlyphMark>,
    pub column_labels: Vec<String>,
    pub row_labels: Vec<String>,
}

/// Draws a board for the given request.
pub fn render_board(request: &RenderRequest) -> BoardImage {
    render_board_with(request.n, &request.squares, &request.glyph, &request.theme)
}

/// Draws an `n`×`n` board with `glyph` on each of `squares`.
///
/// The squares are trusted to lie on the board.
pub fn render_board_with(
    n: usize,
    squares: &[Coordinate],
    glyph: &str,
    theme: &BoardTheme,
) -> BoardImage {
    let mut tiles = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            tiles.push(Tile {
                coordinate: Coordinate::new(row, col),
                fill: theme.square_color(row, col),
            });
        }
    }

    let font_size = glyph_font_size(n);
    let marks = squares
        .iter()
        .map(|&coordinate| GlyphMark {
            coordinate,
            glyph: String::from(glyph),
            color: theme.piece_color,
            font_size,
        })
        .collect::<Vec<_>>();
    debug!(n, marks = marks.len(), "Rendered board");

    BoardImage {
        n,
        tiles,
        marks,
        column_labels: (0..n).map(|col| column_label(col).to_string()).collect(),
        row_labels: (0..n).map(row_label).collect(),
    }
}

pub fn glyph_font_size(n: usize) -> f32 {
    GLYPH_SCALE / n.max(1) as f32
}

impl BoardImage {
    /// Width and height of the whole image, labels included.
    pub fn image_size(&self) -> f32 {
        BOARD_PIXELS + 2.0 * LABEL_MARGIN
    }

    pub fn cell_size(&self) -> f32 {
        BOARD_PIXELS / self.n.max(1) as f32
    }

    /// Top left corner of a square, in pixels.
    pub fn square_origin(&self, coordinate: Coordinate) -> (f32, f32) {
        let cell = self.cell_size();
        (
            LABEL_MARGIN + coordinate.col as f32 * cell,
            LABEL_MARGIN + coordinate.row as f32 * cell,
        )
    }

    /// Center of a square, in pixels.
    pub fn square_center(&self, coordinate: Coordinate) -> (f32, f32) {
        let (x, y) = self.square_origin(coordinate);
        let half = self.cell_size() / 2.0;
        (x + half, y + half)
    }

    /// Serializes the image as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Writes the image as a standalone SVG document.
    pub fn write_svg(&self, out: &mut impl Write) -> std::fmt::Result {
        let size = self.image_size();
        let cell = self.cell_size();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        )?;
        writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#)?;

        for tile in &self.tiles {
            let (x, y) = self.square_origin(tile.coordinate);
            writeln!(
                out,
                r#"  <rect class="square" x="{x}" y="{y}" width="{cell}" height="{cell}" fill="{}"/>"#,
                tile.fill
            )?;
        }

        // Grid lines on every square boundary
        let board_end = LABEL_MARGIN + BOARD_PIXELS;
        for k in 0..=self.n {
            let pos = LABEL_MARGIN + k as f32 * cell;
            writeln!(
                out,
                r#"  <line x1="{pos}" y1="{LABEL_MARGIN}" x2="{pos}" y2="{board_end}" stroke="black" stroke-width="{GRID_LINE_WIDTH}"/>"#
            )?;
            writeln!(
                out,
                r#"  <line x1="{LABEL_MARGIN}" y1="{pos}" x2="{board_end}" y2="{pos}" stroke="black" stroke-width="{GRID_LINE_WIDTH}"/>"#
            )?;
        }

        let label_offset = LABEL_MARGIN / 2.0;
        for (col, label) in self.column_labels.iter().enumerate() {
            let x = LABEL_MARGIN + (col as f32 + 0.5) * cell;
            let y = board_end + label_offset;
            writeln!(
                out,
                r#"  <text class="label" x="{x}" y="{y}" font-size="{LABEL_FONT_SIZE}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                escape_xml(label)
            )?;
        }
        for (row, label) in self.row_labels.iter().enumerate() {
            let y = LABEL_MARGIN + (row as f32 + 0.5) * cell;
            writeln!(
                out,
                r#"  <text class="label" x="{label_offset}" y="{y}" font-size="{LABEL_FONT_SIZE}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                escape_xml(label)
            )?;
        }

        for mark in &self.marks {
            let (x, y) = self.square_center(mark.coordinate);
            writeln!(
                out,
                r#"  <text class="piece" x="{x}" y="{y}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                mark.font_size,
                mark.color,
                escape_xml(&mark.glyph)
            )?;
        }

        writeln!(out, "</svg>")
    }
}

impl std::fmt::Display for BoardImage {
    /// Formats the image as SVG.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_svg(f)
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
