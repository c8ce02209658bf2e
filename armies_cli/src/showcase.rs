use armies::{
    attacking_pairs, compute_placements, render_board, visualize_board, BoardTheme, Coordinate,
    PieceKind, PlacementReport, PlacementResult, RenderRequest,
};
use tracing::debug;

/// The format of the artifact written by the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// A standalone SVG image of the board
    Svg,
    /// A Unicode text board
    Text,
    /// A JSON summary of the placement
    Json,
}

/// One computed army, ready to be displayed.
pub struct Showcase {
    pub piece: PieceKind,
    pub board_size: usize,
    /// Already truncated to the number of pieces in the army.
    pub result: PlacementResult,
    pub theme: BoardTheme,
}

impl Showcase {
    /// Computes the army and keeps only the squares meant for display.
    pub fn compute(piece: PieceKind, board_size: usize, theme: BoardTheme) -> Self {
        let raw = compute_placements(piece, board_size);
        if raw.squares.len() > raw.count {
            debug!(
                raw = raw.squares.len(),
                count = raw.count,
                "Truncating placements"
            );
        }
        Self {
            piece,
            board_size,
            result: raw.truncated_to_count(),
            theme,
        }
    }

    pub fn squares(&self) -> &[Coordinate] {
        &self.result.squares
    }

    /// Pairs of pieces that could capture each other.
    pub fn conflicts(&self) -> Vec<(Coordinate, Coordinate)> {
        attacking_pairs(self.piece, self.squares())
    }

    pub fn report(&self) -> PlacementReport {
        PlacementReport::new(self.piece, self.board_size, &self.result)
    }

    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            n: self.board_size,
            squares: self.result.squares.clone(),
            glyph: self.piece.glyph().to_string(),
            theme: self.theme,
        }
    }

    /// A human-readable summary of the result.
    pub fn summary(&self) -> String {
        let n = self.board_size;
        format!(
            "Results for the {}\n\
             Maximum pieces on {n}x{n} board: {}\n\
             General formula: {}\n\
             Construction logic: {}",
            self.piece,
            self.result.squares.len(),
            self.result.formula,
            self.piece.construction(),
        )
    }

    pub fn artifact(&self, format: OutputFormat) -> anyhow::Result<String> {
        let artifact = match format {
            OutputFormat::Svg => render_board(&self.render_request()).to_svg(),
            OutputFormat::Text => visualize_board(
                self.board_size,
                self.squares(),
                &self.piece.glyph().to_string(),
            ),
            OutputFormat::Json => serde_json::to_string_pretty(&self.report())?,
        };
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_knights_summary() {
        let showcase = Showcase::compute(PieceKind::Knight, 8, BoardTheme::default());
        assert_eq!(showcase.squares().len(), 32);
        assert!(showcase.summary().contains("Maximum pieces on 8x8 board: 32"));
        assert!(showcase.summary().contains("General formula: ⌈n²/2⌉"));
        assert!(showcase.conflicts().is_empty());
    }

    #[test]
    fn bishops_are_truncated_before_display() {
        let showcase = Showcase::compute(PieceKind::Bishop, 5, BoardTheme::default());
        assert_eq!(showcase.squares().len(), 8);
        assert_eq!(showcase.render_request().squares.len(), 8);
        assert_eq!(
            showcase.conflicts(),
            vec![(Coordinate::new(4, 0), Coordinate::new(0, 4))]
        );
    }

    #[test]
    fn queens_without_solution_still_render() {
        let showcase = Showcase::compute(PieceKind::Queen, 2, BoardTheme::default());
        assert!(showcase.result.is_no_solution());
        let svg = showcase.artifact(OutputFormat::Svg).unwrap();
        assert_eq!(svg.matches(r#"class="square""#).count(), 4);
        assert_eq!(svg.matches(r#"class="piece""#).count(), 0);
    }

    #[test]
    fn json_artifact() {
        let showcase = Showcase::compute(PieceKind::King, 3, BoardTheme::default());
        let json: serde_json::Value =
            serde_json::from_str(&showcase.artifact(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["piece"], "king");
        assert_eq!(json["count"], 4);
        assert_eq!(json["squares"], serde_json::json!(["A1", "C1", "A3", "C3"]));
    }

    #[test]
    fn text_artifact() {
        let showcase = Showcase::compute(PieceKind::Rook, 2, BoardTheme::default());
        let text = showcase.artifact(OutputFormat::Text).unwrap();
        assert!(text.contains("  1 │ ♖ · │"));
        assert!(text.contains("  2 │ · ♖ │"));
    }
}
