use std::path::PathBuf;

use anyhow::Context;
use armies::{PieceKind, Rgb};
use armies_cli::{resolve_theme, OutputFormat, Showcase, ThemeOverrides};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(about = "Places the largest army of non-attacking chess pieces on an n x n board")]
struct Args {
    /// The board size n
    #[arg(short = 'n', long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(1..=20))]
    size: u8,

    /// The piece, by name ("knight") or symbol ("♘")
    #[arg(short, long, default_value = "knight")]
    piece: PieceKind,

    /// A JSON file with "piece_color", "light_square_color" and "dark_square_color"
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Piece color as a hex string, e.g. "#000000"
    #[arg(long)]
    piece_color: Option<Rgb>,

    /// Light square color as a hex string, e.g. "#F0D9B5"
    #[arg(long)]
    light_color: Option<Rgb>,

    /// Dark square color as a hex string, e.g. "#B58863"
    #[arg(long)]
    dark_color: Option<Rgb>,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the board to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Check that no two placed pieces attack each other
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let overrides = ThemeOverrides {
        piece_color: args.piece_color,
        light_square_color: args.light_color,
        dark_square_color: args.dark_color,
    };
    let theme = resolve_theme(args.theme.as_deref(), overrides)?;

    let n = usize::from(args.size);
    let showcase = Showcase::compute(args.piece, n, theme);
    info!(piece = %args.piece, n, count = showcase.squares().len());

    if showcase.result.is_no_solution() {
        warn!("No solution exists for {}x{} {}s", n, n, args.piece.name().to_lowercase());
    }

    if args.verify {
        let conflicts = showcase.conflicts();
        if conflicts.is_empty() {
            info!("No two pieces attack each other");
        }
        for (a, b) in conflicts {
            warn!(%a, %b, "Pieces attack each other");
        }
    }

    eprintln!("{}\n", showcase.summary());

    let artifact = showcase.artifact(args.format)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, artifact)
                .with_context(|| format!("Could not write '{}'", path.display()))?;
            info!(path = %path.display(), "Wrote board");
        }
        None => println!("{}", artifact),
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["armies"]).unwrap();
        assert_eq!(args.size, 8);
        assert_eq!(args.piece, PieceKind::Knight);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.verify);
    }

    #[test]
    fn board_size_is_bounded() {
        assert!(Args::try_parse_from(["armies", "-n", "0"]).is_err());
        assert!(Args::try_parse_from(["armies", "-n", "21"]).is_err());
        assert!(Args::try_parse_from(["armies", "-n", "20"]).is_ok());
    }

    #[test]
    fn pieces_and_colors() {
        let args = Args::try_parse_from([
            "armies",
            "--piece",
            "♕",
            "--light-color",
            "#fff",
            "--format",
            "svg",
        ])
        .unwrap();
        assert_eq!(args.piece, PieceKind::Queen);
        assert_eq!(args.light_color, Some(Rgb::WHITE));
        assert_eq!(args.format, OutputFormat::Svg);
        assert!(Args::try_parse_from(["armies", "--piece", "pawn"]).is_err());
        assert!(Args::try_parse_from(["armies", "--dark-color", "#12"]).is_err());
    }
}
