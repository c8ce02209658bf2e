use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use armies::{BoardTheme, Rgb};

/// Loads a theme from a JSON file.
///
/// All fields are optional, e.g. `{"piece_color": "#c00"}` keeps the
/// default square colors.
pub fn load_theme(path: &Path) -> anyhow::Result<BoardTheme> {
    let file = File::open(path)
        .with_context(|| format!("Could not open theme file '{}'", path.display()))?;
    let theme = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse theme file '{}'", path.display()))?;
    Ok(theme)
}

/// Colors given on the command line, which win over the theme file.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeOverrides {
    pub piece_color: Option<Rgb>,
    pub light_square_color: Option<Rgb>,
    pub dark_square_color: Option<Rgb>,
}

impl ThemeOverrides {
    pub fn apply(&self, theme: BoardTheme) -> BoardTheme {
        BoardTheme {
            piece_color: self.piece_color.unwrap_or(theme.piece_color),
            light_square_color: self.light_square_color.unwrap_or(theme.light_square_color),
            dark_square_color: self.dark_square_color.unwrap_or(theme.dark_square_color),
        }
    }
}

/// The theme file (or the default theme) with the overrides applied.
pub fn resolve_theme(
    theme_file: Option<&Path>,
    overrides: ThemeOverrides,
) -> anyhow::Result<BoardTheme> {
    let base = match theme_file {
        Some(path) => load_theme(path)?,
        None => BoardTheme::default(),
    };
    Ok(overrides.apply(base))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "armies_cli_{}_{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn overrides_win_over_file() {
        let path = write_temp_file(
            "overrides",
            r##"{"piece_color": "#112233", "dark_square_color": "#445566"}"##,
        );
        let overrides = ThemeOverrides {
            piece_color: Some(Rgb::WHITE),
            ..ThemeOverrides::default()
        };
        let theme = resolve_theme(Some(&path), overrides).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(theme.piece_color, Rgb::WHITE);
        assert_eq!(theme.dark_square_color, Rgb::new(0x44, 0x55, 0x66));
        assert_eq!(
            theme.light_square_color,
            BoardTheme::default().light_square_color
        );
    }

    #[test]
    fn no_file_means_default_theme() {
        let theme = resolve_theme(None, ThemeOverrides::default()).unwrap();
        assert_eq!(theme, BoardTheme::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("armies_cli_this_file_does_not_exist.json");
        let err = load_theme(&path).unwrap_err();
        assert!(err.to_string().contains("Could not open theme file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = write_temp_file("malformed", r#"{"piece_color": "not a color"}"#);
        let result = load_theme(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Could not parse theme file"));
    }
}
