//! Theme loading functionality

use super::{RawTheme, Theme, ThemeError};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Bundled themes included with the application
const BUNDLED_THEMES: &[(&str, &str)] = &[
    ("one-dark", include_str!("../../../themes/one-dark.toml")),
    (
        "github-light",
        include_str!("../../../themes/github-light.toml"),
    ),
];

/// Theme loader responsible for finding and loading theme files
pub struct ThemeLoader {
    search_paths: Vec<PathBuf>,
}

impl ThemeLoader {
    /// Create a new theme loader with default search paths
    pub fn new() -> Self {
        let mut search_paths = Vec::new();

        if let Some(proj_dirs) = ProjectDirs::from("", "", "toolview") {
            // e.g. ~/.config/toolview/themes on Linux
            search_paths.push(proj_dirs.config_dir().join("themes"));
            search_paths.push(proj_dirs.data_dir().join("themes"));
        }

        Self { search_paths }
    }

    /// Loader that only knows the bundled themes and the given directories
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Load a theme by name
    pub fn load_theme(&self, name: &str) -> Result<Theme, ThemeError> {
        if let Some((_, theme_content)) = BUNDLED_THEMES.iter().find(|(n, _)| *n == name) {
            let raw_theme: RawTheme = toml::from_str(theme_content)?;
            return raw_theme.into_theme();
        }

        let theme_file = self.find_theme_file(name)?;
        tracing::debug!(path = %theme_file.display(), "Loading theme file");

        let content = fs::read_to_string(&theme_file)?;
        let raw_theme: RawTheme = toml::from_str(&content)?;

        if raw_theme.name.to_lowercase() != name.to_lowercase() {
            return Err(ThemeError::Validation(format!(
                "Theme name mismatch: expected '{}', found '{}'",
                name, raw_theme.name
            )));
        }

        raw_theme.into_theme()
    }

    /// Load the named theme, or the built-in default when no name is given
    pub fn resolve(&self, name: Option<&str>) -> crate::error::Result<Theme> {
        match name {
            None | Some("default") => Ok(Theme::default()),
            Some(name) => Ok(self.load_theme(name)?),
        }
    }

    /// List all available themes
    pub fn list_themes(&self) -> Vec<String> {
        let mut themes: Vec<String> = BUNDLED_THEMES
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();

        for search_path in &self.search_paths {
            let Ok(entries) = fs::read_dir(search_path) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_file() || path.extension().is_none_or(|ext| ext != "toml") {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if !themes.iter().any(|t| t == stem) {
                        themes.push(stem.to_string());
                    }
                }
            }
        }

        themes.sort();
        themes
    }

    fn find_theme_file(&self, name: &str) -> Result<PathBuf, ThemeError> {
        let filename = format!("{name}.toml");

        self.search_paths
            .iter()
            .map(|search_path| search_path.join(&filename))
            .find(|theme_path| theme_path.exists())
            .ok_or_else(|| {
                ThemeError::Validation(format!(
                    "Theme '{name}' not found in bundled themes or filesystem"
                ))
            })
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Component;
    use tempfile::TempDir;

    #[test]
    fn test_load_theme_from_search_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("paper.toml"),
            r##"
name = "paper"

[palette]
ink = "#101010"

[components]
tool_output = { fg = "ink" }
"##,
        )
        .unwrap();

        let loader = ThemeLoader::with_search_paths(vec![temp_dir.path().to_path_buf()]);
        let theme = loader.load_theme("paper").unwrap();

        assert_eq!(theme.name, "paper");
        assert_eq!(
            theme.style(Component::ToolOutput).fg,
            Some(ratatui::style::Color::Rgb(0x10, 0x10, 0x10))
        );
    }

    #[test]
    fn test_theme_name_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.toml"), "name = \"b\"").unwrap();

        let loader = ThemeLoader::with_search_paths(vec![temp_dir.path().to_path_buf()]);

        assert!(matches!(
            loader.load_theme("a"),
            Err(ThemeError::Validation(_))
        ));
    }

    #[test]
    fn test_bundled_themes_load() {
        let loader = ThemeLoader::with_search_paths(Vec::new());

        for (theme_name, _) in BUNDLED_THEMES {
            let theme = loader
                .load_theme(theme_name)
                .unwrap_or_else(|e| panic!("Failed to load theme '{theme_name}': {e}"));

            for component in [
                Component::CodeAddition,
                Component::CodeDeletion,
                Component::ToolSuccess,
                Component::ErrorText,
            ] {
                assert!(
                    theme.styles.contains_key(&component),
                    "Theme '{theme_name}' missing component: {component}"
                );
            }
        }
    }

    #[test]
    fn test_list_themes() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("theme1.toml"), "name = \"theme1\"").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let loader = ThemeLoader::with_search_paths(vec![temp_dir.path().to_path_buf()]);
        let themes = loader.list_themes();

        assert_eq!(themes, vec!["github-light", "one-dark", "theme1"]);
    }

    #[test]
    fn test_resolve_default_and_missing() {
        let loader = ThemeLoader::with_search_paths(Vec::new());

        assert_eq!(loader.resolve(None).unwrap().name, "Default");
        assert!(matches!(
            loader.resolve(Some("non-existent-theme")),
            Err(crate::error::Error::Theme(ThemeError::Validation(_)))
        ));
    }
}
