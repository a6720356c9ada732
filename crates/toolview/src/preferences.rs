use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use toolview_tui::tui::widgets::WordDiffOptions;
use toolview_tui::tui::widgets::formatters::DiffSettings;

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub ui: UiPreferences,

    #[serde(default)]
    pub diff: DiffPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UiPreferences {
    pub theme: Option<String>,
    pub wrap_width: Option<usize>,
    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffPreferences {
    #[serde(default = "default_ignore_case")]
    pub ignore_case: bool,
    /// Lines of diff shown before the rest is folded into a marker
    pub max_lines: Option<usize>,
}

fn default_ignore_case() -> bool {
    true
}

impl Default for DiffPreferences {
    fn default() -> Self {
        Self {
            ignore_case: default_ignore_case(),
            max_lines: None,
        }
    }
}

impl Preferences {
    /// Get the path to the preferences file
    pub fn config_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("toolview").join("preferences.toml"))
    }

    /// Load preferences from the default location, or return defaults if not found
    pub fn load() -> Result<Self, Error> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load preferences from the default location. Errors (no config
    /// directory, unreadable file) are logged and yield defaults.
    pub fn load_or_default() -> Self {
        Self::or_default_on_error(Self::load())
    }

    fn or_default_on_error(loaded: Result<Self, Error>) -> Self {
        loaded.unwrap_or_else(|e| {
            tracing::warn!("Failed to load preferences: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Load preferences from `path`. A missing file yields defaults, and so does
    /// a file that fails to parse (with a warning).
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        match toml::from_str(&contents) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse preferences file at {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    pub fn diff_settings(&self) -> DiffSettings {
        DiffSettings {
            options: WordDiffOptions {
                ignore_case: self.diff.ignore_case,
            },
            max_lines: self.diff.max_lines,
        }
    }
}
