//! Theme system for toolview-tui
//!
//! Themes are loaded from TOML files and map each themeable [`Component`] to a
//! ratatui [`Style`]. A built-in default theme is used when no theme is named.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

mod loader;

pub use loader::ThemeLoader;

/// Errors that can occur during theme operations
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Color not found in palette: {0}")]
    ColorNotFound(String),

    #[error("Invalid color value: {0}")]
    InvalidColor(String),
}

/// A color value that can be either a palette reference or a direct color
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Palette(String),
    Direct(String),
}

/// Style definition for a component
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentStyle {
    pub fg: Option<ColorValue>,
    pub bg: Option<ColorValue>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underlined: bool,
    #[serde(default)]
    pub crossed_out: bool,
}

/// Raw theme as loaded from TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct RawTheme {
    pub name: String,
    #[serde(default)]
    pub palette: HashMap<String, RgbColor>,
    #[serde(default)]
    pub components: HashMap<Component, ComponentStyle>,
}

pub type Theme = CompiledTheme;

/// RGB color deserialized from `#rrggbb` strings
#[derive(Debug, Clone, Copy)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match parse_hex(&s) {
            Some((r, g, b)) => Ok(RgbColor(r, g, b)),
            None => Err(serde::de::Error::custom(format!("Invalid hex color: {s}"))),
        }
    }
}

impl From<RgbColor> for Color {
    fn from(rgb: RgbColor) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// All themeable components of a rendered tool call
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    // Tool calls
    ToolCallHeader,
    ToolOutput,
    ToolSuccess,
    ToolError,

    // General
    ErrorText,
    DimText,
    PlaceholderText,

    // Diffs
    CodeAddition,
    CodeDeletion,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Compiled theme ready for rendering
#[derive(Debug, Clone)]
pub struct CompiledTheme {
    pub name: String,
    pub styles: HashMap<Component, Style>,
}

impl RawTheme {
    pub fn into_theme(self) -> Result<Theme, ThemeError> {
        let mut styles = HashMap::new();

        for (component, style_def) in &self.components {
            let mut style = Style::default();

            if let Some(fg) = &style_def.fg {
                style = style.fg(self.resolve_color(fg)?);
            }
            if let Some(bg) = &style_def.bg {
                style = style.bg(self.resolve_color(bg)?);
            }

            if style_def.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if style_def.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }
            if style_def.underlined {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if style_def.crossed_out {
                style = style.add_modifier(Modifier::CROSSED_OUT);
            }

            styles.insert(*component, style);
        }

        Ok(Theme {
            name: self.name,
            styles,
        })
    }

    fn resolve_color(&self, color_value: &ColorValue) -> Result<Color, ThemeError> {
        match color_value {
            ColorValue::Palette(name) => match self.palette.get(name) {
                Some(&rgb) => Ok(rgb.into()),
                // Untagged enums always match Palette first, so fall through to
                // direct parsing before giving up
                None => parse_direct_color(name).map_err(|_| {
                    if name.starts_with('#') {
                        ThemeError::InvalidColor(name.clone())
                    } else {
                        ThemeError::ColorNotFound(name.clone())
                    }
                }),
            },
            ColorValue::Direct(color_str) => parse_direct_color(color_str),
        }
    }
}

fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Parse a direct color string (hex or named)
fn parse_direct_color(color_str: &str) -> Result<Color, ThemeError> {
    if let Some((r, g, b)) = parse_hex(color_str) {
        return Ok(Color::Rgb(r, g, b));
    }

    match color_str.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "lightred" | "light_red" => Ok(Color::LightRed),
        "lightgreen" | "light_green" => Ok(Color::LightGreen),
        "lightyellow" | "light_yellow" => Ok(Color::LightYellow),
        "lightblue" | "light_blue" => Ok(Color::LightBlue),
        "reset" => Ok(Color::Reset),
        _ => Err(ThemeError::InvalidColor(color_str.to_string())),
    }
}

impl CompiledTheme {
    /// Get a style for a component, falling back to default if not found
    pub fn style(&self, component: Component) -> Style {
        self.styles.get(&component).copied().unwrap_or_default()
    }

    pub fn error_text(&self) -> Style {
        self.style(Component::ErrorText)
    }

    pub fn dim_text(&self) -> Style {
        self.style(Component::DimText)
    }

    pub fn text(&self) -> Style {
        Style::default()
    }
}

impl Default for CompiledTheme {
    fn default() -> Self {
        create_default_theme()
    }
}

fn create_default_theme() -> CompiledTheme {
    let mut styles = HashMap::new();

    // Tool styles
    styles.insert(Component::ToolCallHeader, Style::default().fg(Color::Cyan));
    styles.insert(Component::ToolOutput, Style::default());
    styles.insert(
        Component::ToolSuccess,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );
    styles.insert(Component::ToolError, Style::default().fg(Color::Red));

    // General styles
    styles.insert(Component::ErrorText, Style::default().fg(Color::Red));
    styles.insert(Component::DimText, Style::default().fg(Color::DarkGray));
    styles.insert(
        Component::PlaceholderText,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    );

    // Diff styles
    styles.insert(Component::CodeAddition, Style::default().fg(Color::Green));
    styles.insert(
        Component::CodeDeletion,
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
    );

    CompiledTheme {
        name: "Default".to_string(),
        styles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_strikes_deletions() {
        let theme = Theme::default();
        let style = theme.style(Component::CodeDeletion);

        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
        assert_eq!(theme.style(Component::CodeAddition).fg, Some(Color::Green));
    }

    #[test]
    fn palette_references_and_named_colors_resolve() {
        let raw: RawTheme = toml::from_str(
            r##"
name = "t"

[palette]
green = "#00aa00"

[components]
code_addition = { fg = "green", bold = true }
code_deletion = { fg = "red", crossed_out = true }
"##,
        )
        .unwrap();

        let theme = raw.into_theme().unwrap();

        let added = theme.style(Component::CodeAddition);
        assert_eq!(added.fg, Some(Color::Rgb(0, 0xaa, 0)));
        assert!(added.add_modifier.contains(Modifier::BOLD));

        let removed = theme.style(Component::CodeDeletion);
        assert_eq!(removed.fg, Some(Color::Red));
        assert!(removed.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn unknown_color_is_rejected() {
        let raw: RawTheme = toml::from_str(
            r#"
name = "t"

[components]
error_text = { fg = "not-a-color" }
"#,
        )
        .unwrap();

        assert!(matches!(
            raw.into_theme(),
            Err(ThemeError::ColorNotFound(name)) if name == "not-a-color"
        ));
    }

    #[test]
    fn missing_component_falls_back_to_plain_style() {
        let raw: RawTheme = toml::from_str("name = \"bare\"").unwrap();
        let theme = raw.into_theme().unwrap();
        assert_eq!(theme.style(Component::ToolSuccess), Style::default());
    }
}
