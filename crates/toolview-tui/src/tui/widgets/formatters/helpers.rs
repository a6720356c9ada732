use crate::tui::theme::{Component, Theme};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub const WAITING_FOR_DATA: &str = "Waiting for data...";

/// Helper function to create a separator line
pub fn separator_line(width: usize, style: Style) -> Line<'static> {
    Line::from(Span::styled("─".repeat(width.clamp(1, 40)), style))
}

/// Helper function to truncate text to a maximum number of lines
pub fn truncate_lines(text: &str, max_lines: usize) -> (Vec<&str>, bool) {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() > max_lines {
        (lines.into_iter().take(max_lines).collect(), true)
    } else {
        (lines, false)
    }
}

pub fn placeholder_line(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        theme.style(Component::PlaceholderText),
    ))
}

pub fn more_lines_line(count: usize, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("... ({count} more lines)"),
        theme.dim_text().add_modifier(Modifier::ITALIC),
    ))
}
