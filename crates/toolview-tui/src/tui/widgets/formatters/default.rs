use super::{ToolFormatter, helpers::*};
use crate::tui::theme::{Component, Theme};
use crate::tui::widgets::yaml::format_yaml;
use ratatui::text::{Line, Span};
use serde_json::Value;

const MAX_RESULT_LINES: usize = 10;

/// Formatter for tools without a dedicated view
pub struct DefaultFormatter;

impl ToolFormatter for DefaultFormatter {
    fn compact(
        &self,
        params: &Value,
        result: Option<&str>,
        wrap_width: usize,
        theme: &Theme,
    ) -> Vec<Line<'static>> {
        let status = if result.is_some() { "done" } else { "pending" };
        let summary = match params.as_object() {
            Some(obj) if !obj.is_empty() => obj.keys().cloned().collect::<Vec<_>>().join(", "),
            _ => "no parameters".to_string(),
        };
        let budget = wrap_width.saturating_sub(status.len() + 3).max(8);
        let summary = if summary.chars().count() > budget {
            let cut: String = summary.chars().take(budget.saturating_sub(1)).collect();
            format!("{cut}…")
        } else {
            summary
        };

        vec![Line::from(vec![
            Span::styled(summary, theme.dim_text()),
            Span::styled(format!(" ({status})"), theme.dim_text()),
        ])]
    }

    fn detailed(
        &self,
        params: &Value,
        result: Option<&str>,
        wrap_width: usize,
        theme: &Theme,
    ) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            "Tool Parameters:",
            theme.style(Component::ToolCallHeader),
        )));

        let params_yaml = format_yaml(&params.to_string());
        for line in params_yaml.lines() {
            for wrapped in textwrap::wrap(line, wrap_width.max(1)) {
                lines.push(Line::from(Span::styled(
                    wrapped.to_string(),
                    theme.dim_text(),
                )));
            }
        }

        lines.push(separator_line(wrap_width, theme.dim_text()));

        let Some(result) = result else {
            lines.push(placeholder_line("Waiting for result...", theme));
            return lines;
        };

        let result_yaml = format_yaml(result);
        let (output_lines, truncated) = truncate_lines(&result_yaml, MAX_RESULT_LINES);
        for line in output_lines {
            for wrapped in textwrap::wrap(line, wrap_width.max(1)) {
                lines.push(Line::from(Span::styled(
                    wrapped.to_string(),
                    theme.style(Component::ToolOutput),
                )));
            }
        }
        if truncated {
            lines.push(more_lines_line(
                result_yaml.lines().count() - MAX_RESULT_LINES,
                theme,
            ));
        }

        lines
    }
}
