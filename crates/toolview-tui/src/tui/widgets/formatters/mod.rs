use crate::tui::observer::TracingObserver;
use crate::tui::theme::Theme;
use crate::tui::widgets::word_diff::WordDiffOptions;
use ratatui::text::Line;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use toolview_tools::tools::UPSERT_SYSTEM_TOOL_NAME;

pub mod default;
pub mod helpers;
pub mod upsert_system;

use self::default::DefaultFormatter;
use self::upsert_system::UpsertSystemFormatter;

/// Trait for formatting tool calls and results
///
/// `params` are the (possibly still streaming) call arguments and `result` is
/// the raw payload reported by the tool, `None` while the call is in flight.
pub trait ToolFormatter: Send + Sync {
    /// Format tool call and result in compact mode (single line summary)
    fn compact(
        &self,
        params: &Value,
        result: Option<&str>,
        wrap_width: usize,
        theme: &Theme,
    ) -> Vec<Line<'static>>;

    /// Format tool call and result in detailed mode (full parameters and output)
    fn detailed(
        &self,
        params: &Value,
        result: Option<&str>,
        wrap_width: usize,
        theme: &Theme,
    ) -> Vec<Line<'static>>;
}

/// Diff settings shared by formatters that render diffs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSettings {
    pub options: WordDiffOptions,
    pub max_lines: Option<usize>,
}

/// Formatters keyed by tool name, with a fallback for everything else
pub struct FormatterRegistry {
    formatters: HashMap<&'static str, Box<dyn ToolFormatter>>,
    fallback: Box<dyn ToolFormatter>,
}

impl FormatterRegistry {
    pub fn new(diff: DiffSettings) -> Self {
        let mut formatters: HashMap<&'static str, Box<dyn ToolFormatter>> = HashMap::new();

        formatters.insert(
            UPSERT_SYSTEM_TOOL_NAME,
            Box::new(
                UpsertSystemFormatter::new()
                    .with_diff_settings(diff)
                    .with_observer(Arc::new(TracingObserver)),
            ),
        );

        Self {
            formatters,
            fallback: Box::new(DefaultFormatter),
        }
    }

    pub fn get(&self, tool_name: &str) -> &dyn ToolFormatter {
        self.formatters
            .get(tool_name)
            .map_or(self.fallback.as_ref(), |fmt| fmt.as_ref())
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new(DiffSettings::default())
    }
}

static FORMATTERS: LazyLock<FormatterRegistry> = LazyLock::new(FormatterRegistry::default);

pub fn get_formatter(tool_name: &str) -> &'static dyn ToolFormatter {
    FORMATTERS.get(tool_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(lines: &[Line<'static>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn upsert_system_uses_its_own_formatter() {
        let theme = Theme::default();
        let lines =
            get_formatter(UPSERT_SYSTEM_TOOL_NAME).detailed(&json!({}), None, 80, &theme);
        assert_eq!(text(&lines), vec!["Waiting for data..."]);
    }

    #[test]
    fn unknown_tools_fall_back_to_default_formatter() {
        let theme = Theme::default();
        let lines = get_formatter("web_fetch").detailed(&json!({"url": "x"}), None, 80, &theme);
        assert_eq!(text(&lines).first().map(String::as_str), Some("Tool Parameters:"));
    }
}
