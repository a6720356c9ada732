use super::{
    DiffSettings, ToolFormatter,
    helpers::{WAITING_FOR_DATA, placeholder_line},
};
use crate::error::Result;
use crate::tui::observer::{RenderObserver, ResultSource};
use crate::tui::theme::{Component, Theme};
use crate::tui::widgets::word_diff::WordDiffWidget;
use crate::tui::widgets::yaml::format_yaml;
use ratatui::text::{Line, Span};
use serde_json::Value;
use std::sync::Arc;
use toolview_tools::tools::upsert_system::{AssistantState, UpsertSystemParams, UpsertSystemResult};

pub const SUCCESS_MESSAGE: &str = "Assistant Updated Successfully";
pub const FAILURE_MESSAGE: &str = "Update failed";

/// Normalized texts ready to be diffed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPlan {
    pub old_text: String,
    pub new_text: String,
    pub success: bool,
    pub source: ResultSource,
}

/// What a single render of an `upsert_system` call shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Neither the name nor the main instruction has streamed in yet
    Waiting,
    /// Diff against the reported result, or the empty default while pending
    Populated(DiffPlan),
    /// The payload was unreadable and the empty default result is shown
    FailedParse(DiffPlan),
}

/// Renders the before/after diff of an assistant configuration update
#[derive(Default)]
pub struct UpsertSystemFormatter {
    diff: DiffSettings,
    observer: Option<Arc<dyn RenderObserver>>,
}

impl UpsertSystemFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diff_settings(mut self, diff: DiffSettings) -> Self {
        self.diff = diff;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RenderObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Parse the payload, substituting the failed default when it is missing
    /// or unreadable.
    pub fn resolve_result(&self, result: Option<&str>) -> (UpsertSystemResult, ResultSource) {
        let (resolved, source) = match result {
            None => (UpsertSystemResult::default(), ResultSource::Pending),
            Some(payload) => match UpsertSystemResult::from_payload(payload) {
                Ok(parsed) => (parsed, ResultSource::Reported),
                Err(e) => {
                    tracing::warn!(error = %e, "Rendering upsert_system with default result");
                    (UpsertSystemResult::default(), ResultSource::Malformed)
                }
            },
        };

        if let Some(observer) = &self.observer {
            observer.on_result_resolved(&resolved, source);
        }
        (resolved, source)
    }

    pub fn view_state(&self, params: &Value, result: Option<&str>) -> ViewState {
        let (resolved, source) = self.resolve_result(result);

        if UpsertSystemParams::from_streaming(params).is_awaiting_data() {
            return ViewState::Waiting;
        }

        let old = resolved.old_state();
        let new = resolved.new_state();
        if let Some(observer) = &self.observer {
            observer.on_states(&old, &new);
        }

        let plan = DiffPlan {
            old_text: normalized_text(&old),
            new_text: normalized_text(&new),
            success: resolved.success,
            source,
        };

        match source {
            ResultSource::Malformed => ViewState::FailedParse(plan),
            ResultSource::Reported | ResultSource::Pending => ViewState::Populated(plan),
        }
    }

    fn status_line(success: bool, theme: &Theme) -> Line<'static> {
        if success {
            Line::from(vec![
                Span::styled("✓ ", theme.style(Component::ToolSuccess)),
                Span::styled(SUCCESS_MESSAGE, theme.style(Component::ToolSuccess)),
            ])
        } else {
            Line::from(Span::styled(FAILURE_MESSAGE, theme.error_text()))
        }
    }
}

fn state_yaml(state: &AssistantState) -> Result<String> {
    Ok(format_yaml(&state.to_json()?))
}

fn normalized_text(state: &AssistantState) -> String {
    state_yaml(state).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not normalize assistant state");
        String::new()
    })
}

impl ToolFormatter for UpsertSystemFormatter {
    fn compact(
        &self,
        params: &Value,
        result: Option<&str>,
        _wrap_width: usize,
        theme: &Theme,
    ) -> Vec<Line<'static>> {
        let plan = match self.view_state(params, result) {
            ViewState::Waiting => return vec![placeholder_line(WAITING_FOR_DATA, theme)],
            ViewState::Populated(plan) | ViewState::FailedParse(plan) => plan,
        };

        let args = UpsertSystemParams::from_streaming(params);
        let name = if args.assistant_name.is_empty() {
            "assistant".to_string()
        } else {
            args.assistant_name
        };

        let (info, style) = match (plan.source, plan.success) {
            (ResultSource::Pending, _) => ("pending", theme.dim_text()),
            (ResultSource::Malformed, _) => ("invalid result", theme.style(Component::ToolError)),
            (ResultSource::Reported, true) => ("updated", theme.style(Component::ToolSuccess)),
            (ResultSource::Reported, false) => {
                ("update failed", theme.style(Component::ToolError))
            }
        };

        vec![Line::from(vec![
            Span::styled(name, theme.style(Component::ToolCallHeader)),
            Span::styled(format!(" ({info})"), style),
        ])]
    }

    fn detailed(
        &self,
        params: &Value,
        result: Option<&str>,
        wrap_width: usize,
        theme: &Theme,
    ) -> Vec<Line<'static>> {
        let plan = match self.view_state(params, result) {
            ViewState::Waiting => return vec![placeholder_line(WAITING_FOR_DATA, theme)],
            ViewState::Populated(plan) | ViewState::FailedParse(plan) => plan,
        };

        let mut lines = WordDiffWidget::new(&plan.old_text, &plan.new_text, theme)
            .with_options(self.diff.options)
            .with_wrap_width(wrap_width)
            .with_max_lines(self.diff.max_lines)
            .lines();

        lines.push(Line::raw(""));
        lines.push(Self::status_line(plan.success, theme));
        lines
    }
}
