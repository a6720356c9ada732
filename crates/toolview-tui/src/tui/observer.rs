//! Optional hook for watching how a tool call view was resolved.

use strum::Display;
use toolview_tools::tools::upsert_system::{AssistantState, UpsertSystemResult};

/// Where the result used for a render came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ResultSource {
    /// Parsed from the payload reported by the backend
    Reported,
    /// No payload yet, the default result was used
    Pending,
    /// The payload could not be parsed, the default result was used
    Malformed,
}

/// Receives snapshots while a view is rendered. Never affects the output.
pub trait RenderObserver: Send + Sync {
    fn on_result_resolved(&self, _result: &UpsertSystemResult, _source: ResultSource) {}

    fn on_states(&self, _old: &AssistantState, _new: &AssistantState) {}
}

/// Forwards render snapshots to `tracing` at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RenderObserver for TracingObserver {
    fn on_result_resolved(&self, result: &UpsertSystemResult, source: ResultSource) {
        tracing::debug!(
            target: "toolview::render",
            %source,
            success = result.success,
            assistant_name = %result.current.assistant_name,
            "Resolved upsert_system result"
        );
    }

    fn on_states(&self, old: &AssistantState, new: &AssistantState) {
        tracing::debug!(target: "toolview::render", ?old, ?new, "Diffing assistant states");
    }
}
