//! Error types for the toolview-tui crate

use thiserror::Error;

/// Result type alias for toolview-tui operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for toolview-tui
#[derive(Error, Debug)]
pub enum Error {
    /// Theme loading or compilation errors
    #[error("Theme error: {0}")]
    Theme(#[from] crate::tui::theme::ThemeError),

    /// Tool payload errors from toolview-tools
    #[error("Tool error: {0}")]
    Tool(#[from] toolview_tools::ToolError),
}
