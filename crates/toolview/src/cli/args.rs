use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render agent tool calls in the terminal.
#[derive(Parser)]
#[command(version, about, long_about = None, author)]
pub struct Cli {
    /// Path to the preferences file (defaults to <config dir>/toolview/preferences.toml)
    #[arg(long, env = "TOOLVIEW_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Render a single tool call
    Render {
        /// Tool name the call was made with
        #[arg(long, default_value = toolview_tools::tools::UPSERT_SYSTEM_TOOL_NAME)]
        tool: String,
        /// JSON file holding the call arguments, or '-' for stdin
        #[arg(long, value_name = "PATH")]
        args: String,
        /// File holding the raw result payload, or '-' for stdin. Omit while the call is in flight
        #[arg(long, value_name = "PATH")]
        result: Option<String>,
        /// Show a one-line summary instead of the full view
        #[arg(long, conflicts_with = "detailed")]
        compact: bool,
        /// Show the full view even when preferences ask for compact output
        #[arg(long)]
        detailed: bool,
        /// Wrap width in columns (defaults to the terminal width)
        #[arg(long)]
        width: Option<usize>,
        /// Theme to render with (overrides preferences)
        #[arg(long)]
        theme: Option<String>,
        /// Disable colors and text attributes
        #[arg(long)]
        plain: bool,
    },
    /// Print the JSON schema of the upsert_system tool input
    Schema,
    /// List available themes
    Themes,
}

/// `Some(true)` for `--compact`, `Some(false)` for `--detailed`, `None` to
/// defer to preferences.
pub fn layout_override(compact: bool, detailed: bool) -> Option<bool> {
    if compact {
        Some(true)
    } else if detailed {
        Some(false)
    } else {
        None
    }
}
