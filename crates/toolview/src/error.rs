use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {source_name}: {error}")]
    ReadInput {
        source_name: String,
        error: std::io::Error,
    },

    #[error("Tool arguments are not valid JSON: {0}")]
    InvalidArgs(String),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Tui(#[from] toolview_tui::error::Error),
}
