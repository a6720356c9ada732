use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolError {
    #[error("Invalid parameters for {tool_name}: {message}")]
    InvalidParams { tool_name: String, message: String },

    #[error("Invalid result payload for {tool_name}: {message}")]
    InvalidResult { tool_name: String, message: String },

    #[error("Failed to serialize {what}: {message}")]
    Serialization { what: String, message: String },
}

impl ToolError {
    pub fn invalid_params<T: Into<String>, M: Into<String>>(tool_name: T, message: M) -> Self {
        ToolError::InvalidParams {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_result<T: Into<String>, M: Into<String>>(tool_name: T, message: M) -> Self {
        ToolError::InvalidResult {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    pub fn serialization<W: Into<String>, M: Into<String>>(what: W, message: M) -> Self {
        ToolError::Serialization {
            what: what.into(),
            message: message.into(),
        }
    }
}
