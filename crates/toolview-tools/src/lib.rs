pub mod error;
pub mod schema;
pub mod tools;

pub use error::ToolError;
pub use schema::{InputSchema, ToolSchema, ToolSpec};
