pub mod upsert_system;

pub use upsert_system::UPSERT_SYSTEM_TOOL_NAME;
