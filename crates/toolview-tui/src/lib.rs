pub mod error;
pub mod tui;

pub use tui::observer::{RenderObserver, ResultSource, TracingObserver};
pub use tui::theme::{Component, Theme, ThemeLoader};
pub use tui::widgets::formatters::{ToolFormatter, get_formatter};
