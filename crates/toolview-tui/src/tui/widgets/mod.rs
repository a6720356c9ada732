pub mod formatters;
pub mod word_diff;
pub mod yaml;

pub use word_diff::{DiffSegment, WordDiffOptions, WordDiffWidget, diff_words};
pub use yaml::format_yaml;
