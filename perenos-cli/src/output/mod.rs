//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one hyphenated fragment
    fn format_fragment(&mut self, source: &str, text: &str) -> Result<()>;

    /// Finalize output (e.g., close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
