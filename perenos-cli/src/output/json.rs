//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter, collects fragments and emits one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    fragments: Vec<FragmentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct FragmentData {
    /// Where the fragment came from (file path, or `-` for stdin)
    pub source: String,
    /// The hyphenated text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            fragments: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_fragment(&mut self, source: &str, text: &str) -> Result<()> {
        self.fragments.push(FragmentData {
            source: source.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.fragments)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
