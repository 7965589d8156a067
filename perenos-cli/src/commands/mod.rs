//! CLI command implementations

use clap::Subcommand;

pub mod process;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hyphenate text files or stdin
    Process(process::ProcessArgs),

    /// Show the pipeline stages for individual words
    Word(word::WordArgs),
}
