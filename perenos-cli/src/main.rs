//! perenos command-line interface

use anyhow::Result;
use clap::Parser;
use perenos_cli::commands::Commands;

/// Phonetic soft hyphenation for Cyrillic and Latin text
#[derive(Debug, Parser)]
#[command(name = "perenos", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Word(args) => args.execute(),
    }
}
