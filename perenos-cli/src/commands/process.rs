//! Process command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use perenos_core::hyphenator::defaults;
use perenos_core::{Hyphenator, HyphenatorConfig};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob), `-` for stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Marker inserted at hyphenation points
    #[arg(short, long, value_enum, default_value = "soft")]
    pub marker: MarkerStyle,

    /// Marker string used with `--marker custom`
    #[arg(long, value_name = "STRING")]
    pub custom_marker: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Hyphenated text, fragments in input order
    Text,
    /// JSON array of fragments with their sources
    Json,
}

/// Marker presets
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MarkerStyle {
    /// Invisible soft hyphen (U+00AD)
    Soft,
    /// ASCII hyphen, useful for inspecting results
    Visible,
    /// The string given via --custom-marker
    Custom,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting hyphenation");
        log::debug!("Arguments: {:?}", self);

        let marker = self.resolve_marker()?;
        let config = HyphenatorConfig::builder().marker(marker).build();
        let hyphenator = Hyphenator::with_config(config);

        let fragments = self.collect_fragments(&hyphenator)?;

        let mut formatter = self.create_formatter()?;
        for (source, text) in &fragments {
            formatter.format_fragment(source, text)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Resolve the marker flags into the marker string
    pub(crate) fn resolve_marker(&self) -> Result<String> {
        match self.marker {
            MarkerStyle::Soft => Ok(defaults::MARKER.to_string()),
            MarkerStyle::Visible => Ok("-".to_string()),
            MarkerStyle::Custom => match &self.custom_marker {
                Some(marker) => Ok(marker.clone()),
                None => Err(CliError::InvalidMarker(
                    "--custom-marker is required with --marker custom".to_string(),
                )
                .into()),
            },
        }
    }

    /// Read and hyphenate every input fragment, in input order
    fn collect_fragments(&self, hyphenator: &Hyphenator) -> Result<Vec<(String, String)>> {
        if self.reads_stdin() {
            log::info!("Reading from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            return Ok(vec![("-".to_string(), hyphenator.hyphenate_text(&text))]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} files", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.begin(files.len() as u64);

        let fragments = files
            .par_iter()
            .map(|path| -> Result<(String, String)> {
                let source = path.display().to_string();
                let content = FileReader::read_text(path)?;
                let hyphenated = hyphenator.hyphenate_text(&content);
                progress.file_completed(&source);
                Ok((source, hyphenated))
            })
            .collect::<Result<Vec<_>>>()?;

        progress.finish();
        Ok(fragments)
    }

    /// Build the formatter for the configured output target
    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// `-` as the only input selects stdin
    fn reads_stdin(&self) -> bool {
        self.input.len() == 1 && self.input[0] == "-"
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}
