//! Word analysis command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use perenos_core::{Hyphenator, HyphenatorConfig, WordAnalysis};

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    /// Words to analyze
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Marker inserted at hyphenation points
    #[arg(short, long, default_value = "-")]
    pub marker: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: AnalysisFormat,
}

/// Output formats for word analysis
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum AnalysisFormat {
    /// Human-readable stage dump
    Text,
    /// Pretty-printed JSON analyses
    Json,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self) -> Result<()> {
        let config = HyphenatorConfig::builder()
            .marker(self.marker.clone())
            .build();
        let hyphenator = Hyphenator::with_config(config);

        let analyses = self
            .words
            .iter()
            .map(|word| {
                hyphenator.analyze_word(word).map_err(|err| {
                    anyhow::Error::new(CliError::ProcessingError(format!("{word}: {err}")))
                })
            })
            .collect::<Result<Vec<WordAnalysis>>>()?;

        match self.format {
            AnalysisFormat::Text => {
                for analysis in &analyses {
                    print_analysis(analysis);
                }
            }
            AnalysisFormat::Json => {
                let json = serde_json::to_string_pretty(&analyses)?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

/// Print one analysis as key/value lines
fn print_analysis(analysis: &WordAnalysis) {
    let phonemes: Vec<&str> = analysis.phonemes.iter().map(|p| p.text()).collect();

    println!("word:       {}", analysis.word);
    println!("classes:    {}", analysis.class_codes);
    println!("rewritten:  {}", analysis.rewritten_codes);
    println!("phonemes:   {}", phonemes.join(" "));
    println!("syllables:  {}", analysis.syllables.join(" "));
    println!("hyphenated: {}", analysis.hyphenated);
    println!();
}
