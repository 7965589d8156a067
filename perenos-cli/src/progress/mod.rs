//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-file runs
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self { bar: None, quiet }
    }

    /// Initialize the bar for the given number of files
    ///
    /// Single-file runs get no bar.
    pub fn begin(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let bar = ProgressBar::new(total_files);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
                .unwrap()
                .progress_chars("##-"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));

        self.bar = Some(bar);
    }

    /// Record one completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("Hyphenated {filename}"));
            bar.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("Done");
        }
    }
}
