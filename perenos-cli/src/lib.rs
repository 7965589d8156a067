//! Perenos CLI library
//!
//! This library provides the command-line interface for the perenos
//! phonetic hyphenation engine.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
