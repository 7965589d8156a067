//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Marker flags were combined incorrectly
    InvalidMarker(String),
    /// Word analysis failed in the core engine
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidMarker(msg) => write!(f, "Invalid marker configuration: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_marker_error_display() {
        let error = CliError::InvalidMarker("--custom-marker is required".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid marker configuration: --custom-marker is required"
        );
    }

    #[test]
    fn test_processing_error_display() {
        let error = CliError::ProcessingError("unsupported character".to_string());
        assert_eq!(error.to_string(), "Processing error: unsupported character");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::ProcessingError("boom".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ProcessingError"));
        assert!(debug_str.contains("boom"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("ok".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("test error"));
    }
}
