//! Error types for the hyphenation engine

use thiserror::Error;

/// Errors produced by the classification entry points
///
/// The pipeline itself is total: once a word has been classified, every
/// later stage succeeds for any input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Character outside the supported Latin/Cyrillic letter set
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter {
        /// The offending character
        ch: char,
        /// Zero-based character offset within the word
        position: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_character_display() {
        let error = CoreError::UnsupportedCharacter {
            ch: '7',
            position: 3,
        };
        assert_eq!(
            error.to_string(),
            "unsupported character '7' at position 3"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CoreError::UnsupportedCharacter {
            ch: '-',
            position: 0,
        };
        let _: &dyn std::error::Error = &error;
    }
}
