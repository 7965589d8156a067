//! High-level hyphenation API

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::phoneme::{segment, Phoneme};
use crate::render::render;
use crate::rewrite::rewrite_clusters;
use crate::scanner::scan_fragment;
use crate::syllable::{build_syllables, Syllable};
use crate::word::TypedWord;

/// Default configuration constants
pub mod defaults {
    /// Marker inserted at syllable boundaries (soft hyphen)
    pub const MARKER: &str = "\u{00AD}";
}

/// Hyphenator configuration
#[derive(Debug, Clone)]
pub struct HyphenatorConfig {
    pub(crate) marker: String,
}

impl Default for HyphenatorConfig {
    fn default() -> Self {
        Self {
            marker: defaults::MARKER.to_string(),
        }
    }
}

impl HyphenatorConfig {
    /// Create a configuration builder
    pub fn builder() -> HyphenatorConfigBuilder {
        HyphenatorConfigBuilder::default()
    }

    /// The marker inserted at syllable boundaries
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct HyphenatorConfigBuilder {
    marker: Option<String>,
}

impl HyphenatorConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boundary marker; any string is accepted, including an empty
    /// one, which degenerates to plain concatenation
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> HyphenatorConfig {
        let mut config = HyphenatorConfig::default();
        if let Some(marker) = self.marker {
            config.marker = marker;
        }
        config
    }
}

/// Stage-by-stage breakdown of a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// The word as given
    pub word: String,
    /// Base class codes before rewriting
    pub class_codes: String,
    /// Class codes after the cluster rewrite passes
    pub rewritten_codes: String,
    /// Phonemes after segmentation
    pub phonemes: Vec<Phoneme>,
    /// Syllable spans
    pub syllables: Vec<String>,
    /// The hyphenated rendering
    pub hyphenated: String,
}

/// Word hyphenation engine with a fixed configuration
///
/// Holds only immutable tables, so one instance may be shared freely across
/// threads.
#[derive(Debug, Clone)]
pub struct Hyphenator {
    alphabet: Alphabet,
    config: HyphenatorConfig,
}

impl Hyphenator {
    /// Create a hyphenator with the default soft-hyphen marker
    pub fn new() -> Self {
        Self::with_config(HyphenatorConfig::default())
    }

    /// Create a hyphenator with a custom configuration
    pub fn with_config(config: HyphenatorConfig) -> Self {
        Self {
            alphabet: Alphabet::new(),
            config,
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &HyphenatorConfig {
        &self.config
    }

    /// The letter table in use
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Classify every letter of a word
    pub fn classify_word(&self, word: &str) -> Result<TypedWord> {
        self.alphabet.classify_word(word)
    }

    /// Hyphenate an already classified word
    pub fn hyphenate_typed(&self, word: &TypedWord) -> String {
        hyphenate_typed(word, &self.config.marker)
    }

    /// Hyphenate a single word
    pub fn hyphenate_word(&self, word: &str) -> Result<String> {
        Ok(self.hyphenate_typed(&self.classify_word(word)?))
    }

    /// Hyphenate every eligible word of a document fragment
    ///
    /// Total over any input: markup, entities and unsupported characters
    /// pass through unchanged.
    pub fn hyphenate_text(&self, text: &str) -> String {
        scan_fragment(&self.alphabet, text, &self.config.marker)
    }

    /// Break a word down stage by stage
    pub fn analyze_word(&self, word: &str) -> Result<WordAnalysis> {
        let typed = self.classify_word(word)?;
        let class_codes = typed.class_codes();

        let mut rewritten = typed;
        rewrite_clusters(&mut rewritten);
        let rewritten_codes = rewritten.class_codes();

        let phonemes = segment(&rewritten);
        let syllables = build_syllables(phonemes.clone());

        Ok(WordAnalysis {
            word: word.to_string(),
            class_codes,
            rewritten_codes,
            hyphenated: render(&syllables, &self.config.marker),
            syllables: syllables.iter().map(Syllable::text).collect(),
            phonemes,
        })
    }
}

impl Default for Hyphenator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the word pipeline with an explicit marker
pub(crate) fn hyphenate_typed(word: &TypedWord, marker: &str) -> String {
    let mut rewritten = word.clone();
    rewrite_clusters(&mut rewritten);
    render(&build_syllables(segment(&rewritten)), marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_default_marker_is_soft_hyphen() {
        let hyphenator = Hyphenator::new();
        assert_eq!(hyphenator.config().marker(), "\u{00AD}");
        assert_eq!(
            hyphenator.hyphenate_word("парта").unwrap(),
            "пар\u{00AD}та"
        );
    }

    #[test]
    fn test_builder_overrides_marker() {
        let config = HyphenatorConfig::builder().marker("-").build();
        let hyphenator = Hyphenator::with_config(config);
        assert_eq!(hyphenator.hyphenate_word("парта").unwrap(), "пар-та");
    }

    #[test]
    fn test_empty_marker_concatenates() {
        let config = HyphenatorConfig::builder().marker("").build();
        let hyphenator = Hyphenator::with_config(config);
        assert_eq!(hyphenator.hyphenate_word("молоко").unwrap(), "молоко");
    }

    #[test]
    fn test_analyze_word_stages() {
        let config = HyphenatorConfig::builder().marker("-").build();
        let hyphenator = Hyphenator::with_config(config);
        let analysis = hyphenator.analyze_word("парта").unwrap();

        assert_eq!(analysis.word, "парта");
        assert_eq!(analysis.class_codes, "14314");
        assert_eq!(analysis.rewritten_codes, "14314");
        let spans: Vec<&str> = analysis.phonemes.iter().map(Phoneme::text).collect();
        assert_eq!(spans, ["п", "а", "р", "т", "а"]);
        assert_eq!(analysis.syllables, ["пар", "та"]);
        assert_eq!(analysis.hyphenated, "пар-та");
    }

    #[test]
    fn test_analyze_word_shows_rewrites() {
        let config = HyphenatorConfig::builder().marker("-").build();
        let hyphenator = Hyphenator::with_config(config);
        let analysis = hyphenator.analyze_word("water").unwrap();

        assert_eq!(analysis.class_codes, "24143");
        assert_eq!(analysis.rewritten_codes, "24140");
        assert_eq!(analysis.syllables, ["wa", "ter"]);
        assert_eq!(analysis.hyphenated, "wa-ter");
    }

    #[test]
    fn test_unsupported_character_is_reported() {
        let hyphenator = Hyphenator::new();
        let err = hyphenator.hyphenate_word("пар-та").unwrap_err();
        assert_eq!(
            err,
            CoreError::UnsupportedCharacter {
                ch: '-',
                position: 3
            }
        );
    }

    #[test]
    fn test_empty_word_is_empty() {
        let hyphenator = Hyphenator::new();
        assert_eq!(hyphenator.hyphenate_word("").unwrap(), "");
    }

    #[test]
    fn test_hyphenate_text_keeps_markup() {
        let config = HyphenatorConfig::builder().marker("-").build();
        let hyphenator = Hyphenator::with_config(config);
        assert_eq!(
            hyphenator.hyphenate_text("<b>пример</b> и WI-FI"),
            "<b>при-мер</b> и WI-FI"
        );
    }
}
