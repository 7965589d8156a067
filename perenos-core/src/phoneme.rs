//! Phoneme segmentation
//!
//! After the rewrite passes a word is cut into phonemes: each phoneme is one
//! letter with a real class plus every attached letter that follows it.

use serde::{Deserialize, Serialize};

use crate::alphabet::SoundClass;
use crate::word::TypedWord;

/// A minimal sound unit: one effective class and its character span
///
/// A word made entirely of attached letters yields a single phoneme with no
/// class at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    text: String,
    class: Option<SoundClass>,
}

impl Phoneme {
    pub(crate) fn new(text: impl Into<String>, class: Option<SoundClass>) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }

    /// Characters covered by this phoneme
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Effective class, if any letter of the span carried one
    pub fn class(&self) -> Option<SoundClass> {
        self.class
    }

    /// Number of characters in the span
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// True when this phoneme can carry a syllable
    #[inline]
    pub fn is_nucleus(&self) -> bool {
        self.class.map_or(false, SoundClass::is_nucleus)
    }

    fn push(&mut self, ch: char) {
        self.text.push(ch);
    }
}

/// Cut a rewritten word into phonemes
///
/// Attached letters never open a phoneme of their own; they join the current
/// one, even at the very start of the word where the first phoneme begins
/// untyped until a real class arrives.
pub(crate) fn segment(word: &TypedWord) -> Vec<Phoneme> {
    let mut phonemes: Vec<Phoneme> = Vec::new();

    for (&ch, &class) in word.chars().iter().zip(word.classes()) {
        if class == SoundClass::Attached {
            match phonemes.last_mut() {
                Some(last) => last.push(ch),
                None => phonemes.push(Phoneme::new(ch.to_string(), None)),
            }
            continue;
        }

        match phonemes.last_mut() {
            // The leading untyped phoneme absorbs the first real class
            Some(last) if last.class.is_none() => {
                last.push(ch);
                last.class = Some(class);
            }
            _ => phonemes.push(Phoneme::new(ch.to_string(), Some(class))),
        }
    }

    phonemes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::rewrite::rewrite_clusters;

    fn phonemes_of(text: &str) -> Vec<Phoneme> {
        let alphabet = Alphabet::new();
        let mut word = alphabet.classify_word(text).unwrap();
        rewrite_clusters(&mut word);
        segment(&word)
    }

    fn spans(phonemes: &[Phoneme]) -> Vec<&str> {
        phonemes.iter().map(Phoneme::text).collect()
    }

    #[test]
    fn test_soft_sign_attaches() {
        let phonemes = phonemes_of("конь");
        assert_eq!(spans(&phonemes), ["к", "о", "нь"]);
        assert_eq!(phonemes[2].class(), Some(SoundClass::Sonorant));
    }

    #[test]
    fn test_rewritten_cluster_merges() {
        let phonemes = phonemes_of("water");
        assert_eq!(spans(&phonemes), ["w", "a", "t", "er"]);
        assert_eq!(phonemes[3].class(), Some(SoundClass::Vowel));
    }

    #[test]
    fn test_leading_attached_letters() {
        let phonemes = phonemes_of("ъезд");
        assert_eq!(spans(&phonemes), ["ъе", "з", "д"]);
        assert_eq!(phonemes[0].class(), Some(SoundClass::Vowel));
    }

    #[test]
    fn test_all_attached_word() {
        let phonemes = phonemes_of("ьъ");
        assert_eq!(spans(&phonemes), ["ьъ"]);
        assert_eq!(phonemes[0].class(), None);
        assert!(!phonemes[0].is_nucleus());
    }

    #[test]
    fn test_empty_word() {
        assert!(phonemes_of("").is_empty());
    }

    #[test]
    fn test_char_len_counts_characters() {
        let phonemes = phonemes_of("letter");
        assert_eq!(spans(&phonemes), ["l", "e", "tt", "er"]);
        assert_eq!(phonemes[2].char_len(), 2);
    }
}
