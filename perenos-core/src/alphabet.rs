//! Letter classification with O(1) lookup
//!
//! One positional table serves both scripts: the uppercase, lowercase and
//! type-code strings are aligned index by index, so case never changes the
//! phonetic class of a letter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::word::TypedWord;

/// Uppercase letters, Latin then Cyrillic
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZАБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
/// Lowercase letters, aligned with [`UPPER`]
const LOWER: &str = "abcdefghijklmnopqrstuvwxyzабвгдеёжзийклмнопрстуфхцчшщъыьэюя";
/// Base type code per letter, aligned with [`LOWER`]
const TYPES: &str = "42124121421333411311422142422224422451333413114111111060444";

/// Phonetic class of a single letter
///
/// Codes 0-6 are the stored classes; the fused-cluster codes of the rewrite
/// passes are transient and resolve to these before segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundClass {
    /// Inseparable from the previous letter (ь, ъ, rewritten cluster tails)
    Attached = 0,
    /// Voiceless obstruent consonant
    Voiceless = 1,
    /// Voiced obstruent consonant
    Voiced = 2,
    /// Sonorant consonant
    Sonorant = 3,
    /// Vowel
    Vowel = 4,
    /// Glide bound to the preceding vowel (й, diphthong tails)
    Glide = 5,
    /// Vowel bound to the preceding consonant (ы)
    BoundVowel = 6,
}

impl SoundClass {
    /// Numeric code as it appears in the classification table
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Attached),
            1 => Some(Self::Voiceless),
            2 => Some(Self::Voiced),
            3 => Some(Self::Sonorant),
            4 => Some(Self::Vowel),
            5 => Some(Self::Glide),
            6 => Some(Self::BoundVowel),
            _ => None,
        }
    }

    /// True for classes that carry a syllable nucleus
    #[inline]
    pub fn is_nucleus(self) -> bool {
        matches!(self, Self::Vowel | Self::BoundVowel)
    }
}

#[derive(Debug, Clone, Copy)]
struct LetterEntry {
    class: SoundClass,
    uppercase: bool,
}

/// Fast letter lookup table
#[derive(Debug, Clone)]
pub struct Alphabet {
    /// ASCII lookup for chars 0-127
    ascii_classes: [Option<SoundClass>; 128],
    /// Uppercase membership for chars 0-127
    ascii_upper: [bool; 128],
    /// HashMap for the Cyrillic letters
    non_ascii: HashMap<char, LetterEntry>,
}

impl Alphabet {
    /// Build the lookup table from the aligned letter/type constants
    pub fn new() -> Self {
        let mut ascii_classes = [None; 128];
        let mut ascii_upper = [false; 128];
        let mut non_ascii = HashMap::new();

        let mut insert = |ch: char, class: SoundClass, uppercase: bool| {
            if ch.is_ascii() {
                ascii_classes[ch as usize] = Some(class);
                if uppercase {
                    ascii_upper[ch as usize] = true;
                }
            } else {
                non_ascii.insert(ch, LetterEntry { class, uppercase });
            }
        };

        for ((upper, lower), code) in UPPER.chars().zip(LOWER.chars()).zip(TYPES.bytes()) {
            let class = match SoundClass::from_code(code.wrapping_sub(b'0')) {
                Some(class) => class,
                None => continue,
            };
            insert(upper, class, true);
            insert(lower, class, false);
        }

        Self {
            ascii_classes,
            ascii_upper,
            non_ascii,
        }
    }

    /// Phonetic class of a character, or `None` for non-letters - hot path
    #[inline]
    pub fn classify(&self, ch: char) -> Option<SoundClass> {
        if ch.is_ascii() {
            // Fast path: direct array lookup
            self.ascii_classes[ch as usize]
        } else {
            // Slow path: hash lookup
            self.non_ascii.get(&ch).map(|entry| entry.class)
        }
    }

    /// Check whether a character belongs to the supported letter set
    #[inline]
    pub fn is_letter(&self, ch: char) -> bool {
        self.classify(ch).is_some()
    }

    /// Check membership in the uppercase table (not Unicode uppercase)
    #[inline]
    pub fn is_uppercase(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_upper[ch as usize]
        } else {
            self.non_ascii.get(&ch).map_or(false, |entry| entry.uppercase)
        }
    }

    /// Classify every letter of a word
    ///
    /// Fails on the first character outside the supported set; callers that
    /// scan raw text filter words through [`Alphabet::is_letter`] first.
    pub fn classify_word(&self, word: &str) -> Result<TypedWord> {
        let mut chars = Vec::new();
        let mut classes = Vec::new();

        for (position, ch) in word.chars().enumerate() {
            let class = self
                .classify(ch)
                .ok_or(CoreError::UnsupportedCharacter { ch, position })?;
            chars.push(ch);
            classes.push(class);
        }

        Ok(TypedWord::new(chars, classes))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}
