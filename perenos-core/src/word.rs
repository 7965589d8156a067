//! Typed word representation

use crate::alphabet::SoundClass;

/// A word with one phonetic class per character
///
/// Both sequences always have the same length. Rewrite passes may only
/// overwrite classes, never insert or remove characters, so positions stay
/// valid across the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedWord {
    chars: Vec<char>,
    classes: Vec<SoundClass>,
}

impl TypedWord {
    pub(crate) fn new(chars: Vec<char>, classes: Vec<SoundClass>) -> Self {
        debug_assert_eq!(chars.len(), classes.len());
        Self { chars, classes }
    }

    /// Characters of the word
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Current class of each character
    pub fn classes(&self) -> &[SoundClass] {
        &self.classes
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for the empty word
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The word as a string
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Class codes as a digit string, e.g. `"14314"` for `"парта"`
    pub fn class_codes(&self) -> String {
        self.classes
            .iter()
            .map(|class| char::from(b'0' + class.code()))
            .collect()
    }

    /// Overwrite the class at `index`; out-of-range writes are ignored
    pub(crate) fn set_class(&mut self, index: usize, class: SoundClass) {
        if let Some(slot) = self.classes.get_mut(index) {
            *slot = class;
        }
    }
}
