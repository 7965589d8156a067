//! Hyphenation rendering
//!
//! Joins syllables with the configured marker. A single letter is never left
//! alone at either edge of the word: a one-character first syllable does not
//! arm a marker, and the marker before a one-character last syllable is
//! suppressed.

use crate::syllable::Syllable;

/// Render syllables into the final hyphenated string
pub(crate) fn render(syllables: &[Syllable], marker: &str) -> String {
    let last = syllables.len().saturating_sub(1);
    let mut output = String::new();
    let mut armed = false;

    for (index, syllable) in syllables.iter().enumerate() {
        let single = syllable.char_len() == 1;
        if armed && !(index == last && single) {
            output.push_str(marker);
        }
        for phoneme in syllable.phonemes() {
            output.push_str(phoneme.text());
        }
        armed = index > 0 || !single;
    }

    output
}
