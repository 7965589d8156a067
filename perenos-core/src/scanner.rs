//! Document fragment scanning
//!
//! Walks raw text, feeds each candidate word through the engine and passes
//! everything else straight through. Markup tags are copied verbatim, entity
//! references are kept intact except for the soft-hyphen name, and words
//! with more than one capital letter are treated as abbreviations and left
//! alone.

use crate::alphabet::Alphabet;
use crate::hyphenator::hyphenate_typed;

/// Per-pass scanner state; nothing survives beyond one fragment
struct ScanState {
    output: String,
    word: String,
    upper_run: usize,
}

impl ScanState {
    fn new(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity + capacity / 8),
            word: String::new(),
            upper_run: 0,
        }
    }

    fn push_letter(&mut self, ch: char, uppercase: bool) {
        self.word.push(ch);
        if uppercase {
            self.upper_run += 1;
        }
    }

    /// Flush the pending word through the engine
    ///
    /// Words with more than one capital letter bypass hyphenation entirely
    /// and clear the capital count; a hyphenated word leaves the count as
    /// is, so capital runs continuing past a separator stay bypassed.
    fn flush_word(&mut self, alphabet: &Alphabet, marker: &str) {
        if self.word.is_empty() {
            return;
        }
        if self.upper_run > 1 {
            self.output.push_str(&self.word);
            self.upper_run = 0;
        } else {
            match alphabet.classify_word(&self.word) {
                Ok(typed) => self.output.push_str(&hyphenate_typed(&typed, marker)),
                // Letters admitted by is_letter always classify
                Err(_) => self.output.push_str(&self.word),
            }
        }
        self.word.clear();
    }

    fn reset_upper(&mut self) {
        self.upper_run = 0;
    }
}

/// Hyphenate every eligible word of a fragment, leaving markup intact
pub(crate) fn scan_fragment(alphabet: &Alphabet, text: &str, marker: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut state = ScanState::new(text.len());
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];
        if alphabet.is_letter(ch) {
            state.push_letter(ch, alphabet.is_uppercase(ch));
            index += 1;
        } else if ch == '<' {
            state.flush_word(alphabet, marker);
            state.reset_upper();
            // Copy the tag verbatim through its closing bracket
            while index < chars.len() {
                let tag_ch = chars[index];
                state.output.push(tag_ch);
                index += 1;
                if tag_ch == '>' {
                    break;
                }
            }
        } else if ch == '&' {
            state.flush_word(alphabet, marker);
            state.reset_upper();
            index = scan_entity(alphabet, &chars, index + 1, marker, &mut state);
        } else {
            state.flush_word(alphabet, marker);
            if ch.is_whitespace() {
                state.reset_upper();
            }
            state.output.push(ch);
            index += 1;
        }
    }

    state.flush_word(alphabet, marker);
    state.output
}

/// Scan an entity reference starting just after `&`
///
/// Returns the index the outer loop continues from. The soft-hyphen name is
/// rewritten to its numeric reference so downstream markup keeps working
/// after the text gains literal soft hyphens.
fn scan_entity(
    alphabet: &Alphabet,
    chars: &[char],
    mut index: usize,
    marker: &str,
    state: &mut ScanState,
) -> usize {
    let mut name = String::new();
    loop {
        match chars.get(index) {
            Some(&ch) if ch.is_ascii_alphabetic() => {
                name.push(ch);
                index += 1;
            }
            Some(&';') => {
                if name.eq_ignore_ascii_case("shy") {
                    state.output.push_str("&#173;");
                } else {
                    state.output.push('&');
                    state.output.push_str(&name);
                    state.output.push(';');
                }
                return index + 1;
            }
            Some(_) => {
                // Not an entity after all: re-scan what was collected and
                // let the outer loop reprocess the current character
                state.output.push('&');
                state.output.push_str(&scan_fragment(alphabet, &name, marker));
                return index;
            }
            None => {
                // Unterminated reference at end of input passes through
                state.output.push('&');
                state.output.push_str(&name);
                return index;
            }
        }
    }
}
