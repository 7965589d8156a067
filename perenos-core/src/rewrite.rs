//! Cluster rewrite passes
//!
//! Eight ordered pattern groups collapse Latin digraphs and trigraphs into
//! single phonetic units by overwriting type codes. Characters are never
//! modified, only classes. Patterns are ASCII and matched case-insensitively,
//! so Cyrillic letters never participate in any pass.

use crate::alphabet::SoundClass;
use crate::word::TypedWord;

/// Where a pattern may match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Anywhere in the word
    Anywhere,
    /// Only when the match ends at the last character
    WordEnd,
}

/// How the classes of a matched span are overwritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RewriteShape {
    /// Head becomes a vowel unless already attached, tail letters attach
    Monophthong,
    /// Head becomes a vowel unless already attached, tail letters glide
    Diphthong,
    /// Head keeps its class, tail letters attach
    Consonant,
}

struct PatternGroup {
    patterns: &'static [&'static str],
    anchor: Anchor,
    shape: RewriteShape,
}

/// Rewrite passes in application order; later passes see earlier rewrites
const PATTERN_GROUPS: [PatternGroup; 8] = [
    // Word-final monophthongs
    PatternGroup {
        patterns: &["aw", "er", "ew"],
        anchor: Anchor::WordEnd,
        shape: RewriteShape::Monophthong,
    },
    // Word-final diphthongs
    PatternGroup {
        patterns: &["air", "ear", "ere", "ow"],
        anchor: Anchor::WordEnd,
        shape: RewriteShape::Diphthong,
    },
    // Word-final consonant clusters
    PatternGroup {
        patterns: &["dge", "ge", "gue", "tch", "the"],
        anchor: Anchor::WordEnd,
        shape: RewriteShape::Consonant,
    },
    // Word-final silent-vowel endings
    PatternGroup {
        patterns: &["ce", "de", "re", "se", "ve"],
        anchor: Anchor::WordEnd,
        shape: RewriteShape::Consonant,
    },
    // Monophthongs
    PatternGroup {
        patterns: &["ar", "au", "ea", "ee", "er", "ir", "oo", "or", "ou", "ur"],
        anchor: Anchor::Anywhere,
        shape: RewriteShape::Monophthong,
    },
    // Diphthongs
    PatternGroup {
        patterns: &["ai", "oa", "oi", "ou", "oy"],
        anchor: Anchor::Anywhere,
        shape: RewriteShape::Diphthong,
    },
    // Consonant digraphs and trigraphs
    PatternGroup {
        patterns: &[
            "bb", "ch", "ck", "ddl", "ff", "gg", "gi", "ll", "mm", "ng", "nn", "nk", "ph",
            "pp", "qu", "sh", "si", "su", "th", "tt", "tu", "wh",
        ],
        anchor: Anchor::Anywhere,
        shape: RewriteShape::Consonant,
    },
    // Nasal-velar endings
    PatternGroup {
        patterns: &["ang", "eng", "ing", "ong", "ung", "yng"],
        anchor: Anchor::Anywhere,
        shape: RewriteShape::Consonant,
    },
];

/// Apply every rewrite pass to the word in order
pub(crate) fn rewrite_clusters(word: &mut TypedWord) {
    for group in &PATTERN_GROUPS {
        apply_group(word, group);
    }
}

fn apply_group(word: &mut TypedWord, group: &PatternGroup) {
    let mut from = 0;
    while let Some((start, len)) = find_match(word.chars(), from, group) {
        apply_shape(word, start, len, group.shape);
        // Resume one past the match start so adjacent clusters are found
        from = start + 1;
    }
}

/// Leftmost match at or after `from`; alternatives are tried in listed order
fn find_match(chars: &[char], from: usize, group: &PatternGroup) -> Option<(usize, usize)> {
    for start in from..chars.len() {
        for pattern in group.patterns {
            let len = pattern.len();
            if start + len > chars.len() {
                continue;
            }
            if group.anchor == Anchor::WordEnd && start + len != chars.len() {
                continue;
            }
            if matches_at(chars, start, pattern) {
                return Some((start, len));
            }
        }
    }
    None
}

fn matches_at(chars: &[char], start: usize, pattern: &str) -> bool {
    pattern
        .bytes()
        .zip(chars[start..].iter())
        .all(|(expected, &ch)| ch.to_ascii_lowercase() == char::from(expected))
}

fn apply_shape(word: &mut TypedWord, start: usize, len: usize, shape: RewriteShape) {
    let (vowel_head, tail) = match shape {
        RewriteShape::Monophthong => (true, SoundClass::Attached),
        RewriteShape::Diphthong => (true, SoundClass::Glide),
        RewriteShape::Consonant => (false, SoundClass::Attached),
    };

    // An attached head keeps its class even for the vowel shapes
    if vowel_head && word.classes().get(start) != Some(&SoundClass::Attached) {
        word.set_class(start, SoundClass::Vowel);
    }
    for offset in 1..len {
        word.set_class(start + offset, tail);
    }
}
