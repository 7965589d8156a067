//! Syllable construction
//!
//! Phonemes are grouped around vowel nuclei. Every intervocalic consonant
//! run is distributed between the neighbouring syllables by a small rule
//! ladder; a chosen split is never revisited.

use std::mem;

use smallvec::SmallVec;

use crate::alphabet::SoundClass;
use crate::phoneme::Phoneme;

/// Buffer for one intervocalic consonant run
type ClusterBuf = SmallVec<[Phoneme; 4]>;

/// A non-empty run of phonemes rendered as one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    phonemes: Vec<Phoneme>,
}

impl Syllable {
    pub(crate) fn new(phonemes: Vec<Phoneme>) -> Self {
        debug_assert!(!phonemes.is_empty());
        Self { phonemes }
    }

    /// Phonemes of this syllable
    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }

    /// Characters of this syllable as a string
    pub fn text(&self) -> String {
        self.phonemes.iter().map(Phoneme::text).collect()
    }

    /// Number of characters
    pub fn char_len(&self) -> usize {
        self.phonemes.iter().map(Phoneme::char_len).sum()
    }
}

/// Group phonemes into syllables
pub(crate) fn build_syllables(phonemes: Vec<Phoneme>) -> Vec<Syllable> {
    let mut iter = phonemes.into_iter();
    let mut current: Vec<Phoneme> = Vec::new();
    let mut prev_nucleus: Option<SoundClass> = None;

    // The first syllable swallows everything up to and including the first
    // nucleus; a word-initial consonant run is never split off.
    for phoneme in iter.by_ref() {
        let class = phoneme.class();
        let found = phoneme.is_nucleus();
        current.push(phoneme);
        if found {
            prev_nucleus = class;
            break;
        }
    }

    if current.is_empty() {
        return Vec::new();
    }

    let mut syllables = Vec::new();
    if prev_nucleus.is_none() {
        // No nucleus anywhere: the whole word is one syllable
        syllables.push(Syllable::new(current));
        return syllables;
    }

    let mut cluster = ClusterBuf::new();
    for phoneme in iter {
        if !phoneme.is_nucleus() {
            cluster.push(phoneme);
            continue;
        }
        let nucleus_class = phoneme.class();
        split_cluster(
            &mut syllables,
            &mut current,
            &mut cluster,
            phoneme,
            prev_nucleus,
        );
        prev_nucleus = nucleus_class;
    }

    // Trailing consonants stay with the last syllable
    current.extend(cluster);
    syllables.push(Syllable::new(current));
    syllables
}

/// Distribute one consonant run between the current syllable and the next
///
/// `nucleus` is the vowel phoneme that terminated the run; it always opens
/// the new syllable together with whatever consonants move forward.
fn split_cluster(
    syllables: &mut Vec<Syllable>,
    current: &mut Vec<Phoneme>,
    cluster: &mut ClusterBuf,
    nucleus: Phoneme,
    prev_nucleus: Option<SoundClass>,
) {
    let consonants = mem::take(cluster);
    let count = consonants.len();
    let mut drain = consonants.into_iter();
    let mut next: Vec<Phoneme> = Vec::new();

    match count {
        0 => {}
        1 => {
            if let Some(single) = drain.next() {
                if opens_next_syllable(&single) {
                    next.push(single);
                } else {
                    current.push(single);
                }
            }
        }
        _ => {
            // All but the last two consonants stay behind
            for _ in 0..count - 2 {
                if let Some(phoneme) = drain.next() {
                    current.push(phoneme);
                }
            }
            if let (Some(first), Some(second)) = (drain.next(), drain.next()) {
                if splits_between(&first, &second, prev_nucleus) {
                    current.push(first);
                    next.push(second);
                } else {
                    next.push(first);
                    next.push(second);
                }
            }
        }
    }

    next.push(nucleus);
    let finished = mem::replace(current, next);
    syllables.push(Syllable::new(finished));
}

/// A lone intervocalic consonant opens the following syllable unless it is
/// glued to the preceding vowel
fn opens_next_syllable(phoneme: &Phoneme) -> bool {
    matches!(
        phoneme.class(),
        Some(SoundClass::Voiceless | SoundClass::Voiced | SoundClass::Sonorant)
    )
}

/// Decide whether a two-consonant tail splits between the syllables or moves
/// to the next one whole
fn splits_between(first: &Phoneme, second: &Phoneme, prev_nucleus: Option<SoundClass>) -> bool {
    // Doubled letters always split
    if first.text() == second.text() {
        return true;
    }
    // A bound-vowel nucleus keeps the first consonant of its coda
    if prev_nucleus == Some(SoundClass::BoundVowel) {
        return true;
    }
    // Falling sonority splits; rising or flat sonority moves forward intact
    matches!(
        (first.class(), second.class()),
        (
            Some(SoundClass::Sonorant),
            Some(SoundClass::Voiceless | SoundClass::Voiced)
        ) | (
            Some(SoundClass::Glide),
            Some(SoundClass::Voiceless | SoundClass::Voiced | SoundClass::Sonorant)
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::phoneme::segment;
    use crate::rewrite::rewrite_clusters;

    fn syllable_texts(text: &str) -> Vec<String> {
        let alphabet = Alphabet::new();
        let mut word = alphabet.classify_word(text).unwrap();
        rewrite_clusters(&mut word);
        build_syllables(segment(&word))
            .iter()
            .map(Syllable::text)
            .collect()
    }

    #[test]
    fn test_single_consonant_moves_forward() {
        assert_eq!(syllable_texts("молоко"), ["мо", "ло", "ко"]);
    }

    #[test]
    fn test_obstruent_pair_moves_forward() {
        assert_eq!(syllable_texts("добро"), ["до", "бро"]);
    }

    #[test]
    fn test_sonorant_obstruent_splits() {
        assert_eq!(syllable_texts("парта"), ["пар", "та"]);
    }

    #[test]
    fn test_doubled_letters_split() {
        assert_eq!(syllable_texts("ванна"), ["ван", "на"]);
    }

    #[test]
    fn test_glide_splits() {
        assert_eq!(syllable_texts("майка"), ["май", "ка"]);
    }

    #[test]
    fn test_bound_vowel_splits_following_cluster() {
        assert_eq!(
            syllable_texts("предыстория"),
            ["пре", "дыс", "то", "ри", "я"]
        );
    }

    #[test]
    fn test_three_consonant_cluster() {
        assert_eq!(
            syllable_texts("подтверждение"),
            ["под", "твер", "жде", "ни", "е"]
        );
    }

    #[test]
    fn test_adjacent_vowels() {
        assert_eq!(syllable_texts("окончание"), ["о", "кон", "ча", "ни", "е"]);
    }

    #[test]
    fn test_trailing_consonants_glue() {
        assert_eq!(syllable_texts("сохранить"), ["со", "хра", "нить"]);
    }

    #[test]
    fn test_without_nucleus_stays_whole() {
        assert_eq!(syllable_texts("ртс"), ["ртс"]);
    }

    #[test]
    fn test_rewritten_latin_word() {
        assert_eq!(syllable_texts("water"), ["wa", "ter"]);
    }

    #[test]
    fn test_empty_word() {
        assert!(syllable_texts("").is_empty());
    }

    #[test]
    fn test_char_len_sums_phonemes() {
        let alphabet = Alphabet::new();
        let mut word = alphabet.classify_word("сохранить").unwrap();
        rewrite_clusters(&mut word);
        let syllables = build_syllables(segment(&word));
        assert_eq!(syllables.last().map(Syllable::char_len), Some(4));
    }
}
