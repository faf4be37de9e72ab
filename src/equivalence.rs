// Heuristic word-level equivalence for Devanagari pronunciation variants.
// This approximates phonological similarity with pairwise rules over static
// tables; false positives and negatives are accepted by design.

use crate::normalizer::{is_consonant, is_vowel_sign, HALANT};

/// Honorific suffix families: a canonical suffix and the alternate suffixes a
/// speaker may substitute for it. An empty alternate means the bare stem is
/// also acceptable.
const HONORIFIC_SUFFIXES: &[(&str, &[&str])] = &[
    ("छ", &["छन्", "छौ", "छस्"]),
    ("छु", &["छौं", "छौ"]),
    ("नुहोस्", &["नुस्", "नु"]),
    ("हरू", &[""]),
];

/// Decide whether two words should count as the same spoken word.
///
/// Checks short-circuit in order: case-folded exact match, schwa-deletion
/// variation, honorific-suffix equivalence, phonetic-class collapse. Every
/// direction-specific rule is evaluated both ways, so the relation is
/// symmetric by construction.
pub fn are_equivalent(word1: &str, word2: &str) -> bool {
    let a = word1.to_lowercase();
    let b = word2.to_lowercase();

    if a == b {
        return true;
    }
    if schwa_variants(&a).iter().any(|v| v == &b)
        || schwa_variants(&b).iter().any(|v| v == &a)
    {
        return true;
    }
    if honorific_equivalent(&a, &b) {
        return true;
    }
    phonetic_code(&a) == phonetic_code(&b)
}

/// Generate every plausible schwa-deletion spelling of `word`: a halant
/// inserted between each consonant pair whose second member carries no
/// explicit vowel mark, plus the word-final reduction when the word ends in a
/// bare consonant. Words of length <= 2, or already ending in a halant, are
/// trivially non-reducible and generate nothing.
pub fn schwa_variants(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 || chars.last() == Some(&HALANT) {
        return Vec::new();
    }

    let mut variants = Vec::new();
    for i in 0..chars.len() - 1 {
        if is_consonant(chars[i]) && is_consonant(chars[i + 1]) {
            let next_is_marked = chars
                .get(i + 2)
                .is_some_and(|&c| is_vowel_sign(c));
            if !next_is_marked {
                let mut v = chars.clone();
                v.insert(i + 1, HALANT);
                variants.push(v.into_iter().collect());
            }
        }
    }

    if is_consonant(chars[chars.len() - 1]) {
        let mut v = chars.clone();
        v.push(HALANT);
        variants.push(v.into_iter().collect());
    }

    variants
}

fn honorific_equivalent(word1: &str, word2: &str) -> bool {
    for (canonical, alternates) in HONORIFIC_SUFFIXES {
        if stem_matches(word1, word2, canonical, alternates)
            || stem_matches(word2, word1, canonical, alternates)
        {
            return true;
        }
    }
    false
}

fn stem_matches(with_canonical: &str, other: &str, canonical: &str, alternates: &[&str]) -> bool {
    match with_canonical.strip_suffix(canonical) {
        Some(stem) => alternates.iter().any(|alt| {
            other.len() == stem.len() + alt.len()
                && other.starts_with(stem)
                && other.ends_with(alt)
        }),
        None => false,
    }
}

/// Collapse each character to its sound-class representative: aspirated
/// stops fold onto their unaspirated counterparts and sibilant variants onto
/// स. Unmapped characters pass through unchanged.
fn phonetic_code(word: &str) -> String {
    word.chars().map(sound_class).collect()
}

fn sound_class(c: char) -> char {
    match c {
        'ख' => 'क',
        'घ' => 'ग',
        'छ' => 'च',
        'झ' => 'ज',
        'ठ' => 'ट',
        'ढ' => 'ड',
        'थ' => 'त',
        'ध' => 'द',
        'फ' => 'प',
        'भ' => 'ब',
        'श' | 'ष' => 'स',
        other => other,
    }
}
