// Dictionary-driven segmentation for hypothesis text that arrives as one
// unspaced Devanagari run. Greedy longest-prefix matching with a
// linguistically informed fallback boundary scan; total over its input, so
// the concatenated output always reconstructs the (whitespace-stripped) run.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::normalizer::{is_consonant, is_vowel_sign, HALANT};

/// Fragments shorter than this are merge candidates in the cleanup pass, and
/// a trailing run no longer than this is consumed whole.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// Common Nepali words used when the caller supplies no dictionary.
const COMMON_WORDS: &[&str] = &[
    "मौसम", "पानी", "परेको", "छ", "सम", "हो", "गर्छ", "तिमी",
    "हुन्छ", "गर्न", "के", "यो", "त्यो", "हामी", "उनी", "भयो",
    "सक्छ", "थियो", "र", "मा", "को", "ले", "बाट", "संग",
];

/// The built-in common-words dictionary, materialized once per process.
pub fn default_dictionary() -> &'static HashSet<String> {
    static DICTIONARY: OnceLock<HashSet<String>> = OnceLock::new();
    DICTIONARY.get_or_init(|| COMMON_WORDS.iter().map(|w| w.to_string()).collect())
}

/// Segment `run` with the built-in dictionary and default minimum length.
pub fn segment_with_defaults(run: &str) -> Vec<String> {
    segment(run, default_dictionary(), DEFAULT_MIN_WORD_LENGTH)
}

/// Split an unspaced character run into words.
///
/// Main pass, per position: longest dictionary prefix first; then, if the
/// remainder is short enough, consume it whole; then a forward scan (up to
/// the longest dictionary-word length) for a plausible boundary — a candidate
/// whose last character is a consonant with the remainder empty or starting
/// with a consonant or vowel sign, or a candidate that is itself a dictionary
/// word; finally a single character as last resort. A cleanup pass merges
/// mark-only fragments shorter than `min_word_length` into the preceding
/// word, since such a fragment cannot stand alone.
pub fn segment(run: &str, dictionary: &HashSet<String>, min_word_length: usize) -> Vec<String> {
    let chars: Vec<char> = run.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.is_empty() {
        return Vec::new();
    }

    // Longest-first so greedy prefix matching prefers the longest word;
    // lexicographic tie-break keeps the scan deterministic.
    let mut by_length: Vec<&str> = dictionary.iter().map(String::as_str).collect();
    by_length.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    let max_word_len = by_length
        .first()
        .map_or(1, |w| w.chars().count())
        .max(1);

    let mut words: Vec<String> = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let rest = &chars[pos..];

        if let Some(word) = by_length.iter().find(|w| starts_with(rest, w)) {
            words.push((*word).to_string());
            pos += word.chars().count();
            continue;
        }

        if rest.len() <= min_word_length {
            words.push(rest.iter().collect());
            break;
        }

        let mut consumed = 0;
        for i in 1..=rest.len().min(max_word_len) {
            let candidate = &rest[..i];
            let remaining = &rest[i..];
            let plausible_boundary = is_consonant(candidate[i - 1])
                && remaining
                    .first()
                    .map_or(true, |&c| is_consonant(c) || is_vowel_sign(c));
            if plausible_boundary || dictionary.contains(&candidate.iter().collect::<String>()) {
                consumed = i;
                break;
            }
        }

        if consumed == 0 {
            consumed = 1; // last resort: one character
        }
        words.push(rest[..consumed].iter().collect());
        pos += consumed;
    }

    merge_fragments(words, dictionary, min_word_length)
}

fn starts_with(chars: &[char], word: &str) -> bool {
    let mut it = chars.iter();
    word.chars().all(|wc| it.next() == Some(&wc))
}

// A short fragment of bare vowel signs / halant cannot stand alone; glue it
// onto the word it trailed.
fn merge_fragments(
    words: Vec<String>,
    dictionary: &HashSet<String>,
    min_word_length: usize,
) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(words.len());
    for word in words {
        let is_mark_fragment = word.chars().count() < min_word_length
            && !dictionary.contains(&word)
            && word.chars().all(|c| is_vowel_sign(c) || c == HALANT);
        match merged.last_mut() {
            Some(previous) if is_mark_fragment => previous.push_str(&word),
            _ => merged.push(word),
        }
    }
    merged
}
