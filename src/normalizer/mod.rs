// Devanagari text canonicalization. Two strategies coexist deliberately:
// the contextual pipeline used for comparison, and the basic
// repeated-character-collapsing pipeline for cleaning raw recognizer output.
// They are independent; the contextual pipeline never collapses repeats.

pub mod tables;

pub use tables::{is_consonant, is_vowel_sign, HALANT};

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Full contextual normalization for Nepali comparison text.
///
/// Stage order is fixed; each stage assumes the previous stage's canonical
/// form. Pure and idempotent: `normalize(normalize(x)) == normalize(x)`.
///
/// 1. Unicode canonical composition (NFC)
/// 2. ASCII digits → Devanagari digits
/// 3. `!` → `।` (other punctuation passes through)
/// 4. whitespace collapse
/// 5. long-vowel correction tables (three independent confusions)
/// 6. nasalization corrections (anusvara/chandrabindu)
/// 7. trailing-visarga restoration on known words
/// 8. context-sensitive consonant rewrites
pub fn normalize(text: &str) -> String {
    let text: String = text.nfc().collect();
    let text = substitute_digits(&text);
    let text = text.replace('!', "।");
    let text = collapse_whitespace(&text);
    let text = apply_corrections(&text, tables::LONG_I_CORRECTIONS);
    let text = apply_corrections(&text, tables::LONG_U_CORRECTIONS);
    let text = apply_corrections(&text, tables::VOWEL_LETTER_CORRECTIONS);
    let text = apply_corrections(&text, tables::NASALIZATION_CORRECTIONS);
    let text = restore_visarga(&text);
    apply_consonant_rules(&text)
}

/// Basic normalization: NFC, digit substitution, punctuation spacing,
/// repeated-character collapse. This is the simpler strategy the contextual
/// pipeline does not subsume; see DESIGN.md.
pub fn normalize_basic(text: &str) -> String {
    let text: String = text.nfc().collect();
    let text = substitute_digits(&text);
    let text = tables::punctuation_spacing_rule().replace_all(&text, "$1 ");
    let text = collapse_repeats(&text);
    text.trim().to_string()
}

fn substitute_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => tables::DEVANAGARI_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Collapse any whitespace run to a single space and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }
    result.trim().to_string()
}

/// Collapse any run of 2+ identical characters to one occurrence.
fn collapse_repeats(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if prev != Some(c) {
            result.push(c);
            prev = Some(c);
        }
    }
    result
}

/// Exact substring replacement of known-variant spellings.
fn apply_corrections(text: &str, table: &[(&str, &str)]) -> String {
    let mut result = text.to_string();
    for (variant, standard) in table {
        result = result.replace(variant, standard);
    }
    result
}

fn restore_visarga(text: &str) -> String {
    tables::visarga_rule().replace_all(text, "${1}ः").into_owned()
}

fn apply_consonant_rules(text: &str) -> String {
    let mut result = text.to_string();
    for (rule, replacement) in tables::consonant_rules() {
        result = replace_to_fixpoint(rule, &result, replacement);
    }
    result
}

// replace_all skips matches whose context was consumed by the previous match
// (e.g. the second स in कसकस), so rules are re-run until the text is stable.
fn replace_to_fixpoint(rule: &Regex, text: &str, replacement: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = rule.replace_all(&current, replacement).into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_substitution() {
        assert_eq!(normalize("म 25 वर्षको छु"), normalize("म २५ वर्षको छु"));
        assert_eq!(substitute_digits("0123456789"), "०१२३४५६७८९");
    }

    #[test]
    fn test_exclamation_becomes_danda() {
        assert_eq!(normalize("राम्रो!"), "राम्रो।");
        // Other punctuation passes through.
        assert!(normalize("राम्रो?").ends_with('?'));
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("आज   मौसम\t राम्रो"), normalize("आज मौसम राम्रो"));
        assert_eq!(collapse_whitespace("  क  ख  "), "क ख");
    }

    #[test]
    fn test_long_vowel_corrections() {
        assert_eq!(normalize("पानि"), normalize("पानी"));
        assert_eq!(normalize("ठुलो"), normalize("ठूलो"));
        assert_eq!(normalize("इश्वर"), normalize("ईश्वर"));
    }

    #[test]
    fn test_nasalization_correction() {
        assert_eq!(normalize("यहां"), normalize("यहाँ"));
        assert_eq!(normalize("गाउं"), normalize("गाउँ"));
    }

    #[test]
    fn test_visarga_restoration() {
        assert_eq!(normalize("पुन"), "पुनः");
        // Whole-word only: embedded stems untouched.
        assert_eq!(normalize("पुनरावृत्ति"), "पुनरावृत्ति");
    }

    #[test]
    fn test_sibilant_merge_at_boundary() {
        assert_eq!(normalize("सधैं"), "शधैं");
        assert_eq!(normalize("षष्ठ"), "शष्ठ");
        // Interior sibilant before a matra is left alone.
        assert_eq!(normalize("मौसिम"), "मौसिम");
    }

    #[test]
    fn test_sibilant_merge_between_consonants() {
        // Between-consonant rewrite reaches overlapping sites via the
        // fixpoint loop.
        assert_eq!(apply_consonant_rules("अकसकसक"), "अकशकशक");
    }

    #[test]
    fn test_conjunct_whole_word_only() {
        assert_eq!(normalize("ज्ञ"), "ग्य");
        assert_eq!(normalize("क्ष"), "छ्य");
        // Not whole words: untouched.
        assert_eq!(normalize("ज्ञान"), "ज्ञान");
    }

    #[test]
    fn test_word_initial_va_fallback() {
        assert_eq!(normalize("वन"), "बन");
        // Interior व untouched.
        assert_eq!(normalize("आवाज"), "आवाज");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "आज मौसम राम्रो छ!",
            "पानि पर्यो 25 पटक",
            "सधैं यहां वन ज्ञ पुन",
            "अकसकसक कसकस",
            "मौसमपानीपरेकोछ",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_basic_collapses_repeats() {
        assert_eq!(normalize_basic("हहहा"), "हा");
        assert_eq!(normalize_basic("राम्रोो"), "राम्रो");
    }

    #[test]
    fn test_basic_punctuation_spacing() {
        assert_eq!(normalize_basic("छ।अनि"), "छ। अनि");
        assert_eq!(normalize_basic("छ ।"), "छ।");
    }

    #[test]
    fn test_basic_idempotent() {
        for input in ["हहहा।।", "छ।अनि 25", "  क  ख  "] {
            let once = normalize_basic(input);
            assert_eq!(normalize_basic(&once), once);
        }
    }

    #[test]
    fn test_contextual_never_collapses_repeats() {
        // The two strategies stay distinct.
        assert_eq!(normalize("हहहा"), "हहहा");
    }
}
