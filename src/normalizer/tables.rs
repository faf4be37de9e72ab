// Static reference data for Devanagari normalization. Everything here is
// process-wide, read-only, and initialized at most once; there is no writer
// after startup, so concurrent comparisons share it without locking.

use regex::Regex;
use std::sync::OnceLock;

/// The vowel-killer mark (virama/halant) suppressing a consonant's inherent vowel.
pub const HALANT: char = '\u{094D}';

/// Devanagari digits, indexed by their ASCII value.
pub const DEVANAGARI_DIGITS: [char; 10] =
    ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// True for the consonant block क..ह.
pub fn is_consonant(c: char) -> bool {
    ('\u{0915}'..='\u{0939}').contains(&c)
}

/// True for dependent vowel signs (matras) ा..ौ.
pub fn is_vowel_sign(c: char) -> bool {
    ('\u{093E}'..='\u{094C}').contains(&c)
}

/// Known short-i spellings of words standardly written with long i (ी).
pub const LONG_I_CORRECTIONS: &[(&str, &str)] = &[
    ("पानि", "पानी"),
    ("खुसि", "खुसी"),
    ("नदि", "नदी"),
    ("गाडि", "गाडी"),
    ("सहि", "सही"),
    ("रोटि", "रोटी"),
];

/// Known short-u spellings of words standardly written with long u (ू).
pub const LONG_U_CORRECTIONS: &[(&str, &str)] = &[
    ("ठुलो", "ठूलो"),
    ("दुध", "दूध"),
    ("फुल", "फूल"),
    ("पुरा", "पूरा"),
    ("धुलो", "धूलो"),
];

/// Independent-vowel length confusions (इ/ई, उ/ऊ as standalone letters).
pub const VOWEL_LETTER_CORRECTIONS: &[(&str, &str)] = &[
    ("इश्वर", "ईश्वर"),
    ("उर्जा", "ऊर्जा"),
    ("इख", "ईख"),
];

/// Anusvara written where the standard spelling carries a chandrabindu.
pub const NASALIZATION_CORRECTIONS: &[(&str, &str)] = &[
    ("यहां", "यहाँ"),
    ("कहां", "कहाँ"),
    ("गाउं", "गाउँ"),
    ("आंखा", "आँखा"),
    ("हुंदैन", "हुँदैन"),
];

/// Words whose trailing visarga (ः) recognizers routinely drop.
pub const VISARGA_FINAL_WORDS: &[&str] =
    &["पुन", "प्राय", "अत", "स्वत", "मूलत", "विशेषत"];

/// Ordered context-sensitive rewrite rules for consonant confusions.
///
/// Rule order matters: sibilants merge toward the voiceless palatal श only at
/// word boundaries or between consonants, the two conjunct rewrites apply only
/// to whole words, and the व/ब fallback is word-initial only. Each pattern is
/// applied to a fixpoint by the caller so the pipeline stays idempotent.
pub fn consonant_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            // Dental sibilant at a word boundary.
            (r"\bस|स\b", "श"),
            // Dental sibilant between consonants.
            (r"([क-ह])स([क-ह])", "${1}श${2}"),
            // Retroflex sibilant, same contexts.
            (r"\bष|ष\b", "श"),
            (r"([क-ह])ष([क-ह])", "${1}श${2}"),
            // Conjuncts rewritten only as whole words.
            (r"\bज्ञ\b", "ग्य"),
            (r"\bक्ष\b", "छ्य"),
            // Fallback: word-initial व is pronounced ब.
            (r"\bव", "ब"),
        ]
        .into_iter()
        .map(|(pattern, replacement)| {
            let re = Regex::new(pattern).expect("static rewrite pattern must compile");
            (re, replacement)
        })
        .collect()
    })
}

/// Visarga restoration as a single whole-word alternation, built from
/// [`VISARGA_FINAL_WORDS`].
pub fn visarga_rule() -> &'static Regex {
    static RULE: OnceLock<Regex> = OnceLock::new();
    RULE.get_or_init(|| {
        let alternation = VISARGA_FINAL_WORDS.join("|");
        Regex::new(&format!(r"\b({alternation})\b"))
            .expect("static visarga pattern must compile")
    })
}

/// Punctuation-spacing rule used by the basic normalization strategy:
/// any spacing around a sentence mark becomes exactly one trailing space.
pub fn punctuation_spacing_rule() -> &'static Regex {
    static RULE: OnceLock<Regex> = OnceLock::new();
    RULE.get_or_init(|| {
        Regex::new(r"\s*([।॥,.?!])\s*").expect("static spacing pattern must compile")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classes() {
        assert!(is_consonant('क'));
        assert!(is_consonant('ह'));
        assert!(is_consonant('स'));
        assert!(!is_consonant('ा'));
        assert!(!is_consonant('।'));

        assert!(is_vowel_sign('ा'));
        assert!(is_vowel_sign('ि'));
        assert!(is_vowel_sign('ौ'));
        assert!(!is_vowel_sign('क'));
        assert!(!is_vowel_sign(HALANT));
    }

    #[test]
    fn test_correction_outputs_are_not_inputs() {
        // Replacement outputs must never re-match a table key, or the
        // pipeline would stop being idempotent.
        let tables = [
            LONG_I_CORRECTIONS,
            LONG_U_CORRECTIONS,
            VOWEL_LETTER_CORRECTIONS,
            NASALIZATION_CORRECTIONS,
        ];
        for table in tables {
            for (_, replacement) in table {
                for t in tables {
                    for (variant, _) in t {
                        assert!(
                            !replacement.contains(variant),
                            "{replacement} contains variant key {variant}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_visarga_rule_is_whole_word() {
        let rule = visarga_rule();
        assert!(rule.is_match("पुन"));
        // Stem embedded in a longer word must not match.
        assert!(!rule.is_match("पुनरावृत्ति"));
        // Already-restored form must not match again.
        assert!(!rule.is_match("पुनः"));
    }

    #[test]
    fn test_rules_compile() {
        assert_eq!(consonant_rules().len(), 7);
    }
}
