// Closed language dispatch: every per-language policy (word character class,
// punctuation set, normalization strategy) hangs off this enum so a comparison
// selects its behavior exactly once, up front.

use crate::error::CompareError;
use crate::normalizer;

/// Punctuation recognized for English input.
pub const ENGLISH_PUNCTUATION: &[char] = &['.', ',', '!', '?'];

/// Punctuation recognized for Nepali input: Devanagari sentence terminators
/// plus their ASCII equivalents.
pub const NEPALI_PUNCTUATION: &[char] = &['।', '॥', '.', ',', '!', '?'];

/// A language the engine can compare text in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Latin-script English: regex-style word/punctuation split, case-fold-only
    /// normalization.
    English,
    /// Devanagari-script Nepali: script-aware split with punctuation explosion
    /// and the full normalization pipeline.
    Nepali,
}

impl Language {
    /// Parse an external language tag. Unrecognized tags fail the call;
    /// there is no silent default.
    pub fn from_tag(tag: &str) -> Result<Self, CompareError> {
        match tag {
            "en" => Ok(Language::English),
            "np" => Ok(Language::Nepali),
            other => Err(CompareError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// The external tag this language is selected by.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Nepali => "np",
        }
    }

    /// Punctuation tokens that are never penalized during alignment.
    pub fn punctuation(&self) -> &'static [char] {
        match self {
            Language::English => ENGLISH_PUNCTUATION,
            Language::Nepali => NEPALI_PUNCTUATION,
        }
    }

    /// True if `token` consists entirely of this language's punctuation.
    pub fn is_punctuation_token(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().all(|c| self.punctuation().contains(&c))
    }

    /// Character class driving the tokenizer's word/punctuation split.
    ///
    /// English treats alphanumerics and the apostrophe as word characters so
    /// contractions stay whole. Nepali treats everything that is not a sentence
    /// terminator or ASCII punctuation as a word character, which keeps
    /// combining marks attached to their consonants.
    pub fn is_word_char(&self, c: char) -> bool {
        match self {
            Language::English => c.is_alphanumeric() || c == '\'',
            Language::Nepali => {
                !c.is_whitespace() && c != '।' && c != '॥' && !c.is_ascii_punctuation()
            }
        }
    }

    /// Normalize a run of text for comparison under this language's rules.
    ///
    /// English comparison is case-folded only; Nepali goes through the full
    /// contextual pipeline before folding.
    pub fn fold_for_comparison(&self, text: &str) -> String {
        match self {
            Language::English => text.to_lowercase(),
            Language::Nepali => normalizer::normalize(text).to_lowercase(),
        }
    }
}
