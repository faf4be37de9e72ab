// Single-pass word/punctuation tokenizer shared by both language policies.
// The language only contributes its word-character class; the scan itself is
// identical, which is what guarantees that a raw pass and a normalized pass
// over the same text produce streams of the same shape.

use crate::language::Language;

/// What kind of surface form a token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
}

/// One token in reading order. Tokens are never mutated after production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn word(text: String) -> Self {
        Token { text, kind: TokenKind::Word }
    }

    fn punctuation(c: char) -> Self {
        Token { text: c.to_string(), kind: TokenKind::Punctuation }
    }
}

/// An ordered token sequence plus the language it was tokenized under.
#[derive(Debug, Clone)]
pub struct TokenStream {
    pub language: Language,
    pub tokens: Vec<Token>,
}

impl TokenStream {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token texts in order.
    pub fn texts(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }
}

/// Split `text` into word and punctuation tokens under `language`'s rules.
///
/// Maximal runs of word characters become single `Word` tokens; every other
/// non-whitespace character becomes its own single-character `Punctuation`
/// token, so a run like `।।` or `?!` is always exploded rather than kept as
/// one token. Whitespace separates tokens and is never emitted.
pub fn tokenize(text: &str, language: Language) -> TokenStream {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            flush_word(&mut current, &mut tokens);
        } else if language.is_word_char(c) {
            current.push(c);
        } else {
            flush_word(&mut current, &mut tokens);
            tokens.push(Token::punctuation(c));
        }
    }
    flush_word(&mut current, &mut tokens);

    TokenStream { language, tokens }
}

fn flush_word(current: &mut String, tokens: &mut Vec<Token>) {
    if !current.is_empty() {
        tokens.push(Token::word(std::mem::take(current)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, language: Language) -> Vec<String> {
        tokenize(text, language).texts()
    }

    #[test]
    fn test_english_words_and_punctuation() {
        let stream = tokenize("hello, world!", Language::English);
        assert_eq!(stream.texts(), vec!["hello", ",", "world", "!"]);
        assert_eq!(stream.tokens[0].kind, TokenKind::Word);
        assert_eq!(stream.tokens[1].kind, TokenKind::Punctuation);
    }

    #[test]
    fn test_whitespace_never_emitted() {
        assert_eq!(
            texts("  spaced \t out \n text ", Language::English),
            vec!["spaced", "out", "text"]
        );
        assert!(tokenize("   ", Language::English).is_empty());
        assert!(tokenize("", Language::Nepali).is_empty());
    }

    #[test]
    fn test_contraction_stays_whole() {
        assert_eq!(texts("don't stop", Language::English), vec!["don't", "stop"]);
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(texts("Hello World", Language::English), vec!["Hello", "World"]);
    }

    #[test]
    fn test_nepali_danda_split() {
        assert_eq!(
            texts("आज मौसम राम्रो छ।", Language::Nepali),
            vec!["आज", "मौसम", "राम्रो", "छ", "।"]
        );
    }

    #[test]
    fn test_multi_char_punctuation_run_explodes() {
        assert_eq!(texts("छ।।", Language::Nepali), vec!["छ", "।", "।"]);
        assert_eq!(texts("के?!", Language::Nepali), vec!["के", "?", "!"]);
        assert_eq!(texts("wait...", Language::English), vec!["wait", ".", ".", "."]);
    }

    #[test]
    fn test_combining_marks_stay_attached() {
        // Halant and matras are word characters for Nepali.
        assert_eq!(texts("राम्रो छन्", Language::Nepali), vec!["राम्रो", "छन्"]);
    }

    #[test]
    fn test_deterministic() {
        let a = texts("आज मौसम राम्रो छ।", Language::Nepali);
        let b = texts("आज मौसम राम्रो छ।", Language::Nepali);
        assert_eq!(a, b);
    }
}
