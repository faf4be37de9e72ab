// Public comparison entry point: ties tokenizer, normalizer, and alignment
// together for one request. Holds no state; every call builds its streams
// fresh and consults only process-wide read-only tables.

use tracing::debug;

use crate::alignment::{align, TokenVerdict};
use crate::error::CompareError;
use crate::language::Language;
use crate::tokenizer::tokenize;

/// Compare a learner's reference text against a recognizer hypothesis and
/// classify every reference token.
///
/// The reference is tokenized twice in effect: the raw stream preserves the
/// tokens exactly as typed for the output, and each raw token is folded
/// individually for comparison — so normalization can never change the token
/// count, and every verdict maps back to a user-visible token. The verdict
/// list is empty when either text tokenizes to nothing.
pub fn compare(reference_text: &str, hypothesis_text: &str, language: Language) -> Vec<TokenVerdict> {
    let original = tokenize(reference_text, language);
    let reference: Vec<String> = original
        .tokens
        .iter()
        .map(|t| language.fold_for_comparison(&t.text))
        .collect();
    let hypothesis = tokenize(&language.fold_for_comparison(hypothesis_text), language).texts();

    debug!(
        language = language.tag(),
        reference_tokens = reference.len(),
        hypothesis_tokens = hypothesis.len(),
        "aligning token streams"
    );

    align(&original.tokens, &reference, &hypothesis, language)
}

/// [`compare`] with an external language tag; fails fast on an unrecognized
/// tag with no partial output.
pub fn compare_tagged(
    reference_text: &str,
    hypothesis_text: &str,
    language_tag: &str,
) -> Result<Vec<TokenVerdict>, CompareError> {
    let language = Language::from_tag(language_tag)?;
    Ok(compare(reference_text, hypothesis_text, language))
}
