// Edit-script alignment between reference and hypothesis token streams, then
// a bounded local rescoring pass that consults the equivalence rules before
// letting a mismatch stand.

use serde::Serialize;
use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::equivalence::are_equivalent;
use crate::language::Language;
use crate::tokenizer::Token;

/// Rescoring window radius around the aligned hypothesis position.
const RESCORE_RADIUS: usize = 3;

/// Final classification of one reference token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// One reference token with its verdict, in original reference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenVerdict {
    /// The token exactly as it appeared in the reference text.
    pub token: String,
    pub verdict: Verdict,
}

/// Align a folded reference stream against a folded hypothesis stream and
/// classify every reference token.
///
/// `original` carries the unmodified-case reference tokens for output;
/// `reference` is the same stream folded for comparison, index-for-index.
/// Inserts (hypothesis tokens with no reference counterpart) contribute no
/// output. An empty stream on either side yields an empty verdict list.
pub fn align(
    original: &[Token],
    reference: &[String],
    hypothesis: &[String],
    language: Language,
) -> Vec<TokenVerdict> {
    debug_assert_eq!(original.len(), reference.len());
    if reference.is_empty() || hypothesis.is_empty() {
        return Vec::new();
    }

    let ops = capture_diff_slices(Algorithm::Myers, reference, hypothesis);
    let last_hyp = hypothesis.len() - 1;

    // (reference index, aligned hypothesis index, provisional verdict);
    // the aligned index is what centers the rescoring window, independent of
    // any length difference between the streams.
    let mut entries: Vec<(usize, usize, Verdict)> = Vec::with_capacity(reference.len());
    for op in ops {
        match op {
            DiffOp::Equal { old_index, new_index, len } => {
                for k in 0..len {
                    entries.push((old_index + k, new_index + k, Verdict::Correct));
                }
            }
            DiffOp::Replace { old_index, old_len, new_index, new_len } => {
                for k in 0..old_len {
                    let aligned = new_index + k.min(new_len.saturating_sub(1));
                    entries.push((old_index + k, aligned.min(last_hyp), Verdict::Incorrect));
                }
            }
            DiffOp::Delete { old_index, old_len, new_index } => {
                for k in 0..old_len {
                    entries.push((old_index + k, new_index.min(last_hyp), Verdict::Incorrect));
                }
            }
            DiffOp::Insert { .. } => {}
        }
    }

    let radius = RESCORE_RADIUS.min(hypothesis.len());
    entries
        .into_iter()
        .map(|(i, aligned, provisional)| {
            let verdict = match provisional {
                Verdict::Correct => Verdict::Correct,
                Verdict::Incorrect => {
                    rescore(&reference[i], aligned, hypothesis, radius, language)
                }
            };
            TokenVerdict { token: original[i].text.clone(), verdict }
        })
        .collect()
}

// Punctuation mismatches are never penalized; everything else gets one more
// chance against the equivalence rules within the window.
fn rescore(
    token: &str,
    aligned: usize,
    hypothesis: &[String],
    radius: usize,
    language: Language,
) -> Verdict {
    if language.is_punctuation_token(token) {
        return Verdict::Correct;
    }
    let lo = aligned.saturating_sub(radius);
    let hi = (aligned + radius).min(hypothesis.len() - 1);
    if hypothesis[lo..=hi].iter().any(|h| are_equivalent(token, h)) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}
