use thiserror::Error;

/// Errors surfaced by the comparison engine.
///
/// Empty inputs are deliberately not represented here: a reference or
/// hypothesis that tokenizes to nothing yields an empty verdict list,
/// since there are no tokens to judge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// The caller passed a language tag the engine does not recognize.
    /// Fails fast with no partial output.
    #[error("unsupported language tag: {0:?} (expected \"en\" or \"np\")")]
    UnsupportedLanguage(String),
}
