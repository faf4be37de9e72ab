pub mod alignment;
pub mod comparer;
pub mod equivalence;
pub mod error;
pub mod language;
pub mod normalizer;
pub mod segmenter;
pub mod tokenizer;

// Re-export main types for convenient access
pub use alignment::{TokenVerdict, Verdict};
pub use comparer::{compare, compare_tagged};
pub use error::CompareError;
pub use language::Language;
pub use normalizer::{normalize, normalize_basic};
pub use segmenter::{segment, segment_with_defaults};
pub use tokenizer::{tokenize, Token, TokenKind, TokenStream};
