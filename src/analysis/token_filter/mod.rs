//! Token filter implementations for token transformation.
//!
//! ```text
//! Tokenizer → RemoveEmpty → HyphenSplit → Stem → Stop
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod hyphen;
pub mod remove_empty;
pub mod stem;
pub mod stop;

pub use hyphen::HyphenSplitFilter;
pub use remove_empty::RemoveEmptyFilter;
pub use stem::{HindiStemmer, StemFilter, Stemmer, SuffixTable};
pub use stop::StopFilter;
