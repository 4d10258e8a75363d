//! Analyzers that combine char filters, segmentation, tokenization and token filters.
//!
//! ```text
//! Raw Text → Char Filter → Segmenter → Tokenizer → Filter 1 … Filter N → Token Stream
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

mod hindi;

pub use hindi::HindiAnalyzer;
