//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Tokenize several texts into one stream, numbering positions across them.
    fn tokenize_all(&self, texts: &[String]) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        for text in texts {
            let offset = tokens.len();
            tokens.extend(
                self.tokenize(text)?
                    .map(|token| token.with_position(offset + token.position)),
            );
        }
        Ok(Box::new(tokens.into_iter()))
    }
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
