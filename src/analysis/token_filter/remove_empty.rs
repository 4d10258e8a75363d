//! Remove empty filter implementation.
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::token_filter::Filter;
//! use shabd::analysis::token_filter::remove_empty::RemoveEmptyFilter;
//! use shabd::analysis::token::Token;
//!
//! let filter = RemoveEmptyFilter::new();
//! let tokens = vec![
//!     Token::new("राम", 0),
//!     Token::new(" ", 1),
//!     Token::new("श्याम", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[1].text, "श्याम");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes empty and whitespace-only tokens.
///
/// Surviving tokens keep their text untouched and are renumbered so that
/// positions stay contiguous.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !token.text.trim().is_empty())
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
