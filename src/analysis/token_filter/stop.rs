//! Stop filter implementation.
//!
//! The filter is handed a [`StopWords`] set when it is built; it never loads
//! one itself.
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::token_filter::Filter;
//! use shabd::analysis::token_filter::stop::StopFilter;
//! use shabd::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["है"]);
//! let tokens = vec![Token::new("यह", 0), Token::new("है", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "यह");
//! ```

use std::sync::Arc;

use crate::analysis::stop_words::StopWords;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
///
/// Matching is exact string membership. Surviving tokens keep their relative
/// order and their positions.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<StopWords>,
}

impl StopFilter {
    /// Create a stop filter over the given set.
    pub fn new(stop_words: StopWords) -> Self {
        Self::shared(Arc::new(stop_words))
    }

    /// Create a stop filter over a set shared with other filters.
    pub fn shared(stop_words: Arc<StopWords>) -> Self {
        StopFilter { stop_words }
    }

    /// Create a stop filter with the built-in Hindi list.
    pub fn hindi() -> Self {
        Self::new(StopWords::hindi())
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(StopWords::from_words(words))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// The stop word set.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
