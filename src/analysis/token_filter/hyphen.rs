//! Hyphen splitting filter.
//!
//! Every token that contains a hyphen is replaced, in place, by its
//! hyphen-delimited parts. Tokens without a hyphen pass through unchanged.
//!
//! Empty parts (from leading, trailing or doubled hyphens) are dropped, so
//! `"क-"` becomes `["क"]` and `"-"` disappears. A plain `str::split` on `'-'`
//! would keep them (`"क-"` gives `["क", ""]`); dropping them keeps every token
//! non-empty and leaves nothing for the stemmer to map to an empty stem.
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::token_filter::Filter;
//! use shabd::analysis::token_filter::hyphen::HyphenSplitFilter;
//! use shabd::analysis::token::Token;
//!
//! let filter = HyphenSplitFilter::new();
//! let tokens = vec![Token::new("अच्छा-बुरा", 0), Token::new("समय", 1)];
//!
//! let texts: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["अच्छा", "बुरा", "समय"]);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Characters treated as hyphens by default.
pub const DEFAULT_HYPHENS: &[char] = &['-'];

/// A filter that splits hyphenated tokens into their parts.
#[derive(Clone, Debug)]
pub struct HyphenSplitFilter {
    hyphens: Vec<char>,
}

impl HyphenSplitFilter {
    /// Create a filter that splits on the ASCII hyphen-minus.
    pub fn new() -> Self {
        Self::with_hyphens(DEFAULT_HYPHENS)
    }

    /// Create a filter that splits on any of the given characters.
    pub fn with_hyphens(hyphens: &[char]) -> Self {
        HyphenSplitFilter {
            hyphens: hyphens.to_vec(),
        }
    }

    /// Check whether `text` contains one of this filter's hyphens.
    pub fn is_hyphenated(&self, text: &str) -> bool {
        text.contains(self.hyphens.as_slice())
    }
}

impl Default for HyphenSplitFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for HyphenSplitFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut split_tokens: Vec<Token> = Vec::new();

        for token in tokens {
            if !self.is_hyphenated(&token.text) {
                let position = split_tokens.len();
                split_tokens.push(token.with_position(position));
                continue;
            }

            for part in token.text.split(self.hyphens.as_slice()) {
                if part.is_empty() {
                    continue;
                }
                let position = split_tokens.len();
                split_tokens.push(Token::new(part, position));
            }
        }

        Ok(Box::new(split_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "hyphen_split"
    }
}
