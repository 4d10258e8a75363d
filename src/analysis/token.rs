//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from the tokenizer through the token
//! filters. Besides its text it remembers its position in the stream and, once
//! a filter rewrites it, the text it had before.
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::token::Token;
//!
//! let token = Token::new("हिन्दी", 0);
//! assert_eq!(token.char_len(), 6);
//!
//! let stemmed = token.with_text("हिन्द");
//! assert_eq!(stemmed.original_text(), "हिन्दी");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The text before the first rewriting filter touched this token
    pub original_text: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            original_text: None,
        }
    }

    /// Number of chars in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text, remembering the previous text if none is recorded yet.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        if token.original_text.is_none() {
            token.original_text = Some(self.text.clone());
        }
        token.text = text.into();
        token
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }

    /// The text this token had before any filter rewrote it.
    pub fn original_text(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

impl IntoTokenStream for Vec<String> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(
            self.into_iter()
                .enumerate()
                .map(|(position, text)| Token::new(text, position)),
        )
    }
}
