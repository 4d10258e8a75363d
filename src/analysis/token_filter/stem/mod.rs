//! Stemming token filter and stemmer implementations.

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod hindi;
pub mod suffix_table;

pub use hindi::HindiStemmer;
pub use suffix_table::SuffixTable;

/// Filter that applies stemming to tokens.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the Hindi suffix stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(HindiStemmer::new()),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// The stemmer this filter applies.
    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let stemmed = self.stemmer.stem(&token.text);
                token.with_text(stemmed)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
