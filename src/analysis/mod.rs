//! Text analysis for Hindi.
//!
//! This module provides the stateless pieces of the pipeline: text
//! normalization, sentence segmentation, tokenization, and the token filters
//! for hyphen splitting, stemming and stop word removal.

pub mod analyzer;
pub mod char_filter;
pub mod segmenter;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use segmenter::*;
pub use stop_words::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
