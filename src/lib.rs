//! # Shabd
//!
//! A preprocessing pipeline for Hindi (Devanagari) text.
//!
//! ## Features
//!
//! - Digit and punctuation normalization
//! - Sentence segmentation on the danda (`।`)
//! - Whitespace tokenization with optional hyphen splitting
//! - Longest-suffix-match stemming over a length-bucketed suffix table
//! - Stop word removal with a built-in or user-supplied list
//! - Parallel batch processing of independent texts
//!
//! ## Example
//!
//! ```
//! use shabd::prelude::*;
//!
//! let mut doc = Document::new("लड़कियाँ किताबें पढ़ेंगी।");
//! doc.stem()?;
//! assert_eq!(doc.stems()[0], "लड़क");
//! # Ok::<(), ShabdError>(())
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, HindiAnalyzer};
    pub use crate::analysis::stop_words::StopWords;
    pub use crate::analysis::token_filter::{HindiStemmer, Stemmer, SuffixTable};
    pub use crate::config::ShabdConfig;
    pub use crate::document::{Document, Stage};
    pub use crate::error::{Result, ShabdError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
