//! Char filters that rewrite the raw text before it is segmented.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`hindi_normalize::HindiNormalizeCharFilter`] - Digit and punctuation removal for Hindi text

/// Trait for character filters that transform text before segmentation.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod hindi_normalize;
pub mod pattern_replace;

pub use hindi_normalize::HindiNormalizeCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
