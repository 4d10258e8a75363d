//! Digit and punctuation removal for Hindi text.
//!
//! Every maximal run of decimal digits (ASCII and Devanagari alike) is
//! deleted first, then every character of the punctuation class. The hyphen
//! and the danda (`।`) survive: the former feeds hyphen splitting, the latter
//! marks sentence boundaries.

use super::CharFilter;
use super::pattern_replace::PatternReplaceCharFilter;
use crate::error::Result;

/// Characters removed by the default normalizer.
pub const DEFAULT_PUNCTUATION: &[char] = &[',', '(', ')', '"', '\'', '‘', '’', '.', ':', '[', ']'];

/// Char filter that strips digit runs and a fixed punctuation class.
#[derive(Clone, Debug)]
pub struct HindiNormalizeCharFilter {
    digits: PatternReplaceCharFilter,
    punctuation: Option<PatternReplaceCharFilter>,
}

impl HindiNormalizeCharFilter {
    /// Create a normalizer that removes [`DEFAULT_PUNCTUATION`].
    pub fn new() -> Result<Self> {
        Self::with_punctuation(DEFAULT_PUNCTUATION)
    }

    /// Create a normalizer that removes the given punctuation characters.
    pub fn with_punctuation(punctuation: &[char]) -> Result<Self> {
        let punctuation = if punctuation.is_empty() {
            None
        } else {
            let escaped: String = punctuation
                .iter()
                .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                .collect();
            Some(PatternReplaceCharFilter::remove(&format!("[{escaped}]"))?)
        };

        Ok(HindiNormalizeCharFilter {
            digits: PatternReplaceCharFilter::remove(r"\d+")?,
            punctuation,
        })
    }
}

impl Default for HindiNormalizeCharFilter {
    fn default() -> Self {
        Self::new().expect("Default normalizer patterns should be valid")
    }
}

impl CharFilter for HindiNormalizeCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }
        let without_digits = self.digits.filter(input);
        match &self.punctuation {
            Some(punctuation) => punctuation.filter(&without_digits),
            None => without_digits,
        }
    }

    fn name(&self) -> &'static str {
        "hindi_normalize"
    }
}
