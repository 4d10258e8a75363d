use std::borrow::Cow;

use regex::Regex;

use super::CharFilter;
use crate::error::{Result, ShabdError};

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| ShabdError::Anyhow(anyhow::Error::from(e)))?,
            replacement: replacement.to_string(),
        })
    }

    /// Create a filter that deletes every match of `pattern`.
    pub fn remove(pattern: &str) -> Result<Self> {
        Self::new(pattern, "")
    }

    /// The regex pattern this filter applies.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        match self
            .pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
        {
            Cow::Borrowed(unchanged) => unchanged.to_string(),
            Cow::Owned(replaced) => replaced,
        }
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
