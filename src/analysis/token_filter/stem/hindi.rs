//! Longest-suffix-match stemmer for Hindi.
//!
//! Buckets are tried from the longest suffix length down to the shortest. A
//! bucket of length `L` is only considered when the word has more than `L + 1`
//! chars, so at least two chars always remain. Inside a bucket the first
//! listed suffix that matches wins, and the word is returned with that suffix
//! removed. The residual is not stemmed again.
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::token_filter::stem::{HindiStemmer, Stemmer};
//!
//! let stemmer = HindiStemmer::new();
//! assert_eq!(stemmer.stem("लड़कियाँ"), "लड़क");
//! assert_eq!(stemmer.stem("जाएंगे"), "जा");
//! assert_eq!(stemmer.stem("घर"), "घर");
//! ```

use super::{Stemmer, SuffixTable};

/// Suffix-stripping stemmer driven by a [`SuffixTable`].
#[derive(Clone, Debug, Default)]
pub struct HindiStemmer {
    table: SuffixTable,
}

impl HindiStemmer {
    /// Create a stemmer with the standard Hindi suffix table.
    pub fn new() -> Self {
        HindiStemmer {
            table: SuffixTable::hindi(),
        }
    }

    /// Create a stemmer with a custom suffix table.
    pub fn with_table(table: SuffixTable) -> Self {
        HindiStemmer { table }
    }

    /// The suffix table this stemmer uses.
    pub fn table(&self) -> &SuffixTable {
        &self.table
    }

    /// Find the suffix that would be stripped from `word`, if any.
    pub fn matching_suffix<'a>(&'a self, word: &str) -> Option<&'a str> {
        let char_len = word.chars().count();

        self.table
            .longest_first()
            .filter(|(len, _)| char_len > len + 1)
            .find_map(|(_, suffixes)| {
                suffixes
                    .iter()
                    .find(|suffix| word.ends_with(suffix.as_str()))
                    .map(String::as_str)
            })
    }
}

impl Stemmer for HindiStemmer {
    fn stem(&self, word: &str) -> String {
        match self.matching_suffix(word) {
            Some(suffix) => word[..word.len() - suffix.len()].to_string(),
            None => word.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "hindi"
    }
}
