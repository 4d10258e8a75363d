//! Length-bucketed suffix tables.
//!
//! A [`SuffixTable`] maps a suffix length (in chars) to an ordered list of
//! suffixes of exactly that length. Order inside a bucket is significant: the
//! stemmer takes the first suffix that matches.
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::token_filter::stem::SuffixTable;
//!
//! let table = SuffixTable::hindi();
//! assert_eq!(table.max_len(), 5);
//! assert_eq!(table.bucket(1).unwrap()[0], "ो");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShabdError};

/// Inflectional suffixes of Hindi nouns, adjectives and verbs, by length.
const HINDI_SUFFIXES: &[(usize, &[&str])] = &[
    (
        1,
        &[
            "ो", "े", "ू", "ु", "ी", "ि", "ा",
        ],
    ),
    (
        2,
        &[
            "कर", "ाओ", "िए", "ाई", "ाए", "ने", "नी", "ना", "ते", "ीं", "ती", "ता", "ाँ", "ां",
            "ों", "ें",
        ],
    ),
    (
        3,
        &[
            "ाकर", "ाइए", "ाईं", "ाया", "ेगी", "ेगा", "ोगी", "ोगे", "ाने", "ाना", "ाते", "ाती",
            "ाता", "तीं", "ाओं", "ाएं", "ुओं", "ुएं", "ुआं",
        ],
    ),
    (
        4,
        &[
            "ाएगी", "ाएगा", "ाओगी", "ाओगे", "एंगी", "ेंगी", "एंगे", "ेंगे", "ूंगी", "ूंगा",
            "ातीं", "नाओं", "नाएं", "ताओं", "ताएं", "ियाँ", "ियों", "ियां",
        ],
    ),
    (
        5,
        &[
            "ाएंगी", "ाएंगे", "ाऊंगी", "ाऊंगा", "ाइयाँ", "ाइयों", "ाइयां",
        ],
    ),
];

/// An ordered suffix table keyed by suffix length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<usize, Vec<String>>",
    into = "BTreeMap<usize, Vec<String>>"
)]
pub struct SuffixTable {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl SuffixTable {
    /// Build a table, checking that every suffix has its bucket's length.
    pub fn new(buckets: BTreeMap<usize, Vec<String>>) -> Result<Self> {
        for (&len, suffixes) in &buckets {
            if len == 0 {
                return Err(ShabdError::config("suffix bucket length must be at least 1"));
            }
            if let Some(bad) = suffixes.iter().find(|s| s.chars().count() != len) {
                return Err(ShabdError::config(format!(
                    "suffix {bad:?} has {} chars but is listed under length {len}",
                    bad.chars().count()
                )));
            }
        }
        Ok(SuffixTable { buckets })
    }

    /// The standard Hindi suffix table.
    pub fn hindi() -> Self {
        let buckets = HINDI_SUFFIXES
            .iter()
            .map(|(len, suffixes)| (*len, suffixes.iter().map(|s| s.to_string()).collect()))
            .collect();
        SuffixTable { buckets }
    }

    /// A table without any suffixes; stemming with it is the identity.
    pub fn empty() -> Self {
        SuffixTable {
            buckets: BTreeMap::new(),
        }
    }

    /// Replace the suffixes for one length.
    pub fn with_bucket<I, S>(mut self, len: usize, suffixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buckets = std::mem::take(&mut self.buckets);
        buckets.insert(len, suffixes.into_iter().map(Into::into).collect());
        Self::new(buckets)
    }

    /// The ordered suffixes of the given length.
    pub fn bucket(&self, len: usize) -> Option<&[String]> {
        self.buckets.get(&len).map(Vec::as_slice)
    }

    /// Buckets from the longest suffix length to the shortest.
    pub fn longest_first(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets
            .iter()
            .rev()
            .map(|(len, suffixes)| (*len, suffixes.as_slice()))
    }

    /// The longest suffix length in the table, or 0 when empty.
    pub fn max_len(&self) -> usize {
        self.buckets.keys().next_back().copied().unwrap_or(0)
    }

    /// Total number of suffixes across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Check if the table holds no suffixes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::hindi()
    }
}

impl TryFrom<BTreeMap<usize, Vec<String>>> for SuffixTable {
    type Error = ShabdError;

    fn try_from(buckets: BTreeMap<usize, Vec<String>>) -> Result<Self> {
        Self::new(buckets)
    }
}

impl From<SuffixTable> for BTreeMap<usize, Vec<String>> {
    fn from(table: SuffixTable) -> Self {
        table.buckets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hindi_table_is_valid() {
        let table = SuffixTable::hindi();
        let rebuilt = SuffixTable::new(table.clone().into()).unwrap();
        assert_eq!(rebuilt, table);
        assert_eq!(table.len(), 67);
    }

    #[test]
    fn test_bucket_sizes_and_order() {
        let table = SuffixTable::hindi();
        let sizes: Vec<_> = table.longest_first().map(|(len, s)| (len, s.len())).collect();
        assert_eq!(sizes, vec![(5, 7), (4, 18), (3, 19), (2, 16), (1, 7)]);
        assert_eq!(table.bucket(2).unwrap()[0], "कर");
        assert_eq!(table.bucket(5).unwrap()[6], "ाइयां");
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let mut buckets = BTreeMap::new();
        buckets.insert(2, vec!["ा".to_string()]);
        assert!(SuffixTable::new(buckets).is_err());

        let mut buckets = BTreeMap::new();
        buckets.insert(0, Vec::new());
        assert!(SuffixTable::new(buckets).is_err());
    }

    #[test]
    fn test_with_bucket() {
        let table = SuffixTable::empty().with_bucket(1, ["ा"]).unwrap();
        assert_eq!(table.max_len(), 1);
        assert!(SuffixTable::empty().with_bucket(3, ["ा"]).is_err());
        assert!(SuffixTable::empty().is_empty());
        assert_eq!(SuffixTable::empty().max_len(), 0);
    }

    #[test]
    fn test_json_round_trip_validates() {
        let json = r#"{"1":["ा"],"2":["ें"]}"#;
        let table: SuffixTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.bucket(2).unwrap(), ["ें".to_string()]);

        let bad = r#"{"3":["ा"]}"#;
        assert!(serde_json::from_str::<SuffixTable>(bad).is_err());
    }
}
