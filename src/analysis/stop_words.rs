//! Stop word sets.
//!
//! A [`StopWords`] set is a plain membership test. It is built from lines of
//! text (one word per line, surrounding whitespace trimmed, blank lines
//! ignored, duplicates harmless) or from the built-in Hindi list. Loading from
//! disk happens here and nowhere else, so the filters that consume the set
//! never touch the filesystem.
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::stop_words::StopWords;
//!
//! let stop_words = StopWords::from_lines("है\n  में \n\nहै\n");
//! assert_eq!(stop_words.len(), 2);
//! assert!(stop_words.contains("में"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::sync::LazyLock;

use log::info;

use crate::error::{Result, ShabdError};

/// Frequent Hindi function words.
const DEFAULT_HINDI_STOP_WORDS: &[&str] = &[
    "अंदर", "अत", "अपना", "अपनी", "अपने", "अभी", "आदि", "आप", "इत्यादि", "इन", "इनका", "इन्हीं",
    "इन्हें", "इन्हों", "इस", "इसका", "इसकी", "इसके", "इसमें", "इसी", "इसे", "उन", "उनका", "उनकी",
    "उनके", "उनको", "उन्हीं", "उन्हें", "उन्हों", "उस", "उसके", "उसी", "उसे", "एक", "एवं", "एस",
    "ऐसे", "और", "कई", "कर", "करता", "करते", "करना", "करने", "करें", "कहते", "कहा", "का",
    "काफ़ी", "कि", "कितना", "किन्हें", "किन्हों", "किया", "किर", "किस", "किसी", "किसे", "की", "कुछ",
    "कुल", "के", "को", "कोई", "कौन", "कौनसा", "गया", "जब", "जहाँ", "जा", "जितना",
    "जिन", "जिन्हें", "जिन्हों", "जिस", "जिसे", "जीधर", "जैसा", "जैसे", "जो", "तक", "तब", "तरह",
    "तिन", "तिन्हें", "तिन्हों", "तिस", "तिसे", "तो", "था", "थी", "थे", "दबारा", "दिया", "दुसरा",
    "दूसरे", "दो", "द्वारा", "न", "नहीं", "ना", "निहायत", "नीचे", "ने", "पर", "पहले", "पूरा",
    "पे", "फिर", "बनी", "बही", "बहुत", "बाद", "बाला", "बिलकुल", "भी", "भीतर", "मगर", "मानो",
    "मे", "में", "यदि", "यह", "यहाँ", "यही", "या", "यिह", "ये", "रखें", "रहा", "रहे",
    "लिए", "लिये", "लेकिन", "व", "वर्ग", "वह", "वहाँ", "वहीं", "वाले", "वुह", "वे", "वग़ैरह",
    "संग", "सकता", "सकते", "सबसे", "सभी", "साथ", "साबुत", "साभ", "सारा", "से", "सो", "ही",
    "हुआ", "हुई", "हुए", "है", "हैं", "हो", "होता", "होती", "होते", "होना", "होने",
];

/// Built-in Hindi stop words.
pub static DEFAULT_HINDI_STOP_WORDS_SET: LazyLock<StopWords> =
    LazyLock::new(|| StopWords::from_words(DEFAULT_HINDI_STOP_WORDS.iter().copied()));

/// A set of stop words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Hindi stop word list.
    pub fn hindi() -> Self {
        DEFAULT_HINDI_STOP_WORDS_SET.clone()
    }

    /// Build a set from individual words; each word is trimmed.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        StopWords { words }
    }

    /// Build a set from newline-separated text.
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Read a UTF-8 stop word list from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Ok(Self::from_lines(&text))
    }

    /// Load a UTF-8 stop word list, one word per line.
    ///
    /// A missing file is reported as [`ShabdError::ResourceNotFound`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ShabdError::ResourceNotFound(path.to_path_buf()),
            _ => ShabdError::Io(e),
        })?;
        let text = String::from_utf8(bytes).map_err(|e| ShabdError::from(e).with_origin(path))?;
        let stop_words = Self::from_lines(&text);

        info!(
            "loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(stop_words)
    }

    /// Add a word to the set.
    pub fn insert<S: AsRef<str>>(&mut self, word: S) -> bool {
        let word = word.as_ref().trim();
        !word.is_empty() && self.words.insert(word.to_string())
    }

    /// Check whether `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
