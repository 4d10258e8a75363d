//! Sentence segmentation.
//!
//! A [`Segmenter`] splits normalized text into an ordered list of sentences.
//! [`DandaSegmenter`] splits after every sentence terminator (by default the
//! Devanagari danda `।`, U+0964) that is followed by whitespace. The
//! whitespace run is consumed; the terminator stays with the sentence before
//! it.
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::segmenter::{DandaSegmenter, Segmenter};
//!
//! let segmenter = DandaSegmenter::new();
//! let sentences = segmenter.segment("राम घर गया। सीता आई।");
//! assert_eq!(sentences, vec!["राम घर गया।", "सीता आई।"]);
//! ```

use regex::Regex;

use crate::error::{Result, ShabdError};

/// The Devanagari full stop.
pub const DANDA: char = '\u{0964}';

/// Trait for components that split text into sentences.
pub trait Segmenter: Send + Sync {
    /// Split `text` into sentences. Empty text yields no sentences.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Get the name of this segmenter.
    fn name(&self) -> &'static str;
}

/// Splits on a terminator character followed by whitespace.
#[derive(Clone, Debug)]
pub struct DandaSegmenter {
    terminator: char,
    boundary: Regex,
}

impl DandaSegmenter {
    /// Create a segmenter that splits on the danda.
    pub fn new() -> Self {
        Self::build(DANDA)
    }

    /// Create a segmenter that splits on a custom terminator.
    pub fn with_terminator(terminator: char) -> Result<Self> {
        if terminator.is_whitespace() {
            return Err(ShabdError::config(format!(
                "sentence terminator must not be whitespace: {terminator:?}"
            )));
        }
        Ok(Self::build(terminator))
    }

    fn build(terminator: char) -> Self {
        let escaped = regex::escape(terminator.encode_utf8(&mut [0; 4]));
        let boundary = Regex::new(&format!(r"{escaped}\s+"))
            .expect("Escaped terminator pattern should be valid");
        DandaSegmenter {
            terminator,
            boundary,
        }
    }

    /// The terminator this segmenter splits on.
    pub fn terminator(&self) -> char {
        self.terminator
    }
}

impl Default for DandaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for DandaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let terminator_len = self.terminator.len_utf8();
        let mut sentences = Vec::new();
        let mut start = 0;

        for boundary in self.boundary.find_iter(text) {
            let end = boundary.start() + terminator_len;
            sentences.push(text[start..end].to_string());
            start = boundary.end();
        }
        // A trailing terminator + whitespace leaves an empty final sentence.
        sentences.push(text[start..].to_string());

        sentences
    }

    fn name(&self) -> &'static str {
        "danda"
    }
}
