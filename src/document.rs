//! Staged processing of a single text.
//!
//! A [`Document`] owns one text and every intermediate result derived from it:
//! the cleaned text, its sentences, its tokens, the stem of every token and the
//! stems left after stop word removal. Each stage records how far the document
//! has progressed in its [`Stage`]. Running a stage first brings the document
//! up to that stage's predecessor, then recomputes its own field from scratch
//! and clears everything downstream, so `stems` always stays parallel to
//! `tokens`.
//!
//! # Examples
//!
//! ```
//! use shabd::document::{Document, Stage};
//! use shabd::analysis::stop_words::StopWords;
//!
//! let mut doc = Document::new("यह वाक्य हिन्दी में है।");
//! doc.tokenize()?;
//! assert_eq!(doc.sentence_count(), 1);
//! assert_eq!(doc.tokens_count(), 5);
//!
//! doc.stem()?;
//! assert_eq!(doc.stems()[2], "हिन्द");
//!
//! let filtered = doc.remove_stop_words(&StopWords::from_words(["यह"]))?;
//! assert_eq!(filtered.len(), 4);
//! assert_eq!(doc.stage(), Stage::Filtered);
//! # Ok::<(), shabd::error::ShabdError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::HindiAnalyzer;
use crate::analysis::stop_words::StopWords;
use crate::analysis::token::Token;
use crate::error::{Result, ShabdError};

static DEFAULT_ANALYZER: LazyLock<Arc<HindiAnalyzer>> =
    LazyLock::new(|| Arc::new(HindiAnalyzer::new()));

/// How far a document has been processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// No text has been loaded
    Raw,
    /// Digits and punctuation have been removed
    Normalized,
    /// The text has been split into sentences
    Segmented,
    /// The sentences have been split into tokens
    Tokenized,
    /// Every token has a stem
    Stemmed,
    /// Stop words have been removed from the stems
    Filtered,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::Raw,
        Stage::Normalized,
        Stage::Segmented,
        Stage::Tokenized,
        Stage::Stemmed,
        Stage::Filtered,
    ];

    /// Lowercase name of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Raw => "raw",
            Stage::Normalized => "normalized",
            Stage::Segmented => "segmented",
            Stage::Tokenized => "tokenized",
            Stage::Stemmed => "stemmed",
            Stage::Filtered => "filtered",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One text and the results of every pipeline stage run on it.
#[derive(Clone, Debug)]
pub struct Document {
    analyzer: Arc<HindiAnalyzer>,
    raw_text: Option<String>,
    text: String,
    sentences: Vec<String>,
    tokens: Vec<String>,
    stems: Vec<String>,
    stem_map: HashMap<String, String>,
    filtered_tokens: Vec<String>,
    stage: Stage,
}

impl Document {
    /// Create a document from text, normalizing it with the default analyzer.
    pub fn new<S: Into<String>>(text: S) -> Self {
        let mut doc = Self::default();
        doc.load_text(text);
        doc
    }

    /// Create an unloaded document that will use the given analyzer.
    pub fn with_analyzer(analyzer: Arc<HindiAnalyzer>) -> Self {
        Document {
            analyzer,
            raw_text: None,
            text: String::new(),
            sentences: Vec::new(),
            tokens: Vec::new(),
            stems: Vec::new(),
            stem_map: HashMap::new(),
            filtered_tokens: Vec::new(),
            stage: Stage::Raw,
        }
    }

    /// Read a UTF-8 file into a new document.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut doc = Self::default();
        doc.load_path(path)?;
        Ok(doc)
    }

    /// Read UTF-8 text from a reader into a new document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut doc = Self::default();
        doc.load_reader(reader)?;
        Ok(doc)
    }

    /// Replace the text, normalize it and discard all earlier results.
    pub fn load_text<S: Into<String>>(&mut self, text: S) {
        self.raw_text = Some(text.into());
        self.stage = Stage::Raw;
        self.normalize();
    }

    /// Replace the text with the contents of a UTF-8 file.
    ///
    /// Invalid UTF-8 fails with [`ShabdError::InputDecoding`] and leaves the
    /// document untouched.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| ShabdError::from(e).with_origin(path))?;
        debug!("read {} chars from {}", text.chars().count(), path.display());
        self.load_text(text);
        Ok(())
    }

    /// Replace the text with UTF-8 read from `reader`.
    pub fn load_reader<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        self.load_text(text);
        Ok(())
    }

    /// Run stages until the document has reached at least `stage`.
    ///
    /// [`Stage::Filtered`] cannot be reached this way because it needs a stop
    /// word set; use [`Document::remove_stop_words`].
    pub fn ensure_stage(&mut self, stage: Stage) -> Result<()> {
        while self.stage < stage {
            match self.stage {
                Stage::Raw => self.normalize(),
                Stage::Normalized => {
                    self.generate_sentences();
                }
                Stage::Segmented => {
                    self.tokenize()?;
                }
                Stage::Tokenized => {
                    self.stem()?;
                }
                Stage::Stemmed | Stage::Filtered => {
                    return Err(ShabdError::invalid_operation(
                        "the filtered stage needs a stop word set",
                    ));
                }
            }
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.text = match &self.raw_text {
            Some(raw) => self.analyzer.normalize(raw),
            None => String::new(),
        };
        self.reset_to(Stage::Normalized);
        debug!("normalized text to {} chars", self.len_text());
    }

    // Clear every field produced after `stage` and rewind to it.
    fn reset_to(&mut self, stage: Stage) {
        if stage < Stage::Segmented {
            self.sentences.clear();
        }
        if stage < Stage::Tokenized {
            self.tokens.clear();
        }
        if stage < Stage::Stemmed {
            self.stems.clear();
            self.stem_map.clear();
        }
        if stage < Stage::Filtered {
            self.filtered_tokens.clear();
        }
        self.stage = stage;
    }

    /// Split the cleaned text into sentences.
    pub fn generate_sentences(&mut self) -> &[String] {
        if self.stage == Stage::Raw {
            self.normalize();
        }
        self.sentences = self.analyzer.segment(&self.text);
        self.reset_to(Stage::Segmented);
        debug!("segmented {} sentences", self.sentences.len());
        &self.sentences
    }

    /// Split the sentences into tokens, segmenting first if needed.
    pub fn tokenize(&mut self) -> Result<&[String]> {
        self.ensure_stage(Stage::Segmented)?;
        let tokens = self.analyzer.tokenize(&self.sentences)?;
        self.tokens = texts(tokens);
        self.reset_to(Stage::Tokenized);
        debug!("tokenized {} tokens", self.tokens.len());
        Ok(&self.tokens)
    }

    /// Replace every hyphenated token by its parts, tokenizing first if needed.
    ///
    /// Earlier stems and filtered tokens are discarded.
    pub fn split_hyphenated(&mut self) -> Result<&[String]> {
        self.ensure_stage(Stage::Tokenized)?;
        let tokens = self.analyzer.split_hyphenated(self.token_stream())?;
        self.tokens = texts(tokens);
        self.reset_to(Stage::Tokenized);
        debug!("split hyphens into {} tokens", self.tokens.len());
        Ok(&self.tokens)
    }

    /// Stem every token, tokenizing first if needed.
    ///
    /// `stems` is recomputed, never appended to. Returns the token to stem
    /// map; a token that occurs several times has one entry.
    pub fn stem(&mut self) -> Result<&HashMap<String, String>> {
        self.ensure_stage(Stage::Tokenized)?;
        let stems = self.analyzer.stem(self.token_stream())?;
        self.stems = texts(stems);
        self.stem_map = self
            .tokens
            .iter()
            .cloned()
            .zip(self.stems.iter().cloned())
            .collect();
        self.reset_to(Stage::Stemmed);
        debug!(
            "stemmed {} tokens ({} distinct)",
            self.stems.len(),
            self.stem_map.len()
        );
        Ok(&self.stem_map)
    }

    /// Drop stems found in `stop_words`, stemming first if needed.
    ///
    /// The set is only read; surviving stems keep their order.
    pub fn remove_stop_words(&mut self, stop_words: &StopWords) -> Result<&[String]> {
        self.ensure_stage(Stage::Stemmed)?;
        self.filtered_tokens = self
            .stems
            .iter()
            .filter(|stem| !stop_words.contains(stem))
            .cloned()
            .collect();
        self.stage = Stage::Filtered;
        debug!(
            "removed {} stop words, {} tokens remain",
            self.stems.len() - self.filtered_tokens.len(),
            self.filtered_tokens.len()
        );
        Ok(&self.filtered_tokens)
    }

    fn token_stream(&self) -> Vec<Token> {
        self.tokens
            .iter()
            .enumerate()
            .map(|(position, text)| Token::new(text.as_str(), position))
            .collect()
    }

    /// The analyzer driving this document.
    pub fn analyzer(&self) -> &Arc<HindiAnalyzer> {
        &self.analyzer
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The text as loaded, before normalization.
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    /// The normalized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The sentences, empty until segmented.
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// The tokens, empty until tokenized.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The stems, parallel to [`Document::tokens`] once stemmed.
    pub fn stems(&self) -> &[String] {
        &self.stems
    }

    /// Token to stem map from the last stemming run.
    pub fn stem_map(&self) -> &HashMap<String, String> {
        &self.stem_map
    }

    /// The stems left after stop word removal.
    pub fn filtered_tokens(&self) -> &[String] {
        &self.filtered_tokens
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of tokens.
    pub fn tokens_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of stems.
    pub fn stems_count(&self) -> usize {
        self.stems.len()
    }

    /// Number of chars in the normalized text.
    pub fn len_text(&self) -> usize {
        self.text.chars().count()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::with_analyzer(Arc::clone(&DEFAULT_ANALYZER))
    }
}

fn texts(tokens: Vec<Token>) -> Vec<String> {
    tokens.into_iter().map(|token| token.text).collect()
}
