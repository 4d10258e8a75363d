//! Hindi analyzer.
//!
//! [`HindiAnalyzer`] owns one instance of every pipeline component and exposes
//! each stage on its own, so a [`Document`](crate::document::Document) can run
//! them one at a time, as well as the whole chain through [`Analyzer`].
//!
//! # Examples
//!
//! ```
//! use shabd::analysis::analyzer::{Analyzer, HindiAnalyzer};
//! use shabd::analysis::stop_words::StopWords;
//!
//! let analyzer = HindiAnalyzer::new()
//!     .split_hyphens(true)
//!     .with_stop_words(StopWords::from_words(["यह"]));
//!
//! let tokens: Vec<_> = analyzer
//!     .analyze("यह अच्छा-बुरा समय, 2024 में।")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(tokens, vec!["अच्छ", "बुर", "समय", "में।"]);
//! ```

use std::sync::Arc;

use log::trace;

use super::Analyzer;
use crate::analysis::char_filter::{CharFilter, HindiNormalizeCharFilter};
use crate::analysis::segmenter::{DandaSegmenter, Segmenter};
use crate::analysis::stop_words::StopWords;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::{
    Filter, HyphenSplitFilter, RemoveEmptyFilter, StemFilter, Stemmer, StopFilter,
};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Normalizer, segmenter, tokenizer and token filters for Hindi text.
#[derive(Clone)]
pub struct HindiAnalyzer {
    normalizer: Arc<dyn CharFilter>,
    segmenter: Arc<dyn Segmenter>,
    tokenizer: Arc<dyn Tokenizer>,
    remove_empty: RemoveEmptyFilter,
    hyphen_filter: HyphenSplitFilter,
    stem_filter: StemFilter,
    stop_filter: Option<StopFilter>,
    split_hyphens: bool,
}

impl HindiAnalyzer {
    /// Create an analyzer with the default Hindi components and no stop words.
    pub fn new() -> Self {
        HindiAnalyzer {
            normalizer: Arc::new(HindiNormalizeCharFilter::default()),
            segmenter: Arc::new(DandaSegmenter::new()),
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            remove_empty: RemoveEmptyFilter::new(),
            hyphen_filter: HyphenSplitFilter::new(),
            stem_filter: StemFilter::new(),
            stop_filter: None,
            split_hyphens: false,
        }
    }

    /// Replace the text normalizer.
    pub fn with_normalizer(mut self, normalizer: Arc<dyn CharFilter>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the sentence segmenter.
    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the stemmer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stem_filter = StemFilter::with_stemmer(stemmer);
        self
    }

    /// Replace the hyphen splitter.
    pub fn with_hyphen_filter(mut self, hyphen_filter: HyphenSplitFilter) -> Self {
        self.hyphen_filter = hyphen_filter;
        self
    }

    /// Remove these stop words at the end of [`Analyzer::analyze`].
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_filter = Some(StopFilter::new(stop_words));
        self
    }

    /// Whether [`Analyzer::analyze`] splits hyphenated tokens.
    pub fn split_hyphens(mut self, split: bool) -> Self {
        self.split_hyphens = split;
        self
    }

    /// The stop filter configured for one-shot analysis, if any.
    pub fn stop_filter(&self) -> Option<&StopFilter> {
        self.stop_filter.as_ref()
    }

    /// Whether one-shot analysis splits hyphenated tokens.
    pub fn splits_hyphens(&self) -> bool {
        self.split_hyphens
    }

    /// Strip digits and punctuation.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.filter(text)
    }

    /// Split normalized text into sentences.
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.segmenter.segment(text)
    }

    /// Tokenize sentences in order and drop empty or whitespace-only tokens.
    pub fn tokenize(&self, sentences: &[String]) -> Result<Vec<Token>> {
        let tokens = self.tokenizer.tokenize_all(sentences)?;
        Ok(self.remove_empty.filter(tokens)?.collect())
    }

    /// Replace every hyphenated token by its parts.
    pub fn split_hyphenated(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        Ok(self.hyphen_filter.filter(tokens.into_token_stream())?.collect())
    }

    /// Stem a single word.
    pub fn stem_word(&self, word: &str) -> String {
        self.stem_filter.stemmer().stem(word)
    }

    /// Stem every token; the output is parallel to the input.
    pub fn stem(&self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        Ok(self.stem_filter.filter(tokens.into_token_stream())?.collect())
    }

    /// Drop the tokens found in `stop_filter`, keeping relative order.
    pub fn remove_stop_words(&self, tokens: Vec<Token>, stop_filter: &StopFilter) -> Result<Vec<Token>> {
        Ok(stop_filter.filter(tokens.into_token_stream())?.collect())
    }
}

impl Default for HindiAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for HindiAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let normalized = self.normalize(text);
        let sentences = self.segment(&normalized);
        let mut tokens = self.tokenize(&sentences)?;
        if self.split_hyphens {
            tokens = self.split_hyphenated(tokens)?;
        }
        let mut tokens = self.stem(tokens)?;
        if let Some(stop_filter) = &self.stop_filter {
            tokens = self.remove_stop_words(tokens, stop_filter)?;
        }

        trace!(
            "analyzed {} sentences into {} tokens",
            sentences.len(),
            tokens.len()
        );
        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "hindi"
    }
}

impl std::fmt::Debug for HindiAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HindiAnalyzer")
            .field("normalizer", &self.normalizer.name())
            .field("segmenter", &self.segmenter.name())
            .field("tokenizer", &self.tokenizer.name())
            .field("stemmer", &self.stem_filter.stemmer().name())
            .field("split_hyphens", &self.split_hyphens)
            .field(
                "stop_words",
                &self.stop_filter.as_ref().map(|f| f.stop_words().len()),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::{HindiStemmer, SuffixTable};

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_stages_in_sequence() {
        let analyzer = HindiAnalyzer::new();

        let normalized = analyzer.normalize("यह वाक्य (1) हिन्दी में है। दूसरा वाक्य।");
        assert_eq!(normalized, "यह वाक्य  हिन्दी में है। दूसरा वाक्य।");

        let sentences = analyzer.segment(&normalized);
        assert_eq!(sentences.len(), 2);

        let tokens = analyzer.tokenize(&sentences).unwrap();
        assert_eq!(
            texts(&tokens),
            vec!["यह", "वाक्य", "हिन्दी", "में", "है।", "दूसरा", "वाक्य।"]
        );

        let stems = analyzer.stem(tokens).unwrap();
        assert_eq!(
            texts(&stems),
            vec!["यह", "वाक्य", "हिन्द", "में", "है।", "दूसर", "वाक्य।"]
        );
        assert_eq!(stems[2].original_text(), "हिन्दी");
    }

    #[test]
    fn test_analyze_without_optional_stages() {
        let analyzer = HindiAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("अच्छा-बुरा है").unwrap().collect();
        assert_eq!(texts(&tokens), vec!["अच्छा-बुर", "है"]);
    }

    #[test]
    fn test_analyze_with_hyphens_and_stop_words() {
        let analyzer = HindiAnalyzer::new()
            .split_hyphens(true)
            .with_stop_words(StopWords::from_words(["है"]));
        let tokens: Vec<Token> = analyzer.analyze("अच्छा-बुरा है").unwrap().collect();
        assert_eq!(texts(&tokens), vec!["अच्छ", "बुर"]);
    }

    #[test]
    fn test_custom_stemmer() {
        let analyzer =
            HindiAnalyzer::new().with_stemmer(Arc::new(HindiStemmer::with_table(SuffixTable::empty())));
        assert_eq!(analyzer.stem_word("लड़कियाँ"), "लड़कियाँ");
        assert_eq!(HindiAnalyzer::new().stem_word("लड़कियाँ"), "लड़क");
    }

    #[test]
    fn test_empty_text() {
        let analyzer = HindiAnalyzer::new();
        assert_eq!(analyzer.analyze("").unwrap().count(), 0);
        assert_eq!(analyzer.analyze("123 ,.").unwrap().count(), 0);
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(HindiAnalyzer::new().name(), "hindi");
        assert!(format!("{:?}", HindiAnalyzer::new()).contains("danda"));
    }
}
