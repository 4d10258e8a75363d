//! Pipeline configuration.
//!
//! A [`ShabdConfig`] is plain data that can be read from a JSON file. Every
//! field is optional in the file; missing fields take their defaults.
//!
//! ```json
//! {
//!   "split_hyphens": true,
//!   "remove_stop_words": true,
//!   "stopwords_path": "stopwords.txt",
//!   "suffix_table": { "1": ["ा", "े"], "2": ["ों"] }
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::HindiAnalyzer;
use crate::analysis::char_filter::HindiNormalizeCharFilter;
use crate::analysis::segmenter::DandaSegmenter;
use crate::analysis::stop_words::StopWords;
use crate::analysis::token_filter::{HindiStemmer, HyphenSplitFilter, SuffixTable};
use crate::error::{Result, ShabdError};

/// Options controlling which stages run and with which resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShabdConfig {
    /// Split hyphenated tokens before stemming.
    pub split_hyphens: bool,
    /// Remove stop words after stemming.
    pub remove_stop_words: bool,
    /// Stop word list to use instead of the built-in one.
    pub stopwords_path: Option<PathBuf>,
    /// Suffix table to use instead of the built-in one.
    pub suffix_table: Option<SuffixTable>,
    /// Characters removed during normalization.
    pub punctuation: Option<Vec<char>>,
    /// Sentence terminator.
    pub sentence_terminator: Option<char>,
    /// Characters hyphenated tokens are split on.
    pub hyphens: Option<Vec<char>>,
}

impl ShabdConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ShabdError::ResourceNotFound(path.to_path_buf()),
            _ => ShabdError::Io(e),
        })?;
        let config = Self::from_json(&content)
            .map_err(|e| ShabdError::config(format!("{}: {e}", path.display())))?;

        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ShabdError::config(e.to_string()))
    }

    /// Build an analyzer from these options.
    ///
    /// Stop words are not attached; see [`ShabdConfig::stop_words`].
    pub fn build_analyzer(&self) -> Result<HindiAnalyzer> {
        let mut analyzer = HindiAnalyzer::new().split_hyphens(self.split_hyphens);

        if let Some(punctuation) = &self.punctuation {
            let normalizer = HindiNormalizeCharFilter::with_punctuation(punctuation)?;
            analyzer = analyzer.with_normalizer(Arc::new(normalizer));
        }
        if let Some(terminator) = self.sentence_terminator {
            let segmenter = DandaSegmenter::with_terminator(terminator)?;
            analyzer = analyzer.with_segmenter(Arc::new(segmenter));
        }
        if let Some(hyphens) = &self.hyphens {
            if hyphens.is_empty() {
                return Err(ShabdError::config("hyphens must not be empty"));
            }
            analyzer = analyzer.with_hyphen_filter(HyphenSplitFilter::with_hyphens(hyphens));
        }
        if let Some(table) = &self.suffix_table {
            let stemmer = HindiStemmer::with_table(table.clone());
            analyzer = analyzer.with_stemmer(Arc::new(stemmer));
        }

        Ok(analyzer)
    }

    /// The stop word set to filter with, or `None` when filtering is off.
    ///
    /// Uses the file at `stopwords_path` when set, otherwise the built-in
    /// Hindi list.
    pub fn stop_words(&self) -> Result<Option<StopWords>> {
        if !self.remove_stop_words {
            return Ok(None);
        }
        match &self.stopwords_path {
            Some(path) => StopWords::load(path).map(Some),
            None => Ok(Some(StopWords::hindi())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::analysis::analyzer::Analyzer;

    #[test]
    fn test_default_config() {
        let config = ShabdConfig::default();
        assert!(!config.split_hyphens);
        assert!(config.stop_words().unwrap().is_none());

        let analyzer = config.build_analyzer().unwrap();
        assert!(!analyzer.splits_hyphens());
        assert_eq!(analyzer.stem_word("लड़कियाँ"), "लड़क");
    }

    #[test]
    fn test_partial_json() {
        let config = ShabdConfig::from_json(r#"{"split_hyphens": true}"#).unwrap();
        assert!(config.split_hyphens);
        assert!(!config.remove_stop_words);
        assert_eq!(config.suffix_table, None);
    }

    #[test]
    fn test_custom_components() {
        let config = ShabdConfig::from_json(
            r#"{
                "split_hyphens": true,
                "punctuation": ["!"],
                "sentence_terminator": "?",
                "hyphens": ["/"],
                "suffix_table": {"1": ["ा"]}
            }"#,
        )
        .unwrap();
        let analyzer = config.build_analyzer().unwrap();

        let tokens: Vec<String> = analyzer
            .analyze("राजा/रानी! आए? 12")
            .unwrap()
            .map(|t| t.text)
            .collect();
        assert_eq!(tokens, vec!["राज", "रानी", "आए?"]);
        assert_eq!(analyzer.segment("क? ख"), vec!["क?", "ख"]);
    }

    #[test]
    fn test_invalid_suffix_table() {
        let result = ShabdConfig::from_json(r#"{"suffix_table": {"2": ["ा"]}}"#);
        assert!(matches!(result, Err(ShabdError::Config(_))));
    }

    #[test]
    fn test_invalid_components() {
        let config = ShabdConfig {
            sentence_terminator: Some(' '),
            ..Default::default()
        };
        assert!(config.build_analyzer().is_err());

        let config = ShabdConfig {
            hyphens: Some(Vec::new()),
            ..Default::default()
        };
        assert!(matches!(config.build_analyzer(), Err(ShabdError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let stopwords = dir.path().join("stopwords.txt");
        fs::write(&stopwords, "यह\nहै\n").unwrap();

        let path = dir.path().join("shabd.json");
        let config = ShabdConfig {
            remove_stop_words: true,
            stopwords_path: Some(stopwords),
            ..Default::default()
        };
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = ShabdConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);

        let stop_words = loaded.stop_words().unwrap().unwrap();
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("है"));
    }

    #[test]
    fn test_built_in_stop_words() {
        let config = ShabdConfig {
            remove_stop_words: true,
            ..Default::default()
        };
        let stop_words = config.stop_words().unwrap().unwrap();
        assert!(stop_words.contains("है"));
    }

    #[test]
    fn test_missing_files() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            ShabdConfig::from_file(&missing),
            Err(ShabdError::ResourceNotFound(path)) if path == missing
        ));

        let config = ShabdConfig {
            remove_stop_words: true,
            stopwords_path: Some(dir.path().join("missing.txt")),
            ..Default::default()
        };
        assert!(matches!(
            config.stop_words(),
            Err(ShabdError::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            ShabdConfig::from_file(&path),
            Err(ShabdError::Config(_))
        ));
    }
}
