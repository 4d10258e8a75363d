//! Parallel processing of independent texts.
//!
//! Every text becomes its own [`Document`], owned by exactly one rayon worker.
//! The analyzer and the stop word set are shared read-only.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::HindiAnalyzer;
use crate::analysis::stop_words::StopWords;
use crate::document::{Document, Stage};
use crate::error::Result;

/// Run the full pipeline on one document.
///
/// Tokenizes, splits hyphens when the document's analyzer is configured to,
/// stems, and removes stop words when a set is given. Returns the stage the
/// document ends in.
pub fn process(doc: &mut Document, stop_words: Option<&StopWords>) -> Result<Stage> {
    doc.tokenize()?;
    if doc.analyzer().splits_hyphens() {
        doc.split_hyphenated()?;
    }
    doc.stem()?;
    if let Some(stop_words) = stop_words {
        doc.remove_stop_words(stop_words)?;
    }
    Ok(doc.stage())
}

/// Process every text in parallel, returning the documents in input order.
pub fn analyze_all<S>(
    texts: &[S],
    analyzer: &Arc<HindiAnalyzer>,
    stop_words: Option<&StopWords>,
) -> Result<Vec<Document>>
where
    S: AsRef<str> + Sync,
{
    debug!("processing {} texts", texts.len());
    texts
        .par_iter()
        .map(|text| {
            let mut doc = Document::with_analyzer(Arc::clone(analyzer));
            doc.load_text(text.as_ref());
            process(&mut doc, stop_words)?;
            Ok(doc)
        })
        .collect()
}

/// Read and process every file in parallel, returning the documents in input
/// order. The first failure aborts the batch.
pub fn analyze_paths(
    paths: &[PathBuf],
    analyzer: &Arc<HindiAnalyzer>,
    stop_words: Option<&StopWords>,
) -> Result<Vec<Document>> {
    debug!("processing {} files", paths.len());
    paths
        .par_iter()
        .map(|path| {
            let mut doc = Document::with_analyzer(Arc::clone(analyzer));
            doc.load_path(path)?;
            process(&mut doc, stop_words)?;
            Ok(doc)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::ShabdError;

    #[test]
    fn test_process_runs_every_stage() {
        let mut doc = Document::new("यह अच्छा-बुरा है।");
        let stage = process(&mut doc, Some(&StopWords::from_words(["यह"]))).unwrap();

        assert_eq!(stage, Stage::Filtered);
        assert_eq!(doc.tokens(), ["यह", "अच्छा-बुरा", "है।"]);
        assert_eq!(doc.filtered_tokens().len(), 2);
    }

    #[test]
    fn test_process_without_stop_words_stops_at_stemmed() {
        let mut doc = Document::new("यह है।");
        assert_eq!(process(&mut doc, None).unwrap(), Stage::Stemmed);
    }

    #[test]
    fn test_analyze_all_preserves_order() {
        let analyzer = Arc::new(HindiAnalyzer::new().split_hyphens(true));
        let texts: Vec<String> = (0..32)
            .map(|i| if i % 2 == 0 { "अच्छा-बुरा".to_string() } else { "लड़कियाँ".to_string() })
            .collect();

        let docs = analyze_all(&texts, &analyzer, None).unwrap();

        assert_eq!(docs.len(), 32);
        for (i, doc) in docs.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(doc.stems(), ["अच्छ", "बुर"]);
            } else {
                assert_eq!(doc.stems(), ["लड़क"]);
            }
        }
    }

    #[test]
    fn test_analyze_all_empty_batch() {
        let analyzer = Arc::new(HindiAnalyzer::new());
        let texts: [&str; 0] = [];
        assert!(analyze_all(&texts, &analyzer, None).unwrap().is_empty());
    }

    #[test]
    fn test_analyze_paths() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "राम घर गया। सीता आई।").unwrap();
        fs::write(&second, "यह है").unwrap();

        let analyzer = Arc::new(HindiAnalyzer::new());
        let stop_words = StopWords::from_words(["है"]);
        let docs = analyze_paths(&[first, second], &analyzer, Some(&stop_words)).unwrap();

        assert_eq!(docs[0].sentence_count(), 2);
        assert_eq!(docs[1].filtered_tokens(), ["यह"]);
    }

    #[test]
    fn test_analyze_paths_reports_decoding_errors() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.txt");
        fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();

        let analyzer = Arc::new(HindiAnalyzer::new());
        let err = analyze_paths(&[bad.clone()], &analyzer, None).unwrap_err();
        match err {
            ShabdError::InputDecoding { origin, .. } => assert_eq!(origin, Some(bad)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
