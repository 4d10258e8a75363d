//! Integration tests for file-backed inputs, stop word resources and
//! configuration files.

use std::fs;
use std::io::Write;
use std::sync::Arc;

use tempfile::{NamedTempFile, TempDir};

use shabd::analysis::stop_words::StopWords;
use shabd::batch;
use shabd::config::ShabdConfig;
use shabd::document::{Document, Stage};
use shabd::error::{Result, ShabdError};

#[test]
fn test_document_from_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "सन 1947 में भारत स्वतंत्र हुआ। यह एक ऐतिहासिक दिन था।")?;

    let mut doc = Document::from_path(file.path())?;
    assert_eq!(doc.stage(), Stage::Normalized);
    assert!(!doc.text().contains("1947"));

    doc.tokenize()?;
    assert_eq!(doc.sentence_count(), 2);
    assert_eq!(doc.tokens_count(), 10);

    Ok(())
}

#[test]
fn test_invalid_utf8_is_fatal() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(&[0xe0, 0xa4, 0xaf, 0xff])?;

    match Document::from_path(file.path()) {
        Err(ShabdError::InputDecoding { origin, .. }) => {
            assert_eq!(origin.as_deref(), Some(file.path()));
        }
        other => panic!("expected a decoding error, got {other:?}"),
    }

    Ok(())
}

#[test]
fn test_reload_keeps_document_on_failure() -> Result<()> {
    let dir = TempDir::new()?;
    let bad = dir.path().join("bad.txt");
    fs::write(&bad, [0xff])?;

    let mut doc = Document::new("राम घर गया।");
    doc.tokenize()?;
    assert!(doc.load_path(&bad).is_err());
    assert_eq!(doc.tokens_count(), 3);

    Ok(())
}

#[test]
fn test_stop_word_file() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("stopwords.txt");
    fs::write(&path, "  है  \nयह\n\nहै\n")?;

    let stop_words = StopWords::load(&path)?;
    assert_eq!(stop_words.len(), 2);

    let mut doc = Document::new("यह किताब अच्छी है");
    let filtered = doc.remove_stop_words(&stop_words)?;
    assert_eq!(filtered, ["किताब", "अच्छ"]);

    Ok(())
}

#[test]
fn test_missing_stop_word_file_only_affects_filtering() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("missing.txt");

    let config = ShabdConfig {
        remove_stop_words: true,
        stopwords_path: Some(missing.clone()),
        ..Default::default()
    };
    assert!(matches!(
        config.stop_words(),
        Err(ShabdError::ResourceNotFound(path)) if path == missing
    ));

    // earlier stages still work without the resource
    let analyzer = Arc::new(config.build_analyzer()?);
    let docs = batch::analyze_all(&["लड़कियाँ आईं"], &analyzer, None)?;
    assert_eq!(docs[0].stems(), ["लड़क", "आईं"]);

    Ok(())
}

#[test]
fn test_config_file_drives_batch() -> Result<()> {
    let dir = TempDir::new()?;
    let stopwords = dir.path().join("stopwords.txt");
    fs::write(&stopwords, "समय\n")?;

    let config_path = dir.path().join("shabd.json");
    let json = serde_json::json!({
        "split_hyphens": true,
        "remove_stop_words": true,
        "stopwords_path": stopwords,
    });
    fs::write(&config_path, json.to_string())?;

    let config = ShabdConfig::from_file(&config_path)?;
    let analyzer = Arc::new(config.build_analyzer()?);
    let stop_words = config.stop_words()?;

    let docs = batch::analyze_all(
        &["अच्छा-बुरा समय", "सुख-दुख"],
        &analyzer,
        stop_words.as_ref(),
    )?;
    assert_eq!(docs[0].filtered_tokens(), ["अच्छ", "बुर"]);
    assert_eq!(docs[1].filtered_tokens(), ["सुख", "दुख"]);

    Ok(())
}
