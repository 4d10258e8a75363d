//! Command implementations for the Shabd CLI.

use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;

use crate::analysis::stop_words::StopWords;
use crate::batch;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ShabdConfig;
use crate::document::Document;
use crate::error::{Result, ShabdError};

const STDIN: &str = "-";

/// Execute a CLI command and print its output to standard output.
pub fn execute_command(args: ShabdArgs) -> Result<()> {
    let output = run_command(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    output_result(&output, &args, &mut out)
}

/// Execute a CLI command and return its output.
pub fn run_command(args: &ShabdArgs) -> Result<CommandOutput> {
    let config = load_config(args)?;
    match &args.command {
        Command::Sentences(input_args) => show_sentences(input_args, config),
        Command::Tokens(token_args) => show_tokens(token_args, config),
        Command::Stems(token_args) => show_stems(token_args, config),
        Command::Filter(filter_args) => show_filtered(filter_args, config),
        Command::Stats(token_args) => show_stats(token_args, config),
    }
}

fn load_config(args: &ShabdArgs) -> Result<ShabdConfig> {
    match &args.config {
        Some(path) => ShabdConfig::from_file(path),
        None => Ok(ShabdConfig::default()),
    }
}

/// Print the sentences of each input.
fn show_sentences(args: &InputArgs, config: ShabdConfig) -> Result<CommandOutput> {
    let reports = process_inputs(&args.inputs, &config, None)?
        .into_iter()
        .map(|(input, doc)| ItemsReport {
            input,
            items: doc.sentences().to_vec(),
        })
        .collect();
    Ok(CommandOutput::Items(reports))
}

/// Print the tokens of each input.
fn show_tokens(args: &TokenArgs, mut config: ShabdConfig) -> Result<CommandOutput> {
    config.split_hyphens |= args.split_hyphens;
    let reports = process_inputs(&args.input.inputs, &config, None)?
        .into_iter()
        .map(|(input, doc)| ItemsReport {
            input,
            items: doc.tokens().to_vec(),
        })
        .collect();
    Ok(CommandOutput::Items(reports))
}

/// Print the stems of each input.
fn show_stems(args: &TokenArgs, mut config: ShabdConfig) -> Result<CommandOutput> {
    config.split_hyphens |= args.split_hyphens;
    let reports = process_inputs(&args.input.inputs, &config, None)?
        .into_iter()
        .map(|(input, doc)| ItemsReport {
            input,
            items: doc.stems().to_vec(),
        })
        .collect();
    Ok(CommandOutput::Items(reports))
}

/// Print the stems left after stop word removal.
fn show_filtered(args: &FilterArgs, mut config: ShabdConfig) -> Result<CommandOutput> {
    config.split_hyphens |= args.token.split_hyphens;
    config.remove_stop_words = true;
    if let Some(path) = &args.stopwords {
        config.stopwords_path = Some(path.clone());
    }
    let stop_words = config.stop_words()?;
    let reports = process_inputs(&args.token.input.inputs, &config, stop_words.as_ref())?
        .into_iter()
        .map(|(input, doc)| ItemsReport {
            input,
            items: doc.filtered_tokens().to_vec(),
        })
        .collect();
    Ok(CommandOutput::Items(reports))
}

/// Show counts for each input.
fn show_stats(args: &TokenArgs, mut config: ShabdConfig) -> Result<CommandOutput> {
    config.split_hyphens |= args.split_hyphens;
    let reports = process_inputs(&args.input.inputs, &config, None)?
        .into_iter()
        .map(|(input, doc)| StatsReport::from_document(input, &doc))
        .collect();
    Ok(CommandOutput::Stats(reports))
}

/// Read every input and run the configured pipeline on it.
///
/// Stop words are only removed when a set is given; only `filter` loads one.
fn process_inputs(
    inputs: &[PathBuf],
    config: &ShabdConfig,
    stop_words: Option<&StopWords>,
) -> Result<Vec<(String, Document)>> {
    let analyzer = Arc::new(config.build_analyzer()?);

    let mut labels = Vec::with_capacity(inputs.len());
    let mut texts = Vec::with_capacity(inputs.len());
    for input in inputs {
        labels.push(input_label(input));
        texts.push(read_input(input)?);
    }
    info!("processing {} inputs", texts.len());

    let docs = batch::analyze_all(&texts, &analyzer, stop_words)?;
    Ok(labels.into_iter().zip(docs).collect())
}

fn input_label(path: &Path) -> String {
    if path == Path::new(STDIN) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read one input as UTF-8; `-` reads standard input.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN) {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(String::from_utf8(bytes)?);
    }

    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ShabdError::ResourceNotFound(path.to_path_buf()),
        _ => ShabdError::Io(e),
    })?;
    String::from_utf8(bytes).map_err(|e| ShabdError::from(e).with_origin(path))
}
