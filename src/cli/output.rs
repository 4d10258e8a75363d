//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ShabdArgs};
use crate::document::{Document, Stage};
use crate::error::Result;

/// The items one command produced for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsReport {
    pub input: String,
    pub items: Vec<String>,
}

/// Counts for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub input: String,
    pub sentences: usize,
    pub tokens: usize,
    pub chars: usize,
    pub stems: usize,
    pub distinct_stems: usize,
    pub stage: Stage,
}

impl StatsReport {
    /// Collect the counts of a processed document.
    pub fn from_document(input: impl Into<String>, doc: &Document) -> Self {
        let mut distinct: Vec<&String> = doc.stems().iter().collect();
        distinct.sort_unstable();
        distinct.dedup();

        StatsReport {
            input: input.into(),
            sentences: doc.sentence_count(),
            tokens: doc.tokens_count(),
            chars: doc.len_text(),
            stems: doc.stems().len(),
            distinct_stems: distinct.len(),
            stage: doc.stage(),
        }
    }
}

/// Everything a command produced, one report per input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Items(Vec<ItemsReport>),
    Stats(Vec<StatsReport>),
}

/// Write a command's output in the format selected on the command line.
pub fn output_result<W: Write>(output: &CommandOutput, args: &ShabdArgs, out: &mut W) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(output, out),
        OutputFormat::Json => output_json(output, args, out),
    }
}

/// Output in human-readable format: one item per line.
///
/// With several inputs every report is preceded by a `==> input <==` header.
fn output_human<W: Write>(output: &CommandOutput, out: &mut W) -> Result<()> {
    match output {
        CommandOutput::Items(reports) => {
            let headers = reports.len() > 1;
            for (i, report) in reports.iter().enumerate() {
                write_header(out, &report.input, i, headers)?;
                for item in &report.items {
                    writeln!(out, "{item}")?;
                }
            }
        }
        CommandOutput::Stats(reports) => {
            let headers = reports.len() > 1;
            for (i, report) in reports.iter().enumerate() {
                write_header(out, &report.input, i, headers)?;
                writeln!(out, "Sentences: {}", report.sentences)?;
                writeln!(out, "Tokens: {}", report.tokens)?;
                writeln!(out, "Characters: {}", report.chars)?;
                writeln!(out, "Stems: {}", report.stems)?;
                writeln!(out, "Distinct stems: {}", report.distinct_stems)?;
            }
        }
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, input: &str, index: usize, enabled: bool) -> Result<()> {
    if enabled {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "==> {input} <==")?;
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write>(output: &CommandOutput, args: &ShabdArgs, out: &mut W) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}
