//! Command line argument parsing for the Shabd CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Shabd - Hindi sentence segmentation, tokenization, stemming and stop word removal
#[derive(Parser, Debug, Clone)]
#[command(name = "shabd")]
#[command(about = "Hindi text preprocessing: sentences, tokens, stems and stop words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ShabdArgs {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE", env = "SHABD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ShabdArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the sentences of each input, one per line
    Sentences(InputArgs),

    /// Print the tokens of each input, one per line
    Tokens(TokenArgs),

    /// Print the stem of every token, one per line
    Stems(TokenArgs),

    /// Print the stems left after stop word removal, one per line
    Filter(FilterArgs),

    /// Show sentence, token, char and stem counts
    Stats(TokenArgs),
}

/// Input files shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// UTF-8 text files to read; `-` reads standard input
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}

/// Arguments for commands that tokenize
#[derive(Args, Debug, Clone)]
pub struct TokenArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Split hyphenated tokens into their parts
    #[arg(long)]
    pub split_hyphens: bool,
}

/// Arguments for stop word filtering
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[command(flatten)]
    pub token: TokenArgs,

    /// Stop word list, one word per line (default: built-in Hindi list)
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One item per line
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_command() {
        let args = ShabdArgs::try_parse_from(["shabd", "sentences", "a.txt", "b.txt"]).unwrap();

        if let Command::Sentences(input_args) = &args.command {
            assert_eq!(
                input_args.inputs,
                vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
            );
        } else {
            panic!("Expected Sentences command");
        }
    }

    #[test]
    fn test_filter_command() {
        let args = ShabdArgs::try_parse_from([
            "shabd",
            "filter",
            "-",
            "--stopwords",
            "stop.txt",
            "--split-hyphens",
        ])
        .unwrap();

        if let Command::Filter(filter_args) = &args.command {
            assert_eq!(filter_args.stopwords, Some(PathBuf::from("stop.txt")));
            assert!(filter_args.token.split_hyphens);
            assert_eq!(filter_args.token.input.inputs, vec![PathBuf::from("-")]);
        } else {
            panic!("Expected Filter command");
        }
    }

    #[test]
    fn test_input_is_required() {
        assert!(ShabdArgs::try_parse_from(["shabd", "tokens"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = ShabdArgs::try_parse_from(["shabd", "stats", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = ShabdArgs::try_parse_from(["shabd", "-v", "stats", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = ShabdArgs::try_parse_from(["shabd", "-vv", "stats", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = ShabdArgs::try_parse_from(["shabd", "-vv", "--quiet", "stats", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            ShabdArgs::try_parse_from(["shabd", "stems", "a.txt", "--format", "json", "--pretty"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
