//! Error types for the Shabd library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`ShabdError`] enum. Empty input is never an error: every stage degrades to
//! empty sequences and zero counts instead.
//!
//! # Examples
//!
//! ```
//! use shabd::error::{Result, ShabdError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShabdError::invalid_operation("stop words were not supplied"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Shabd operations.
#[derive(Error, Debug)]
pub enum ShabdError {
    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes were not valid UTF-8. No partial result is produced.
    #[error("Input decoding error{}: {message}", describe_origin(.origin))]
    InputDecoding {
        /// Where the bytes came from, when read from a file.
        origin: Option<PathBuf>,
        /// Decoder message, including the offset of the first invalid byte.
        message: String,
    },

    /// A stop word resource does not exist at the configured location.
    #[error("Resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// Configuration errors (malformed suffix tables, bad config files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A stage was requested that cannot run in the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

fn describe_origin(origin: &Option<PathBuf>) -> String {
    origin
        .as_ref()
        .map(|path| format!(" in {}", path.display()))
        .unwrap_or_default()
}

/// Result type alias for operations that may fail with ShabdError.
pub type Result<T> = std::result::Result<T, ShabdError>;

impl ShabdError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ShabdError::Config(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        ShabdError::InvalidOperation(msg.into())
    }

    /// Create a decoding error for bytes that did not come from a file.
    pub fn input_decoding<S: Into<String>>(msg: S) -> Self {
        ShabdError::InputDecoding {
            origin: None,
            message: msg.into(),
        }
    }

    /// Attach the originating path to a decoding error.
    pub fn with_origin(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ShabdError::InputDecoding { message, .. } => ShabdError::InputDecoding {
                origin: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

impl From<std::string::FromUtf8Error> for ShabdError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ShabdError::input_decoding(err.utf8_error().to_string())
    }
}
