//! Error types for the simscore library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SimScoreError`] enum. Degenerate input (empty strings, texts without
//! tokens) is never an error: those cases have defined scores.
//!
//! # Examples
//!
//! ```
//! use simscore::error::{Result, SimScoreError};
//!
//! fn check_window(n: usize) -> Result<()> {
//!     if n == 0 {
//!         return Err(SimScoreError::config("ngram_size must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_window(0).is_err());
//! assert!(check_window(3).is_ok());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for simscore operations.
#[derive(Error, Debug)]
pub enum SimScoreError {
    /// I/O errors (reading option files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration (zero n-gram window, negative weights, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis errors raised by injected collaborators such as stemmers.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Errors bubbled up from user-supplied collaborators.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SimScoreError.
pub type Result<T> = std::result::Result<T, SimScoreError>;

impl SimScoreError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SimScoreError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SimScoreError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SimScoreError::Other(msg.into())
    }

    /// Whether this error was caused by invalid configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, SimScoreError::Config(_))
    }
}
