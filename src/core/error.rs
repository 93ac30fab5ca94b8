//! Error handling for credential scrubbing
//!
//! Everything except a missing target file is fatal; these variants carry
//! enough context for the CLI to print a useful diagnostic before exiting.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scrubbing operations
#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid fallback pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ScrubError {
    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "READ_FAILED",
            Self::Write { .. } => "WRITE_FAILED",
            Self::InvalidPattern(_) => "INVALID_PATTERN",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}
