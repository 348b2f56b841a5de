//! Error handling for svgkit
//!
//! Provides the error type shared by every svgkit crate:
//! - Absent values (extremal points of an empty point set, missing data)
//! - I/O failures while persisting a document or a config file
//! - Configuration errors (parsing and validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Unified svgkit error type
#[derive(Error, Debug)]
pub enum SvgError {
    /// A value that may be absent was accessed while absent
    #[error("Absent value: {what}")]
    AbsentValue {
        /// What was expected to be present.
        what: String,
    },

    /// The target resource could not be opened or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SvgError {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        SvgError::Other(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        SvgError::Config(msg.into())
    }

    /// Create an absent-value error describing what was missing
    pub fn absent(what: impl Into<String>) -> Self {
        SvgError::AbsentValue { what: what.into() }
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SvgError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, SvgError::Io { .. })
    }

    /// Check if this is an absent-value error
    pub fn is_absent_value(&self) -> bool {
        matches!(self, SvgError::AbsentValue { .. })
    }
}

/// Result type using SvgError
pub type Result<T> = std::result::Result<T, SvgError>;
