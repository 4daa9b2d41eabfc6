//! Error types for Explained operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Explained crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Explained operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error tied to a specific file or directory.
    #[error("I/O error at {path}: {source}")]
    IoWithPath {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Topic or other content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Built-in content violates a catalog invariant.
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// HTTP server failure.
    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid content error.
    pub fn invalid_content(msg: impl Into<String>) -> Self {
        Self::InvalidContent(msg.into())
    }

    /// Create a server error.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Wrap an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias using Explained's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(matches!(Error::config("x"), Error::Config(m) if m == "x"));
        assert!(matches!(Error::invalid_content("dup"), Error::InvalidContent(_)));
        assert!(matches!(Error::server("bind"), Error::Server(_)));
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("topic 'hooks'");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: topic 'hooks'");
    }

    #[test]
    fn test_io_with_path_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::io_with_path(io, "/tmp/site/index.html");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/site/index.html"));
        assert!(msg.contains("denied"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::other("boom");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
