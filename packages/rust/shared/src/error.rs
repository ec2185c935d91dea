//! Error types for cocktaildex.
//!
//! Library crates use [`CocktaildexError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all cocktaildex operations.
#[derive(Debug, thiserror::Error)]
pub enum CocktaildexError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error while fetching from the drinks source.
    #[error("network error: {0}")]
    Network(String),

    /// Upstream payload could not be decoded.
    #[error("payload error: {message}")]
    Payload { message: String },

    /// A run produced zero entries; the existing catalog is left untouched.
    #[error("no entries fetched, refusing to overwrite the catalog")]
    EmptyCatalog,

    /// Artifact serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CocktaildexError>;

impl CocktaildexError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a payload error from any displayable message.
    pub fn payload(msg: impl Into<String>) -> Self {
        Self::Payload {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
