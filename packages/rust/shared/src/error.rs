//! Error types for gqlmod.
//!
//! Library crates use [`GqlModError`] via `thiserror`. Host build tools are
//! expected to surface these as the build failure for the file whose
//! transform failed; nothing is retried or recovered locally.

use std::path::PathBuf;

/// Top-level error type for all gqlmod operations.
#[derive(Debug, thiserror::Error)]
pub enum GqlModError {
    /// Plugin configuration error (bad filter pattern, unusable schema path).
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error while loading a document or fragment.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A profile-document path pattern failed to expand.
    #[error("pattern error in {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },

    /// The external compiler rejected a schema or document body.
    #[error("compile error: {message}")]
    Compile { message: String },

    /// A fragment re-entered its own expansion chain.
    #[error("circular fragment reference at {path:?}")]
    CircularReference { path: PathBuf },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GqlModError>;

impl GqlModError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with the path that failed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a pattern error for a failed expansion.
    pub fn pattern(pattern: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: msg.into(),
        }
    }

    /// Create a compile error from any displayable message.
    pub fn compile(msg: impl Into<String>) -> Self {
        Self::Compile {
            message: msg.into(),
        }
    }
}
