//! Pattern expansion port and the glob-backed default adapter.

use std::path::PathBuf;

use async_trait::async_trait;

use gqlmod_shared::{GqlModError, Result};

/// Expands a path pattern to the concrete files it matches.
///
/// Zero matches is a valid empty result, not an error. Match order within
/// a pattern must be deterministic for a given filesystem state.
#[async_trait]
pub trait PatternExpander: Send + Sync {
    /// Expand `pattern` into matched paths.
    async fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// Default expander backed by filesystem glob matching.
///
/// Matches come back in the glob crate's lexicographic traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobExpander;

#[async_trait]
impl PatternExpander for GlobExpander {
    async fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let entries =
            glob::glob(pattern).map_err(|e| GqlModError::pattern(pattern, e.to_string()))?;

        entries
            .map(|entry| entry.map_err(|e| GqlModError::pattern(pattern, e.to_string())))
            .collect()
    }
}
