//! Document loading port and the filesystem-backed default adapter.

use std::path::Path;

use async_trait::async_trait;

use gqlmod_shared::{GqlModError, Result};

/// Source of document bodies, keyed by path identity.
///
/// Batch loads are issued concurrently and joined all-or-nothing, so
/// implementations must tolerate overlapping in-flight calls.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Load the full text body at `path`.
    async fn load(&self, path: &Path) -> Result<String>;
}

/// Default loader reading from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

#[async_trait]
impl DocumentLoader for FsLoader {
    async fn load(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GqlModError::io(path, e))
    }
}
