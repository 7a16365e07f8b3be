//! Profile-document assembly for optimized schema compilation.
//!
//! Expands the configured path patterns, loads every matched file, and runs
//! each through the fragment resolver so the resulting corpus is
//! self-contained. The corpus determines which parts of a schema the
//! optimized compiler variants keep.

mod expand;

use std::path::PathBuf;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, instrument};

use gqlmod_resolver::FragmentResolver;
use gqlmod_shared::{Document, Result};

pub use expand::{GlobExpander, PatternExpander};

/// Assembles the self-contained profile documents used to scope schema
/// optimization.
pub struct ProfileAssembler {
    expander: Arc<dyn PatternExpander>,
    resolver: Arc<FragmentResolver>,
}

impl ProfileAssembler {
    /// Create an assembler over the given expander port and resolver.
    pub fn new(expander: Arc<dyn PatternExpander>, resolver: Arc<FragmentResolver>) -> Self {
        Self { expander, resolver }
    }

    /// Expand `patterns` and resolve every matched file.
    ///
    /// Result order is pattern order, then match order within a pattern.
    /// Expansions run concurrently, as do the per-file load-and-resolve
    /// steps; any single failure aborts the whole assembly with no partial
    /// result.
    #[instrument(skip_all, fields(patterns = patterns.len()))]
    pub async fn assemble(&self, patterns: &[String]) -> Result<Vec<Document>> {
        let expansions =
            try_join_all(patterns.iter().map(|pattern| self.expander.expand(pattern))).await?;
        let files: Vec<PathBuf> = expansions.into_iter().flatten().collect();

        debug!(files = files.len(), "profile patterns expanded");

        let documents =
            try_join_all(files.iter().map(|path| self.resolver.resolve_file(path))).await?;
        Ok(documents)
    }
}
