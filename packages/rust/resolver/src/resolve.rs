//! Recursive fragment resolution: expand, flatten, dedup, concatenate.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, try_join_all};
use tracing::{debug, instrument};

use gqlmod_shared::{Document, GqlModError, Result};

use crate::extract::FragmentExtractor;
use crate::loader::DocumentLoader;

/// Resolves a document into a self-contained body by pulling in every
/// transitively referenced fragment exactly once.
pub struct FragmentResolver {
    loader: Arc<dyn DocumentLoader>,
    extractor: Arc<dyn FragmentExtractor>,
}

impl FragmentResolver {
    /// Create a resolver over the given loader and extractor ports.
    pub fn new(loader: Arc<dyn DocumentLoader>, extractor: Arc<dyn FragmentExtractor>) -> Self {
        Self { loader, extractor }
    }

    /// Resolve `body` (loaded from `path`) into a self-contained body.
    ///
    /// Surviving fragments follow the original body in first-discovered
    /// order: each directly referenced fragment precedes the fragments it
    /// pulls in, and a fragment reachable through two ancestors appears
    /// once. A body with no references is returned unchanged.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn resolve(&self, body: &str, path: &Path) -> Result<String> {
        let chain = vec![path.to_path_buf()];
        let fragments = self.collect(body, path, &chain).await?;
        if fragments.is_empty() {
            return Ok(body.to_string());
        }

        // Dedup by identity, keeping the first occurrence. This is the one
        // self-containment guarantee the compiler variants require.
        let mut seen: HashSet<&Path> = HashSet::new();
        let mut bodies: Vec<&str> = Vec::new();
        for fragment in &fragments {
            if seen.insert(fragment.path.as_path()) {
                bodies.push(&fragment.body);
            }
        }

        debug!(
            discovered = fragments.len(),
            unique = bodies.len(),
            "fragments resolved"
        );

        let mut resolved = body.to_string();
        resolved.push_str(&bodies.join("\n"));
        Ok(resolved)
    }

    /// Load `path` and resolve it into a self-contained document.
    pub async fn resolve_file(&self, path: &Path) -> Result<Document> {
        let body = self.loader.load(path).await?;
        let resolved = self.resolve(&body, path).await?;
        Ok(Document::new(path, resolved))
    }

    /// Recursively source every fragment `body` references, pre-order.
    ///
    /// `chain` is the identity path from the root document down to `body`;
    /// a loaded fragment already on the chain is a genuine cycle and fails
    /// the resolution rather than recursing unboundedly. All loads of a
    /// reference batch are issued concurrently and joined fail-fast.
    fn collect<'a>(
        &'a self,
        body: &'a str,
        path: &'a Path,
        chain: &'a [PathBuf],
    ) -> BoxFuture<'a, Result<Vec<Document>>> {
        async move {
            let references = self.extractor.fragment_references(path, body);
            if references.is_empty() {
                return Ok(Vec::new());
            }

            let loaded = try_join_all(references.iter().map(|reference| async move {
                let body = self.loader.load(reference).await?;
                Ok::<_, GqlModError>(Document::new(reference.clone(), body))
            }))
            .await?;

            let expanded = try_join_all(loaded.into_iter().map(|fragment| async move {
                if chain.contains(&fragment.path) {
                    return Err(GqlModError::CircularReference {
                        path: fragment.path,
                    });
                }

                let mut nested_chain = chain.to_vec();
                nested_chain.push(fragment.path.clone());
                let nested = self
                    .collect(&fragment.body, &fragment.path, &nested_chain)
                    .await?;

                let mut sequence = Vec::with_capacity(nested.len() + 1);
                sequence.push(fragment);
                sequence.extend(nested);
                Ok::<_, GqlModError>(sequence)
            }))
            .await?;

            Ok(expanded.into_iter().flatten().collect())
        }
        .boxed()
    }
}
