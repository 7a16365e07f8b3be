//! Fragment reference extraction port.

use std::path::{Path, PathBuf};

/// Extracts the fragment identities a document body references.
///
/// Supplied by the host's GraphQL tooling; gqlmod never parses document
/// grammar itself. The contract is pure and synchronous: given a body and
/// the path it was loaded from, return the referenced fragment paths in
/// declaration order. No dedup is expected from implementations, and
/// relative references must already be interpreted against the document's
/// location.
pub trait FragmentExtractor: Send + Sync {
    /// Fragment paths referenced by `body`, which was loaded from `path`.
    fn fragment_references(&self, path: &Path, body: &str) -> Vec<PathBuf>;
}
