//! Plugin configuration and the include/exclude path filter.
//!
//! The configuration is constructed once by the host build tool (inline or
//! from a TOML table) and shared read-only by every per-file transform
//! invocation for the lifetime of a build.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GqlModError, Result};

// ---------------------------------------------------------------------------
// PluginConfig
// ---------------------------------------------------------------------------

/// Static plugin configuration, fixed after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Path to the schema file. Absent means no schema handling at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Restrict schema compilation to what the profile documents reach.
    #[serde(default)]
    pub optimize: bool,

    /// Path patterns expanded into the profile-document corpus.
    /// Meaningful only when `optimize` is true.
    #[serde(default)]
    pub profile_documents: Vec<String>,

    /// Filter include patterns. Empty claims every candidate path.
    #[serde(default)]
    pub include: Vec<String>,

    /// Filter exclude patterns. An exclude match always wins.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl PluginConfig {
    /// Parse a config from a TOML table, as embedded in a host build file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| GqlModError::config(format!("failed to parse plugin config: {e}")))
    }
}

// ---------------------------------------------------------------------------
// PathFilter
// ---------------------------------------------------------------------------

/// Compiled include/exclude rules deciding which paths the transform claims.
///
/// Patterns are compiled once at construction; matching is cheap and
/// allocation-free per call.
#[derive(Debug)]
pub struct PathFilter {
    include: Vec<glob::Pattern>,
    exclude: Vec<glob::Pattern>,
}

impl PathFilter {
    /// Compile filter rules from the configured pattern lists.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: compile_patterns(include)?,
            exclude: compile_patterns(exclude)?,
        })
    }

    /// Whether `path` passes the filter.
    ///
    /// An exclude match rejects unconditionally; otherwise the path must
    /// match some include pattern, or the include list must be empty.
    pub fn matches(&self, path: &Path) -> bool {
        if self.exclude.iter().any(|p| p.matches_path(path)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|p| p.matches_path(path))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|raw| {
            glob::Pattern::new(raw)
                .map_err(|e| GqlModError::config(format!("invalid filter pattern {raw:?}: {e}")))
        })
        .collect()
}
