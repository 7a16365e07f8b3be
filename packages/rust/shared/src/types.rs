//! Core domain types for gqlmod transforms.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A loaded source document: its identity plus its text body.
///
/// The path is the unique key for deduplication and the base against which
/// relative fragment references are interpreted. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Path that uniquely identifies the document.
    pub path: PathBuf,
    /// Raw text body as loaded.
    pub body: String,
}

impl Document {
    /// Create a document from its identity and body.
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// SchemaFormat
// ---------------------------------------------------------------------------

/// Serialization format of a schema description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// Structured-data (json) serialization.
    Json,
    /// Textual interface-definition-language serialization.
    Idl,
}

impl SchemaFormat {
    /// Classify a schema body by attempting a structured-data parse.
    ///
    /// Purely syntactic: a failed parse means IDL, not an error. Schema
    /// correctness is the compiler's concern, not detection's.
    pub fn detect(source: &str) -> Self {
        if serde_json::from_str::<serde_json::Value>(source).is_ok() {
            Self::Json
        } else {
            Self::Idl
        }
    }
}
