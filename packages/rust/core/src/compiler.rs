//! External compiler port.
//!
//! The capability that turns self-contained GraphQL text into emitted
//! module source. gqlmod only dispatches; what "compiled module source"
//! looks like inside is the implementation's contract.

use async_trait::async_trait;

use gqlmod_shared::{Document, Result};

/// The five compiler capabilities gqlmod dispatches to.
///
/// Implementations wrap the host's GraphQL compiler library. Each method
/// fails with [`GqlModError::Compile`] on malformed input and may perform
/// its own I/O. The optimized variants restrict the compiled schema's type
/// surface to what `documents` actually reference; the exact restriction
/// policy is the implementation's contract, consumed as-is.
///
/// [`GqlModError::Compile`]: gqlmod_shared::GqlModError::Compile
#[async_trait]
pub trait ModuleCompiler: Send + Sync {
    /// Compile a self-contained document into module source.
    async fn compile_document(&self, document: &str) -> Result<String>;

    /// Compile a json-serialized schema.
    async fn compile_schema_json(&self, schema: &str) -> Result<String>;

    /// Compile an IDL-serialized schema.
    async fn compile_schema_idl(&self, schema: &str) -> Result<String>;

    /// Compile a json-serialized schema, restricted to what `documents`
    /// reach.
    async fn compile_schema_json_optimized(
        &self,
        schema: &str,
        documents: &[Document],
    ) -> Result<String>;

    /// Compile an IDL-serialized schema, restricted to what `documents`
    /// reach.
    async fn compile_schema_idl_optimized(
        &self,
        schema: &str,
        documents: &[Document],
    ) -> Result<String>;
}
