//! Per-file transform dispatch: classify, resolve, compile.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use gqlmod_profiles::{GlobExpander, PatternExpander, ProfileAssembler};
use gqlmod_resolver::{DocumentLoader, FragmentExtractor, FragmentResolver, FsLoader};
use gqlmod_shared::{GqlModError, PathFilter, PluginConfig, Result, SchemaFormat};

use crate::compiler::ModuleCompiler;

/// The transform entry point handed to the host build tool.
///
/// Holds the immutable plugin configuration plus the resolver, profile
/// assembler, and compiler it dispatches to. One instance serves every
/// candidate file in a build; each [`transform`](Self::transform) call is
/// independent and shares no mutable state with the others.
pub struct GraphQlTransform {
    config: PluginConfig,
    filter: PathFilter,
    /// Absolutized once at construction; `None` disables schema handling.
    schema_path: Option<PathBuf>,
    resolver: Arc<FragmentResolver>,
    profiles: ProfileAssembler,
    compiler: Arc<dyn ModuleCompiler>,
}

impl std::fmt::Debug for GraphQlTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQlTransform")
            .field("config", &self.config)
            .field("filter", &self.filter)
            .field("schema_path", &self.schema_path)
            .finish_non_exhaustive()
    }
}

impl GraphQlTransform {
    /// Build a transform with explicit ports.
    ///
    /// Compiles the include/exclude filter and absolutizes the configured
    /// schema path up front, so per-file classification never fails on
    /// configuration problems.
    pub fn new(
        config: PluginConfig,
        loader: Arc<dyn DocumentLoader>,
        extractor: Arc<dyn FragmentExtractor>,
        expander: Arc<dyn PatternExpander>,
        compiler: Arc<dyn ModuleCompiler>,
    ) -> Result<Self> {
        let filter = PathFilter::new(&config.include, &config.exclude)?;
        let schema_path = config
            .schema
            .as_deref()
            .map(|schema| absolute(Path::new(schema)))
            .transpose()?;

        let resolver = Arc::new(FragmentResolver::new(loader, extractor));
        let profiles = ProfileAssembler::new(expander, Arc::clone(&resolver));

        Ok(Self {
            config,
            filter,
            schema_path,
            resolver,
            profiles,
            compiler,
        })
    }

    /// Build a transform with the default filesystem loader and glob
    /// expander, leaving only the host-specific ports to supply.
    pub fn with_default_adapters(
        config: PluginConfig,
        extractor: Arc<dyn FragmentExtractor>,
        compiler: Arc<dyn ModuleCompiler>,
    ) -> Result<Self> {
        Self::new(
            config,
            Arc::new(FsLoader),
            extractor,
            Arc::new(GlobExpander),
            compiler,
        )
    }

    /// Transform one candidate file.
    ///
    /// Returns `Ok(None)` when the file is not one this transform claims
    /// (filtered out, or neither the schema nor a `.graphql` document);
    /// the host must hand such files to the next transform in its chain.
    #[instrument(skip_all, fields(id = %id.display()))]
    pub async fn transform(&self, source: &str, id: &Path) -> Result<Option<String>> {
        if !self.filter.matches(id) {
            return Ok(None);
        }

        if self.is_schema(id)? {
            return self.compile_schema(source).await.map(Some);
        }

        if has_graphql_extension(id) {
            let resolved = self.resolver.resolve(source, id).await?;
            let compiled = self.compiler.compile_document(&resolved).await?;
            info!("document compiled");
            return Ok(Some(compiled));
        }

        debug!("no document marker, passing through");
        Ok(None)
    }

    fn is_schema(&self, id: &Path) -> Result<bool> {
        match &self.schema_path {
            Some(schema_path) => Ok(&absolute(id)? == schema_path),
            None => Ok(false),
        }
    }

    async fn compile_schema(&self, source: &str) -> Result<String> {
        let format = SchemaFormat::detect(source);
        debug!(?format, optimize = self.config.optimize, "compiling schema");

        if !self.config.optimize {
            let compiled = match format {
                SchemaFormat::Json => self.compiler.compile_schema_json(source).await?,
                SchemaFormat::Idl => self.compiler.compile_schema_idl(source).await?,
            };
            info!(?format, "schema compiled");
            return Ok(compiled);
        }

        let documents = self.profiles.assemble(&self.config.profile_documents).await?;
        let compiled = match format {
            SchemaFormat::Json => {
                self.compiler
                    .compile_schema_json_optimized(source, &documents)
                    .await?
            }
            SchemaFormat::Idl => {
                self.compiler
                    .compile_schema_idl_optimized(source, &documents)
                    .await?
            }
        };
        info!(?format, profiles = documents.len(), "optimized schema compiled");
        Ok(compiled)
    }
}

/// Case-insensitive check for the `.graphql` document marker.
fn has_graphql_extension(id: &Path) -> bool {
    id.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("graphql"))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| GqlModError::io(path, e))
}
