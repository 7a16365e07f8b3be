//! Shared types, error model, and configuration for gqlmod.
//!
//! This crate is the foundation depended on by all other gqlmod crates.
//! It provides:
//! - [`GqlModError`] — the unified error type
//! - Domain types ([`Document`], [`SchemaFormat`])
//! - Configuration ([`PluginConfig`], [`PathFilter`])

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{PathFilter, PluginConfig};
pub use error::{GqlModError, Result};
pub use types::{Document, SchemaFormat};
