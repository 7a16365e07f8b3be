//! Compilation dispatch for gqlmod.
//!
//! This crate is the top of the pipeline and the only piece visible to the
//! host build tool. It provides:
//! - [`ModuleCompiler`] — the external compiler port (five variants)
//! - [`GraphQlTransform`] — per-file classification and dispatch over the
//!   fragment resolver and profile assembler

pub mod compiler;
pub mod transform;

pub use compiler::ModuleCompiler;
pub use transform::GraphQlTransform;
