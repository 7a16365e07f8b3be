//! Fragment resolution for gqlmod documents.
//!
//! This crate provides:
//! - [`DocumentLoader`] / [`FsLoader`] — the loading port and its
//!   filesystem-backed default
//! - [`FragmentExtractor`] — the host-supplied reference extraction port
//! - [`FragmentResolver`] — recursive expansion of fragment references
//!   into one self-contained document body

pub mod extract;
pub mod loader;
pub mod resolve;

pub use extract::FragmentExtractor;
pub use loader::{DocumentLoader, FsLoader};
pub use resolve::FragmentResolver;
