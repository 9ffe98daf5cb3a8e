//! Workspace manifest handling.
//!
//! Locates the extension manifest in the workspace and extracts the metadata
//! fields the generator cares about.

pub mod discovery;
pub mod metadata;

pub use discovery::*;
pub use metadata::*;
