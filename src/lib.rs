//! TestGen Core - support utilities for the TestGen editor extension
//!
//! This crate provides the shared plumbing the extension's features build on:
//!
//! - `logging` - Leveled output-channel logger with composable scopes
//! - `manifest` - Workspace manifest discovery and metadata extraction
//! - `generation` - Shared test-generation data shapes
//!
//! Every diagnostic the crate produces goes through one [`Logger`] bound to
//! a single append-only [`Sink`] owned by the host. Writes are synchronous
//! and unbuffered, so the order of lines at the sink equals call order
//! across the logger and all of its scoped views.

pub mod generation;
pub mod logging;
pub mod manifest;

pub use logging::{create_logger, Level, Logger, ScopedLogger, Sink};
pub use manifest::{ManifestError, ManifestMetadata};
