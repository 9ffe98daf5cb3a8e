//! Shared test-generation data shapes.

pub mod models;

pub use models::*;
