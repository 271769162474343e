//! Infrastructure adapters for Crease.
//!
//! This crate implements the ports defined in `crease-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod store;

// Re-export commonly used adapters
pub use store::{InMemoryStateStore, JsonFileStore};
