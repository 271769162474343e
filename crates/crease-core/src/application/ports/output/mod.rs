//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crease-adapters` crate provides implementations.

use crate::domain::AppState;
use crate::error::CreaseResult;

/// Port for loading and saving the application document.
///
/// Implemented by:
/// - `crease_adapters::store::JsonFileStore` (production)
/// - `crease_adapters::store::InMemoryStateStore` (testing)
///
/// ## Contract
///
/// - `load` after `save` returns an equal document, optional fields and
///   ordering of matches and squad members included
/// - A store that has never been written loads as `AppState::default()`
/// - Last write wins; there is a single writer
pub trait StateStore: Send + Sync {
    /// Read the whole document.
    fn load(&self) -> CreaseResult<AppState>;

    /// Replace the whole document.
    fn save(&self, state: &AppState) -> CreaseResult<()>;
}
