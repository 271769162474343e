//! Application layer for Crease.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScoringService, StatsService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! scoring rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    LATEST,
    MatchSetup, // DTO for opening a match
    ScoringService,
    SquadSetup,
    StatsService,
};

// Re-export port traits (for adapter implementation)
pub use ports::StateStore;

pub use error::ApplicationError;
