//! Application layer errors.
//!
//! These errors represent failures in orchestration, not scoring rules.
//! Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Store access failed (lock poisoned, etc.).
    #[error("State store is unavailable")]
    StoreLockError,

    /// The backing storage could not be read or written.
    #[error("Storage error at {location}: {reason}")]
    Storage { location: String, reason: String },

    /// The persisted document could not be encoded or decoded.
    #[error("Could not (de)serialize application state: {reason}")]
    Serialization { reason: String },

    /// A stored record violates a scoring invariant.
    #[error("Stored state is corrupt: {reason}")]
    CorruptState { reason: String },

    #[error("No match found for '{key}'")]
    MatchNotFound { key: String },

    #[error("'{key}' matches more than one match")]
    AmbiguousMatch { key: String, candidates: Vec<String> },

    #[error("No player found for '{key}'")]
    PlayerNotFound { key: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreLockError => vec![
                "The state store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Storage { location, .. } => vec![
                format!("Failed to access: {location}"),
                "Check that the directory exists and is writable".into(),
                "Point elsewhere with --data or CREASE_DATA".into(),
            ],
            Self::Serialization { .. } | Self::CorruptState { .. } => vec![
                "The data file is not a valid crease document".into(),
                "Restore a backup or move the file aside to start fresh".into(),
            ],
            Self::MatchNotFound { .. } => vec![
                "Try: crease list to see recorded matches".into(),
                "Use `latest` for the most recent match".into(),
            ],
            Self::AmbiguousMatch { candidates, .. } => {
                let mut hints = vec!["Use a longer id prefix. Candidates:".to_owned()];
                hints.extend(candidates.iter().map(|c| format!("  • {c}")));
                hints
            }
            Self::PlayerNotFound { .. } => vec![
                "Try: crease players to list the roster".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the command arguments".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MatchNotFound { .. } | Self::PlayerNotFound { .. } => ErrorCategory::NotFound,
            Self::AmbiguousMatch { .. } | Self::ValidationFailed(_) => ErrorCategory::Validation,
            Self::StoreLockError
            | Self::Storage { .. }
            | Self::Serialization { .. }
            | Self::CorruptState { .. } => ErrorCategory::Internal,
        }
    }
}
