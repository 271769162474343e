// ============================================================================
// domain/error.rs - SCORING RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::Role;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (a rejected ball leaves state untouched, so callers may retry)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Scoring preconditions
    // ========================================================================
    #[error("No {role} assigned")]
    MissingAssignment { role: Role },

    #[error("Player '{player_id}' bowled the previous over and cannot bowl consecutive overs")]
    DuplicateBowler { player_id: String },

    #[error("Player '{player_id}' cannot be assigned as {role}: {reason}")]
    InvalidRoleAssignment {
        role: Role,
        player_id: String,
        reason: String,
    },

    #[error("Nothing to undo in the current innings")]
    NothingToUndo,

    // ========================================================================
    // Lifecycle conflicts
    // ========================================================================
    #[error("The {subject} is already completed")]
    AlreadyCompleted { subject: &'static str },

    #[error("Match '{match_id}' is still in progress")]
    MatchInProgress { match_id: String },

    // ========================================================================
    // Validation
    // ========================================================================
    #[error("Invalid match settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid ball: {0}")]
    InvalidBall(String),

    #[error("Invalid team: {0}")]
    InvalidTeam(String),

    #[error("Player not in this match: {0}")]
    UnknownPlayer(String),

    // ========================================================================
    // Integrity
    // ========================================================================
    #[error("Recorded match is inconsistent: {0}")]
    CorruptRecord(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingAssignment { role } => vec![
                format!("Assign a {role} before recording the ball"),
                format!("Try: crease assign {role} <player>"),
            ],
            Self::DuplicateBowler { .. } => vec![
                "A bowler may not bowl two overs in a row".into(),
                "Assign a different bowler: crease assign bowler <player>".into(),
            ],
            Self::InvalidRoleAssignment { reason, .. } => vec![
                format!("Details: {reason}"),
                "Run `crease show` to see who is at the crease".into(),
            ],
            Self::NothingToUndo => vec![
                "No ball has been recorded in the current innings".into(),
                "Undo does not reach back into a finished innings".into(),
            ],
            Self::AlreadyCompleted { .. } => vec![
                "The match is over; use `crease undo` to re-open the final ball".into(),
                "Or start a new match: crease new".into(),
            ],
            Self::MatchInProgress { .. } => vec![
                "Awards are decided once the match is completed".into(),
                "Keep scoring with: crease ball".into(),
            ],
            Self::InvalidSettings(msg) => vec![
                "Check overs, wickets and balls-per-over".into(),
                format!("Details: {msg}"),
            ],
            Self::InvalidBall(msg) => vec![
                format!("Details: {msg}"),
                "Try: crease ball --help".into(),
            ],
            Self::InvalidTeam(msg) => vec![
                "Each team needs at least two players with unique names".into(),
                format!("Details: {msg}"),
            ],
            Self::UnknownPlayer(_) => vec![
                "Players are matched by id or by name within the match squads".into(),
                "Run `crease show` to list squad members".into(),
            ],
            Self::CorruptRecord(msg) => vec![
                format!("Details: {msg}"),
                "The data file may have been edited by hand".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingAssignment { .. }
            | Self::InvalidRoleAssignment { .. }
            | Self::InvalidSettings(_)
            | Self::InvalidBall(_)
            | Self::InvalidTeam(_) => ErrorCategory::Validation,
            Self::DuplicateBowler { .. }
            | Self::NothingToUndo
            | Self::AlreadyCompleted { .. }
            | Self::MatchInProgress { .. } => ErrorCategory::Conflict,
            Self::UnknownPlayer(_) => ErrorCategory::NotFound,
            Self::CorruptRecord(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}
