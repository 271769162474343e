// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Crease.
//!
//! This module contains the scoring rules and the statistics derived from
//! them. It performs no I/O; persistence is reached through the ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or clock access beyond a default
//!   match date
//! - **No logging**: tracing belongs to the application layer
//! - **Values in, values out**: a `Match` is mutated through methods that
//!   either fully apply or leave it untouched
//! - **Derive, don't cache**: statistics are recomputed from ball history
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod ranking;
pub mod scorecard;
pub mod stats;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    app_state::{AppState, UserProfile},
    ball::{BallEvent, BallOutcome, Crease, Wicket},
    fixture::{
        DEFAULT_BALLS_PER_OVER, DEFAULT_OVERS, HasTeams, Match, MatchBuilder, MatchResult,
        MatchSettings, NoTeams, Toss,
    },
    ids::{BallId, MatchId, PlayerId, TeamId},
    innings::{BallReport, Innings, InningsRules},
    player::{Player, Team},
};

pub use error::{DomainError, ErrorCategory};

pub use ranking::{Awards, RankedPlayer, rank};
pub use scorecard::{BattingRow, BowlingRow, Extras, Scorecard};
pub use stats::{
    BowlingBest, InningsFigures, Overs, PlayerAggregate, Summary, WICKET_POINTS,
    aggregate_match, aggregate_matches,
};

pub use value_objects::{
    ExtraType, InningsStatus, MatchStatus, RankingCategory, Role, TossChoice, WicketType,
};

pub use validation::DomainValidator;
