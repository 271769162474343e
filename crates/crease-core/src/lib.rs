//! Crease Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Crease
//! ball-by-ball cricket scorer, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           crease-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScoringService, StatsService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: StateStore)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crease-adapters (Infrastructure)     │
//! │   (InMemoryStateStore, JsonFileStore)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Match, Innings, BallEvent, stats)     │
//! │               No I/O                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crease_core::prelude::*;
//!
//! # fn demo(store: Box<dyn StateStore>) -> CreaseResult<()> {
//! let scoring = ScoringService::new(store);
//! scoring.assign_player(LATEST, Role::Striker, "Asha")?;
//! let (m, report) = scoring.record_ball(LATEST, BallOutcome::runs(4))?;
//! if report.over_completed {
//!     println!("end of over: {}", m.current_innings().map_or(0, |i| i.total_runs()));
//! }
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LATEST, MatchSetup, ScoringService, SquadSetup, StatsService, ports::StateStore,
    };
    pub use crate::domain::{
        AppState, Awards, BallEvent, BallOutcome, BallReport, ExtraType, Innings, Match,
        MatchSettings, MatchStatus, Player, RankedPlayer, RankingCategory, Role, Scorecard,
        Summary, Team, TossChoice, WicketType,
    };
    pub use crate::error::{CreaseError, CreaseResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
