//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "record a ball" or "rank the players".

mod lookup;
pub mod scoring_service;
pub mod stats_service;

pub use lookup::LATEST;
pub use scoring_service::{MatchSetup, ScoringService, SquadSetup};
pub use stats_service::StatsService;
