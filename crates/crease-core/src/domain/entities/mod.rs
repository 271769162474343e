pub mod app_state;
pub mod ball;
pub mod fixture;
pub mod ids;
pub mod innings;
pub mod player;

pub use crate::domain::DomainError;
pub use app_state::{AppState, UserProfile};
pub use ball::{BallEvent, BallOutcome, Crease, Wicket};
pub use fixture::{Match, MatchBuilder, MatchResult, MatchSettings, Toss};
pub use ids::{BallId, MatchId, PlayerId, TeamId};
pub use innings::{BallReport, Innings, InningsRules};
pub use player::{Player, Team};
