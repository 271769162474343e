//! Command handlers. Each module translates parsed arguments into service
//! calls and renders the result; no scoring rules live here.

pub mod assign;
pub mod awards;
pub mod ball;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
pub mod players;
pub mod rank;
pub mod scorecard;
pub mod show;
pub mod summary;
pub mod undo;

use tracing::debug;

use crease_adapters::JsonFileStore;
use crease_core::{
    application::{ScoringService, StatsService},
    domain::{Innings, Match, PlayerId, Role},
};

use crate::{
    cli::{GlobalArgs, RoleArg},
    config::AppConfig,
};

// ── Service wiring ────────────────────────────────────────────────────────────

fn open_store(global: &GlobalArgs, config: &AppConfig) -> JsonFileStore {
    let path = config.data_path(global.data.as_ref());
    debug!(path = %path.display(), "Using data file");
    JsonFileStore::new(path)
}

pub fn scoring_service(global: &GlobalArgs, config: &AppConfig) -> ScoringService {
    ScoringService::new(Box::new(open_store(global, config)))
}

pub fn stats_service(global: &GlobalArgs, config: &AppConfig) -> StatsService {
    StatsService::new(Box::new(open_store(global, config)))
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

pub fn convert_role(role: RoleArg) -> Role {
    match role {
        RoleArg::Striker => Role::Striker,
        RoleArg::NonStriker => Role::NonStriker,
        RoleArg::Bowler => Role::Bowler,
    }
}

// ── Display helpers ───────────────────────────────────────────────────────────

pub fn player_name(m: &Match, id: &PlayerId) -> String {
    m.player(id)
        .map_or_else(|| id.short().to_owned(), |p| p.name.clone())
}

/// "Lions 45/3 (4.2)"
pub fn innings_line(m: &Match, innings: &Innings) -> String {
    let team = m
        .team(innings.batting_team_id())
        .map_or("?", |t| t.name.as_str());
    format!(
        "{team} {}/{} ({})",
        innings.total_runs(),
        innings.total_wickets(),
        innings.overs_display(m.settings().balls_per_over)
    )
}

/// Every innings line joined, e.g. for the match list.
pub fn score_line(m: &Match) -> String {
    m.innings()
        .iter()
        .map(|inn| innings_line(m, inn))
        .collect::<Vec<_>>()
        .join(" | ")
}
