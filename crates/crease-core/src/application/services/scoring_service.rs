//! Scoring Service - live match use cases.
//!
//! Every use case is one read-modify-write of the state document:
//! 1. Load (and integrity-check) the document through the store port
//! 2. Apply the domain operation to the addressed match
//! 3. Save, only if the operation succeeded
//!
//! A rejected operation never reaches the store.

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::StateStore,
        services::lookup::{load_checked, match_index},
    },
    domain::{
        AppState, BallEvent, BallOutcome, BallReport, DomainError, Match, MatchSettings, Player,
        Role, Team, TossChoice,
    },
    error::{CreaseError, CreaseResult},
};

/// One side's name and batting order, as typed by the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquadSetup {
    pub name: String,
    pub players: Vec<String>,
}

/// Everything needed to open a new match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    pub name: String,
    pub tournament: Option<String>,
    pub venue: Option<String>,
    pub date: Option<NaiveDate>,
    pub home: SquadSetup,
    pub away: SquadSetup,
    pub overs: u32,
    pub balls_per_over: u32,
    /// Defaults to one fewer than the larger squad.
    pub max_wickets: Option<u32>,
    /// Team name of the toss winner and their election.
    pub toss: Option<(String, TossChoice)>,
}

/// Live scoring use cases.
pub struct ScoringService {
    store: Box<dyn StateStore>,
}

impl ScoringService {
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Creates a match and puts it at the top of the history.
    ///
    /// Players and teams already on the roster keep their ids (matched by
    /// name, case-insensitively), so career figures carry across matches.
    #[instrument(skip_all, fields(name = %setup.name, overs = setup.overs))]
    pub fn start_match(&self, setup: MatchSetup) -> CreaseResult<Match> {
        let mut state = load_checked(self.store.as_ref())?;

        let home = squad_from_roster(&state, &setup.home)?;
        let away = squad_from_roster(&state, &setup.away)?;
        let team_size = home.len().max(away.len()) as u32;

        let mut settings = MatchSettings::for_squads(setup.overs, setup.balls_per_over, team_size);
        if let Some(max_wickets) = setup.max_wickets {
            settings.max_wickets = max_wickets;
        }

        let toss = match &setup.toss {
            None => None,
            Some((winner, choice)) => {
                let team = [&home, &away]
                    .into_iter()
                    .find(|t| t.name.eq_ignore_ascii_case(winner.trim()))
                    .ok_or_else(|| {
                        ApplicationError::ValidationFailed(format!(
                            "toss winner '{winner}' is neither '{}' nor '{}'",
                            home.name, away.name
                        ))
                    })?;
                Some((team.id.clone(), *choice))
            }
        };

        let mut builder = Match::builder(setup.name).settings(settings);
        if let Some(t) = setup.tournament {
            builder = builder.tournament(t);
        }
        if let Some(v) = setup.venue {
            builder = builder.venue(v);
        }
        if let Some(d) = setup.date {
            builder = builder.date(d);
        }
        let mut builder = builder.teams(home, away);
        if let Some((winner, choice)) = toss {
            builder = builder.toss(winner, choice);
        }
        let m = builder.build().inspect_err(|e| {
            warn!(error = %e, "Match setup rejected");
        })?;

        state.register_squads(&m);
        state.add_match(m.clone());
        self.store.save(&state)?;

        info!(match_id = %m.id(), "Match started");
        Ok(m)
    }

    /// Every match, newest first.
    pub fn list_matches(&self) -> CreaseResult<Vec<Match>> {
        Ok(load_checked(self.store.as_ref())?.matches)
    }

    /// The match addressed by `key` (`latest`, an id, or a unique prefix).
    pub fn get_match(&self, key: &str) -> CreaseResult<Match> {
        let mut state = load_checked(self.store.as_ref())?;
        let i = match_index(&state, key)?;
        Ok(state.matches.swap_remove(i))
    }

    /// Binds a player, given by id or name, to a crease role.
    #[instrument(skip(self, role), fields(role = %role))]
    pub fn assign_player(&self, key: &str, role: Role, player: &str) -> CreaseResult<Match> {
        let (m, ()) = self.mutate_match(key, "assign", |m| {
            let id = m.resolve_player(role, player)?;
            m.assign_player(role, &id)
        })?;
        debug!(match_id = %m.id(), player, "Player assigned");
        Ok(m)
    }

    /// Records one delivery and reports what it changed.
    #[instrument(skip(self, outcome), fields(runs = outcome.bat_runs(), extra = %outcome.extra_type()))]
    pub fn record_ball(&self, key: &str, outcome: BallOutcome) -> CreaseResult<(Match, BallReport)> {
        let (m, report) = self.mutate_match(key, "ball", |m| m.record_ball(&outcome))?;

        if let Some(inn) = m.current_innings() {
            debug!(
                score = %format!("{}/{}", inn.total_runs(), inn.total_wickets()),
                overs = %inn.overs_display(m.settings().balls_per_over),
                "Ball recorded"
            );
        }
        if report.over_completed {
            debug!("Over completed");
        }
        if report.match_completed {
            info!(
                match_id = %m.id(),
                result = %m.result_summary().unwrap_or_default(),
                "Match completed"
            );
        } else if report.innings_completed {
            info!(match_id = %m.id(), target = ?m.target(), "Innings completed, second innings begins");
        }
        Ok((m, report))
    }

    /// Retracts the last ball of the current innings.
    #[instrument(skip(self))]
    pub fn undo_last_ball(&self, key: &str) -> CreaseResult<(Match, BallEvent)> {
        let (m, ball) = self.mutate_match(key, "undo", Match::undo_last_ball)?;
        info!(match_id = %m.id(), over = ball.over(), ball = ball.ball_number(), "Ball undone");
        Ok((m, ball))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Loads, applies `f` to the addressed match, and saves on success.
    fn mutate_match<T>(
        &self,
        key: &str,
        op: &'static str,
        f: impl FnOnce(&mut Match) -> Result<T, DomainError>,
    ) -> CreaseResult<(Match, T)> {
        let mut state = load_checked(self.store.as_ref())?;
        let i = match_index(&state, key)?;
        let m = &mut state.matches[i];

        let out = f(m).map_err(|e| {
            warn!(match_id = %m.id(), op, error = %e, "Operation rejected");
            CreaseError::from(e)
        })?;
        let snapshot = m.clone();

        self.store.save(&state)?;
        Ok((snapshot, out))
    }
}

/// Builds a team from typed names, reusing roster ids where the name is known.
fn squad_from_roster(state: &AppState, setup: &SquadSetup) -> CreaseResult<Team> {
    let mut team = match state
        .teams
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(setup.name.trim()))
    {
        Some(saved) => Team::with_id(saved.id.clone(), setup.name.as_str()),
        None => Team::new(setup.name.as_str()),
    };
    for name in &setup.players {
        let player = match state.find_player_by_name(name) {
            Some(known) => known.snapshot(),
            None => Player::new(name.as_str()),
        };
        team.add_player(player)?;
    }
    Ok(team)
}
