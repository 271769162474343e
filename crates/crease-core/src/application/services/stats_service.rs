//! Stats Service - read-side queries over the match history.
//!
//! Nothing here is cached. Each query loads the document and derives its
//! answer from recorded balls.

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::StateStore,
        services::lookup::{load_checked, match_index},
    },
    domain::{
        Awards, Player, RankedPlayer, RankingCategory, Scorecard, Summary, aggregate_matches,
        rank,
    },
    error::CreaseResult,
};

pub struct StatsService {
    store: Box<dyn StateStore>,
}

impl StatsService {
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Leaderboard over every player who appears in any match.
    #[instrument(skip(self))]
    pub fn rankings(&self, category: RankingCategory) -> CreaseResult<Vec<RankedPlayer>> {
        let state = load_checked(self.store.as_ref())?;
        let board = rank(category, aggregate_matches(&state.matches));
        debug!(players = board.len(), "Rankings computed");
        Ok(board)
    }

    /// MVP, most expensive bowler and duck for a completed match.
    #[instrument(skip(self))]
    pub fn awards(&self, key: &str) -> CreaseResult<Awards> {
        let state = load_checked(self.store.as_ref())?;
        let m = &state.matches[match_index(&state, key)?];
        Ok(Awards::for_match(m)?)
    }

    /// One scorecard per innings played so far.
    pub fn scorecards(&self, key: &str) -> CreaseResult<Vec<Scorecard>> {
        let state = load_checked(self.store.as_ref())?;
        let m = &state.matches[match_index(&state, key)?];
        Ok(Scorecard::for_match(m))
    }

    pub fn summary(&self) -> CreaseResult<Summary> {
        let state = load_checked(self.store.as_ref())?;
        Ok(Summary::from_matches(&state.matches))
    }

    /// Rebuilds every roster player's career counters from the match
    /// history and saves the roster. `rank` is the all-rounder position.
    ///
    /// Players who appear in matches but not on the roster are added.
    #[instrument(skip(self))]
    pub fn reconcile_roster(&self) -> CreaseResult<Vec<Player>> {
        let mut state = load_checked(self.store.as_ref())?;
        let board = rank(
            RankingCategory::AllRounder,
            aggregate_matches(&state.matches),
        );

        for player in &mut state.players {
            *player = player.snapshot();
        }

        for entry in &board {
            let agg = &entry.player;
            let idx = match state.players.iter().position(|p| p.id == agg.player_id) {
                Some(i) => i,
                None => {
                    state
                        .players
                        .push(Player::with_id(agg.player_id.clone(), agg.name.clone()));
                    state.players.len() - 1
                }
            };
            let p = &mut state.players[idx];
            p.matches = agg.matches;
            p.runs = agg.runs;
            p.wickets = agg.wickets;
            p.balls_faced = agg.balls_faced;
            p.balls_bowled = agg.legal_balls_bowled;
            p.runs_conceded = agg.runs_conceded;
            p.highest_score = agg.highest_score;
            p.fours = agg.fours;
            p.sixes = agg.sixes;
            p.best_bowling = agg.best_bowling.map(|b| b.to_string());
            p.rank = Some(entry.rank);
        }

        self.store.save(&state)?;
        info!(players = state.players.len(), "Roster reconciled");
        Ok(state.players)
    }
}
