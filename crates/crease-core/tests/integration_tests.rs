//! End-to-end use cases through the public service API.
//!
//! The store here is a local in-memory implementation of the port so the
//! core crate can be tested without the adapters crate.

use std::sync::{Arc, Mutex};

use crease_core::application::ApplicationError;
use crease_core::domain::{DomainError, MatchResult, WicketType};
use crease_core::error::ErrorCategory;
use crease_core::prelude::*;
use mockall::mock;

#[derive(Clone, Default)]
struct SharedStore {
    state: Arc<Mutex<AppState>>,
    saves: Arc<Mutex<u32>>,
}

impl SharedStore {
    fn saves(&self) -> u32 {
        *self.saves.lock().unwrap()
    }
}

impl StateStore for SharedStore {
    fn load(&self) -> CreaseResult<AppState> {
        Ok(self.state.lock().unwrap().clone())
    }

    fn save(&self, state: &AppState) -> CreaseResult<()> {
        *self.state.lock().unwrap() = state.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

mock! {
    Store {}
    impl StateStore for Store {
        fn load(&self) -> CreaseResult<AppState>;
        fn save(&self, state: &AppState) -> CreaseResult<()>;
    }
}

fn setup(overs: u32) -> MatchSetup {
    MatchSetup {
        name: String::new(),
        tournament: Some("Academy Cup".into()),
        venue: None,
        date: None,
        home: SquadSetup {
            name: "Lions".into(),
            players: vec!["Asha".into(), "Ben".into(), "Cara".into()],
        },
        away: SquadSetup {
            name: "Tigers".into(),
            players: vec!["Dev".into(), "Eli".into(), "Finn".into()],
        },
        overs,
        balls_per_over: 6,
        max_wickets: None,
        toss: None,
    }
}

fn services() -> (SharedStore, ScoringService, StatsService) {
    let store = SharedStore::default();
    let scoring = ScoringService::new(Box::new(store.clone()));
    let stats = StatsService::new(Box::new(store.clone()));
    (store, scoring, stats)
}

fn bowl(scoring: &ScoringService, outcomes: &[BallOutcome]) -> BallReport {
    let mut last = BallReport::default();
    for outcome in outcomes {
        last = scoring.record_ball(LATEST, *outcome).unwrap().1;
    }
    last
}

/// Lions make 11/1 off one over, Tigers chase 12 in two balls.
fn play_full_match(scoring: &ScoringService) -> Match {
    scoring.start_match(setup(1)).unwrap();
    scoring.assign_player(LATEST, Role::Striker, "Asha").unwrap();
    scoring.assign_player(LATEST, Role::NonStriker, "ben").unwrap();
    scoring.assign_player(LATEST, Role::Bowler, "Dev").unwrap();

    bowl(
        scoring,
        &[
            BallOutcome::runs(4),
            BallOutcome::runs(1),
            BallOutcome::dot().with_wicket(WicketType::Bowled),
        ],
    );
    scoring.assign_player(LATEST, Role::Striker, "Cara").unwrap();
    let report = bowl(
        scoring,
        &[BallOutcome::dot(), BallOutcome::dot(), BallOutcome::runs(6)],
    );
    assert!(report.over_completed);
    assert!(report.innings_completed);
    assert!(!report.match_completed);

    scoring.assign_player(LATEST, Role::Striker, "Dev").unwrap();
    scoring.assign_player(LATEST, Role::NonStriker, "Eli").unwrap();
    scoring.assign_player(LATEST, Role::Bowler, "Asha").unwrap();
    let report = bowl(scoring, &[BallOutcome::runs(6), BallOutcome::runs(6)]);
    assert!(report.match_completed);

    scoring.get_match(LATEST).unwrap()
}

#[test]
fn start_match_persists_and_registers_roster() {
    let (store, scoring, _) = services();
    let m = scoring.start_match(setup(2)).unwrap();

    assert_eq!(m.name(), "Lions vs Tigers");
    assert_eq!(m.status(), MatchStatus::Live);
    assert_eq!(m.settings().max_wickets, 2);

    let state = store.load().unwrap();
    assert_eq!(state.matches.len(), 1);
    assert_eq!(state.players.len(), 6);
    assert_eq!(state.teams.len(), 2);
}

#[test]
fn returning_players_keep_their_ids() {
    let (store, scoring, _) = services();
    let first = scoring.start_match(setup(2)).unwrap();
    let second = scoring.start_match(setup(2)).unwrap();

    let ids = |m: &Match| m.players().map(|p| p.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.teams()[0].id, second.teams()[0].id);

    let state = store.load().unwrap();
    assert_eq!(state.players.len(), 6);
    // newest first
    assert_eq!(state.matches[0].id(), second.id());
}

#[test]
fn rejected_operations_are_not_saved() {
    let (store, scoring, _) = services();
    scoring.start_match(setup(2)).unwrap();
    let saves = store.saves();

    let err = scoring.record_ball(LATEST, BallOutcome::runs(1)).unwrap_err();
    assert_eq!(
        err,
        CreaseError::Domain(DomainError::MissingAssignment {
            role: Role::Striker
        })
    );

    let err = scoring
        .assign_player(LATEST, Role::Bowler, "Asha")
        .unwrap_err();
    assert!(matches!(
        err,
        CreaseError::Domain(DomainError::InvalidRoleAssignment { .. })
    ));

    let err = scoring.undo_last_ball(LATEST).unwrap_err();
    assert_eq!(err, CreaseError::Domain(DomainError::NothingToUndo));
    assert_eq!(err.category(), ErrorCategory::Conflict);

    assert_eq!(store.saves(), saves);
}

#[test]
fn unknown_player_is_not_found() {
    let (_, scoring, _) = services();
    scoring.start_match(setup(2)).unwrap();

    let err = scoring
        .assign_player(LATEST, Role::Striker, "Zed")
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn full_match_result_and_awards() {
    let (_, scoring, stats) = services();
    let m = play_full_match(&scoring);

    assert!(m.is_completed());
    assert_eq!(m.innings()[0].total_runs(), 11);
    assert_eq!(m.innings()[0].total_wickets(), 1);
    assert_eq!(m.target(), Some(12));
    assert!(matches!(m.result(), Some(MatchResult::Won { .. })));
    assert_eq!(m.result_summary().unwrap(), "Tigers won by 2 wickets");

    let awards = stats.awards(LATEST).unwrap();
    assert_eq!(awards.mvp.unwrap().name, "Dev");
    assert_eq!(awards.most_expensive.unwrap().name, "Asha");
    assert_eq!(awards.duck.unwrap().name, "Ben");

    let err = scoring.record_ball(LATEST, BallOutcome::dot()).unwrap_err();
    assert!(matches!(
        err,
        CreaseError::Domain(DomainError::AlreadyCompleted { .. })
    ));
}

#[test]
fn awards_wait_for_the_result() {
    let (_, scoring, stats) = services();
    scoring.start_match(setup(2)).unwrap();

    let err = stats.awards(LATEST).unwrap_err();
    assert!(matches!(
        err,
        CreaseError::Domain(DomainError::MatchInProgress { .. })
    ));
}

#[test]
fn undo_reopens_a_finished_match() {
    let (_, scoring, _) = services();
    play_full_match(&scoring);

    let (m, ball) = scoring.undo_last_ball(LATEST).unwrap();
    assert_eq!(ball.runs(), 6);
    assert_eq!(m.status(), MatchStatus::Live);
    assert!(m.result().is_none());
    assert_eq!(m.required_runs(), Some(6));
}

#[test]
fn scorecards_and_rankings_follow_the_balls() {
    let (_, scoring, stats) = services();
    play_full_match(&scoring);

    let cards = stats.scorecards(LATEST).unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].total_runs, 11);
    let ben = cards[0].batting.iter().find(|r| r.name == "Ben").unwrap();
    assert!(ben.dismissed);
    assert_eq!(ben.how_out.as_deref(), Some("b Dev"));

    let batters = stats.rankings(RankingCategory::Batsman).unwrap();
    assert_eq!(batters[0].player.name, "Dev");
    assert_eq!(batters[0].rank, 1);

    let bowlers = stats.rankings(RankingCategory::Bowler).unwrap();
    assert_eq!(bowlers[0].player.name, "Dev");

    let summary = stats.summary().unwrap();
    assert_eq!(summary.total_matches, 1);
    assert_eq!(summary.completed_matches, 1);
    assert_eq!(summary.total_runs, 23);
}

#[test]
fn reconcile_roster_rebuilds_career_figures() {
    let (store, scoring, stats) = services();
    play_full_match(&scoring);

    let players = stats.reconcile_roster().unwrap();
    let dev = players.iter().find(|p| p.name == "Dev").unwrap();
    assert_eq!(dev.runs, 12);
    assert_eq!(dev.wickets, 1);
    assert_eq!(dev.matches, 1);
    assert_eq!(dev.best_bowling.as_deref(), Some("1/11"));
    assert_eq!(dev.rank, Some(1));

    // idempotent
    let again = stats.reconcile_roster().unwrap();
    assert_eq!(players, again);
    assert_eq!(store.load().unwrap().players, again);
}

#[test]
fn matches_are_addressed_by_prefix() {
    let (_, scoring, _) = services();
    let m = scoring.start_match(setup(2)).unwrap();
    scoring.start_match(setup(2)).unwrap();

    let found = scoring.get_match(&m.id().as_str()[..10]).unwrap();
    assert_eq!(found.id(), m.id());

    let err = scoring.get_match("no-such-match").unwrap_err();
    assert!(matches!(
        err,
        CreaseError::Application(ApplicationError::MatchNotFound { .. })
    ));
}

#[test]
fn empty_store_has_no_latest_match() {
    let (_, scoring, stats) = services();
    assert!(scoring.list_matches().unwrap().is_empty());
    assert!(scoring.get_match(LATEST).is_err());
    assert_eq!(stats.summary().unwrap().total_matches, 0);
}

#[test]
fn store_failures_propagate() {
    let mut store = MockStore::new();
    store.expect_load().returning(|| Ok(AppState::default()));
    store.expect_save().times(1).returning(|_| {
        Err(ApplicationError::Storage {
            location: "crease.json".into(),
            reason: "disk full".into(),
        }
        .into())
    });

    let scoring = ScoringService::new(Box::new(store));
    let err = scoring.start_match(setup(2)).unwrap_err();
    assert!(matches!(
        err,
        CreaseError::Application(ApplicationError::Storage { .. })
    ));
}

#[test]
fn lock_errors_are_retryable() {
    let mut store = MockStore::new();
    store
        .expect_load()
        .returning(|| Err(ApplicationError::StoreLockError.into()));
    store.expect_save().never();

    let stats = StatsService::new(Box::new(store));
    let err = stats.summary().unwrap_err();
    assert!(err.is_retryable());
}
