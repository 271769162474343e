//! Innings state machine.
//!
//! An [`Innings`] accumulates [`BallEvent`]s and keeps its running totals,
//! crease bindings and over bookkeeping consistent with them:
//!
//! - `total_runs` is the sum of `runs + extra_runs` over all balls
//! - `total_balls` counts legal deliveries only
//! - `total_wickets` counts dismissals other than retirements
//! - `dismissed_player_ids` holds every batter named in a wicket
//!
//! Every mutation validates first and mutates second, so a rejected call
//! leaves the innings exactly as it was.

use serde::{Deserialize, Serialize};
use std::mem;

use crate::domain::entities::ball::{BallEvent, BallOutcome, Crease};
use crate::domain::entities::ids::{PlayerId, TeamId};
use crate::domain::entities::player::{Player, Team};
use crate::domain::error::DomainError;
use crate::domain::value_objects::{InningsStatus, Role};

/// Limits an innings is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InningsRules {
    pub balls_per_over: u32,
    pub max_wickets: u32,
    /// `total_overs × balls_per_over`.
    pub max_balls: u32,
    /// Runs needed to win; only set for a chase.
    pub target: Option<u32>,
}

/// What a recorded ball changed beyond the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BallReport {
    pub over_completed: bool,
    pub innings_completed: bool,
    pub match_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Innings {
    batting_team_id: TeamId,
    bowling_team_id: TeamId,
    total_runs: u32,
    total_wickets: u32,
    total_balls: u32,
    balls: Vec<BallEvent>,
    status: InningsStatus,
    dismissed_player_ids: Vec<PlayerId>,
    #[serde(default)]
    current_striker_id: Option<PlayerId>,
    #[serde(default)]
    current_non_striker_id: Option<PlayerId>,
    #[serde(default)]
    current_bowler_id: Option<PlayerId>,
    #[serde(default)]
    last_bowler_id: Option<PlayerId>,
}

impl Innings {
    /// Fresh active innings with zeroed counters and an empty crease.
    pub fn new(batting_team_id: TeamId, bowling_team_id: TeamId) -> Self {
        Self {
            batting_team_id,
            bowling_team_id,
            total_runs: 0,
            total_wickets: 0,
            total_balls: 0,
            balls: Vec::new(),
            status: InningsStatus::Active,
            dismissed_player_ids: Vec::new(),
            current_striker_id: None,
            current_non_striker_id: None,
            current_bowler_id: None,
            last_bowler_id: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn batting_team_id(&self) -> &TeamId {
        &self.batting_team_id
    }

    pub fn bowling_team_id(&self) -> &TeamId {
        &self.bowling_team_id
    }

    pub const fn total_runs(&self) -> u32 {
        self.total_runs
    }

    pub const fn total_wickets(&self) -> u32 {
        self.total_wickets
    }

    /// Legal deliveries bowled.
    pub const fn total_balls(&self) -> u32 {
        self.total_balls
    }

    pub fn balls(&self) -> &[BallEvent] {
        &self.balls
    }

    pub const fn status(&self) -> InningsStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == InningsStatus::Completed
    }

    pub fn dismissed_player_ids(&self) -> &[PlayerId] {
        &self.dismissed_player_ids
    }

    pub fn is_dismissed(&self, id: &PlayerId) -> bool {
        self.dismissed_player_ids.contains(id)
    }

    pub fn current_striker_id(&self) -> Option<&PlayerId> {
        self.current_striker_id.as_ref()
    }

    pub fn current_non_striker_id(&self) -> Option<&PlayerId> {
        self.current_non_striker_id.as_ref()
    }

    pub fn current_bowler_id(&self) -> Option<&PlayerId> {
        self.current_bowler_id.as_ref()
    }

    pub fn last_bowler_id(&self) -> Option<&PlayerId> {
        self.last_bowler_id.as_ref()
    }

    /// Who currently fills `role`.
    pub fn assigned(&self, role: Role) -> Option<&PlayerId> {
        match role {
            Role::Striker => self.current_striker_id.as_ref(),
            Role::NonStriker => self.current_non_striker_id.as_ref(),
            Role::Bowler => self.current_bowler_id.as_ref(),
        }
    }

    /// The full crease, or the first unfilled role.
    pub fn crease(&self) -> Result<Crease, DomainError> {
        let missing = |role| DomainError::MissingAssignment { role };
        Ok(Crease {
            striker: self
                .current_striker_id
                .clone()
                .ok_or_else(|| missing(Role::Striker))?,
            non_striker: self
                .current_non_striker_id
                .clone()
                .ok_or_else(|| missing(Role::NonStriker))?,
            bowler: self
                .current_bowler_id
                .clone()
                .ok_or_else(|| missing(Role::Bowler))?,
        })
    }

    // ── Assignment ────────────────────────────────────────────────────────────

    /// Binds `player` to `role`. Team membership is the caller's concern.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` once the innings is over
    /// - `DuplicateBowler` for the bowler of the previous over
    /// - `InvalidRoleAssignment` for a dismissed batter, or one already
    ///   batting at the other end
    pub fn assign(&mut self, role: Role, player: PlayerId) -> Result<(), DomainError> {
        if self.is_completed() {
            return Err(DomainError::AlreadyCompleted { subject: "innings" });
        }

        match role {
            Role::Bowler => {
                if self.last_bowler_id.as_ref() == Some(&player) {
                    return Err(DomainError::DuplicateBowler {
                        player_id: player.to_string(),
                    });
                }
                self.current_bowler_id = Some(player);
            }
            Role::Striker | Role::NonStriker => {
                if self.is_dismissed(&player) {
                    return Err(DomainError::InvalidRoleAssignment {
                        role,
                        player_id: player.to_string(),
                        reason: "already dismissed in this innings".into(),
                    });
                }
                let other_end = if role == Role::Striker {
                    Role::NonStriker
                } else {
                    Role::Striker
                };
                if self.assigned(other_end) == Some(&player) {
                    return Err(DomainError::InvalidRoleAssignment {
                        role,
                        player_id: player.to_string(),
                        reason: format!("already batting as {other_end}"),
                    });
                }
                if role == Role::Striker {
                    self.current_striker_id = Some(player);
                } else {
                    self.current_non_striker_id = Some(player);
                }
            }
        }
        Ok(())
    }

    // ── Scoring ───────────────────────────────────────────────────────────────

    /// Records one delivery.
    ///
    /// Effects, in order: append the event, add its runs, apply any
    /// dismissal, count a legal ball, rotate strike on odd bat runs, close
    /// the over, then check termination.
    ///
    /// # Errors
    ///
    /// `AlreadyCompleted`, `InvalidBall`, or `MissingAssignment` for the
    /// first unfilled role (striker, non-striker, bowler).
    pub fn apply_ball(
        &mut self,
        outcome: &BallOutcome,
        rules: &InningsRules,
    ) -> Result<BallReport, DomainError> {
        if self.is_completed() {
            return Err(DomainError::AlreadyCompleted { subject: "innings" });
        }
        outcome.validate()?;
        let crease = self.crease()?;

        let bpo = rules.balls_per_over.max(1);
        let ball = BallEvent::record(
            outcome,
            crease,
            self.total_balls / bpo,
            self.total_balls % bpo + 1,
        );

        self.total_runs += ball.total_runs();

        if let Some(wicket) = ball.wicket() {
            if wicket.kind.counts_as_wicket() {
                self.total_wickets += 1;
            }
            if !self.is_dismissed(&wicket.player_out_id) {
                self.dismissed_player_ids.push(wicket.player_out_id.clone());
            }
            if self.current_striker_id.as_ref() == Some(&wicket.player_out_id) {
                self.current_striker_id = None;
            } else if self.current_non_striker_id.as_ref() == Some(&wicket.player_out_id) {
                self.current_non_striker_id = None;
            }
        }

        if ball.is_legal() {
            self.total_balls += 1;
        }

        if ball.runs() % 2 == 1 {
            self.swap_strike();
        }

        let over_completed = ball.is_legal() && self.total_balls % bpo == 0;
        if over_completed {
            self.last_bowler_id = self.current_bowler_id.take();
            self.swap_strike();
        }

        self.balls.push(ball);

        let target_met = rules.target.is_some_and(|t| self.total_runs >= t);
        let all_out = self.total_wickets >= rules.max_wickets;
        let overs_done = self.total_balls >= rules.max_balls;
        let innings_completed = target_met || all_out || overs_done;
        if innings_completed {
            self.status = InningsStatus::Completed;
        }

        Ok(BallReport {
            over_completed,
            innings_completed,
            match_completed: false,
        })
    }

    /// Removes the last ball and restores the state from before it.
    ///
    /// The crease is rebuilt from the players recorded on the ball. When the
    /// ball closed an over, the previous over's bowler becomes
    /// `last_bowler_id` again. A completed innings re-opens.
    ///
    /// # Errors
    ///
    /// `NothingToUndo` when no ball has been recorded.
    pub fn undo_last_ball(&mut self, balls_per_over: u32) -> Result<BallEvent, DomainError> {
        let ball = self.balls.pop().ok_or(DomainError::NothingToUndo)?;
        let bpo = balls_per_over.max(1);
        let closed_over = ball.is_legal() && self.total_balls % bpo == 0;

        self.total_runs -= ball.total_runs();
        if ball.is_legal() {
            self.total_balls -= 1;
        }
        if let Some(wicket) = ball.wicket() {
            if wicket.kind.counts_as_wicket() {
                self.total_wickets -= 1;
            }
            self.dismissed_player_ids
                .retain(|id| id != &wicket.player_out_id);
        }

        self.current_striker_id = Some(ball.striker_id().clone());
        self.current_non_striker_id = Some(ball.non_striker_id().clone());
        self.current_bowler_id = Some(ball.bowler_id().clone());

        if closed_over {
            self.last_bowler_id = self
                .balls
                .iter()
                .rev()
                .find(|b| b.over() < ball.over())
                .map(|b| b.bowler_id().clone());
        }

        self.status = InningsStatus::Active;
        Ok(ball)
    }

    fn swap_strike(&mut self) {
        mem::swap(&mut self.current_striker_id, &mut self.current_non_striker_id);
    }

    // ── Read-side helpers ─────────────────────────────────────────────────────

    /// Overs bowled as `O.B`, e.g. `3.4`.
    pub fn overs_display(&self, balls_per_over: u32) -> String {
        let bpo = balls_per_over.max(1);
        format!("{}.{}", self.total_balls / bpo, self.total_balls % bpo)
    }

    /// Runs per over. With no legal balls bowled the divisor is one.
    pub fn run_rate(&self, balls_per_over: u32) -> f64 {
        let overs = f64::from(self.total_balls) / f64::from(balls_per_over.max(1));
        let divisor = if overs > 0.0 { overs } else { 1.0 };
        f64::from(self.total_runs) / divisor
    }

    /// The last `n` deliveries, oldest first.
    pub fn recent(&self, n: usize) -> &[BallEvent] {
        let start = self.balls.len().saturating_sub(n);
        &self.balls[start..]
    }

    pub fn extras(&self) -> u32 {
        self.balls.iter().map(BallEvent::extra_runs).sum()
    }

    /// Batters from `team` who are neither dismissed nor at the crease.
    pub fn available_batters<'a>(&self, team: &'a Team) -> Vec<&'a Player> {
        team.players()
            .iter()
            .filter(|p| {
                !self.is_dismissed(&p.id)
                    && self.current_striker_id.as_ref() != Some(&p.id)
                    && self.current_non_striker_id.as_ref() != Some(&p.id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::WicketType;

    fn rules() -> InningsRules {
        InningsRules {
            balls_per_over: 6,
            max_wickets: 3,
            max_balls: 12,
            target: None,
        }
    }

    fn ready() -> Innings {
        let mut inn = Innings::new(TeamId::from("A"), TeamId::from("B"));
        inn.assign(Role::Striker, "a1".into()).unwrap();
        inn.assign(Role::NonStriker, "a2".into()).unwrap();
        inn.assign(Role::Bowler, "b1".into()).unwrap();
        inn
    }

    fn assert_invariants(inn: &Innings) {
        let runs: u32 = inn.balls().iter().map(BallEvent::total_runs).sum();
        let legal = inn.balls().iter().filter(|b| b.is_legal()).count() as u32;
        let wickets = inn.balls().iter().filter(|b| b.is_counted_wicket()).count() as u32;
        assert_eq!(inn.total_runs(), runs);
        assert_eq!(inn.total_balls(), legal);
        assert_eq!(inn.total_wickets(), wickets);
    }

    #[test]
    fn requires_all_three_roles() {
        let mut inn = Innings::new(TeamId::from("A"), TeamId::from("B"));
        inn.assign(Role::Striker, "a1".into()).unwrap();
        let err = inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingAssignment {
                role: Role::NonStriker
            }
        );
        assert!(inn.balls().is_empty());
    }

    #[test]
    fn odd_runs_swap_strike_even_runs_do_not() {
        let mut inn = ready();
        inn.apply_ball(&BallOutcome::runs(1), &rules()).unwrap();
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a2")));
        inn.apply_ball(&BallOutcome::runs(2), &rules()).unwrap();
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a2")));
        inn.apply_ball(&BallOutcome::runs(3), &rules()).unwrap();
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a1")));
    }

    #[test]
    fn six_dots_swap_strike_once_at_over_end() {
        let mut inn = ready();
        for _ in 0..5 {
            let report = inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap();
            assert!(!report.over_completed);
        }
        let report = inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap();
        assert!(report.over_completed);
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a2")));
        assert_eq!(inn.current_non_striker_id(), Some(&PlayerId::from("a1")));
        assert_eq!(inn.current_bowler_id(), None);
        assert_eq!(inn.last_bowler_id(), Some(&PlayerId::from("b1")));
    }

    #[test]
    fn single_off_last_ball_keeps_strike() {
        let mut inn = ready();
        for _ in 0..5 {
            inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap();
        }
        inn.apply_ball(&BallOutcome::runs(1), &rules()).unwrap();
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a1")));
    }

    #[test]
    fn extras_do_not_advance_the_over() {
        let mut inn = ready();
        inn.apply_ball(&BallOutcome::wide(), &rules()).unwrap();
        inn.apply_ball(&BallOutcome::no_ball(0), &rules()).unwrap();
        inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap();
        assert_eq!(inn.total_balls(), 1);
        assert_eq!(inn.total_runs(), 2);
        let numbers: Vec<_> = inn.balls().iter().map(BallEvent::ball_number).collect();
        assert_eq!(numbers, [1, 1, 1]);
        assert_invariants(&inn);
    }

    #[test]
    fn bye_runs_rotate_only_on_bat_runs() {
        let mut inn = ready();
        inn.apply_ball(&BallOutcome::bye(1), &rules()).unwrap();
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a1")));
        assert_eq!(inn.total_runs(), 1);
    }

    #[test]
    fn wicket_clears_striker_and_blocks_reassignment() {
        let mut inn = ready();
        inn.apply_ball(&BallOutcome::dot().with_wicket(WicketType::Bowled), &rules())
            .unwrap();
        assert_eq!(inn.current_striker_id(), None);
        assert_eq!(inn.total_wickets(), 1);
        assert!(inn.is_dismissed(&PlayerId::from("a1")));

        let err = inn.assign(Role::Striker, "a1".into()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRoleAssignment { .. }));
        let err = inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap_err();
        assert_eq!(err, DomainError::MissingAssignment { role: Role::Striker });
    }

    #[test]
    fn run_out_at_non_strikers_end_clears_that_slot() {
        let mut inn = ready();
        let outcome = BallOutcome::dot()
            .with_wicket(WicketType::RunOut)
            .with_player_out(Role::NonStriker);
        inn.apply_ball(&outcome, &rules()).unwrap();
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a1")));
        assert_eq!(inn.current_non_striker_id(), None);
    }

    #[test]
    fn retired_does_not_count_toward_all_out() {
        let mut inn = ready();
        let r = InningsRules {
            max_wickets: 1,
            ..rules()
        };
        let report = inn
            .apply_ball(&BallOutcome::dot().with_wicket(WicketType::Retired), &r)
            .unwrap();
        assert!(!report.innings_completed);
        assert_eq!(inn.total_wickets(), 0);
        assert_eq!(inn.dismissed_player_ids(), &[PlayerId::from("a1")]);
        assert_eq!(inn.current_striker_id(), None);
    }

    #[test]
    fn max_wickets_completes_innings() {
        let mut inn = ready();
        let r = InningsRules {
            max_wickets: 1,
            ..rules()
        };
        let report = inn
            .apply_ball(&BallOutcome::dot().with_wicket(WicketType::Caught), &r)
            .unwrap();
        assert!(report.innings_completed);
        assert!(inn.is_completed());
        assert_eq!(
            inn.apply_ball(&BallOutcome::dot(), &r).unwrap_err(),
            DomainError::AlreadyCompleted { subject: "innings" }
        );
    }

    #[test]
    fn target_completes_innings() {
        let mut inn = ready();
        let r = InningsRules {
            target: Some(4),
            ..rules()
        };
        assert!(!inn.apply_ball(&BallOutcome::runs(3), &r).unwrap().innings_completed);
        assert!(inn.apply_ball(&BallOutcome::wide(), &r).unwrap().innings_completed);
    }

    #[test]
    fn example_over() {
        let mut inn = ready();
        let r = rules();
        inn.apply_ball(&BallOutcome::runs(4), &r).unwrap();
        inn.apply_ball(&BallOutcome::runs(4), &r).unwrap();
        inn.apply_ball(&BallOutcome::runs(1), &r).unwrap();
        // a2 now on strike and is out
        inn.apply_ball(&BallOutcome::dot().with_wicket(WicketType::Bowled), &r)
            .unwrap();
        inn.assign(Role::Striker, "a3".into()).unwrap();
        inn.apply_ball(&BallOutcome::dot(), &r).unwrap();
        let report = inn.apply_ball(&BallOutcome::runs(6), &r).unwrap();

        assert!(report.over_completed);
        assert_eq!(inn.total_runs(), 15);
        assert_eq!(inn.total_wickets(), 1);
        assert_eq!(inn.total_balls(), 6);
        assert_eq!(inn.current_bowler_id(), None);
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a1")));
        assert_eq!(inn.current_non_striker_id(), Some(&PlayerId::from("a3")));
        assert_eq!(inn.overs_display(6), "1.0");
        assert_invariants(&inn);
    }

    #[test]
    fn previous_overs_bowler_is_rejected() {
        let mut inn = ready();
        for _ in 0..6 {
            inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap();
        }
        let err = inn.assign(Role::Bowler, "b1".into()).unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateBowler {
                player_id: "b1".into()
            }
        );
        inn.assign(Role::Bowler, "b2".into()).unwrap();
    }

    #[test]
    fn batter_cannot_take_both_ends() {
        let mut inn = ready();
        let err = inn.assign(Role::NonStriker, "a1".into()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRoleAssignment { .. }));
    }

    #[test]
    fn undo_on_empty_innings() {
        let mut inn = ready();
        assert_eq!(inn.undo_last_ball(6).unwrap_err(), DomainError::NothingToUndo);
    }

    #[test]
    fn undo_then_reapply_reproduces_state() {
        let outcomes = [
            BallOutcome::runs(1),
            BallOutcome::wide(),
            BallOutcome::runs(4),
            BallOutcome::no_ball(1),
            BallOutcome::dot(),
            BallOutcome::runs(2),
            BallOutcome::dot(),
            BallOutcome::runs(3),
            BallOutcome::dot().with_wicket(WicketType::Stumped),
        ];
        let mut inn = ready();
        for outcome in outcomes {
            if inn.current_bowler_id().is_none() {
                inn.assign(Role::Bowler, "b2".into()).unwrap();
            }
            let before = inn.clone();
            inn.apply_ball(&outcome, &rules()).unwrap();
            inn.undo_last_ball(6).unwrap();
            assert_eq!(inn, before);
            inn.apply_ball(&outcome, &rules()).unwrap();
            assert_invariants(&inn);
        }
        assert_eq!(inn.total_balls(), 7);
    }

    #[test]
    fn undo_of_over_closing_ball_restores_bowlers() {
        let mut inn = ready();
        for _ in 0..6 {
            inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap();
        }
        inn.assign(Role::Bowler, "b2".into()).unwrap();
        for _ in 0..6 {
            inn.apply_ball(&BallOutcome::dot(), &rules()).unwrap();
        }
        assert!(inn.is_completed());
        assert_eq!(inn.last_bowler_id(), Some(&PlayerId::from("b2")));

        inn.undo_last_ball(6).unwrap();
        assert!(!inn.is_completed());
        assert_eq!(inn.current_bowler_id(), Some(&PlayerId::from("b2")));
        assert_eq!(inn.last_bowler_id(), Some(&PlayerId::from("b1")));
        assert_eq!(inn.total_balls(), 11);
        assert_invariants(&inn);
    }

    #[test]
    fn undo_of_wicket_restores_batter() {
        let mut inn = ready();
        inn.apply_ball(&BallOutcome::dot().with_wicket(WicketType::Lbw), &rules())
            .unwrap();
        inn.undo_last_ball(6).unwrap();
        assert!(inn.dismissed_player_ids().is_empty());
        assert_eq!(inn.total_wickets(), 0);
        assert_eq!(inn.current_striker_id(), Some(&PlayerId::from("a1")));
    }

    #[test]
    fn run_rate_and_recent() {
        let mut inn = ready();
        assert_eq!(inn.run_rate(6), 0.0);
        inn.apply_ball(&BallOutcome::wide(), &rules()).unwrap();
        assert_eq!(inn.run_rate(6), 1.0);
        for _ in 0..3 {
            inn.apply_ball(&BallOutcome::runs(2), &rules()).unwrap();
        }
        assert_eq!(inn.run_rate(6), 14.0);
        let labels: Vec<_> = inn.recent(2).iter().map(BallEvent::short_label).collect();
        assert_eq!(labels, ["2", "2"]);
        assert_eq!(inn.recent(10).len(), 4);
        assert_eq!(inn.extras(), 1);
        assert_eq!(inn.overs_display(6), "0.3");
    }

    #[test]
    fn available_batters_skip_crease_and_dismissed() {
        let mut team = Team::with_id(TeamId::from("A"), "A");
        for (id, name) in [("a1", "One"), ("a2", "Two"), ("a3", "Three"), ("a4", "Four")] {
            team.add_player(Player::with_id(id.into(), name)).unwrap();
        }
        let mut inn = ready();
        inn.apply_ball(&BallOutcome::dot().with_wicket(WicketType::Bowled), &rules())
            .unwrap();
        let ids: Vec<_> = inn
            .available_batters(&team)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["a3", "a4"]);
    }
}
