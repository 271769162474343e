//! Match controller.
//!
//! A [`Match`] owns two squads and one or two innings. It decides who may
//! be bound to each role, hands over to the second innings, and settles the
//! result. Every mutation runs against a working copy that replaces the
//! match only when the whole operation succeeds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::domain::entities::ball::{BallEvent, BallOutcome};
use crate::domain::entities::ids::{MatchId, PlayerId, TeamId};
use crate::domain::entities::innings::{BallReport, Innings, InningsRules};
use crate::domain::entities::player::{Player, Team};
use crate::domain::error::DomainError;
use crate::domain::value_objects::{MatchStatus, Role, TossChoice};

pub const DEFAULT_OVERS: u32 = 2;
pub const DEFAULT_BALLS_PER_OVER: u32 = 6;

// ── Settings ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub total_overs: u32,
    pub balls_per_over: u32,
    pub max_wickets: u32,
    pub team_size: u32,
}

impl MatchSettings {
    /// Settings for squads of up to `team_size` players: the innings ends
    /// when one batter is left.
    pub fn for_squads(total_overs: u32, balls_per_over: u32, team_size: u32) -> Self {
        Self {
            total_overs,
            balls_per_over,
            max_wickets: team_size.saturating_sub(1).max(1),
            team_size,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.total_overs == 0 {
            return Err(DomainError::InvalidSettings(
                "a match needs at least one over".into(),
            ));
        }
        if self.balls_per_over == 0 {
            return Err(DomainError::InvalidSettings(
                "an over needs at least one ball".into(),
            ));
        }
        if self.team_size < 2 {
            return Err(DomainError::InvalidSettings(
                "teams need at least two players".into(),
            ));
        }
        if self.total_overs.checked_mul(self.balls_per_over).is_none() {
            return Err(DomainError::InvalidSettings(format!(
                "{} overs of {} balls is more deliveries than can be counted",
                self.total_overs, self.balls_per_over
            )));
        }
        if self.max_wickets == 0 || self.max_wickets >= self.team_size {
            return Err(DomainError::InvalidSettings(format!(
                "max wickets must be between 1 and {} for a team of {}",
                self.team_size - 1,
                self.team_size
            )));
        }
        Ok(())
    }

    pub const fn max_balls(&self) -> u32 {
        self.total_overs.saturating_mul(self.balls_per_over)
    }

    /// Wickets that end an innings for a batting side of `squad_size`.
    /// A side smaller than the largest squad is all out once it has a
    /// single batter left.
    pub fn wickets_for(&self, squad_size: usize) -> u32 {
        let last_pair = u32::try_from(squad_size.saturating_sub(1)).unwrap_or(u32::MAX);
        self.max_wickets.min(last_pair.max(1))
    }

    pub fn rules(&self, target: Option<u32>, squad_size: usize) -> InningsRules {
        InningsRules {
            balls_per_over: self.balls_per_over,
            max_wickets: self.wickets_for(squad_size),
            max_balls: self.max_balls(),
            target,
        }
    }
}

// ── Toss & result ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toss {
    pub winner_team_id: TeamId,
    pub choice: TossChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum MatchResult {
    Won { team_id: TeamId },
    /// Both innings finished level.
    Tied,
}

// ── Match ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    id: MatchId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tournament_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    venue: Option<String>,
    date: NaiveDate,
    settings: MatchSettings,
    teams: [Team; 2],
    innings: Vec<Innings>,
    status: MatchStatus,
    #[serde(default)]
    winner_team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<MatchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    toss: Option<Toss>,
}

impl Match {
    pub fn builder(name: impl Into<String>) -> MatchBuilder<NoTeams> {
        MatchBuilder::new(name)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tournament_name(&self) -> Option<&str> {
        self.tournament_name.as_deref()
    }

    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    pub fn innings(&self) -> &[Innings] {
        &self.innings
    }

    /// The innings currently (or, once completed, last) in play.
    pub fn current_innings(&self) -> Option<&Innings> {
        self.innings.last()
    }

    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn winner_team_id(&self) -> Option<&TeamId> {
        self.winner_team_id.as_ref()
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    pub fn toss(&self) -> Option<&Toss> {
        self.toss.as_ref()
    }

    /// Every squad member, first team first, in batting-list order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|t| t.players().iter())
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players().find(|p| &p.id == id)
    }

    pub fn batting_team(&self) -> Option<&Team> {
        self.current_innings()
            .and_then(|inn| self.team(inn.batting_team_id()))
    }

    pub fn bowling_team(&self) -> Option<&Team> {
        self.current_innings()
            .and_then(|inn| self.team(inn.bowling_team_id()))
    }

    /// Runs the side batting second needs to win, once the chase is on.
    pub fn target(&self) -> Option<u32> {
        if self.innings.len() < 2 {
            return None;
        }
        self.innings.first().map(|first| first.total_runs() + 1)
    }

    /// Runs still required in a chase.
    pub fn required_runs(&self) -> Option<u32> {
        let target = self.target()?;
        let chasing = self.innings.get(1)?;
        Some(target.saturating_sub(chasing.total_runs()))
    }

    /// Legal deliveries left in the current innings.
    pub fn balls_remaining(&self) -> u32 {
        self.current_innings().map_or(0, |inn| {
            self.settings.max_balls().saturating_sub(inn.total_balls())
        })
    }

    /// One-line result, e.g. "Lions won by 12 runs".
    pub fn result_summary(&self) -> Option<String> {
        let team_name = |id: &TeamId| {
            self.team(id)
                .map_or_else(|| id.to_string(), |t| t.name.clone())
        };
        match self.result.as_ref()? {
            MatchResult::Tied => Some("Match tied".to_owned()),
            MatchResult::Won { team_id } => {
                let first = self.innings.first()?;
                let second = self.innings.get(1)?;
                if second.batting_team_id() == team_id {
                    let squad_size = self.team(team_id).map_or(0, Team::len);
                    let margin = self
                        .settings
                        .wickets_for(squad_size)
                        .saturating_sub(second.total_wickets());
                    Some(format!(
                        "{} won by {} wicket{}",
                        team_name(team_id),
                        margin,
                        if margin == 1 { "" } else { "s" }
                    ))
                } else {
                    let margin = first.total_runs().saturating_sub(second.total_runs());
                    Some(format!(
                        "{} won by {} run{}",
                        team_name(team_id),
                        margin,
                        if margin == 1 { "" } else { "s" }
                    ))
                }
            }
        }
    }

    /// Finds a squad member for `role` by id or case-insensitive name.
    ///
    /// The side that fills `role` is searched first, then the other side, so
    /// a wrong-side player is still resolved and rejected by
    /// [`assign_player`](Self::assign_player) with a useful reason.
    pub fn resolve_player(&self, role: Role, query: &str) -> Result<PlayerId, DomainError> {
        let (own, other) = if role.is_batting() {
            (self.batting_team(), self.bowling_team())
        } else {
            (self.bowling_team(), self.batting_team())
        };
        let id = PlayerId::from(query);
        own.into_iter()
            .chain(other)
            .find_map(|team| team.player(&id).or_else(|| team.find_by_name(query)))
            .map(|p| p.id.clone())
            .ok_or_else(|| DomainError::UnknownPlayer(query.to_owned()))
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Binds a player to a role in the current innings.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` when the match is over
    /// - `InvalidRoleAssignment` when the player is on the wrong side,
    ///   already dismissed, or at the other end
    /// - `DuplicateBowler` for the bowler of the previous over
    pub fn assign_player(&mut self, role: Role, player_id: &PlayerId) -> Result<(), DomainError> {
        self.transact(|m| {
            m.ensure_live()?;
            let (team_id, side) = {
                let inn = m.active_innings()?;
                if role.is_batting() {
                    (inn.batting_team_id().clone(), "batting")
                } else {
                    (inn.bowling_team_id().clone(), "bowling")
                }
            };
            let on_side = m.team(&team_id).is_some_and(|t| t.contains(player_id));
            if !on_side {
                return Err(DomainError::InvalidRoleAssignment {
                    role,
                    player_id: player_id.to_string(),
                    reason: format!("not a member of the {side} side"),
                });
            }
            m.active_innings_mut()?.assign(role, player_id.clone())
        })
    }

    /// Records one delivery in the current innings, then hands over to the
    /// second innings or settles the match as needed.
    pub fn record_ball(&mut self, outcome: &BallOutcome) -> Result<BallReport, DomainError> {
        self.transact(|m| {
            m.ensure_live()?;
            let batting = m.active_innings()?.batting_team_id().clone();
            let squad_size = m.team(&batting).map_or(0, Team::len);
            let rules = m.settings.rules(m.target(), squad_size);
            let mut report = m.active_innings_mut()?.apply_ball(outcome, &rules)?;

            if report.innings_completed {
                if m.innings.len() == 1 {
                    let first = m.active_innings()?;
                    let next = Innings::new(
                        first.bowling_team_id().clone(),
                        first.batting_team_id().clone(),
                    );
                    m.innings.push(next);
                } else {
                    m.settle();
                    report.match_completed = true;
                }
            }
            Ok(report)
        })
    }

    /// Retracts the last ball of the current innings. A completed match
    /// goes back to live with its result cleared.
    ///
    /// # Errors
    ///
    /// `NothingToUndo` when the current innings has no balls, including a
    /// second innings that has not started.
    pub fn undo_last_ball(&mut self) -> Result<BallEvent, DomainError> {
        self.transact(|m| {
            let bpo = m.settings.balls_per_over;
            let ball = m.active_innings_mut()?.undo_last_ball(bpo)?;
            if m.is_completed() {
                m.status = MatchStatus::Live;
                m.winner_team_id = None;
                m.result = None;
            }
            Ok(ball)
        })
    }

    fn settle(&mut self) {
        self.status = MatchStatus::Completed;
        let (Some(first), Some(second)) = (self.innings.first(), self.innings.get(1)) else {
            return;
        };
        let result = match second.total_runs().cmp(&first.total_runs()) {
            std::cmp::Ordering::Greater => MatchResult::Won {
                team_id: second.batting_team_id().clone(),
            },
            std::cmp::Ordering::Less => MatchResult::Won {
                team_id: first.batting_team_id().clone(),
            },
            std::cmp::Ordering::Equal => MatchResult::Tied,
        };
        self.winner_team_id = match &result {
            MatchResult::Won { team_id } => Some(team_id.clone()),
            MatchResult::Tied => None,
        };
        self.result = Some(result);
    }

    fn ensure_live(&self) -> Result<(), DomainError> {
        if self.is_completed() {
            Err(DomainError::AlreadyCompleted { subject: "match" })
        } else {
            Ok(())
        }
    }

    fn active_innings(&self) -> Result<&Innings, DomainError> {
        self.innings
            .last()
            .ok_or_else(|| DomainError::InvalidSettings("match has no innings".into()))
    }

    fn active_innings_mut(&mut self) -> Result<&mut Innings, DomainError> {
        self.innings
            .last_mut()
            .ok_or_else(|| DomainError::InvalidSettings("match has no innings".into()))
    }

    /// Applies `f` to a copy and keeps the copy only on success.
    fn transact<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let mut working = self.clone();
        let out = f(&mut working)?;
        *self = working;
        Ok(out)
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: squads not yet supplied.
pub struct NoTeams;
/// Marker: both squads supplied; the match can be built.
pub struct HasTeams;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`Match`].
///
/// `toss` and `build` are only reachable once both squads are set.
pub struct MatchBuilder<T> {
    name: String,
    tournament_name: Option<String>,
    venue: Option<String>,
    date: Option<NaiveDate>,
    settings: Option<MatchSettings>,
    teams: Option<[Team; 2]>,
    toss: Option<Toss>,
    _marker: PhantomData<T>,
}

impl MatchBuilder<NoTeams> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tournament_name: None,
            venue: None,
            date: None,
            settings: None,
            teams: None,
            toss: None,
            _marker: PhantomData,
        }
    }

    /// Supplies both squads. Without a toss, `first` bats first.
    pub fn teams(self, first: Team, second: Team) -> MatchBuilder<HasTeams> {
        MatchBuilder {
            name: self.name,
            tournament_name: self.tournament_name,
            venue: self.venue,
            date: self.date,
            settings: self.settings,
            teams: Some([first, second]),
            toss: self.toss,
            _marker: PhantomData,
        }
    }
}

impl<T> MatchBuilder<T> {
    pub fn tournament(mut self, name: impl Into<String>) -> Self {
        self.tournament_name = Some(name.into());
        self
    }

    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Explicit settings. When omitted they are derived from the larger
    /// squad with default overs.
    pub fn settings(mut self, settings: MatchSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl MatchBuilder<HasTeams> {
    pub fn toss(mut self, winner_team_id: TeamId, choice: TossChoice) -> Self {
        self.toss = Some(Toss {
            winner_team_id,
            choice,
        });
        self
    }

    /// Validates squads and settings and opens the first innings.
    pub fn build(self) -> Result<Match, DomainError> {
        let teams = self
            .teams
            .ok_or_else(|| DomainError::InvalidTeam("both squads are required".into()))?;

        if teams[0].id == teams[1].id {
            return Err(DomainError::InvalidTeam(
                "a team cannot play itself".into(),
            ));
        }
        for team in &teams {
            if team.len() < 2 {
                return Err(DomainError::InvalidTeam(format!(
                    "'{}' needs at least two players",
                    team.name
                )));
            }
        }
        if let Some(shared) = teams[0].players().iter().find(|p| teams[1].contains(&p.id)) {
            return Err(DomainError::InvalidTeam(format!(
                "'{}' is listed in both squads",
                shared.name
            )));
        }

        let largest = teams.iter().map(Team::len).max().unwrap_or(0) as u32;
        let settings = self.settings.unwrap_or_else(|| {
            MatchSettings::for_squads(DEFAULT_OVERS, DEFAULT_BALLS_PER_OVER, largest)
        });
        settings.validate()?;

        let batting_first = match &self.toss {
            None => 0,
            Some(toss) => {
                let winner = teams
                    .iter()
                    .position(|t| t.id == toss.winner_team_id)
                    .ok_or_else(|| {
                        DomainError::InvalidTeam(format!(
                            "toss winner '{}' is not playing",
                            toss.winner_team_id
                        ))
                    })?;
                match toss.choice {
                    TossChoice::Bat => winner,
                    TossChoice::Bowl => 1 - winner,
                }
            }
        };
        let first_innings = Innings::new(
            teams[batting_first].id.clone(),
            teams[1 - batting_first].id.clone(),
        );

        let name = match self.name.trim() {
            "" => format!("{} vs {}", teams[0].name, teams[1].name),
            given => given.to_owned(),
        };

        Ok(Match {
            id: MatchId::generate(),
            name,
            tournament_name: self.tournament_name,
            venue: self.venue,
            date: self
                .date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            settings,
            teams,
            innings: vec![first_innings],
            status: MatchStatus::Live,
            winner_team_id: None,
            result: None,
            toss: self.toss,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::WicketType;

    fn squad(id: &str, names: &[&str]) -> Team {
        let mut team = Team::with_id(TeamId::from(id), id);
        for name in names {
            let pid = format!("{id}-{}", name.to_lowercase());
            team.add_player(Player::with_id(pid.into(), *name)).unwrap();
        }
        team
    }

    /// One over a side, three players each (two wickets to be all out).
    fn fixture() -> Match {
        Match::builder("Test")
            .teams(squad("A", &["Ann", "Amy", "Ali"]), squad("B", &["Ben", "Bo", "Bea"]))
            .settings(MatchSettings::for_squads(1, 6, 3))
            .build()
            .unwrap()
    }

    fn open(m: &mut Match, striker: &str, non_striker: &str, bowler: &str) {
        m.assign_player(Role::Striker, &striker.into()).unwrap();
        m.assign_player(Role::NonStriker, &non_striker.into()).unwrap();
        m.assign_player(Role::Bowler, &bowler.into()).unwrap();
    }

    fn bowl(m: &mut Match, outcomes: &[BallOutcome]) -> BallReport {
        let mut last = BallReport::default();
        for o in outcomes {
            last = m.record_ball(o).unwrap();
        }
        last
    }

    #[test]
    fn builder_defaults() {
        let m = Match::builder("")
            .teams(squad("A", &["Ann", "Amy"]), squad("B", &["Ben", "Bo", "Bea"]))
            .build()
            .unwrap();
        assert_eq!(m.name(), "A vs B");
        assert_eq!(m.settings().total_overs, DEFAULT_OVERS);
        assert_eq!(m.settings().team_size, 3);
        assert_eq!(m.settings().max_wickets, 2);
        assert_eq!(m.status(), MatchStatus::Live);
        assert_eq!(m.innings().len(), 1);
    }

    #[test]
    fn builder_rejects_tiny_or_overlapping_squads() {
        let err = Match::builder("x")
            .teams(squad("A", &["Ann"]), squad("B", &["Ben", "Bo"]))
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTeam(_)));

        let mut b = squad("B", &["Ben"]);
        b.add_player(Player::with_id("A-ann".into(), "Annie")).unwrap();
        let err = Match::builder("x")
            .teams(squad("A", &["Ann", "Amy"]), b)
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTeam(_)));
    }

    #[test]
    fn builder_rejects_uncountable_overs() {
        let err = Match::builder("x")
            .teams(squad("A", &["Ann", "Amy"]), squad("B", &["Ben", "Bo"]))
            .settings(MatchSettings::for_squads(u32::MAX, 2, 2))
            .build()
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidSettings(_)));
        assert_eq!(MatchSettings::for_squads(u32::MAX, 2, 2).max_balls(), u32::MAX);
    }

    #[test]
    fn smaller_side_is_all_out_with_one_batter_left() {
        let mut m = Match::builder("x")
            .teams(
                squad("A", &["Ann", "Amy"]),
                squad("B", &["Ben", "Bo", "Bea", "Bob", "Bill"]),
            )
            .settings(MatchSettings::for_squads(2, 6, 5))
            .build()
            .unwrap();
        assert_eq!(m.settings().max_wickets, 4);
        assert_eq!(m.settings().wickets_for(2), 1);
        assert_eq!(m.settings().wickets_for(5), 4);

        open(&mut m, "A-ann", "A-amy", "B-ben");
        m.record_ball(&BallOutcome::runs(3)).unwrap();
        let report = m
            .record_ball(&BallOutcome::dot().with_wicket(WicketType::Bowled))
            .unwrap();
        assert!(report.innings_completed);
        assert_eq!(m.innings().len(), 2);
        assert_eq!(m.target(), Some(4));

        open(&mut m, "B-ben", "B-bo", "A-ann");
        bowl(&mut m, &[BallOutcome::runs(4)]);
        assert_eq!(m.result_summary().unwrap(), "B won by 4 wickets");
    }

    #[test]
    fn toss_decides_who_bats_first() {
        let m = Match::builder("x")
            .teams(squad("A", &["Ann", "Amy"]), squad("B", &["Ben", "Bo"]))
            .toss(TeamId::from("A"), TossChoice::Bowl)
            .build()
            .unwrap();
        assert_eq!(m.innings()[0].batting_team_id(), &TeamId::from("B"));
    }

    #[test]
    fn wrong_side_assignment_is_rejected() {
        let mut m = fixture();
        let err = m.assign_player(Role::Striker, &"B-ben".into()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRoleAssignment { .. }));
        let err = m.assign_player(Role::Bowler, &"A-ann".into()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRoleAssignment { .. }));
    }

    #[test]
    fn resolve_player_by_name_or_id() {
        let m = fixture();
        assert_eq!(
            m.resolve_player(Role::Striker, "amy").unwrap(),
            PlayerId::from("A-amy")
        );
        assert_eq!(
            m.resolve_player(Role::Bowler, "B-bo").unwrap(),
            PlayerId::from("B-bo")
        );
        assert!(matches!(
            m.resolve_player(Role::Bowler, "nobody"),
            Err(DomainError::UnknownPlayer(_))
        ));
    }

    #[test]
    fn failed_ball_leaves_match_unchanged() {
        let mut m = fixture();
        m.assign_player(Role::Striker, &"A-ann".into()).unwrap();
        let before = m.clone();
        assert!(m.record_ball(&BallOutcome::runs(1)).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn all_out_hands_over_to_second_innings() {
        let mut m = fixture();
        open(&mut m, "A-ann", "A-amy", "B-ben");
        m.record_ball(&BallOutcome::runs(4)).unwrap();
        m.record_ball(&BallOutcome::dot().with_wicket(WicketType::Bowled))
            .unwrap();
        m.assign_player(Role::Striker, &"A-ali".into()).unwrap();
        let report = m
            .record_ball(&BallOutcome::dot().with_wicket(WicketType::Caught))
            .unwrap();

        assert!(report.innings_completed);
        assert!(!report.match_completed);
        assert_eq!(m.innings().len(), 2);
        let second = &m.innings()[1];
        assert_eq!(second.batting_team_id(), &TeamId::from("B"));
        assert_eq!(second.bowling_team_id(), &TeamId::from("A"));
        assert_eq!(second.total_runs(), 0);
        assert!(second.current_striker_id().is_none());
        assert_eq!(m.target(), Some(5));
    }

    #[test]
    fn undo_does_not_cross_into_first_innings() {
        let mut m = fixture();
        open(&mut m, "A-ann", "A-amy", "B-ben");
        bowl(&mut m, &[BallOutcome::dot(); 6]);
        assert_eq!(m.innings().len(), 2);
        assert_eq!(m.undo_last_ball().unwrap_err(), DomainError::NothingToUndo);
        assert_eq!(m.innings().len(), 2);
    }

    fn play_chase(second_innings: &[BallOutcome]) -> Match {
        let mut m = fixture();
        open(&mut m, "A-ann", "A-amy", "B-ben");
        bowl(
            &mut m,
            &[
                BallOutcome::runs(2),
                BallOutcome::runs(2),
                BallOutcome::dot(),
                BallOutcome::dot(),
                BallOutcome::dot(),
                BallOutcome::dot(),
            ],
        );
        open(&mut m, "B-ben", "B-bo", "A-ann");
        bowl(&mut m, second_innings);
        m
    }

    #[test]
    fn chase_reaching_target_wins() {
        let m = play_chase(&[BallOutcome::runs(4), BallOutcome::runs(1)]);
        assert!(m.is_completed());
        assert_eq!(m.winner_team_id(), Some(&TeamId::from("B")));
        assert_eq!(m.result_summary().unwrap(), "B won by 2 wickets");
    }

    #[test]
    fn falling_short_loses() {
        let m = play_chase(&[
            BallOutcome::runs(2),
            BallOutcome::dot(),
            BallOutcome::dot(),
            BallOutcome::dot(),
            BallOutcome::dot(),
            BallOutcome::dot(),
        ]);
        assert!(m.is_completed());
        assert_eq!(m.winner_team_id(), Some(&TeamId::from("A")));
        assert_eq!(m.result_summary().unwrap(), "A won by 2 runs");
    }

    #[test]
    fn equal_totals_tie() {
        let m = play_chase(&[
            BallOutcome::runs(4),
            BallOutcome::dot(),
            BallOutcome::dot(),
            BallOutcome::dot(),
            BallOutcome::dot(),
            BallOutcome::dot(),
        ]);
        assert!(m.is_completed());
        assert_eq!(m.result(), Some(&MatchResult::Tied));
        assert_eq!(m.winner_team_id(), None);
        assert_eq!(m.result_summary().unwrap(), "Match tied");
    }

    #[test]
    fn completed_match_rejects_mutation_until_undone() {
        let mut m = play_chase(&[BallOutcome::runs(6)]);
        assert!(m.is_completed());
        assert_eq!(
            m.record_ball(&BallOutcome::dot()).unwrap_err(),
            DomainError::AlreadyCompleted { subject: "match" }
        );
        assert!(m.assign_player(Role::Bowler, &"A-amy".into()).is_err());

        m.undo_last_ball().unwrap();
        assert_eq!(m.status(), MatchStatus::Live);
        assert!(m.result().is_none());
        assert!(m.winner_team_id().is_none());
        assert_eq!(m.required_runs(), Some(5));
    }

    #[test]
    fn balls_remaining_counts_legal_deliveries() {
        let mut m = fixture();
        open(&mut m, "A-ann", "A-amy", "B-ben");
        bowl(&mut m, &[BallOutcome::wide(), BallOutcome::dot()]);
        assert_eq!(m.balls_remaining(), 5);
    }

    #[test]
    fn match_serializes_round_trip() {
        let mut m = fixture();
        open(&mut m, "A-ann", "A-amy", "B-ben");
        bowl(&mut m, &[BallOutcome::runs(3), BallOutcome::no_ball(1)]);
        let json = serde_json::to_string(&m).unwrap();
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
