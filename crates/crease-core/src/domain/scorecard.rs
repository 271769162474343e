//! Per-innings scorecard data. Rendering is left to the caller.

use serde::Serialize;

use crate::domain::entities::{BallEvent, Innings, Match, PlayerId, TeamId};
use crate::domain::stats::{InningsFigures, Overs};
use crate::domain::value_objects::{ExtraType, WicketType};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingRow {
    pub player_id: PlayerId,
    pub name: String,
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
    pub dismissed: bool,
    /// e.g. "b Ravi", "run out", "retired"; `None` while not out.
    pub how_out: Option<String>,
    pub at_crease: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingRow {
    pub player_id: PlayerId,
    pub name: String,
    pub overs: Overs,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub economy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Extras {
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
}

impl Extras {
    pub fn from_balls(balls: &[BallEvent]) -> Self {
        let mut e = Self::default();
        for ball in balls {
            let slot = match ball.extra_type() {
                ExtraType::None => continue,
                ExtraType::Wide => &mut e.wides,
                ExtraType::NoBall => &mut e.no_balls,
                ExtraType::Bye => &mut e.byes,
                ExtraType::LegBye => &mut e.leg_byes,
            };
            *slot += ball.extra_runs();
        }
        e
    }

    pub const fn total(&self) -> u32 {
        self.wides + self.no_balls + self.byes + self.leg_byes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub batting_team_id: TeamId,
    pub batting_team: String,
    pub bowling_team: String,
    pub total_runs: u32,
    pub total_wickets: u32,
    /// Overs in the match's own over length.
    pub overs: Overs,
    pub completed: bool,
    pub batting: Vec<BattingRow>,
    pub did_not_bat: Vec<String>,
    pub bowling: Vec<BowlingRow>,
    pub extras: Extras,
}

impl Scorecard {
    /// One scorecard per innings played so far.
    pub fn for_match(m: &Match) -> Vec<Self> {
        m.innings().iter().map(|inn| Self::for_innings(m, inn)).collect()
    }

    pub fn for_innings(m: &Match, innings: &Innings) -> Self {
        let batting_team = m.team(innings.batting_team_id());
        let bowling_team = m.team(innings.bowling_team_id());

        let mut batting = Vec::new();
        let mut did_not_bat = Vec::new();
        for player in batting_team.map(|t| t.players()).unwrap_or_default() {
            let f = InningsFigures::for_player(&player.id, innings);
            let at_crease = innings.current_striker_id() == Some(&player.id)
                || innings.current_non_striker_id() == Some(&player.id);
            let dismissal = dismissal_of(m, innings, &player.id);
            if !(f.batted || at_crease || dismissal.is_some()) {
                did_not_bat.push(player.name.clone());
                continue;
            }
            batting.push(BattingRow {
                player_id: player.id.clone(),
                name: player.name.clone(),
                runs: f.runs,
                balls_faced: f.balls_faced,
                fours: f.fours,
                sixes: f.sixes,
                strike_rate: f.strike_rate,
                dismissed: dismissal.is_some(),
                how_out: dismissal,
                at_crease,
            });
        }

        let bowling = bowling_team
            .map(|t| t.players())
            .unwrap_or_default()
            .iter()
            .filter_map(|player| {
                let f = InningsFigures::for_player(&player.id, innings);
                f.bowled.then(|| BowlingRow {
                    player_id: player.id.clone(),
                    name: player.name.clone(),
                    overs: f.overs,
                    runs_conceded: f.runs_conceded,
                    wickets: f.wickets,
                    economy: f.economy,
                })
            })
            .collect();

        Self {
            batting_team_id: innings.batting_team_id().clone(),
            batting_team: batting_team.map(|t| t.name.clone()).unwrap_or_default(),
            bowling_team: bowling_team.map(|t| t.name.clone()).unwrap_or_default(),
            total_runs: innings.total_runs(),
            total_wickets: innings.total_wickets(),
            overs: Overs::new(innings.total_balls(), m.settings().balls_per_over),
            completed: innings.is_completed(),
            batting,
            did_not_bat,
            bowling,
            extras: Extras::from_balls(innings.balls()),
        }
    }
}

fn dismissal_of(m: &Match, innings: &Innings, player_id: &PlayerId) -> Option<String> {
    let ball = innings
        .balls()
        .iter()
        .find(|b| b.wicket().is_some_and(|w| &w.player_out_id == player_id))?;
    let kind = ball.wicket()?.kind;
    let bowler = m
        .player(ball.bowler_id())
        .map_or_else(|| ball.bowler_id().to_string(), |p| p.name.clone());
    Some(match kind {
        WicketType::Bowled => format!("b {bowler}"),
        WicketType::Caught => format!("c b {bowler}"),
        WicketType::Lbw => format!("lbw b {bowler}"),
        WicketType::Stumped => format!("st b {bowler}"),
        WicketType::HitWicket => format!("hit wicket b {bowler}"),
        WicketType::RunOut => "run out".to_owned(),
        WicketType::Retired => "retired".to_owned(),
    })
}
