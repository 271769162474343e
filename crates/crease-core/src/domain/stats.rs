//! Statistics aggregator.
//!
//! Everything here is a pure function of recorded balls. Nothing is cached:
//! figures are recomputed on every query so they cannot drift from the
//! ball history.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use crate::domain::entities::{Innings, Match, PlayerId};

/// Bowling figures are always expressed in six-ball overs.
pub const BALLS_PER_BOWLING_OVER: u32 = 6;

/// Points per wicket in the combined (all-rounder) index.
pub const WICKET_POINTS: u32 = 25;

// ── Overs ─────────────────────────────────────────────────────────────────────

/// A count of legal balls shown as `O.B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Overs {
    pub balls: u32,
    pub balls_per_over: u32,
}

impl Overs {
    pub const fn new(balls: u32, balls_per_over: u32) -> Self {
        Self {
            balls,
            balls_per_over,
        }
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bpo = self.balls_per_over.max(1);
        write!(f, "{}.{}", self.balls / bpo, self.balls % bpo)
    }
}

fn strike_rate(runs: u32, balls_faced: u32) -> f64 {
    if balls_faced == 0 {
        0.0
    } else {
        f64::from(runs) * 100.0 / f64::from(balls_faced)
    }
}

fn economy(runs_conceded: u32, legal_balls: u32) -> f64 {
    if legal_balls == 0 {
        0.0
    } else {
        f64::from(runs_conceded) * f64::from(BALLS_PER_BOWLING_OVER) / f64::from(legal_balls)
    }
}

// ── Per innings ───────────────────────────────────────────────────────────────

/// One player's batting and bowling in one innings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InningsFigures {
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub legal_balls_bowled: u32,
    pub overs: Overs,
    pub economy: f64,
    /// Took strike for at least one delivery.
    pub batted: bool,
    /// Sent down at least one delivery.
    pub bowled: bool,
}

impl InningsFigures {
    pub fn for_player(player_id: &PlayerId, innings: &Innings) -> Self {
        let mut f = Self {
            overs: Overs::new(0, BALLS_PER_BOWLING_OVER),
            ..Self::default()
        };

        for ball in innings.balls().iter().filter(|b| b.striker_id() == player_id) {
            f.batted = true;
            f.runs += ball.runs();
            if ball.is_faced() {
                f.balls_faced += 1;
            }
            match ball.runs() {
                4 => f.fours += 1,
                6 => f.sixes += 1,
                _ => {}
            }
        }

        for ball in innings.balls().iter().filter(|b| b.bowler_id() == player_id) {
            f.bowled = true;
            f.runs_conceded += ball.total_runs();
            if ball.is_legal() {
                f.legal_balls_bowled += 1;
            }
            if ball
                .wicket()
                .is_some_and(|w| w.kind.credited_to_bowler())
            {
                f.wickets += 1;
            }
        }

        f.strike_rate = strike_rate(f.runs, f.balls_faced);
        f.overs = Overs::new(f.legal_balls_bowled, BALLS_PER_BOWLING_OVER);
        f.economy = economy(f.runs_conceded, f.legal_balls_bowled);
        f
    }
}

// ── Best bowling ──────────────────────────────────────────────────────────────

/// Wickets and runs from a single innings, shown as `w/r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BowlingBest {
    pub wickets: u32,
    pub runs: u32,
}

impl BowlingBest {
    /// More wickets is better; on equal wickets, fewer runs.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.cmp_quality(other) == Ordering::Greater
    }

    fn cmp_quality(&self, other: &Self) -> Ordering {
        self.wickets
            .cmp(&other.wickets)
            .then_with(|| other.runs.cmp(&self.runs))
    }
}

impl fmt::Display for BowlingBest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wickets, self.runs)
    }
}

// ── Aggregates ────────────────────────────────────────────────────────────────

/// A player's figures summed over one or more matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerAggregate {
    pub player_id: PlayerId,
    pub name: String,
    pub matches: u32,
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub highest_score: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub legal_balls_bowled: u32,
    pub best_bowling: Option<BowlingBest>,
    pub batted: bool,
    pub bowled: bool,
}

impl PlayerAggregate {
    pub fn new(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            matches: 0,
            runs: 0,
            balls_faced: 0,
            fours: 0,
            sixes: 0,
            highest_score: 0,
            runs_conceded: 0,
            wickets: 0,
            legal_balls_bowled: 0,
            best_bowling: None,
            batted: false,
            bowled: false,
        }
    }

    /// Runs plus [`WICKET_POINTS`] per wicket.
    pub const fn combined_index(&self) -> u32 {
        self.runs + WICKET_POINTS * self.wickets
    }

    pub fn strike_rate(&self) -> f64 {
        strike_rate(self.runs, self.balls_faced)
    }

    pub fn economy(&self) -> f64 {
        economy(self.runs_conceded, self.legal_balls_bowled)
    }

    pub const fn overs(&self) -> Overs {
        Overs::new(self.legal_balls_bowled, BALLS_PER_BOWLING_OVER)
    }

    /// Took part with bat or ball.
    pub const fn took_part(&self) -> bool {
        self.batted || self.bowled
    }

    fn add_innings(&mut self, f: &InningsFigures) {
        self.runs += f.runs;
        self.balls_faced += f.balls_faced;
        self.fours += f.fours;
        self.sixes += f.sixes;
        self.runs_conceded += f.runs_conceded;
        self.wickets += f.wickets;
        self.legal_balls_bowled += f.legal_balls_bowled;
        self.batted |= f.batted;
        self.bowled |= f.bowled;
        if f.batted {
            self.highest_score = self.highest_score.max(f.runs);
        }
        if f.bowled {
            self.offer_best(BowlingBest {
                wickets: f.wickets,
                runs: f.runs_conceded,
            });
        }
    }

    fn absorb(&mut self, other: &Self) {
        self.matches += other.matches;
        self.runs += other.runs;
        self.balls_faced += other.balls_faced;
        self.fours += other.fours;
        self.sixes += other.sixes;
        self.highest_score = self.highest_score.max(other.highest_score);
        self.runs_conceded += other.runs_conceded;
        self.wickets += other.wickets;
        self.legal_balls_bowled += other.legal_balls_bowled;
        self.batted |= other.batted;
        self.bowled |= other.bowled;
        if let Some(best) = other.best_bowling {
            self.offer_best(best);
        }
    }

    fn offer_best(&mut self, candidate: BowlingBest) {
        let replace = self
            .best_bowling
            .is_none_or(|current| candidate.is_better_than(&current));
        if replace {
            self.best_bowling = Some(candidate);
        }
    }
}

/// Figures for every squad member of one match, in roster order.
pub fn aggregate_match(m: &Match) -> Vec<PlayerAggregate> {
    m.players()
        .map(|player| {
            let mut agg = PlayerAggregate::new(player.id.clone(), player.name.clone());
            agg.matches = 1;
            for innings in m.innings() {
                agg.add_innings(&InningsFigures::for_player(&player.id, innings));
            }
            agg
        })
        .collect()
}

/// Figures summed per player id over `matches`, in order of first
/// appearance.
pub fn aggregate_matches<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Vec<PlayerAggregate> {
    let mut order: Vec<PlayerAggregate> = Vec::new();
    let mut index: HashMap<PlayerId, usize> = HashMap::new();

    for m in matches {
        for agg in aggregate_match(m) {
            match index.get(&agg.player_id) {
                Some(&i) => order[i].absorb(&agg),
                None => {
                    index.insert(agg.player_id.clone(), order.len());
                    order.push(agg);
                }
            }
        }
    }
    order
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

/// Headline numbers across the match history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total_matches: usize,
    pub completed_matches: usize,
    pub total_runs: u32,
    pub total_wickets: u32,
    /// Highest team total in any innings.
    pub highest_innings: u32,
}

impl Summary {
    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a Match>) -> Self {
        let mut s = Self::default();
        for m in matches {
            s.total_matches += 1;
            if m.is_completed() {
                s.completed_matches += 1;
            }
            for inn in m.innings() {
                s.total_runs += inn.total_runs();
                s.total_wickets += inn.total_wickets();
                s.highest_innings = s.highest_innings.max(inn.total_runs());
            }
        }
        s
    }
}
