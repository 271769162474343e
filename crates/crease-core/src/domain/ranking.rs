//! Leaderboards and per-match awards.
//!
//! Orders are total and deterministic: float tie-breaks use
//! [`f64::total_cmp`], and exact ties keep the input order because the sort
//! is stable. Callers pass aggregates in first-appearance order.

use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::entities::Match;
use crate::domain::error::DomainError;
use crate::domain::stats::{PlayerAggregate, aggregate_match};
use crate::domain::value_objects::RankingCategory;

/// A leaderboard entry. `rank` is the 1-based position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub rank: u32,
    pub player: PlayerAggregate,
}

fn compare(category: RankingCategory, a: &PlayerAggregate, b: &PlayerAggregate) -> Ordering {
    match category {
        RankingCategory::Batsman => b
            .runs
            .cmp(&a.runs)
            .then_with(|| b.strike_rate().total_cmp(&a.strike_rate())),
        RankingCategory::Bowler => b
            .wickets
            .cmp(&a.wickets)
            .then_with(|| a.economy().total_cmp(&b.economy())),
        RankingCategory::AllRounder => b.combined_index().cmp(&a.combined_index()),
    }
}

/// Sorts `players` for `category` and numbers them from 1.
pub fn rank(category: RankingCategory, mut players: Vec<PlayerAggregate>) -> Vec<RankedPlayer> {
    players.sort_by(|a, b| compare(category, a, b));
    players
        .into_iter()
        .zip(1..)
        .map(|(player, rank)| RankedPlayer { rank, player })
        .collect()
}

/// Special awards for one completed match.
///
/// Each award is `None` when nobody qualifies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Awards {
    /// Highest combined index among players who batted or bowled.
    pub mvp: Option<PlayerAggregate>,
    /// Most runs conceded among players who bowled.
    pub most_expensive: Option<PlayerAggregate>,
    /// Most balls faced among batters who faced at least one and scored none.
    pub duck: Option<PlayerAggregate>,
}

impl Awards {
    /// # Errors
    ///
    /// `MatchInProgress` unless the match is completed.
    pub fn for_match(m: &Match) -> Result<Self, DomainError> {
        if !m.is_completed() {
            return Err(DomainError::MatchInProgress {
                match_id: m.id().to_string(),
            });
        }
        Ok(Self::from_aggregates(&aggregate_match(m)))
    }

    /// Awards over an already-aggregated roster, in roster order.
    pub fn from_aggregates(players: &[PlayerAggregate]) -> Self {
        Self {
            mvp: first_max(
                players.iter().filter(|p| p.took_part()),
                PlayerAggregate::combined_index,
            ),
            most_expensive: first_max(
                players.iter().filter(|p| p.bowled),
                |p| p.runs_conceded,
            ),
            duck: first_max(
                players.iter().filter(|p| p.runs == 0 && p.balls_faced > 0),
                |p| p.balls_faced,
            ),
        }
    }
}

/// The first candidate with the greatest key.
fn first_max<'a>(
    candidates: impl Iterator<Item = &'a PlayerAggregate>,
    key: impl Fn(&PlayerAggregate) -> u32,
) -> Option<PlayerAggregate> {
    let mut best: Option<(&PlayerAggregate, u32)> = None;
    for p in candidates {
        let k = key(p);
        if best.is_none_or(|(_, bk)| k > bk) {
            best = Some((p, k));
        }
    }
    best.map(|(p, _)| p.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(id: &str, runs: u32, balls_faced: u32, wickets: u32) -> PlayerAggregate {
        let mut a = PlayerAggregate::new(id.into(), id);
        a.runs = runs;
        a.balls_faced = balls_faced;
        a.wickets = wickets;
        a.batted = balls_faced > 0;
        a
    }

    fn ids(ranked: &[RankedPlayer]) -> Vec<&str> {
        ranked.iter().map(|r| r.player.player_id.as_str()).collect()
    }

    #[test]
    fn all_rounder_index_puts_wickets_to_work() {
        let ranked = rank(
            RankingCategory::AllRounder,
            vec![agg("X", 50, 40, 2), agg("Y", 30, 20, 3)],
        );
        assert_eq!(ids(&ranked), ["Y", "X"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn all_rounder_ties_keep_input_order() {
        let ranked = rank(
            RankingCategory::AllRounder,
            vec![agg("P", 25, 10, 0), agg("Q", 0, 0, 1), agg("R", 25, 5, 0)],
        );
        assert_eq!(ids(&ranked), ["P", "Q", "R"]);
    }

    #[test]
    fn batsman_ties_break_on_strike_rate() {
        let ranked = rank(
            RankingCategory::Batsman,
            vec![agg("slow", 30, 40, 0), agg("fast", 30, 20, 0), agg("top", 31, 60, 0)],
        );
        assert_eq!(ids(&ranked), ["top", "fast", "slow"]);
    }

    #[test]
    fn bowler_ties_break_on_lower_economy() {
        let mut tight = agg("tight", 0, 0, 2);
        tight.runs_conceded = 12;
        tight.legal_balls_bowled = 12;
        let mut loose = agg("loose", 0, 0, 2);
        loose.runs_conceded = 30;
        loose.legal_balls_bowled = 12;
        let mut star = agg("star", 0, 0, 3);
        star.runs_conceded = 40;
        star.legal_balls_bowled = 12;

        let ranked = rank(RankingCategory::Bowler, vec![loose, tight, star]);
        assert_eq!(ids(&ranked), ["star", "tight", "loose"]);
    }

    #[test]
    fn duck_goes_to_longest_scoreless_stay() {
        let mut z = agg("Z", 0, 8, 0);
        z.batted = true;
        let awards = Awards::from_aggregates(&[agg("A", 0, 3, 0), z, agg("B", 12, 9, 0)]);
        assert_eq!(awards.duck.unwrap().player_id.as_str(), "Z");
    }

    #[test]
    fn empty_candidate_sets_give_no_award() {
        let awards = Awards::from_aggregates(&[agg("idle", 0, 0, 0)]);
        assert!(awards.mvp.is_none());
        assert!(awards.most_expensive.is_none());
        assert!(awards.duck.is_none());
    }

    #[test]
    fn award_ties_go_to_first_in_roster() {
        let mut a = agg("A", 10, 5, 0);
        a.bowled = true;
        a.runs_conceded = 20;
        let mut b = agg("B", 10, 5, 0);
        b.bowled = true;
        b.runs_conceded = 20;
        let awards = Awards::from_aggregates(&[a, b]);
        assert_eq!(awards.mvp.unwrap().player_id.as_str(), "A");
        assert_eq!(awards.most_expensive.unwrap().player_id.as_str(), "A");
    }
}
