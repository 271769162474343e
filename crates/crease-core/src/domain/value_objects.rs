//! Domain value objects: ExtraType, WicketType, Role, statuses, categories.
//!
//! # Design
//!
//! These are pure `Copy` value types with no identity.
//! Each one defines its string representation, a `FromStr` parser that
//! accepts the short forms a scorer types at the crease, and the handful of
//! rule queries (`is_legal`, `counts_as_wicket`) the state machine needs.
//!
//! Serialized names follow the labels used on the persisted scoring sheet
//! ("No Ball", "Run Out", ...), so documents written by earlier tooling load
//! unchanged.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ExtraType ─────────────────────────────────────────────────────────────────

/// How a delivery's extras (if any) were conceded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExtraType {
    #[default]
    None,
    Wide,
    #[serde(rename = "No Ball")]
    NoBall,
    Bye,
    #[serde(rename = "Leg Bye")]
    LegBye,
}

impl ExtraType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Wide => "wide",
            Self::NoBall => "no-ball",
            Self::Bye => "bye",
            Self::LegBye => "leg-bye",
        }
    }

    /// A legal delivery counts toward the over and toward bowling figures.
    pub const fn is_legal(self) -> bool {
        !matches!(self, Self::Wide | Self::NoBall)
    }

    /// Wides and no-balls carry a fixed one-run penalty.
    pub const fn penalty_runs(self) -> u32 {
        match self {
            Self::Wide | Self::NoBall => 1,
            _ => 0,
        }
    }

    /// Byes and leg-byes score runs that are not credited to the striker.
    pub const fn is_unattributed_runs(self) -> bool {
        matches!(self, Self::Bye | Self::LegBye)
    }

    /// Prefix used in the recent-balls feed (`WD1`, `NB3`, `B2`, `LB1`).
    pub const fn feed_prefix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Wide => "WD",
            Self::NoBall => "NB",
            Self::Bye => "B",
            Self::LegBye => "LB",
        }
    }
}

impl fmt::Display for ExtraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtraType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "none" | "" => Ok(Self::None),
            "wide" | "wd" => Ok(Self::Wide),
            "no-ball" | "noball" | "nb" => Ok(Self::NoBall),
            "bye" | "b" => Ok(Self::Bye),
            "leg-bye" | "legbye" | "lb" => Ok(Self::LegBye),
            other => Err(DomainError::InvalidBall(format!(
                "unknown extra type: {other}"
            ))),
        }
    }
}

// ── WicketType ────────────────────────────────────────────────────────────────

/// Mode of dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WicketType {
    Bowled,
    Caught,
    #[serde(rename = "LBW")]
    Lbw,
    #[serde(rename = "Run Out")]
    RunOut,
    Stumped,
    #[serde(rename = "Hit Wicket")]
    HitWicket,
    Retired,
}

impl WicketType {
    pub const ALL: [WicketType; 7] = [
        Self::Bowled,
        Self::Caught,
        Self::Lbw,
        Self::RunOut,
        Self::Stumped,
        Self::HitWicket,
        Self::Retired,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bowled => "bowled",
            Self::Caught => "caught",
            Self::Lbw => "lbw",
            Self::RunOut => "run-out",
            Self::Stumped => "stumped",
            Self::HitWicket => "hit-wicket",
            Self::Retired => "retired",
        }
    }

    /// Whether this dismissal counts toward the team's wicket total (and
    /// therefore toward the all-out condition). Retiring does not.
    pub const fn counts_as_wicket(self) -> bool {
        !matches!(self, Self::Retired)
    }

    /// Whether the bowler is credited with this dismissal.
    pub const fn credited_to_bowler(self) -> bool {
        self.counts_as_wicket()
    }
}

impl fmt::Display for WicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "bowled" | "b" => Ok(Self::Bowled),
            "caught" | "c" | "ct" => Ok(Self::Caught),
            "lbw" => Ok(Self::Lbw),
            "run-out" | "runout" | "ro" => Ok(Self::RunOut),
            "stumped" | "st" => Ok(Self::Stumped),
            "hit-wicket" | "hitwicket" | "hw" => Ok(Self::HitWicket),
            "retired" | "rt" => Ok(Self::Retired),
            other => Err(DomainError::InvalidBall(format!(
                "unknown wicket type: {other}"
            ))),
        }
    }
}

// ── Role ──────────────────────────────────────────────────────────────────────

/// A position that must be filled before a ball can be bowled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Striker,
    NonStriker,
    Bowler,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Striker => "striker",
            Self::NonStriker => "non-striker",
            Self::Bowler => "bowler",
        }
    }

    /// Striker and non-striker are drawn from the batting side.
    pub const fn is_batting(self) -> bool {
        matches!(self, Self::Striker | Self::NonStriker)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "striker" | "s" => Ok(Self::Striker),
            "non-striker" | "nonstriker" | "ns" => Ok(Self::NonStriker),
            "bowler" | "b" => Ok(Self::Bowler),
            other => Err(DomainError::InvalidTeam(format!("unknown role: {other}"))),
        }
    }
}

// ── Statuses ──────────────────────────────────────────────────────────────────

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    #[default]
    Live,
    Completed,
}

impl MatchStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Live => "live",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of one innings. `Completed` is terminal for live scoring;
/// only an undo of the closing ball re-opens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InningsStatus {
    #[default]
    Active,
    Completed,
}

// ── Toss ──────────────────────────────────────────────────────────────────────

/// What the toss winner elected to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TossChoice {
    Bat,
    Bowl,
}

impl fmt::Display for TossChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bat => "bat",
            Self::Bowl => "bowl",
        })
    }
}

impl FromStr for TossChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bat" | "batting" => Ok(Self::Bat),
            "bowl" | "bowling" | "field" => Ok(Self::Bowl),
            other => Err(DomainError::InvalidSettings(format!(
                "unknown toss choice: {other}"
            ))),
        }
    }
}

// ── RankingCategory ───────────────────────────────────────────────────────────

/// Leaderboard category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingCategory {
    Batsman,
    Bowler,
    #[default]
    AllRounder,
}

impl RankingCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Batsman => "batsman",
            Self::Bowler => "bowler",
            Self::AllRounder => "allrounder",
        }
    }

    /// One-line description of the ordering rule, for leaderboard footers.
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Batsman => "Ranked by runs, then strike rate.",
            Self::Bowler => "Ranked by wickets, then economy rate.",
            Self::AllRounder => "Combined index: runs plus 25 points per wicket.",
        }
    }
}

impl fmt::Display for RankingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', ' ', '-'], "").as_str() {
            "batsman" | "batter" | "batting" => Ok(Self::Batsman),
            "bowler" | "bowling" => Ok(Self::Bowler),
            "allrounder" | "all" => Ok(Self::AllRounder),
            other => Err(DomainError::InvalidSettings(format!(
                "unknown ranking category: {other}"
            ))),
        }
    }
}
