//! Ball event model.
//!
//! A [`BallOutcome`] is what the scorer submits; a [`BallEvent`] is what the
//! innings records once it knows who was at the crease and where the ball
//! falls in the over. Events are append-only and are the single source of
//! truth for every derived figure.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ids::{BallId, PlayerId};
use crate::domain::error::DomainError;
use crate::domain::value_objects::{ExtraType, Role, WicketType};

// ── Wicket ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wicket {
    #[serde(rename = "type")]
    pub kind: WicketType,
    pub player_out_id: PlayerId,
}

// ── BallOutcome ───────────────────────────────────────────────────────────────

/// The result of one delivery as reported by the scorer.
///
/// ```
/// use crease_core::domain::{BallOutcome, Role, WicketType};
///
/// let four = BallOutcome::runs(4);
/// assert_eq!(four.total_runs(), 4);
///
/// let run_out = BallOutcome::runs(1)
///     .with_wicket(WicketType::RunOut)
///     .with_player_out(Role::NonStriker);
/// assert!(run_out.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallOutcome {
    runs: u32,
    extra_type: ExtraType,
    extra_runs: u32,
    wicket: Option<WicketType>,
    player_out: Role,
}

impl BallOutcome {
    /// Runs off the bat from a legal delivery.
    pub const fn runs(runs: u32) -> Self {
        Self::new(runs, ExtraType::None)
    }

    /// A dot ball.
    pub const fn dot() -> Self {
        Self::runs(0)
    }

    /// A wide (one-run penalty, not a legal delivery).
    pub const fn wide() -> Self {
        Self::new(0, ExtraType::Wide)
    }

    /// A no-ball with `runs` hit off the bat.
    pub const fn no_ball(runs: u32) -> Self {
        Self::new(runs, ExtraType::NoBall)
    }

    pub const fn bye(runs: u32) -> Self {
        Self::new(runs, ExtraType::Bye)
    }

    pub const fn leg_bye(runs: u32) -> Self {
        Self::new(runs, ExtraType::LegBye)
    }

    /// General constructor. For byes and leg-byes `runs` is the number run,
    /// which goes to extras rather than to the striker.
    pub const fn new(runs: u32, extra_type: ExtraType) -> Self {
        let (bat, extra) = if extra_type.is_unattributed_runs() {
            (0, runs)
        } else {
            (runs, extra_type.penalty_runs())
        };
        Self {
            runs: bat,
            extra_type,
            extra_runs: extra,
            wicket: None,
            player_out: Role::Striker,
        }
    }

    /// Attaches a dismissal. The striker is out unless [`with_player_out`]
    /// says otherwise.
    ///
    /// [`with_player_out`]: Self::with_player_out
    pub const fn with_wicket(mut self, kind: WicketType) -> Self {
        self.wicket = Some(kind);
        self
    }

    /// Which batter the attached wicket dismisses.
    pub const fn with_player_out(mut self, role: Role) -> Self {
        self.player_out = role;
        self
    }

    pub const fn bat_runs(&self) -> u32 {
        self.runs
    }

    pub const fn extra_type(&self) -> ExtraType {
        self.extra_type
    }

    pub const fn extra_runs(&self) -> u32 {
        self.extra_runs
    }

    pub const fn wicket(&self) -> Option<WicketType> {
        self.wicket
    }

    pub const fn player_out(&self) -> Role {
        self.player_out
    }

    pub const fn total_runs(&self) -> u32 {
        self.runs + self.extra_runs
    }

    pub const fn is_legal(&self) -> bool {
        self.extra_type.is_legal()
    }

    /// Construction checks that do not depend on innings state.
    ///
    /// # Errors
    ///
    /// `InvalidBall` for a bye or leg-bye with no runs, runs on a wide, or a
    /// wicket that names the bowler.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.extra_type.is_unattributed_runs() && self.extra_runs == 0 {
            return Err(DomainError::InvalidBall(format!(
                "a {} must carry at least one run",
                self.extra_type
            )));
        }
        if self.extra_type == ExtraType::Wide && self.runs > 0 {
            return Err(DomainError::InvalidBall(
                "runs cannot be scored off the bat from a wide".into(),
            ));
        }
        if self.wicket.is_some() && !self.player_out.is_batting() {
            return Err(DomainError::InvalidBall(
                "only a batter can be dismissed".into(),
            ));
        }
        Ok(())
    }
}

// ── Crease ────────────────────────────────────────────────────────────────────

/// The three players bound for a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crease {
    pub striker: PlayerId,
    pub non_striker: PlayerId,
    pub bowler: PlayerId,
}

// ── BallEvent ─────────────────────────────────────────────────────────────────

/// One recorded delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallEvent {
    id: BallId,
    over: u32,
    ball_number: u32,
    striker_id: PlayerId,
    non_striker_id: PlayerId,
    bowler_id: PlayerId,
    runs: u32,
    extra_type: ExtraType,
    extra_runs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wicket: Option<Wicket>,
    is_legal: bool,
}

impl BallEvent {
    /// Records `outcome` at position (`over`, `ball_number`) with `crease`
    /// as the players involved.
    pub(crate) fn record(
        outcome: &BallOutcome,
        crease: Crease,
        over: u32,
        ball_number: u32,
    ) -> Self {
        let wicket = outcome.wicket().map(|kind| Wicket {
            kind,
            player_out_id: match outcome.player_out() {
                Role::NonStriker => crease.non_striker.clone(),
                _ => crease.striker.clone(),
            },
        });
        Self {
            id: BallId::generate(),
            over,
            ball_number,
            striker_id: crease.striker,
            non_striker_id: crease.non_striker,
            bowler_id: crease.bowler,
            runs: outcome.bat_runs(),
            extra_type: outcome.extra_type(),
            extra_runs: outcome.extra_runs(),
            wicket,
            is_legal: outcome.is_legal(),
        }
    }

    pub fn id(&self) -> &BallId {
        &self.id
    }

    /// Zero-based over index.
    pub const fn over(&self) -> u32 {
        self.over
    }

    /// One-based position within the over. Illegal deliveries share the
    /// number of the legal ball that follows them.
    pub const fn ball_number(&self) -> u32 {
        self.ball_number
    }

    pub fn striker_id(&self) -> &PlayerId {
        &self.striker_id
    }

    pub fn non_striker_id(&self) -> &PlayerId {
        &self.non_striker_id
    }

    pub fn bowler_id(&self) -> &PlayerId {
        &self.bowler_id
    }

    /// Runs credited to the striker.
    pub const fn runs(&self) -> u32 {
        self.runs
    }

    pub const fn extra_type(&self) -> ExtraType {
        self.extra_type
    }

    pub const fn extra_runs(&self) -> u32 {
        self.extra_runs
    }

    pub fn wicket(&self) -> Option<&Wicket> {
        self.wicket.as_ref()
    }

    pub const fn is_legal(&self) -> bool {
        self.is_legal
    }

    pub const fn total_runs(&self) -> u32 {
        self.runs + self.extra_runs
    }

    /// Whether this delivery counts as a ball faced by the striker.
    pub const fn is_faced(&self) -> bool {
        self.is_legal || matches!(self.extra_type, ExtraType::NoBall)
    }

    /// Whether this delivery dismissed a batter in a way that counts
    /// toward the wicket total.
    pub fn is_counted_wicket(&self) -> bool {
        self.wicket
            .as_ref()
            .is_some_and(|w| w.kind.counts_as_wicket())
    }

    /// Compact label for the recent-balls feed: `W`, `WD1`, `NB3`, `LB1`, `4`.
    pub fn short_label(&self) -> String {
        if self.wicket.is_some() {
            return "W".to_owned();
        }
        match self.extra_type {
            ExtraType::None => self.runs.to_string(),
            other => format!("{}{}", other.feed_prefix(), self.total_runs()),
        }
    }
}
