use std::collections::HashSet;

use crate::domain::{
    entities::{AppState, BallEvent, Innings, Match},
    error::DomainError,
};

/// Integrity checks for records that arrive from storage.
///
/// Live scoring keeps these invariants by construction; a document edited
/// outside the tool may not.
pub struct DomainValidator;

impl DomainValidator {
    /// Innings totals and dismissals must agree with the recorded balls.
    pub fn validate_innings(innings: &Innings) -> Result<(), DomainError> {
        let balls = innings.balls();
        let runs: u32 = balls.iter().map(BallEvent::total_runs).sum();
        let legal = balls.iter().filter(|b| b.is_legal()).count() as u32;
        let wickets = balls.iter().filter(|b| b.is_counted_wicket()).count() as u32;

        let mismatch = |what: &str, stored: u32, derived: u32| {
            DomainError::CorruptRecord(format!(
                "{what} is {stored} but the balls add up to {derived}"
            ))
        };
        if innings.total_runs() != runs {
            return Err(mismatch("total runs", innings.total_runs(), runs));
        }
        if innings.total_balls() != legal {
            return Err(mismatch("total balls", innings.total_balls(), legal));
        }
        if innings.total_wickets() != wickets {
            return Err(mismatch("total wickets", innings.total_wickets(), wickets));
        }

        let recorded: HashSet<_> = balls
            .iter()
            .filter_map(|b| b.wicket().map(|w| &w.player_out_id))
            .collect();
        let stored: HashSet<_> = innings.dismissed_player_ids().iter().collect();
        if recorded != stored {
            return Err(DomainError::CorruptRecord(
                "dismissed players do not match the recorded wickets".into(),
            ));
        }
        Ok(())
    }

    pub fn validate_match(m: &Match) -> Result<(), DomainError> {
        m.settings().validate()?;
        if m.innings().is_empty() || m.innings().len() > 2 {
            return Err(DomainError::CorruptRecord(format!(
                "match '{}' has {} innings",
                m.id(),
                m.innings().len()
            )));
        }
        for innings in m.innings() {
            Self::validate_innings(innings)?;
        }
        Ok(())
    }

    pub fn validate_state(state: &AppState) -> Result<(), DomainError> {
        state.matches.iter().try_for_each(Self::validate_match)
    }
}
