//! Shared helpers for loading state and addressing matches.

use tracing::warn;

use crate::{
    application::{ApplicationError, ports::StateStore},
    domain::{AppState, DomainValidator},
    error::CreaseResult,
};

/// Key that always addresses the most recently created match.
pub const LATEST: &str = "latest";

/// Loads the document and rejects it if any match breaks a scoring
/// invariant.
pub(crate) fn load_checked(store: &dyn StateStore) -> CreaseResult<AppState> {
    let state = store.load()?;
    if let Err(e) = DomainValidator::validate_state(&state) {
        warn!(error = %e, "Stored state failed validation");
        return Err(ApplicationError::CorruptState {
            reason: e.to_string(),
        }
        .into());
    }
    Ok(state)
}

/// Position of the match addressed by `key` in `state.matches`.
///
/// `key` is `latest`, a full id, or a unique id prefix.
pub(crate) fn match_index(state: &AppState, key: &str) -> CreaseResult<usize> {
    let key = key.trim();
    let not_found = || ApplicationError::MatchNotFound {
        key: key.to_owned(),
    };

    if key.is_empty() || key.eq_ignore_ascii_case(LATEST) {
        return if state.matches.is_empty() {
            Err(not_found().into())
        } else {
            Ok(0)
        };
    }

    if let Some(i) = state.matches.iter().position(|m| m.id().as_str() == key) {
        return Ok(i);
    }

    let hits: Vec<usize> = state
        .matches
        .iter()
        .enumerate()
        .filter(|(_, m)| m.id().as_str().starts_with(key))
        .map(|(i, _)| i)
        .collect();

    match hits.as_slice() {
        [] => Err(not_found().into()),
        [only] => Ok(*only),
        many => Err(ApplicationError::AmbiguousMatch {
            key: key.to_owned(),
            candidates: many
                .iter()
                .map(|&i| {
                    let m = &state.matches[i];
                    format!("{} ({})", m.id().short(), m.name())
                })
                .collect(),
        }
        .into()),
    }
}
