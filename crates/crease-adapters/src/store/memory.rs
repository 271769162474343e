//! In-memory state store for testing.

use std::sync::{Arc, RwLock};

use crease_core::{
    application::{ApplicationError, ports::StateStore},
    domain::AppState,
    error::CreaseResult,
};

/// Thread-safe in-memory document. Clones share the same document.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    inner: Arc<RwLock<AppState>>,
}

impl InMemoryStateStore {
    /// Create a store holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `state`.
    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    /// Number of stored matches (testing helper).
    pub fn match_count(&self) -> usize {
        self.inner.read().map_or(0, |s| s.matches.len())
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self) -> CreaseResult<AppState> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn save(&self, state: &AppState) -> CreaseResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = state.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crease_core::domain::{Match, Player, Team};

    fn sample_match() -> Match {
        let mut home = Team::new("Lions");
        home.add_player(Player::new("Asha")).unwrap();
        home.add_player(Player::new("Ben")).unwrap();
        let mut away = Team::new("Tigers");
        away.add_player(Player::new("Dev")).unwrap();
        away.add_player(Player::new("Eli")).unwrap();
        Match::builder("Final").teams(home, away).build().unwrap()
    }

    #[test]
    fn fresh_store_loads_default() {
        let store = InMemoryStateStore::new();
        assert_eq!(store.load().unwrap(), AppState::default());
    }

    #[test]
    fn clones_share_the_document() {
        let store = InMemoryStateStore::new();
        let handle = store.clone();

        let mut state = AppState::default();
        state.add_match(sample_match());
        store.save(&state).unwrap();

        assert_eq!(handle.match_count(), 1);
        assert_eq!(handle.load().unwrap(), state);
    }

    #[test]
    fn save_replaces_the_whole_document() {
        let mut seeded = AppState::default();
        seeded.add_match(sample_match());
        let store = InMemoryStateStore::with_state(seeded);

        store.save(&AppState::default()).unwrap();
        assert_eq!(store.match_count(), 0);
    }
}
