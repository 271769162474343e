//! JSON document store on the local filesystem.
//!
//! The whole [`AppState`] lives in one pretty-printed JSON file. Writes go to
//! a sibling `*.tmp` file first and are renamed into place, so a crash never
//! leaves a half-written document behind.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use crease_core::{
    application::{ApplicationError, ports::StateStore},
    domain::AppState,
    error::{CreaseError, CreaseResult},
};

/// Production state store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the document has ever been written.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "crease.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StateStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> CreaseResult<AppState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No state file yet, starting empty");
                return Ok(AppState::default());
            }
            Err(e) => return Err(map_io_error(&self.path, e, "read")),
        };

        if raw.trim().is_empty() {
            return Ok(AppState::default());
        }

        let state: AppState = serde_json::from_str(&raw).map_err(|e| {
            CreaseError::from(ApplicationError::Serialization {
                reason: format!("{}: {e}", self.path.display()),
            })
        })?;
        debug!(matches = state.matches.len(), "State loaded");
        Ok(state)
    }

    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    fn save(&self, state: &AppState) -> CreaseResult<()> {
        let json = serde_json::to_string_pretty(state).map_err(|e| {
            CreaseError::from(ApplicationError::Serialization {
                reason: e.to_string(),
            })
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| map_io_error(&tmp, e, "write"))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(map_io_error(&self.path, e, "replace"));
        }

        debug!(matches = state.matches.len(), "State saved");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CreaseError {
    ApplicationError::Storage {
        location: path.display().to_string(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crease_core::domain::{
        BallOutcome, Match, Player, Role, Team, UserProfile, WicketType,
    };
    use tempfile::TempDir;

    fn played_match() -> Match {
        let mut home = Team::new("Lions");
        home.add_player(Player::new("Asha")).unwrap();
        home.add_player(Player::new("Ben")).unwrap();
        let mut away = Team::new("Tigers");
        away.add_player(Player::new("Dev")).unwrap();
        away.add_player(Player::new("Eli")).unwrap();

        let mut m = Match::builder("Final")
            .venue("Oval")
            .date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
            .teams(home, away)
            .build()
            .unwrap();
        for (role, name) in [
            (Role::Striker, "Asha"),
            (Role::NonStriker, "Ben"),
            (Role::Bowler, "Dev"),
        ] {
            let id = m.resolve_player(role, name).unwrap();
            m.assign_player(role, &id).unwrap();
        }
        m.record_ball(&BallOutcome::runs(4)).unwrap();
        m.record_ball(&BallOutcome::wide()).unwrap();
        m.record_ball(&BallOutcome::leg_bye(1)).unwrap();
        m.record_ball(&BallOutcome::dot().with_wicket(WicketType::Caught))
            .unwrap();
        m
    }

    #[test]
    fn missing_file_loads_empty_state() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("crease.json"));

        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), AppState::default());
    }

    #[test]
    fn save_then_load_returns_the_same_document() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("nested/dir/crease.json"));

        let mut state = AppState {
            user: UserProfile {
                academy_name: "Greenfield".into(),
                ..UserProfile::default()
            },
            ..AppState::default()
        };
        let m = played_match();
        state.register_squads(&m);
        state.add_match(m);

        store.save(&state).unwrap();
        assert!(store.exists());
        assert!(!store.temp_path().exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.matches[0].innings()[0].balls().len(), 4);
    }

    #[test]
    fn file_uses_persisted_labels() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp.path().join("crease.json"));
        let mut state = AppState::default();
        state.add_match(played_match());
        store.save(&state).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"Leg Bye\""));
        assert!(raw.contains("\"Caught\""));
        assert!(raw.contains("\"live\""));
    }

    #[test]
    fn empty_file_loads_empty_state() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crease.json");
        fs::write(&path, "  \n").unwrap();

        let store = JsonFileStore::new(path);
        assert_eq!(store.load().unwrap(), AppState::default());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crease.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();
        assert!(matches!(
            err,
            CreaseError::Application(ApplicationError::Serialization { .. })
        ));
    }

    #[test]
    fn unwritable_location_is_a_storage_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // A file where a directory is needed.
        let store = JsonFileStore::new(blocker.join("crease.json"));
        let err = store.save(&AppState::default()).unwrap_err();
        assert!(matches!(
            err,
            CreaseError::Application(ApplicationError::Storage { .. })
        ));
    }

    #[test]
    fn failed_replace_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("crease.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "").unwrap();

        // The data path is a non-empty directory, so the rename fails.
        let store = JsonFileStore::new(target.clone());
        let err = store.save(&AppState::default()).unwrap_err();
        assert!(matches!(
            err,
            CreaseError::Application(ApplicationError::Storage { .. })
        ));
        assert!(!temp.path().join("crease.json.tmp").exists());
    }
}
