use serde::{Deserialize, Serialize};

use crate::domain::entities::fixture::Match;
use crate::domain::entities::ids::{MatchId, PlayerId};
use crate::domain::entities::player::{Player, Team};

/// Academy profile. Carried through load and save untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub academy_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    pub is_registered: bool,
}

/// The whole persisted document.
///
/// `matches` is kept newest first. `players` is the canonical roster whose
/// counters are rebuilt from `matches`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub user: UserProfile,
    pub matches: Vec<Match>,
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
}

impl AppState {
    /// Inserts a new match at the front of the history.
    pub fn add_match(&mut self, m: Match) {
        self.matches.insert(0, m);
    }

    pub fn find_match(&self, id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id() == id)
    }

    pub fn find_match_mut(&mut self, id: &MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id() == id)
    }

    pub fn find_player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn find_player_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Adds squad members to the roster and saved teams, skipping any
    /// already present by id.
    pub fn register_squads(&mut self, m: &Match) {
        for team in m.teams() {
            for player in team.players() {
                if self.find_player(&player.id).is_none() {
                    self.players.push(player.snapshot());
                }
            }
            match self.teams.iter_mut().find(|t| t.id == team.id) {
                Some(saved) => *saved = team.clone(),
                None => self.teams.push(team.clone()),
            }
        }
    }
}
