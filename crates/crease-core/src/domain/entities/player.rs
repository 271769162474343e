//! Players and teams.
//!
//! A [`Player`]'s career counters are a cache of what the statistics
//! aggregator derives from match history. They are overwritten wholesale by
//! reconciliation and never patched ball by ball.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ids::{PlayerId, TeamId};
use crate::domain::error::DomainError;

/// A player and their cumulative career counters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Reference to an avatar image; opaque to scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub matches: u32,
    pub runs: u32,
    pub wickets: u32,
    pub balls_faced: u32,
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub highest_score: u32,
    pub fours: u32,
    pub sixes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_bowling: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::generate()
    }
}

impl Player {
    /// New player with zeroed counters and a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(PlayerId::generate(), name)
    }

    pub fn with_id(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_owned(),
            ..Self::default()
        }
    }

    /// Copy of this player with every counter zeroed, identity kept.
    pub fn snapshot(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            photo: self.photo.clone(),
            ..Self::default()
        }
    }
}

/// A named squad. Insertion order is batting-list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(TeamId::generate(), name)
    }

    pub fn with_id(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_owned(),
            players: Vec::new(),
        }
    }

    /// Adds a player at the end of the batting list.
    ///
    /// # Errors
    ///
    /// `InvalidTeam` when the name is blank, or when the name (compared
    /// case-insensitively) or id is already in the squad.
    pub fn add_player(&mut self, player: Player) -> Result<(), DomainError> {
        if player.name.is_empty() {
            return Err(DomainError::InvalidTeam(format!(
                "team '{}' has a player with an empty name",
                self.name
            )));
        }
        if self.find_by_name(&player.name).is_some() {
            return Err(DomainError::InvalidTeam(format!(
                "'{}' is already in team '{}'",
                player.name, self.name
            )));
        }
        if self.contains(&player.id) {
            return Err(DomainError::InvalidTeam(format!(
                "player id '{}' appears twice in team '{}'",
                player.id, self.name
            )));
        }
        self.players.push(player);
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.iter().any(|p| &p.id == id)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
