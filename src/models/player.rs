//! Player (tournament participant) data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A participant on the roster. The engine never owns players; they come from the roster
/// collaborator and are copied into the tournament at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Skill estimate (average score per visit). Only used for seeding.
    #[serde(default)]
    pub average: f64,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>, average: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            average,
        }
    }
}
