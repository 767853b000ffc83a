//! Tournament aggregate, its settings, status and stage.

use crate::logic::compute_standings;
use crate::logic::StandingsRow;
use crate::models::error::TournamentError;
use crate::models::game::{GameMatch, GroupId, MatchId, MatchStatus};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// How the schedule is built.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentFormat {
    /// Everyone plays everyone once.
    #[default]
    RoundRobin,
    /// Single elimination bracket.
    Knockout,
    /// Round-robin groups, then a knockout bracket of the group qualifiers.
    Combined,
}

impl TournamentFormat {
    /// Smallest roster the format accepts (combined additionally needs two players per group).
    pub fn min_players(self) -> usize {
        match self {
            TournamentFormat::RoundRobin | TournamentFormat::Knockout => 3,
            TournamentFormat::Combined => 4,
        }
    }
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentFormat::RoundRobin => write!(f, "Round-robin"),
            TournamentFormat::Knockout => write!(f, "Knockout"),
            TournamentFormat::Combined => write!(f, "Combined"),
        }
    }
}

/// How players are ordered before bracket placement or group allocation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seeding {
    #[default]
    Random,
    /// Highest average first.
    Average,
}

/// Scoring parameters handed to the match player. The engine only stores them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Points needed to win a frame.
    pub target_score: u32,
    /// Frames per match (best of).
    pub best_of: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            target_score: 100,
            best_of: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    pub format: TournamentFormat,
    #[serde(default)]
    pub scoring: ScoringSettings,
    /// Knockout and combined only.
    #[serde(default)]
    pub seeding: Seeding,
    /// Combined only.
    #[serde(default = "default_num_groups")]
    pub num_groups: u32,
    /// Combined only: qualifiers taken from each group.
    #[serde(default = "default_players_advancing")]
    pub players_advancing: u32,
}

fn default_num_groups() -> u32 {
    2
}

fn default_players_advancing() -> u32 {
    2
}

impl TournamentSettings {
    pub fn round_robin() -> Self {
        Self::new(TournamentFormat::RoundRobin)
    }

    pub fn knockout(seeding: Seeding) -> Self {
        Self {
            seeding,
            ..Self::new(TournamentFormat::Knockout)
        }
    }

    pub fn combined(num_groups: u32, players_advancing: u32, seeding: Seeding) -> Self {
        Self {
            seeding,
            num_groups,
            players_advancing,
            ..Self::new(TournamentFormat::Combined)
        }
    }

    fn new(format: TournamentFormat) -> Self {
        Self {
            format,
            scoring: ScoringSettings::default(),
            seeding: Seeding::default(),
            num_groups: default_num_groups(),
            players_advancing: default_players_advancing(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Ongoing,
    Completed,
}

/// Phase of a combined tournament.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Group,
    Knockout,
}

/// Full tournament state: roster, settings, schedule and progress.
///
/// Only [`crate::create_tournament`] builds one and only [`crate::record_result`] changes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Roster, fixed at creation.
    pub players: Vec<Player>,
    pub settings: TournamentSettings,
    /// Full schedule. Knockout matches of a combined tournament are appended when the group
    /// stage ends.
    pub matches: Vec<GameMatch>,
    pub status: TournamentStatus,
    /// Combined format only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
}

impl Tournament {
    pub fn format(&self) -> TournamentFormat {
        self.settings.format
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TournamentStatus::Completed
    }

    /// Pending matches whose participants are both known, in schedule order.
    pub fn playable_matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(|m| m.is_playable())
    }

    pub fn matches_in_round(&self, round: u32) -> impl Iterator<Item = &GameMatch> {
        self.matches.iter().filter(move |m| m.round == Some(round))
    }

    /// Group ids present in the schedule, ascending.
    pub fn group_ids(&self) -> Vec<GroupId> {
        self.matches
            .iter()
            .filter_map(|m| m.group_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Members of a group in roster order.
    pub fn group_player_ids(&self, group_id: GroupId) -> Vec<PlayerId> {
        self.players
            .iter()
            .map(|p| p.id)
            .filter(|&id| {
                self.matches
                    .iter()
                    .any(|m| m.group_id == Some(group_id) && m.involves(id))
            })
            .collect()
    }

    /// The knockout final: the knockout match nothing advances out of.
    pub fn final_match(&self) -> Option<&GameMatch> {
        self.matches
            .iter()
            .find(|m| m.is_knockout() && m.next_match_id.is_none())
    }

    /// Winner of the tournament once completed. Round-robin: top of the standings.
    pub fn champion(&self) -> Option<PlayerId> {
        if !self.is_completed() {
            return None;
        }
        match self.format() {
            TournamentFormat::RoundRobin => self
                .standings(None)
                .ok()
                .and_then(|rows| rows.first().map(|r| r.player_id)),
            TournamentFormat::Knockout | TournamentFormat::Combined => {
                self.final_match().and_then(GameMatch::winner)
            }
        }
    }

    /// Ranked standings of a round-robin pool: the whole roster for round-robin, one group for
    /// combined.
    pub fn standings(
        &self,
        group_id: Option<GroupId>,
    ) -> Result<Vec<StandingsRow>, TournamentError> {
        match (self.format(), group_id) {
            (TournamentFormat::Knockout, _) | (TournamentFormat::Combined, None) => {
                Err(TournamentError::NotApplicable)
            }
            (TournamentFormat::RoundRobin, None) => {
                Ok(compute_standings(&self.matches, &self.player_ids()))
            }
            (TournamentFormat::RoundRobin, Some(g)) => Err(TournamentError::GroupNotFound(g)),
            (TournamentFormat::Combined, Some(g)) => {
                let members = self.group_player_ids(g);
                if members.is_empty() {
                    return Err(TournamentError::GroupNotFound(g));
                }
                let pool: Vec<GameMatch> = self
                    .matches
                    .iter()
                    .filter(|m| m.group_id == Some(g))
                    .cloned()
                    .collect();
                Ok(compute_standings(&pool, &members))
            }
        }
    }

    /// Every group-stage match has a terminal status.
    pub(crate) fn group_stage_finished(&self) -> bool {
        self.matches
            .iter()
            .filter(|m| m.group_id.is_some())
            .all(|m| m.status.is_terminal())
    }

    /// Recompute `status` from the schedule of the active stage.
    pub(crate) fn refresh_status(&mut self) {
        let done = match (self.format(), self.stage) {
            (TournamentFormat::RoundRobin, _) => {
                self.matches.iter().all(|m| m.status.is_terminal())
            }
            (TournamentFormat::Combined, Some(Stage::Group)) => false,
            (TournamentFormat::Knockout | TournamentFormat::Combined, _) => self
                .final_match()
                .is_some_and(|m| m.status == MatchStatus::Completed),
        };
        self.status = if done {
            TournamentStatus::Completed
        } else {
            TournamentStatus::Ongoing
        };
    }
}
