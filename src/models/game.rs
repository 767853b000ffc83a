//! Match (game), its status and result, and bracket slots.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Index of a group in a combined tournament (0 = group A).
pub type GroupId = u32;

/// Display label for a group id: 0 -> "A", 1 -> "B", ... 26 -> "AA".
pub fn group_label(group_id: GroupId) -> String {
    let mut n = group_id as usize + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

/// Lifecycle of a match. `Completed` and `Bye` are terminal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Completed,
    Bye,
}

impl MatchStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Bye)
    }
}

/// One of the two participant positions of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    /// Slot fed by the match at `bracket_index` in the next round: even feeds `One`, odd feeds
    /// `Two`.
    pub fn for_bracket_index(bracket_index: u32) -> Self {
        if bracket_index % 2 == 0 {
            Slot::One
        } else {
            Slot::Two
        }
    }
}

/// Final score line of a completed match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score_1: i32,
    pub score_2: i32,
    /// None means a draw (never for knockout matches).
    pub winner: Option<PlayerId>,
}

/// A single head-to-head match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// None while the participant is still to be determined (later knockout rounds).
    pub player_1: Option<PlayerId>,
    pub player_2: Option<PlayerId>,
    pub status: MatchStatus,
    /// Present iff `status` is `Completed`.
    pub result: Option<MatchResult>,
    /// Knockout round, 1-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    /// Position within the knockout round; parity picks the slot in `next_match_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket_index: Option<u32>,
    /// Knockout match the winner advances into. None for the final.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_match_id: Option<MatchId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl GameMatch {
    /// A pending pool match (round-robin or group stage).
    pub fn pool(player_1: PlayerId, player_2: PlayerId, group_id: Option<GroupId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_1: Some(player_1),
            player_2: Some(player_2),
            status: MatchStatus::Pending,
            result: None,
            round: None,
            bracket_index: None,
            next_match_id: None,
            group_id,
        }
    }

    /// A pending knockout match with a pre-minted id.
    pub fn knockout(
        id: MatchId,
        round: u32,
        bracket_index: u32,
        next_match_id: Option<MatchId>,
    ) -> Self {
        Self {
            id,
            player_1: None,
            player_2: None,
            status: MatchStatus::Pending,
            result: None,
            round: Some(round),
            bracket_index: Some(bracket_index),
            next_match_id,
            group_id: None,
        }
    }

    pub fn is_knockout(&self) -> bool {
        self.round.is_some()
    }

    /// Both participants are known.
    pub fn is_paired(&self) -> bool {
        self.player_1.is_some() && self.player_2.is_some()
    }

    /// Pending with both participants known: ready to hand to the match player.
    pub fn is_playable(&self) -> bool {
        self.status == MatchStatus::Pending && self.is_paired()
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player_1 == Some(player_id) || self.player_2 == Some(player_id)
    }

    pub fn slot(&self, slot: Slot) -> Option<PlayerId> {
        match slot {
            Slot::One => self.player_1,
            Slot::Two => self.player_2,
        }
    }

    pub fn set_slot(&mut self, slot: Slot, player_id: PlayerId) {
        match slot {
            Slot::One => self.player_1 = Some(player_id),
            Slot::Two => self.player_2 = Some(player_id),
        }
    }

    /// Slot this match's winner fills in its `next_match_id`.
    pub fn feeds_slot(&self) -> Option<Slot> {
        self.next_match_id?;
        self.bracket_index.map(Slot::for_bracket_index)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.result.and_then(|r| r.winner)
    }
}
