//! Standings of a round-robin pool: 3 points for a win, 1 for a draw.

use crate::models::{GameMatch, MatchStatus, Player, PlayerId, TournamentError};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

/// One ranked line of a standings table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub player_id: PlayerId,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
    pub score_differential: i64,
}

impl StandingsRow {
    fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            ..Default::default()
        }
    }
}

/// Rank the players of one pool from its completed matches.
///
/// Order: points, then score differential, then wins (all descending). Players still tied keep
/// their order in `player_ids`, so the ranking never depends on match order.
/// Matches involving anyone outside `player_ids` are ignored.
pub fn compute_standings(matches: &[GameMatch], player_ids: &[PlayerId]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = player_ids.iter().map(|&id| StandingsRow::new(id)).collect();
    let index_of = |id: PlayerId| player_ids.iter().position(|&p| p == id);

    for m in matches.iter().filter(|m| m.status == MatchStatus::Completed) {
        let (Some(p1), Some(p2), Some(result)) = (m.player_1, m.player_2, m.result) else {
            continue;
        };
        let (Some(i1), Some(i2)) = (index_of(p1), index_of(p2)) else {
            continue;
        };
        let diff = i64::from(result.score_1) - i64::from(result.score_2);

        rows[i1].played += 1;
        rows[i2].played += 1;
        rows[i1].score_differential += diff;
        rows[i2].score_differential -= diff;

        match result.winner {
            None => {
                for i in [i1, i2] {
                    rows[i].draws += 1;
                    rows[i].points += POINTS_FOR_DRAW;
                }
            }
            Some(w) => {
                let (winner, loser) = if w == p1 { (i1, i2) } else { (i2, i1) };
                rows[winner].wins += 1;
                rows[winner].points += POINTS_FOR_WIN;
                rows[loser].losses += 1;
            }
        }
    }

    // Stable sort: ties fall back to roster order.
    rows.sort_by_key(|r| (Reverse(r.points), Reverse(r.score_differential), Reverse(r.wins)));
    rows
}

/// Write standings as CSV (rank, name and counters) for export.
pub fn standings_to_csv(
    rows: &[StandingsRow],
    players: &[Player],
) -> Result<String, TournamentError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "rank",
            "player",
            "played",
            "wins",
            "draws",
            "losses",
            "points",
            "differential",
        ])
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    for (rank, row) in rows.iter().enumerate() {
        let name = players
            .iter()
            .find(|p| p.id == row.player_id)
            .map_or_else(|| row.player_id.to_string(), |p| p.name.clone());
        writer
            .write_record([
                (rank + 1).to_string(),
                name,
                row.played.to_string(),
                row.wins.to_string(),
                row.draws.to_string(),
                row.losses.to_string(),
                row.points.to_string(),
                row.score_differential.to_string(),
            ])
            .map_err(|e| TournamentError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TournamentError::Export(e.to_string()))
}
