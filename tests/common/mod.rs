//! Shared helpers for the integration tests.

#![allow(dead_code)]

use cue_tournament::{record_result, Player, PlayerId, Tournament};

/// `n` players named P0, P1, ... with strictly decreasing averages (P0 strongest).
pub fn players(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("P{i}"), 90.0 - i as f64 * 10.0))
        .collect()
}

/// Position of a player in the roster.
pub fn roster_index(t: &Tournament, id: PlayerId) -> usize {
    t.players.iter().position(|p| p.id == id).unwrap()
}

/// Play every playable match until none remain; the player earlier in the roster always wins 5-2.
/// Returns the number of matches played.
pub fn play_out(t: &mut Tournament) -> usize {
    let mut played = 0;
    loop {
        let next = t.playable_matches().next().cloned();
        let Some(m) = next else { break };
        let p1 = roster_index(t, m.player_1.unwrap());
        let p2 = roster_index(t, m.player_2.unwrap());
        let (s1, s2) = if p1 < p2 { (5, 2) } else { (2, 5) };
        record_result(t, m.id, s1, s2).unwrap();
        played += 1;
    }
    played
}
