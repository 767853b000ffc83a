//! Single elimination bracket: seeding, bracket sizing, byes and round linking.
//!
//! The bracket is laid out on `bracket_size = n.next_power_of_two()` lines. Round 1 position `k`
//! holds the `k`-th seed of the standard layout (1 and 2 in opposite halves) against its mirror
//! seed `bracket_size + 1 - seed`. When the mirror seed does not exist the top seed has a bye and
//! is written straight into round 2, so round 1 only contains matches that are actually played.

use crate::models::{
    GameMatch, MatchId, Player, PlayerId, Seeding, Slot, TournamentError, TournamentFormat,
};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Order the players for bracket placement (index 0 = top seed).
pub fn seed_players<R: Rng + ?Sized>(
    players: &[Player],
    seeding: Seeding,
    rng: &mut R,
) -> Vec<PlayerId> {
    let mut seeded: Vec<&Player> = players.iter().collect();
    match seeding {
        Seeding::Random => seeded.shuffle(rng),
        // Stable: equal averages keep their incoming order.
        Seeding::Average => seeded.sort_by(|a, b| b.average.total_cmp(&a.average)),
    }
    seeded.into_iter().map(|p| p.id).collect()
}

/// Number of rounds in a bracket for `n` players (0 for fewer than two).
pub fn bracket_rounds(n: usize) -> u32 {
    if n < 2 {
        0
    } else {
        n.next_power_of_two().trailing_zeros()
    }
}

/// Seeds (1-based) of the top half of each round-1 line pair, in bracket order.
/// `size` must be a power of two. `seed_layout(4) == [1, 4, 2, 3]`.
fn seed_layout(size: usize) -> Vec<usize> {
    let mut layout = vec![1];
    while layout.len() < size {
        let mirror = layout.len() * 2 + 1;
        layout = layout.iter().flat_map(|&s| [s, mirror - s]).collect();
    }
    layout
}

/// Build every match of a knockout stage from players already in seed order.
///
/// Returns round 1 first, then each later round in bracket order. Later rounds start with
/// empty slots except where a bye seed has already been placed.
pub fn build_knockout_bracket(seeded: &[PlayerId]) -> Result<Vec<GameMatch>, TournamentError> {
    let n = seeded.len();
    if n < 2 {
        return Err(TournamentError::InvalidRosterSize {
            format: TournamentFormat::Knockout,
            required: 2,
            actual: n,
        });
    }
    let size = n.next_power_of_two();
    let rounds = bracket_rounds(n);

    // Mint every id up front so links can be set while building.
    let ids: Vec<Vec<MatchId>> = (1..=rounds)
        .map(|round| (0..size >> round).map(|_| Uuid::new_v4()).collect())
        .collect();
    let next_id = |round: u32, index: usize| ids.get(round as usize).map(|next| next[index / 2]);

    let mut matches = Vec::with_capacity(n - 1);
    let mut byes: Vec<(usize, PlayerId)> = Vec::new();

    for (index, &top) in seed_layout(size / 2).iter().enumerate() {
        let bottom = size + 1 - top;
        if bottom > n {
            byes.push((index, seeded[top - 1]));
            continue;
        }
        let mut m = GameMatch::knockout(ids[0][index], 1, index as u32, next_id(1, index));
        m.player_1 = Some(seeded[top - 1]);
        m.player_2 = Some(seeded[bottom - 1]);
        matches.push(m);
    }

    for round in 2..=rounds {
        for (index, &id) in ids[round as usize - 1].iter().enumerate() {
            let mut m = GameMatch::knockout(id, round, index as u32, next_id(round, index));
            if round == 2 {
                for &(from, player) in byes.iter().filter(|(from, _)| from / 2 == index) {
                    m.set_slot(Slot::for_bracket_index(from as u32), player);
                }
            }
            matches.push(m);
        }
    }

    log::debug!(
        "Built knockout bracket: {} players, size {}, {} byes, {} matches",
        n,
        size,
        byes.len(),
        matches.len()
    );
    Ok(matches)
}
