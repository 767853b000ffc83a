//! All-pairs schedule for a round-robin pool.

use crate::models::{GameMatch, GroupId, PlayerId};

/// One pending match per unordered pair, in `(i, j)` order with `i < j`.
///
/// Works for any roster of two or more; format minimums are checked by the caller.
pub fn generate_round_robin_matches(
    player_ids: &[PlayerId],
    group_id: Option<GroupId>,
) -> Vec<GameMatch> {
    let n = player_ids.len();
    let mut matches = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            matches.push(GameMatch::pool(player_ids[i], player_ids[j], group_id));
        }
    }
    matches
}
