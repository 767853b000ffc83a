//! Group stage of a combined tournament: snake allocation and per-group round-robin.

use crate::logic::round_robin::generate_round_robin_matches;
use crate::models::{GameMatch, GroupId, PlayerId};

/// Split seeded players into `num_groups` groups whose sizes differ by at most one.
///
/// Seeds are dealt in a snake: A, B, C, C, B, A, A, B, ... so every group gets a similar mix of
/// strong and weak players. `num_groups` must be non-zero.
pub fn allocate_groups(seeded: &[PlayerId], num_groups: usize) -> Vec<Vec<PlayerId>> {
    let mut groups = vec![Vec::new(); num_groups];
    for (i, &id) in seeded.iter().enumerate() {
        let lap = i / num_groups;
        let offset = i % num_groups;
        let group = if lap % 2 == 0 {
            offset
        } else {
            num_groups - 1 - offset
        };
        groups[group].push(id);
    }
    groups
}

/// Round-robin matches of every group, group A first, each stamped with its group id.
pub fn generate_group_matches(groups: &[Vec<PlayerId>]) -> Vec<GameMatch> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(g, members)| generate_round_robin_matches(members, Some(g as GroupId)))
        .collect()
}
