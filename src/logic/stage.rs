//! Stage coordination for combined tournaments: group stage -> knockout stage.

use crate::logic::knockout::{build_knockout_bracket, seed_players};
use crate::models::{group_label, Player, PlayerId, Stage, Tournament, TournamentError};
use rand::Rng;

/// Qualifiers of every group (A first), each list best ranked first.
fn ranked_qualifiers(tournament: &Tournament) -> Result<Vec<Vec<PlayerId>>, TournamentError> {
    let per_group = tournament.settings.players_advancing as usize;
    let mut groups = Vec::new();
    for group_id in tournament.group_ids() {
        let rows = tournament.standings(Some(group_id))?;
        log::debug!("Group {}: {} of {} advance", group_label(group_id), per_group, rows.len());
        groups.push(rows.iter().take(per_group).map(|r| r.player_id).collect());
    }
    Ok(groups)
}

/// Group qualifiers: group by group (A first), best ranked first within each group.
pub fn collect_qualifiers(tournament: &Tournament) -> Result<Vec<PlayerId>, TournamentError> {
    Ok(ranked_qualifiers(tournament)?.into_iter().flatten().collect())
}

/// Knockout seed order of the qualifiers: all group winners, then all runners-up, and so on.
///
/// Group winners are ordered with the tournament's seeding setting; every later rank follows
/// the same group order, so seed `i` meets a player from another group in round 1.
pub fn seed_qualifiers<R: Rng + ?Sized>(
    tournament: &Tournament,
    rng: &mut R,
) -> Result<Vec<PlayerId>, TournamentError> {
    let groups = ranked_qualifiers(tournament)?;
    let winners: Vec<Player> = groups
        .iter()
        .filter_map(|q| q.first().and_then(|&id| tournament.get_player(id)).cloned())
        .collect();
    let group_order: Vec<usize> = seed_players(&winners, tournament.settings.seeding, rng)
        .into_iter()
        .filter_map(|id| groups.iter().position(|q| q.first() == Some(&id)))
        .collect();

    let per_group = groups.iter().map(Vec::len).max().unwrap_or(0);
    let mut seeded = Vec::with_capacity(groups.iter().map(Vec::len).sum());
    for rank in 0..per_group {
        seeded.extend(group_order.iter().filter_map(|&g| groups[g].get(rank).copied()));
    }
    Ok(seeded)
}

/// Start the knockout stage once every group match is finished.
///
/// Does nothing (returns `Ok(false)`) unless the tournament is in the group stage and the
/// whole group stage is terminal. The transition happens at most once.
pub fn advance_to_knockout<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<bool, TournamentError> {
    if tournament.stage != Some(Stage::Group) || !tournament.group_stage_finished() {
        return Ok(false);
    }

    let seeded = seed_qualifiers(tournament, rng)?;
    let bracket = build_knockout_bracket(&seeded)?;

    log::info!(
        "Tournament {}: group stage finished, {} qualifiers enter the knockout stage",
        tournament.id,
        seeded.len()
    );
    tournament.matches.extend(bracket);
    tournament.stage = Some(Stage::Knockout);
    Ok(true)
}
