//! Recording a match result: validation, winner propagation, stage transition, completion.

use crate::logic::stage::advance_to_knockout;
use crate::models::{
    MatchId, MatchResult, MatchStatus, Slot, Stage, Tournament, TournamentError,
};
use rand::Rng;
use std::cmp::Ordering;

/// Record the final score of a match, seeding any knockout stage with the thread-local RNG.
pub fn record_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    score_1: i32,
    score_2: i32,
) -> Result<(), TournamentError> {
    record_result_with_rng(tournament, match_id, score_1, score_2, &mut rand::thread_rng())
}

/// Record the final score of a match.
///
/// The higher score wins; equal scores are a draw, which only pool matches allow. The winner of a
/// knockout match is written into its slot of the next match (which stays pending). When this
/// finishes the group stage of a combined tournament, the knockout bracket is built. On error
/// the tournament is left unchanged.
pub fn record_result_with_rng<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    match_id: MatchId,
    score_1: i32,
    score_2: i32,
    rng: &mut R,
) -> Result<(), TournamentError> {
    let index = tournament
        .matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    let m = &tournament.matches[index];

    if m.status.is_terminal() {
        return Err(TournamentError::MatchAlreadyCompleted(match_id));
    }
    let (Some(player_1), Some(player_2)) = (m.player_1, m.player_2) else {
        return Err(TournamentError::IncompletePairing(match_id));
    };
    if score_1 < 0 || score_2 < 0 {
        return Err(TournamentError::InvalidResult("scores cannot be negative".into()));
    }
    let winner = match score_1.cmp(&score_2) {
        Ordering::Greater => Some(player_1),
        Ordering::Less => Some(player_2),
        Ordering::Equal => None,
    };

    let advance = match (m.next_match_id, winner) {
        (Some(_), None) => {
            return Err(TournamentError::InvalidResult(
                "knockout matches cannot end in a draw".into(),
            ));
        }
        (Some(next_id), Some(w)) => {
            let target = tournament
                .matches
                .iter()
                .position(|t| t.id == next_id)
                .ok_or(TournamentError::MatchNotFound(next_id))?;
            let slot = m.feeds_slot().unwrap_or_else(|| {
                if tournament.matches[target].player_1.is_none() {
                    Slot::One
                } else {
                    Slot::Two
                }
            });
            Some((target, slot, w))
        }
        (None, None) if m.is_knockout() => {
            return Err(TournamentError::InvalidResult(
                "knockout matches cannot end in a draw".into(),
            ));
        }
        (None, _) => None,
    };

    // Work on a copy so a failing stage transition leaves the tournament untouched.
    let mut updated = tournament.clone();
    let played = &mut updated.matches[index];
    played.status = MatchStatus::Completed;
    played.result = Some(MatchResult {
        score_1,
        score_2,
        winner,
    });
    if let Some((target, slot, w)) = advance {
        updated.matches[target].set_slot(slot, w);
    }

    if updated.stage == Some(Stage::Group) {
        advance_to_knockout(&mut updated, rng)?;
    }
    updated.refresh_status();
    if updated.is_completed() {
        log::info!("Tournament {} completed", updated.id);
    }

    *tournament = updated;
    Ok(())
}
