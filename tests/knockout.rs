//! Integration tests for knockout brackets: sizing, byes, linking and result propagation.

mod common;

use common::{play_out, players, roster_index};
use cue_tournament::{
    build_knockout_bracket, create_tournament, create_tournament_with_rng, record_result,
    seed_players, GameMatch, MatchStatus, Seeding, Slot, TournamentError, TournamentSettings,
    TournamentStatus,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use uuid::Uuid;

fn find(matches: &[GameMatch], round: u32, index: u32) -> &GameMatch {
    matches
        .iter()
        .find(|m| m.round == Some(round) && m.bracket_index == Some(index))
        .unwrap()
}

#[test]
fn five_players_average_seeding() {
    let roster = players(5);
    let ids: Vec<_> = roster.iter().map(|p| p.id).collect();
    let t = create_tournament(
        "Cup",
        roster,
        TournamentSettings::knockout(Seeding::Average),
    )
    .unwrap();

    // 8-line bracket, 3 byes: round 1 is only seed 4 vs seed 5
    let round_1: Vec<_> = t.matches_in_round(1).collect();
    assert_eq!(round_1.len(), 1);
    assert_eq!(round_1[0].player_1, Some(ids[3]));
    assert_eq!(round_1[0].player_2, Some(ids[4]));

    let round_2: Vec<_> = t.matches_in_round(2).collect();
    assert_eq!(round_2.len(), 2);
    let top = find(&t.matches, 2, 0);
    assert_eq!(top.player_1, Some(ids[0]));
    assert_eq!(top.player_2, None);
    assert_eq!(round_1[0].next_match_id, Some(top.id));
    assert_eq!(round_1[0].feeds_slot(), Some(Slot::Two));

    let bottom = find(&t.matches, 2, 1);
    assert_eq!(bottom.player_1, Some(ids[1]));
    assert_eq!(bottom.player_2, Some(ids[2]));
    assert!(bottom.is_playable());

    assert_eq!(t.matches_in_round(3).count(), 1);
    assert_eq!(t.matches.len(), 4);
}

#[test]
fn every_roster_size_needs_n_minus_one_matches() {
    for n in 2..=33 {
        let ids: Vec<_> = (0..n).map(|_| Uuid::new_v4()).collect();
        let matches = build_knockout_bracket(&ids).unwrap();
        assert_eq!(matches.len(), n - 1, "n = {n}");

        let finals: Vec<_> = matches.iter().filter(|m| m.next_match_id.is_none()).collect();
        assert_eq!(finals.len(), 1);

        let mut fed: HashSet<(Uuid, Slot)> = HashSet::new();
        for m in &matches {
            assert_eq!(m.status, MatchStatus::Pending);
            let Some(next) = m.next_match_id else { continue };
            let target = matches.iter().find(|t| t.id == next).unwrap();
            assert_eq!(target.round, m.round.map(|r| r + 1));
            assert!(fed.insert((next, m.feeds_slot().unwrap())), "slot fed twice");
        }

        // Every player is placed exactly once, either in round 1 or via a bye
        let placed: Vec<_> = matches
            .iter()
            .flat_map(|m| [m.player_1, m.player_2])
            .flatten()
            .collect();
        assert_eq!(placed.len(), n);
        assert_eq!(placed.iter().collect::<HashSet<_>>().len(), n);
    }
}

#[test]
fn two_players_make_a_single_final() {
    let ids = [Uuid::new_v4(), Uuid::new_v4()];
    let matches = build_knockout_bracket(&ids).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].round, Some(1));
    assert_eq!(matches[0].next_match_id, None);
}

#[test]
fn one_player_is_not_a_bracket() {
    assert!(matches!(
        build_knockout_bracket(&[Uuid::new_v4()]),
        Err(TournamentError::InvalidRosterSize { actual: 1, .. })
    ));
}

#[test]
fn random_seeding_is_a_permutation() {
    let roster = players(9);
    let mut rng = StdRng::seed_from_u64(7);
    let seeded = seed_players(&roster, Seeding::Random, &mut rng);
    let mut sorted = seeded.clone();
    sorted.sort();
    let mut expected: Vec<_> = roster.iter().map(|p| p.id).collect();
    expected.sort();
    assert_eq!(sorted, expected);

    let again = seed_players(&roster, Seeding::Random, &mut StdRng::seed_from_u64(7));
    assert_eq!(seeded, again);
}

#[test]
fn winners_propagate_to_the_final() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut t = create_tournament_with_rng(
        "Cup",
        players(6),
        TournamentSettings::knockout(Seeding::Random),
        &mut rng,
    )
    .unwrap();

    let first = t.matches_in_round(1).next().unwrap().clone();
    let (p1, p2) = (first.player_1.unwrap(), first.player_2.unwrap());
    let (winner, scores) = if roster_index(&t, p1) < roster_index(&t, p2) {
        (p1, (4, 1))
    } else {
        (p2, (1, 4))
    };
    record_result(&mut t, first.id, scores.0, scores.1).unwrap();
    let next = t.get_match(first.next_match_id.unwrap()).unwrap();
    assert_eq!(next.slot(first.feeds_slot().unwrap()), Some(winner));
    assert_eq!(next.status, MatchStatus::Pending);

    assert_eq!(play_out(&mut t) + 1, 5);
    assert_eq!(t.status, TournamentStatus::Completed);
    assert!(t.matches.iter().all(|m| m.status == MatchStatus::Completed));
    assert_eq!(t.champion(), Some(t.players[0].id));
}

#[test]
fn invalid_knockout_results_leave_the_bracket_untouched() {
    let mut t = create_tournament(
        "Cup",
        players(4),
        TournamentSettings::knockout(Seeding::Average),
    )
    .unwrap();
    let before = t.clone();

    let semi = t.matches_in_round(1).next().unwrap().id;
    assert!(matches!(
        record_result(&mut t, semi, 3, 3),
        Err(TournamentError::InvalidResult(_))
    ));

    let final_id = t.final_match().unwrap().id;
    assert_eq!(
        record_result(&mut t, final_id, 3, 1),
        Err(TournamentError::IncompletePairing(final_id))
    );
    assert_eq!(t, before);

    record_result(&mut t, semi, 3, 1).unwrap();
    assert_eq!(
        record_result(&mut t, semi, 3, 1),
        Err(TournamentError::MatchAlreadyCompleted(semi))
    );
}

#[test]
fn final_cannot_be_drawn() {
    let mut t = create_tournament(
        "Cup",
        players(3),
        TournamentSettings::knockout(Seeding::Average),
    )
    .unwrap();
    let semi = t.matches_in_round(1).next().unwrap().id;
    record_result(&mut t, semi, 0, 2).unwrap();
    let final_id = t.final_match().unwrap().id;
    assert!(t.get_match(final_id).unwrap().is_playable());
    assert!(matches!(
        record_result(&mut t, final_id, 1, 1),
        Err(TournamentError::InvalidResult(_))
    ));
    assert_eq!(t.status, TournamentStatus::Ongoing);
}

#[test]
fn knockout_has_no_standings() {
    let t = create_tournament(
        "Cup",
        players(4),
        TournamentSettings::knockout(Seeding::Random),
    )
    .unwrap();
    assert_eq!(t.standings(None), Err(TournamentError::NotApplicable));
}
