//! Cue-sports tournament engine: library with models and format logic.

pub mod logic;
pub mod models;

pub use logic::{
    advance_to_knockout, allocate_groups, bracket_rounds, build_knockout_bracket,
    collect_qualifiers, compute_standings, create_tournament, create_tournament_with_rng,
    generate_group_matches, generate_round_robin_matches, record_result, record_result_with_rng,
    seed_players, seed_qualifiers, standings_to_csv, StandingsRow,
};
pub use models::{
    group_label, GameMatch, GroupId, MatchId, MatchResult, MatchStatus, Player, PlayerId,
    ScoringSettings, Seeding, Slot, Stage, Tournament, TournamentError, TournamentFormat,
    TournamentId, TournamentSettings, TournamentStatus,
};
