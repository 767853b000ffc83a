//! Data structures for the cue-sports tournament: players, matches, tournament state.

mod error;
mod game;
mod player;
mod tournament;

pub use error::TournamentError;
pub use game::{group_label, GameMatch, GroupId, MatchId, MatchResult, MatchStatus, Slot};
pub use player::{Player, PlayerId};
pub use tournament::{
    ScoringSettings, Seeding, Stage, Tournament, TournamentFormat, TournamentId,
    TournamentSettings, TournamentStatus,
};
