//! Errors returned by tournament operations. A failed call never mutates the tournament.

use crate::models::game::{GroupId, MatchId};
use crate::models::tournament::TournamentFormat;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// Roster too small for the chosen format.
    #[error("{format} needs at least {required} players (got {actual})")]
    InvalidRosterSize {
        format: TournamentFormat,
        required: usize,
        actual: usize,
    },
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    #[error("Match {0} already has a result")]
    MatchAlreadyCompleted(MatchId),
    /// At least one participant of the match is still to be determined.
    #[error("Match {0} does not have both players yet")]
    IncompletePairing(MatchId),
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// Standings are not meaningful for this tournament (or need a group).
    #[error("Standings are not applicable here")]
    NotApplicable,
    #[error("Group {0} not found")]
    GroupNotFound(GroupId),
    #[error("Export failed: {0}")]
    Export(String),
}
