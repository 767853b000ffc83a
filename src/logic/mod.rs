//! Tournament format engine: schedule generation, result application, standings.

mod groups;
mod knockout;
mod results;
mod round_robin;
mod setup;
mod stage;
mod standings;

pub use groups::{allocate_groups, generate_group_matches};
pub use knockout::{bracket_rounds, build_knockout_bracket, seed_players};
pub use results::{record_result, record_result_with_rng};
pub use round_robin::generate_round_robin_matches;
pub use setup::{create_tournament, create_tournament_with_rng};
pub use stage::{advance_to_knockout, collect_qualifiers, seed_qualifiers};
pub use standings::{compute_standings, standings_to_csv, StandingsRow};
