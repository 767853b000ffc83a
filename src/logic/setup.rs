//! Tournament creation: validate roster and settings, then generate the initial schedule.

use crate::logic::groups::{allocate_groups, generate_group_matches};
use crate::logic::knockout::{build_knockout_bracket, seed_players};
use crate::logic::round_robin::generate_round_robin_matches;
use crate::models::{
    Player, Stage, Tournament, TournamentError, TournamentFormat, TournamentSettings,
    TournamentStatus,
};
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// Create a tournament with its full initial schedule, seeding with the thread-local RNG.
pub fn create_tournament(
    name: impl Into<String>,
    players: Vec<Player>,
    settings: TournamentSettings,
) -> Result<Tournament, TournamentError> {
    create_tournament_with_rng(name, players, settings, &mut rand::thread_rng())
}

/// Same as [`create_tournament`] with a caller-supplied RNG (random seeding only).
pub fn create_tournament_with_rng<R: Rng + ?Sized>(
    name: impl Into<String>,
    players: Vec<Player>,
    settings: TournamentSettings,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    let name = name.into().trim().to_string();
    if name.is_empty() {
        return Err(TournamentError::InvalidSettings("tournament name is empty".into()));
    }
    validate_roster(&players)?;
    validate_format(&settings, players.len())?;

    let (matches, stage) = match settings.format {
        TournamentFormat::RoundRobin => {
            let ids: Vec<_> = players.iter().map(|p| p.id).collect();
            (generate_round_robin_matches(&ids, None), None)
        }
        TournamentFormat::Knockout => {
            let seeded = seed_players(&players, settings.seeding, rng);
            (build_knockout_bracket(&seeded)?, None)
        }
        TournamentFormat::Combined => {
            let seeded = seed_players(&players, settings.seeding, rng);
            let groups = allocate_groups(&seeded, settings.num_groups as usize);
            (generate_group_matches(&groups), Some(Stage::Group))
        }
    };

    let tournament = Tournament {
        id: Uuid::new_v4(),
        name,
        created_at: chrono::Utc::now(),
        players,
        settings,
        matches,
        status: TournamentStatus::Ongoing,
        stage,
    };
    log::debug!(
        "Created {} tournament {} with {} players and {} matches",
        tournament.format(),
        tournament.id,
        tournament.players.len(),
        tournament.matches.len()
    );
    Ok(tournament)
}

fn validate_roster(players: &[Player]) -> Result<(), TournamentError> {
    let mut seen = HashSet::new();
    for p in players {
        if !seen.insert(p.id) {
            return Err(TournamentError::InvalidSettings(format!(
                "player {} appears twice in the roster",
                p.id
            )));
        }
        if !p.average.is_finite() {
            return Err(TournamentError::InvalidSettings(format!(
                "player {} has an invalid average",
                p.name
            )));
        }
    }
    Ok(())
}

/// Format minimums; for combined also group count and qualifiers per group.
fn validate_format(settings: &TournamentSettings, n: usize) -> Result<(), TournamentError> {
    let format = settings.format;
    if format == TournamentFormat::Combined && settings.num_groups == 0 {
        return Err(TournamentError::InvalidSettings("at least one group is required".into()));
    }
    let required = match format {
        TournamentFormat::Combined => format
            .min_players()
            .max(settings.num_groups as usize * 2),
        _ => format.min_players(),
    };
    if n < required {
        return Err(TournamentError::InvalidRosterSize {
            format,
            required,
            actual: n,
        });
    }
    if format != TournamentFormat::Combined {
        return Ok(());
    }

    let advancing = settings.players_advancing as usize;
    let smallest_group = n / settings.num_groups as usize;
    if advancing == 0 {
        return Err(TournamentError::InvalidSettings(
            "at least one player must advance from each group".into(),
        ));
    }
    if advancing >= smallest_group {
        return Err(TournamentError::InvalidSettings(format!(
            "{advancing} advancing per group, but the smallest group has {smallest_group} players"
        )));
    }
    if advancing * (settings.num_groups as usize) < 2 {
        return Err(TournamentError::InvalidSettings(
            "the knockout stage needs at least two qualifiers".into(),
        ));
    }
    Ok(())
}
