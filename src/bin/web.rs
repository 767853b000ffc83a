//! Single binary web server hosting the tournament engine behind a REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), INACTIVITY_HOURS (e.g. 12).

use actix_web::{
    get, post,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use cue_tournament::{
    create_tournament, record_result, standings_to_csv, GroupId, MatchId, Player, Tournament,
    TournamentError, TournamentId, TournamentSettings,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory registry of tournaments by id. The write lock serializes result submissions.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Server settings read from the environment.
#[derive(Clone, Debug)]
struct ServerConfig {
    host: String,
    port: u16,
    /// Tournaments not accessed for this long are removed.
    inactivity_timeout: Duration,
}

impl ServerConfig {
    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let hours: u64 = std::env::var("INACTIVITY_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .unwrap_or(12);
        Self {
            host,
            port,
            inactivity_timeout: Duration::from_secs(hours * 3600),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Roster entry supplied by the player-management collaborator.
#[derive(Deserialize)]
struct PlayerBody {
    /// Existing player id; a fresh one is assigned when missing.
    id: Option<Uuid>,
    name: String,
    #[serde(default)]
    average: f64,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    players: Vec<PlayerBody>,
    settings: TournamentSettings,
}

#[derive(Deserialize)]
struct RecordResultBody {
    score_1: i32,
    score_2: i32,
}

#[derive(Deserialize)]
struct StandingsQuery {
    group: Option<GroupId>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn no_tournament() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::MatchNotFound(_) | TournamentError::GroupNotFound(_) => {
            HttpResponse::NotFound().json(body)
        }
        TournamentError::Export(_) => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cue-tournament",
    })
}

/// Create a tournament from a roster and settings; the full schedule is generated here.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let body = body.into_inner();
    let players = body
        .players
        .into_iter()
        .map(|p| Player {
            id: p.id.unwrap_or_else(Uuid::new_v4),
            name: p.name.trim().to_string(),
            average: p.average,
        })
        .collect();
    let tournament = match create_tournament(body.name, players, body.settings) {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {} ({})", id, tournament.format());
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => no_tournament(),
    }
}

/// Record the final score of one match (reported by the match player).
#[post("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<RecordResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_tournament(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match record_result(t, path.match_id, body.score_1, body.score_2) {
        Ok(()) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Standings of a round-robin tournament, or of one group (`?group=0`) of a combined one.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return no_tournament(),
    };
    match entry.tournament.standings(query.group) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => error_response(&e),
    }
}

/// Same as the standings endpoint, as a CSV download.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(
    state: AppState,
    path: Path<TournamentPath>,
    query: Query<StandingsQuery>,
) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return no_tournament(),
    };
    let t = &entry.tournament;
    match t
        .standings(query.group)
        .and_then(|rows| standings_to_csv(&rows, &t.players))
    {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => error_response(&e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove tournaments past the inactivity timeout
    let state_cleanup = state.clone();
    let timeout = config.inactivity_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_get_tournament)
            .service(api_record_result)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
