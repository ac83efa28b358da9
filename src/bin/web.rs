//! Single binary web server: JSON API over one Swiss tournament.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, TIE_BREAK, PAIRING_SEED.

use actix_web::{
    delete, get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use swiss_tournament::{Config, MemoryStore, Opponent, PlayerId, Tournament, TournamentError, BYE_ID};

type AppState = Data<RwLock<Tournament<MemoryStore>>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Serialize)]
struct RegisterPlayerResponse {
    id: PlayerId,
}

#[derive(Serialize)]
struct CountResponse {
    count: usize,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner_id: PlayerId,
    /// `-1` or absent for an unopposed win.
    #[serde(default = "bye_id")]
    loser_id: PlayerId,
}

fn bye_id() -> PlayerId {
    BYE_ID
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Map a core error to a status code with a JSON body.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::UnknownPlayer(_)
        | TournamentError::EmptyPlayerName
        | TournamentError::SamePlayer(_) => HttpResponse::BadRequest().json(body),
        TournamentError::NoEligibleByeRecipient => HttpResponse::Conflict().json(body),
        TournamentError::StoreUnavailable(_) => HttpResponse::ServiceUnavailable().json(body),
        TournamentError::OddEntryCount(_) => {
            log::error!("Pairing invariant violated: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// Register a player; responds with the assigned id.
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.register_player(&body.name) {
        Ok(id) => HttpResponse::Ok().json(RegisterPlayerResponse { id }),
        Err(e) => error_response(&e),
    }
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.count_players() {
        Ok(count) => HttpResponse::Ok().json(CountResponse { count }),
        Err(e) => error_response(&e),
    }
}

/// Remove every player (and with them all results).
#[delete("/api/players")]
async fn api_reset_players(state: AppState) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.reset_players() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Report a finished match.
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.report_match(body.winner_id, Opponent::from_id(body.loser_id)) {
        Ok(record) => HttpResponse::Ok().json(record),
        Err(e) => error_response(&e),
    }
}

#[get("/api/matches")]
async fn api_match_history(state: AppState) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.match_history() {
        Ok(history) => HttpResponse::Ok().json(history),
        Err(e) => error_response(&e),
    }
}

/// Clear all results and bye flags; players stay registered.
#[delete("/api/matches")]
async fn api_reset_matches(state: AppState) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.reset_matches() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let t = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.standings() {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(&e),
    }
}

/// Standings as CSV: `id,name,wins,matches`.
#[get("/api/standings.csv")]
async fn api_standings_csv(state: AppState) -> HttpResponse {
    let standings = {
        let t = match state.read() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        match t.standings() {
            Ok(s) => s,
            Err(e) => return error_response(&e),
        }
    };
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &standings {
        if let Err(e) = writer.serialize(row) {
            return HttpResponse::InternalServerError().body(e.to_string());
        }
    }
    match writer.into_inner() {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(bytes),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Compute the next round's pairings. POST because it may hand out a bye.
#[post("/api/rounds/next")]
async fn api_next_round(state: AppState) -> HttpResponse {
    let mut t = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match t.next_round_pairings() {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(&e),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let tournament = match config.pairing_seed {
        Some(seed) => Tournament::seeded(MemoryStore::new(), seed),
        None => Tournament::new(MemoryStore::new()),
    }
    .with_tie_break(config.tie_break);
    log::info!(
        "Starting server at http://{}:{} (tie-break {:?})",
        config.host,
        config.port,
        config.tie_break
    );

    let state = Data::new(RwLock::new(tournament));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_register_player)
            .service(api_count_players)
            .service(api_reset_players)
            .service(api_report_match)
            .service(api_match_history)
            .service(api_reset_matches)
            .service(api_standings)
            .service(api_standings_csv)
            .service(api_next_round)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
