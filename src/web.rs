use actix_web::{web, App, HttpServer, HttpResponse, Result, middleware};
use actix_files::Files;
use serde::Deserialize;
use std::sync::Mutex;

use crate::court::{self, Play};
use crate::roster::{self, Player, Team};
use crate::rotation::{generate_rotation, pool_covers_court, total_periods, RotationConfig, MAX_PERIODS};
use crate::store::Store;

/// In-memory working state; every mutation is written through to the store
pub struct AppState {
    pub players: Mutex<Vec<Player>>,
    pub plays: Mutex<Vec<Play>>,
    pub store: Store,
}

#[derive(Deserialize)]
pub struct NewPlayerRequest {
    name: String,
    number: String,
    team: Team,
}

#[derive(Deserialize)]
pub struct PositionRequest {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
pub struct SavePlayRequest {
    name: String,
}

fn persist_players(state: &AppState, players: &[Player]) -> Result<()> {
    state
        .store
        .save_players(players)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Failed to save roster: {}", e)))
}

fn persist_plays(state: &AppState, plays: &[Play]) -> Result<()> {
    state
        .store
        .save_plays(plays)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Failed to save plays: {}", e)))
}

// Roster endpoints

async fn list_players(state: web::Data<AppState>) -> Result<HttpResponse> {
    let players = state.players.lock().unwrap();
    Ok(HttpResponse::Ok().json(&*players))
}

async fn add_player(
    req: web::Json<NewPlayerRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut players = state.players.lock().unwrap();

    if let Err(error) = roster::validate_new_player(&players, &req.name, &req.number, req.team) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({"success": false, "error": error})));
    }

    let player = roster::add_player(&mut players, &req.name, &req.number, req.team);
    persist_players(&state, &players)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "player": player})))
}

async fn remove_player(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut players = state.players.lock().unwrap();

    if !roster::remove_player(&mut players, &id) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({"success": false, "error": "Unknown player"})));
    }
    persist_players(&state, &players)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

async fn toggle_availability(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut players = state.players.lock().unwrap();

    match roster::toggle_availability(&mut players, &id) {
        Some(available) => {
            persist_players(&state, &players)?;
            Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "available": available})))
        }
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({"success": false, "error": "Unknown player"}))),
    }
}

async fn update_position(
    id: web::Path<String>,
    req: web::Json<PositionRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    // Keep dragged tokens inside the visible court
    let (x, y) = court::clamp_to_court(req.x, req.y);

    let mut players = state.players.lock().unwrap();
    if !roster::update_position(&mut players, &id, x, y) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({"success": false, "error": "Unknown player"})));
    }
    persist_players(&state, &players)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "x": x, "y": y})))
}

async fn export_roster(state: web::Data<AppState>) -> Result<HttpResponse> {
    let players = state.players.lock().unwrap();
    let csv = roster::roster_to_csv(&players)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Failed to export roster: {}", e)))?;

    Ok(HttpResponse::Ok().content_type("text/csv").body(csv))
}

// Plays library endpoints

async fn list_plays(state: web::Data<AppState>) -> Result<HttpResponse> {
    let plays = state.plays.lock().unwrap();
    Ok(HttpResponse::Ok().json(&*plays))
}

async fn save_play(
    req: web::Json<SavePlayRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({"success": false, "error": "Play name is required"})));
    }

    let players = state.players.lock().unwrap();
    let play = court::capture_play(&req.name, &players);
    drop(players);

    let mut plays = state.plays.lock().unwrap();
    court::record_play(&mut plays, play.clone());
    persist_plays(&state, &plays)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "play": play})))
}

async fn delete_play(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut plays = state.plays.lock().unwrap();

    if !court::delete_play(&mut plays, &id) {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({"success": false, "error": "Unknown play"})));
    }
    persist_plays(&state, &plays)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

async fn load_play(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let plays = state.plays.lock().unwrap();
    let play = match plays.iter().find(|p| p.id == *id) {
        Some(play) => play.clone(),
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({"success": false, "error": "Unknown play"})))
        }
    };
    drop(plays);

    let mut players = state.players.lock().unwrap();
    court::apply_snapshots(&mut players, &play.snapshots);
    persist_players(&state, &players)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "players": &*players})))
}

// Court layout endpoints

async fn set_default_layout(state: web::Data<AppState>) -> Result<HttpResponse> {
    let players = state.players.lock().unwrap();
    let layout = court::snapshot_players(&players);

    state
        .store
        .save_default_layout(&layout)
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Failed to save layout: {}", e)))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
}

async fn reset_court(state: web::Data<AppState>) -> Result<HttpResponse> {
    let layout = state
        .store
        .load_default_layout()
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Failed to load layout: {}", e)))?;

    let mut players = state.players.lock().unwrap();
    court::reset_positions(&mut players, layout.as_deref());
    persist_players(&state, &players)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "players": &*players})))
}

// Rotation endpoint

async fn calculate_rotation(
    req: web::Json<RotationConfig>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let config = req.into_inner();

    // Same pre-checks the whiteboard runs before enabling its calculate
    // button, each with its own message; the engine itself only ever
    // answers a bad configuration with an empty list.
    if config.period_length <= 0 || config.game_minutes <= 0 {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Invalid settings: enter positive values for minutes and shift duration"
        })));
    }
    if total_periods(&config) > MAX_PERIODS {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": "Too many shifts: increase the shift duration"
        })));
    }

    let players = state.players.lock().unwrap();
    let pool = roster::available_players(&players, Team::Home);
    if !pool_covers_court(&pool, &config) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "success": false,
            "error": format!(
                "Insufficient roster size: need at least {} available home players",
                config.players_on_court
            )
        })));
    }

    let shifts = generate_rotation(&pool, &config);
    Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "shifts": shifts})))
}

// HTML page handler

async fn index() -> Result<HttpResponse> {
    let html = include_str!("../templates/index.html");
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

pub async fn start_server(port: u16, data_dir: String) -> std::io::Result<()> {
    let store = Store::open(&data_dir)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let players = store
        .load_players()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?
        .unwrap_or_else(roster::default_roster);
    let plays = store
        .load_plays()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?
        .unwrap_or_default();

    let app_state = web::Data::new(AppState {
        players: Mutex::new(players),
        plays: Mutex::new(plays),
        store,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "static"))
            .route("/", web::get().to(index))
            .route("/api/players", web::get().to(list_players))
            .route("/api/players", web::post().to(add_player))
            .route("/api/players/{id}", web::delete().to(remove_player))
            .route("/api/players/{id}/availability", web::post().to(toggle_availability))
            .route("/api/players/{id}/position", web::post().to(update_position))
            .route("/api/roster/export", web::get().to(export_roster))
            .route("/api/plays", web::get().to(list_plays))
            .route("/api/plays", web::post().to(save_play))
            .route("/api/plays/{id}", web::delete().to(delete_play))
            .route("/api/plays/{id}/load", web::post().to(load_play))
            .route("/api/layout/default", web::post().to(set_default_layout))
            .route("/api/court/reset", web::post().to(reset_court))
            .route("/api/rotation", web::post().to(calculate_rotation))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use tempfile::TempDir;

    fn state(dir: &TempDir) -> web::Data<AppState> {
        let store = Store::open(dir.path()).unwrap();
        web::Data::new(AppState {
            players: Mutex::new(roster::default_roster()),
            plays: Mutex::new(Vec::new()),
            store,
        })
    }

    async fn rotation_response(
        state: web::Data<AppState>,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/api/rotation", web::post().to(calculate_rotation)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/rotation")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn invalid_settings_are_reported_before_anything_else() {
        let dir = TempDir::new().unwrap();
        // A zero shift length is reported as invalid settings even though
        // the on-court count would also fail the roster check
        let (status, body) = rotation_response(
            state(&dir),
            serde_json::json!({"gameMinutes": 20, "playersOnCourt": 50, "periodLength": 0}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Invalid settings: enter positive values for minutes and shift duration"
        );
    }

    #[actix_web::test]
    async fn too_many_shifts_outranks_the_roster_check() {
        let dir = TempDir::new().unwrap();
        // 500 one-minute shifts: over the cap, and the 50-player court
        // requirement must not be the message that comes back
        let (status, body) = rotation_response(
            state(&dir),
            serde_json::json!({"gameMinutes": 500, "playersOnCourt": 50, "periodLength": 1}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"], "Too many shifts: increase the shift duration");
    }

    #[actix_web::test]
    async fn undersized_pools_are_refused_before_the_engine_runs() {
        let dir = TempDir::new().unwrap();
        let state = state(&dir);
        // Bench one of the five home players so the pool drops below the
        // on-court count
        let benched = roster::toggle_availability(&mut state.players.lock().unwrap(), "h1");
        assert_eq!(benched, Some(false));

        let (status, body) = rotation_response(
            state,
            serde_json::json!({"gameMinutes": 20, "playersOnCourt": 5, "periodLength": 4}),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(
            body["error"],
            "Insufficient roster size: need at least 5 available home players"
        );
    }

    #[actix_web::test]
    async fn a_valid_request_returns_the_shifts() {
        let dir = TempDir::new().unwrap();
        let (status, body) = rotation_response(
            state(&dir),
            serde_json::json!({"gameMinutes": 20, "playersOnCourt": 5, "periodLength": 4}),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        let shifts = body["shifts"].as_array().unwrap();
        assert_eq!(shifts.len(), 5);
        assert_eq!(shifts[0]["period"], 1);
        assert_eq!(
            shifts[0]["players"],
            serde_json::json!(["h1", "h2", "h3", "h4", "h5"])
        );
    }
}
