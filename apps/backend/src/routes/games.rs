//! Game HTTP routes under `/api/game`.
//!
//! Handlers only translate between JSON and the `GameFlowService` call
//! contract; every rule lives in the domain layer.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    pub player_id: String,
    #[serde(default)]
    pub num_players: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartGameResponse {
    pub game_id: String,
    pub join_code: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub player_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BidRequest {
    pub game_id: String,
    pub player_id: String,
    pub bid: i64,
    #[serde(default)]
    pub is_restricted: bool,
}

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub game_id: String,
    pub player_id: String,
    pub card: i64,
}

#[derive(Debug, Deserialize)]
pub struct NewRoundRequest {
    pub game_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JoinCodeResponse {
    pub game_id: String,
}

fn message(msg: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: msg.to_string(),
    })
}

/// POST /api/game/start
async fn start_game(
    body: ValidatedJson<StartGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let num_players = req
        .num_players
        .map(|n| {
            usize::try_from(n).map_err(|_| {
                DomainError::validation(
                    ValidationKind::InvalidPlayerCount,
                    "Number of players must be positive",
                )
            })
        })
        .transpose()?;

    let registered = app_state
        .game_flow
        .create_game(&req.player_id, num_players)?;

    Ok(HttpResponse::Created().json(StartGameResponse {
        game_id: registered.game_id,
        join_code: registered.join_code,
    }))
}

/// GET /api/game/{game_id}?player_id=
///
/// The caller's own hand is included only when `player_id` is seated.
async fn get_game(
    path: web::Path<String>,
    query: web::Query<ViewQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    let view = app_state
        .game_flow
        .get_public_state(&game_id, query.player_id.as_deref())?;
    Ok(HttpResponse::Ok().json(view))
}

/// GET /api/game/join/{code}
async fn resolve_join_code(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let game_id = app_state
        .game_flow
        .resolve_join_code(&code)
        .ok_or_else(|| AppError::not_found(ErrorCode::GameNotFound, "Game not found"))?;
    Ok(HttpResponse::Ok().json(JoinCodeResponse { game_id }))
}

/// POST /api/game/bid
async fn make_bid(
    body: ValidatedJson<BidRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let msg = app_state.game_flow.make_bid(
        &body.game_id,
        &body.player_id,
        body.bid,
        body.is_restricted,
    )?;
    Ok(message(msg))
}

/// POST /api/game/play
async fn play_card(
    body: ValidatedJson<PlayRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let msg = app_state
        .game_flow
        .play_card(&body.game_id, &body.player_id, body.card)?;
    Ok(message(msg))
}

/// POST /api/game/new-round
async fn new_round(
    body: ValidatedJson<NewRoundRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let msg = app_state.game_flow.start_new_round(&body.game_id)?;
    Ok(message(msg))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/start").route(web::post().to(start_game)))
        .service(web::resource("/bid").route(web::post().to(make_bid)))
        .service(web::resource("/play").route(web::post().to(play_card)))
        .service(web::resource("/new-round").route(web::post().to(new_round)))
        .service(web::resource("/join/{code}").route(web::get().to(resolve_join_code)))
        .service(web::resource("/{game_id}").route(web::get().to(get_game)));
}
