//! Game flow orchestration service - the engine's call contract.
//!
//! Each operation resolves the game through the registry, runs the pure
//! domain transition under that game's lock, and reports the outcome. Rule
//! violations come back as `DomainError::Validation` with the message clients
//! display; an unknown game id is `DomainError::NotFound`.

mod player_actions;
mod round_lifecycle;

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::player_view::{project, PublicGameView};
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::seed_derivation::random_game_seed;
use crate::domain::GameState;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::registry::{GameRegistry, Registered};

/// Prefix of generated placeholder seats (`AI_1`, `AI_2`, ...).
pub const AI_PLAYER_PREFIX: &str = "AI_";

pub struct GameFlowService {
    registry: Arc<GameRegistry>,
    config: EngineConfig,
}

impl GameFlowService {
    pub fn new(registry: Arc<GameRegistry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<GameRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create a game seating `player_id` plus generated `AI_i` seats and deal
    /// round 1. `num_players` falls back to the configured default.
    pub fn create_game(
        &self,
        player_id: &str,
        num_players: Option<usize>,
    ) -> Result<Registered, DomainError> {
        let num_players = num_players.unwrap_or(self.config.default_players);
        debug!(player_id, num_players, "Creating game");

        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Number of players must be between {MIN_PLAYERS} and {MAX_PLAYERS}"),
            ));
        }

        let players = seat_players(player_id, num_players)?;
        let seed = self.config.deal_seed.unwrap_or_else(random_game_seed);
        let state = GameState::new(players, seed)?;
        let hand_size = state.hand_size;

        let registered = self.registry.insert(state)?;
        info!(
            game_id = %registered.game_id,
            join_code = %registered.join_code,
            num_players,
            hand_size,
            "Game created"
        );
        Ok(registered)
    }

    /// Caller-visible view of a game; only `viewer`'s own hand is included.
    pub fn get_public_state(
        &self,
        game_id: &str,
        viewer: Option<&str>,
    ) -> Result<PublicGameView, DomainError> {
        debug!(game_id, viewer, "Projecting game state");
        self.registry.read_game(game_id, |state| project(state, viewer))
    }

    /// Resolve a join code to its game id.
    pub fn resolve_join_code(&self, code: &str) -> Option<String> {
        self.registry.find_by_join_code(code)
    }

    pub fn game_count(&self) -> usize {
        self.registry.len()
    }
}

/// Seat list for a new game: the human first, then `AI_1..AI_{n-1}`.
fn seat_players(player_id: &str, num_players: usize) -> Result<Vec<String>, DomainError> {
    if player_id.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayer,
            "Player id must not be empty",
        ));
    }

    let ai_seats: Vec<String> = (1..num_players)
        .map(|i| format!("{AI_PLAYER_PREFIX}{i}"))
        .collect();
    if ai_seats.iter().any(|ai| ai == player_id) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayer,
            format!("Player id {player_id} is reserved for a generated seat"),
        ));
    }

    Ok(std::iter::once(player_id.to_string())
        .chain(ai_seats)
        .collect())
}
