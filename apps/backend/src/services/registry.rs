//! In-memory store of live game sessions.
//!
//! Sessions live in a `DashMap` keyed by game id. Each entry carries its own
//! mutex; callers clone the entry's `Arc` out of the map and only then lock it,
//! so a map shard is never held while a game is being mutated and games never
//! contend with each other.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, warn};
use ulid::Ulid;

use crate::domain::GameState;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::utils::join_code::{generate_join_code, normalize_join_code};

pub type GameId = String;

pub const GAME_NOT_FOUND_MSG: &str = "Game not found";

/// Attempts at drawing an unused join code before giving up.
const JOIN_CODE_ATTEMPTS: usize = 8;

/// One live game plus its shareable join code.
#[derive(Debug)]
pub struct GameEntry {
    pub join_code: String,
    state: Mutex<GameState>,
}

/// Identifiers handed back when a game is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub game_id: GameId,
    pub join_code: String,
}

#[derive(Debug, Default)]
pub struct GameRegistry {
    games: DashMap<GameId, Arc<GameEntry>>,
    join_codes: DashMap<String, GameId>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly created game under a new id and join code.
    pub fn insert(&self, state: GameState) -> Result<Registered, DomainError> {
        let game_id = Ulid::new().to_string();
        let join_code = self.reserve_join_code(&game_id)?;

        let entry = Arc::new(GameEntry {
            join_code: join_code.clone(),
            state: Mutex::new(state),
        });
        self.games.insert(game_id.clone(), entry);
        debug!(%game_id, %join_code, "Game registered");

        Ok(Registered { game_id, join_code })
    }

    fn reserve_join_code(&self, game_id: &str) -> Result<String, DomainError> {
        for _ in 0..JOIN_CODE_ATTEMPTS {
            let code = generate_join_code();
            if let Entry::Vacant(slot) = self.join_codes.entry(code.clone()) {
                slot.insert(game_id.to_string());
                return Ok(code);
            }
            warn!(%game_id, "Join code collision, redrawing");
        }
        Err(DomainError::conflict(
            ConflictKind::JoinCodeConflict,
            "Could not allocate a unique join code",
        ))
    }

    fn entry(&self, game_id: &str) -> Result<Arc<GameEntry>, DomainError> {
        self.games
            .get(game_id)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, GAME_NOT_FOUND_MSG))
    }

    /// Run `f` against the game while holding that game's lock.
    ///
    /// Every compound read-check-write on a game goes through here so that
    /// concurrent callers on the same game are serialized.
    pub fn with_game<T>(
        &self,
        game_id: &str,
        f: impl FnOnce(&mut GameState) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let entry = self.entry(game_id)?;
        let mut state = entry.state.lock();
        f(&mut state)
    }

    /// Read-only access under the game's lock.
    pub fn read_game<T>(
        &self,
        game_id: &str,
        f: impl FnOnce(&GameState) -> T,
    ) -> Result<T, DomainError> {
        let entry = self.entry(game_id)?;
        let state = entry.state.lock();
        Ok(f(&state))
    }

    pub fn join_code_of(&self, game_id: &str) -> Result<String, DomainError> {
        self.entry(game_id).map(|e| e.join_code.clone())
    }

    /// Resolve a join code (case and alias insensitive) to its game id.
    pub fn find_by_join_code(&self, code: &str) -> Option<GameId> {
        self.join_codes
            .get(&normalize_join_code(code))
            .map(|id| id.value().clone())
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.games.contains_key(game_id)
    }

    /// Drop a game and free its join code. Returns whether it existed.
    pub fn remove(&self, game_id: &str) -> bool {
        match self.games.remove(game_id) {
            Some((_, entry)) => {
                self.join_codes.remove(&entry.join_code);
                debug!(%game_id, "Game removed");
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
