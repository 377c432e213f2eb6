use crate::config::{env_lookup, parse_var};
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::AppError;

pub const DEFAULT_PLAYERS: usize = 2;

/// Game engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seat count used when a create request does not name one.
    pub default_players: usize,
    /// Fixed base seed for every new game; random per game when `None`.
    pub deal_seed: Option<u64>,
}

impl EngineConfig {
    /// Reads `OHHELL_DEFAULT_PLAYERS` and `OHHELL_DEAL_SEED`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let default_players =
            parse_var::<usize>(&lookup, "OHHELL_DEFAULT_PLAYERS")?.unwrap_or(DEFAULT_PLAYERS);
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&default_players) {
            return Err(AppError::config(format!(
                "OHHELL_DEFAULT_PLAYERS must be between {MIN_PLAYERS} and {MAX_PLAYERS}"
            )));
        }
        let deal_seed = parse_var::<u64>(&lookup, "OHHELL_DEAL_SEED")?;

        Ok(Self {
            default_players,
            deal_seed,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_players: DEFAULT_PLAYERS,
            deal_seed: None,
        }
    }
}
