use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::game_transition::{self, NEW_ROUND_MSG};
use crate::errors::domain::DomainError;

impl GameFlowService {
    /// Advance the game to its next round and deal it. Scores carry over.
    pub fn start_new_round(&self, game_id: &str) -> Result<&'static str, DomainError> {
        debug!(game_id, "Starting new round");

        let started = self
            .registry
            .with_game(game_id, game_transition::start_new_round)?;

        info!(
            game_id,
            round = started.round_no,
            hand_size = started.hand_size,
            "Round dealt"
        );
        Ok(NEW_ROUND_MSG)
    }
}
