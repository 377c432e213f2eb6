//! Round progression for a game session.

use crate::domain::state::{require_hand_size, GameState, RoundState};
use crate::errors::domain::DomainError;

pub const NEW_ROUND_MSG: &str = "New round started successfully";

/// Summary of the round that was just opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStarted {
    pub round_no: u32,
    pub hand_size: u8,
}

/// Advance to the next round and deal it.
///
/// Bids, tricks, and per-round tallies are cleared; cumulative scores carry
/// over. Does not check that the previous round was finished. The new state
/// is computed fully before anything is written, so a failure leaves the
/// game untouched.
pub fn start_new_round(state: &mut GameState) -> Result<RoundStarted, DomainError> {
    let round_no = state.round_no.saturating_add(1);
    let hand_size = require_hand_size(round_no, state.player_count())?;

    let mut next = state.clone();
    next.round_no = round_no;
    next.hand_size = hand_size;
    next.round = RoundState::empty(state.player_count());
    next.deal_round()?;
    *state = next;

    Ok(RoundStarted {
        round_no,
        hand_size,
    })
}
