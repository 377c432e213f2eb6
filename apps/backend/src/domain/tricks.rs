use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::{card_beats, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub const CARD_PLAYED_MSG: &str = "Card played successfully";
pub const CARD_NOT_IN_HAND_MSG: &str = "Card not in player's hand";

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play filled the trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Whether every hand is now empty and the last trick is resolved.
    pub round_complete: bool,
}

/// Play a card into the current trick.
///
/// Only membership and card ownership are enforced; turn order and bidding
/// completion are left to the caller.
pub fn play_card(
    state: &mut GameState,
    player: &str,
    card_id: i64,
) -> Result<PlayCardResult, DomainError> {
    let seat = state.require_seat(player)?;

    let not_in_hand =
        || DomainError::validation(ValidationKind::CardNotInHand, CARD_NOT_IN_HAND_MSG);

    // An id that is not a card cannot be in anyone's hand.
    let card = Card::try_from(card_id).map_err(|_| not_in_hand())?;

    // Card in hand (immutable check first to avoid borrow conflicts)
    let pos = state.hands[seat]
        .iter()
        .position(|&c| c == card)
        .ok_or_else(not_in_hand)?;

    let player_count = state.player_count();
    let removed = state.hands[seat].remove(pos);

    let needs_new_trick = state
        .round
        .tricks
        .last()
        .map_or(true, |t| t.len() == player_count);
    if needs_new_trick {
        state.round.tricks.push(Vec::with_capacity(player_count));
    }

    let trick_idx = state.round.tricks.len() - 1;
    state.round.tricks[trick_idx].push((seat, removed));
    let trick_completed = state.round.tricks[trick_idx].len() == player_count;

    let mut result = PlayCardResult {
        trick_completed,
        trick_winner: None,
        round_complete: false,
    };

    // Resolve completed trick
    if trick_completed {
        if let Some(winner) = resolve_trick(&state.round.tricks[trick_idx], state.trump_suit()) {
            state.round.trick_winners.push(winner);
            state.round.tricks_won[winner] += 1;
            state.scores_total[winner] += 1;
            result.trick_winner = Some(winner);
        }
    }

    result.round_complete = state.phase() == Phase::RoundComplete;
    Ok(result)
}

/// Resolve a trick's winner.
///
/// The lead suit is the suit of the first card played. Plays are scanned in
/// order and a later card replaces the current best only if it is strictly
/// stronger, so ties go to the earliest play.
pub fn resolve_trick(plays: &[(Seat, Card)], trump: Option<Suit>) -> Option<Seat> {
    let (_, lead_card) = plays.first()?;
    let lead = lead_card.suit;

    let mut best_idx = 0usize;
    for i in 1..plays.len() {
        let (_, card_i) = plays[i];
        let (_, card_best) = plays[best_idx];
        if card_beats(card_i, card_best, lead, trump) {
            best_idx = i;
        }
    }
    Some(plays[best_idx].0)
}
