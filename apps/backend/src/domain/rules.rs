use std::ops::RangeInclusive;

pub const DECK_SIZE: usize = 52;
pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = DECK_SIZE;

/// Largest hand that can be dealt to every seat from a single deck.
pub fn max_hand_size(player_count: usize) -> Option<u8> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return None;
    }
    u8::try_from(DECK_SIZE / player_count).ok()
}

// Hand-size schedule: one card in round 1, one more each round, capped at
// the largest hand the deck can supply to every player.
pub fn hand_size_for_round(round_no: u32, player_count: usize) -> Option<u8> {
    if round_no == 0 {
        return None;
    }
    let cap = max_hand_size(player_count)?;
    let round = u8::try_from(round_no).unwrap_or(u8::MAX);
    Some(round.min(cap))
}

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}
