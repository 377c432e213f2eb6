//! Deterministic card dealing logic.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, MAX_PLAYERS};
use crate::domain::{Card, RANKS, SUITS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of dealing one round: a hand per seat plus the trump card, if any
/// cards were left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Vec<Card>>,
    pub trump: Option<Card>,
}

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in SUITS {
        for rank in RANKS {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Uniform Fisher-Yates shuffle driven by a seeded ChaCha stream.
fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}

/// Deal hands deterministically given player count, hand size, and RNG seed.
///
/// Cards are consumed from the shuffled deck without replacement: seat 0 takes
/// the first `hand_size` cards, seat 1 the next `hand_size`, and so on. The
/// next undealt card becomes the trump card; when the deck is exhausted there
/// is no trump. Hands are sorted for convenience.
///
/// # Arguments
/// * `player_count` - Number of seats (1..=52)
/// * `hand_size` - Cards per player (at least 1)
/// * `seed` - RNG seed for deterministic shuffling
pub fn deal_hands(player_count: usize, hand_size: u8, seed: u64) -> Result<Deal, DomainError> {
    if player_count == 0 || player_count > MAX_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Player count must be 1..={MAX_PLAYERS}"),
        ));
    }

    if hand_size == 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            "Hand size must be at least 1",
        ));
    }

    let total_cards = player_count * hand_size as usize;
    if total_cards > DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandSize,
            "Total cards exceed deck size",
        ));
    }

    let mut deck = full_deck();
    shuffle_with_seed(&mut deck, seed);

    let hands = deck[..total_cards]
        .chunks(hand_size as usize)
        .map(|chunk| {
            let mut hand = chunk.to_vec();
            hand.sort();
            hand
        })
        .collect();
    let trump = deck.get(total_cards).copied();

    Ok(Deal { hands, trump })
}
