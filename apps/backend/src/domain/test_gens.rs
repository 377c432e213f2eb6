// Proptest generators for domain types.
// Cards within one generated value are always distinct.

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::domain::dealing::full_deck;
use crate::domain::state::Seat;
use crate::domain::{Card, Suit, SUITS};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(SUITS.to_vec())
}

/// Optional trump suit, `None` a quarter of the time or so.
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop_oneof![1 => Just(None), 3 => suit().prop_map(Some)]
}

/// `count` distinct cards in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(full_deck(), count).prop_shuffle()
}

/// A full trick for 2..=6 seats: plays in order, seats numbered from 0.
pub fn complete_trick() -> impl Strategy<Value = Vec<(Seat, Card)>> {
    (2usize..=6).prop_flat_map(|n| {
        unique_cards(n).prop_map(|cards| cards.into_iter().enumerate().collect())
    })
}

/// Player count paired with a round number.
pub fn player_count_and_round() -> impl Strategy<Value = (usize, u32)> {
    (1usize..=8, 1u32..=20)
}

/// Arbitrary bid values including ones outside any legal range.
pub fn raw_bid() -> impl Strategy<Value = i64> {
    prop_oneof![4 => 0i64..=14, 1 => -5i64..0, 1 => 15i64..300]
}
