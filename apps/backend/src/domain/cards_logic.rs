//! Trick strength of a card

use super::cards_types::{Card, Suit};

/// Strength of `card` within a trick.
///
/// Trump cards score `100 + rank`, lead-suit cards score their rank, and
/// everything else scores 0. With no trump suit nothing qualifies as trump.
pub fn card_value(card: Card, lead: Suit, trump: Option<Suit>) -> u8 {
    if Some(card.suit) == trump {
        100 + card.rank.index()
    } else if card.suit == lead {
        card.rank.index()
    } else {
        0
    }
}

/// True when `a` strictly outranks `b` in a trick led with `lead`.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    card_value(a, lead, trump) > card_value(b, lead, trump)
}
