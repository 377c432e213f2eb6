//! Core card-related types: Card, Rank, Suit

use crate::errors::domain::{DomainError, ValidationKind};

pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// Wire index (0..=3), matching `card_id / 13`.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        SUITS.get(index as usize).copied()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Wire index (0..=12), matching `card_id % 13`.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        RANKS.get(index as usize).copied()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Integer identity used by clients: `suit * 13 + rank`, in `0..52`.
    pub fn id(self) -> u8 {
        self.suit.index() * 13 + self.rank.index()
    }
}

impl TryFrom<u8> for Card {
    type Error = DomainError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match (Suit::from_index(id / 13), Rank::from_index(id % 13)) {
            (Some(suit), Some(rank)) => Ok(Card { suit, rank }),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidCard,
                format!("Card id must be between 0 and 51, got {id}"),
            )),
        }
    }
}

impl TryFrom<i64> for Card {
    type Error = DomainError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        let narrowed = u8::try_from(id).map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidCard,
                format!("Card id must be between 0 and 51, got {id}"),
            )
        })?;
        Card::try_from(narrowed)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.id()
    }
}

// Note: Ord on Card is only for stable sorting: suit order C<D<H<S then rank order.
// Do not use for trick resolution, which depends on lead and trump.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
