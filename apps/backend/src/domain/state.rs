use serde::Serialize;

use crate::domain::dealing::deal_hands;
use crate::domain::rules::{hand_size_for_round, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Opaque player identifier supplied by the caller (or generated for AI seats).
pub type PlayerId = String;
/// Position in the player list, 0-based.
pub type Seat = usize;

/// Message used whenever a player id is not seated in the game.
pub const INVALID_PLAYER_MSG: &str = "Invalid game or player";

/// Derived progression of the current round.
///
/// Informational only: the engine does not gate plays on phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not every seat has bid and no card has been played.
    Bidding,
    /// Cards are being played into tricks.
    Playing,
    /// Every hand is empty and the last trick has been resolved.
    RoundComplete,
}

/// Per-round state, cleared at the start of every round.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    /// Bids per seat.
    pub bids: Vec<Option<u8>>,
    /// Tricks in play order; only the last one may be incomplete.
    pub tricks: Vec<Vec<(Seat, Card)>>,
    /// Winner of each completed trick, in order.
    pub trick_winners: Vec<Seat>,
    /// Tricks won per seat this round.
    pub tricks_won: Vec<u8>,
}

impl RoundState {
    pub fn empty(player_count: usize) -> Self {
        Self {
            bids: vec![None; player_count],
            tricks: Vec::new(),
            trick_winners: Vec::new(),
            tricks_won: vec![0; player_count],
        }
    }
}

/// Entire game container for one session, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seated players, in deal order.
    pub players: Vec<PlayerId>,
    /// Players' hands, indexed by seat.
    pub hands: Vec<Vec<Card>>,
    /// Round number, 1-based.
    pub round_no: u32,
    /// Cards dealt to each player this round.
    pub hand_size: u8,
    /// Card turned up after dealing; `None` when the deck ran out.
    pub trump: Option<Card>,
    /// Tricks won across the whole session, indexed by seat.
    pub scores_total: Vec<u32>,
    /// Per-round container.
    pub round: RoundState,
    /// Base seed for this game's deals.
    pub rng_seed: u64,
}

impl GameState {
    /// Seat the players and deal round 1.
    pub fn new(players: Vec<PlayerId>, rng_seed: u64) -> Result<Self, DomainError> {
        let player_count = players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Number of players must be between {MIN_PLAYERS} and {MAX_PLAYERS}"),
            ));
        }

        let mut state = Self {
            hands: vec![Vec::new(); player_count],
            round_no: 1,
            hand_size: 0,
            trump: None,
            scores_total: vec![0; player_count],
            round: RoundState::empty(player_count),
            rng_seed,
            players,
        };
        state.hand_size = require_hand_size(state.round_no, player_count)?;
        state.deal_round()?;
        Ok(state)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn seat_of(&self, player: &str) -> Option<Seat> {
        self.players.iter().position(|p| p == player)
    }

    /// Resolve a player id to a seat or fail with the caller-facing message.
    pub fn require_seat(&self, player: &str) -> Result<Seat, DomainError> {
        self.seat_of(player).ok_or_else(|| {
            DomainError::validation(ValidationKind::InvalidPlayer, INVALID_PLAYER_MSG)
        })
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump.map(|c| c.suit)
    }

    pub fn bid_count(&self) -> usize {
        self.round.bids.iter().filter(|b| b.is_some()).count()
    }

    pub fn bid_total(&self) -> u32 {
        self.round.bids.iter().flatten().map(|&b| b as u32).sum()
    }

    pub fn bidding_closed(&self) -> bool {
        self.bid_count() >= self.player_count()
    }

    /// The trick currently being built, if any.
    pub fn current_trick(&self) -> Option<&[(Seat, Card)]> {
        self.round.tricks.last().map(Vec::as_slice)
    }

    pub fn trick_is_complete(&self, trick: &[(Seat, Card)]) -> bool {
        trick.len() == self.player_count()
    }

    pub fn phase(&self) -> Phase {
        let trick_open = self
            .current_trick()
            .is_some_and(|t| !self.trick_is_complete(t));
        if self.hands.iter().all(Vec::is_empty) && !trick_open {
            return Phase::RoundComplete;
        }
        if !self.bidding_closed() && self.round.tricks.is_empty() {
            return Phase::Bidding;
        }
        Phase::Playing
    }

    /// Seat expected to act next.
    ///
    /// Bidding goes to the first seat without a bid. During play the seat
    /// after the last card played acts, or the previous trick's winner leads.
    pub fn current_player(&self) -> Option<Seat> {
        match self.phase() {
            Phase::RoundComplete => None,
            Phase::Bidding => self.round.bids.iter().position(Option::is_none),
            Phase::Playing => match self.current_trick() {
                None => Some(0),
                Some(trick) if self.trick_is_complete(trick) => {
                    self.round.trick_winners.last().copied()
                }
                Some(trick) => trick
                    .last()
                    .map(|&(seat, _)| next_seat(seat, self.player_count())),
            },
        }
    }

    /// Deal the current round's hands and trump, replacing any previous cards.
    pub(crate) fn deal_round(&mut self) -> Result<(), DomainError> {
        let seed = derive_dealing_seed(self.rng_seed, self.round_no);
        let deal = deal_hands(self.player_count(), self.hand_size, seed)?;
        self.hands = deal.hands;
        self.trump = deal.trump;
        Ok(())
    }
}

/// Returns the next seat in player order, wrapping around.
#[inline]
pub fn next_seat(seat: Seat, player_count: usize) -> Seat {
    (seat + 1) % player_count
}

pub fn require_hand_size(round_no: u32, player_count: usize) -> Result<u8, DomainError> {
    hand_size_for_round(round_no, player_count).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidHandSize,
            format!("No hand size for round {round_no} with {player_count} players"),
        )
    })
}
