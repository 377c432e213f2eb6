//! Player view of game state - what information is visible to a caller.
//!
//! The view is public except for `hands`, which holds at most one entry: the
//! viewer's own hand, and only when the viewer is seated in the game. Other
//! players' hands are never exposed.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::{Card, Suit};

/// Per-player values kept in seat order.
///
/// Serializes as a JSON object whose keys follow `players`, not sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap<V>(Vec<(PlayerId, V)>);

impl<V> SeatMap<V> {
    pub fn get(&self, player: &str) -> Option<&V> {
        self.0.iter().find(|(p, _)| p == player).map(|(_, v)| v)
    }

    pub fn contains_key(&self, player: &str) -> bool {
        self.get(player).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PlayerId> {
        self.0.iter().map(|(p, _)| p)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> FromIterator<(PlayerId, V)> for SeatMap<V> {
    fn from_iter<I: IntoIterator<Item = (PlayerId, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, V> IntoIterator for &'a SeatMap<V> {
    type Item = &'a (PlayerId, V);
    type IntoIter = std::slice::Iter<'a, (PlayerId, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V: Serialize> Serialize for SeatMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (player, value) in &self.0 {
            map.serialize_entry(player, value)?;
        }
        map.end()
    }
}

/// Caller-visible slice of a game session.
///
/// Field names are the JSON surface clients depend on.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PublicGameView {
    /// Seated players in deal order.
    pub players: Vec<PlayerId>,
    /// Index into `players` of the seat expected to act next (advisory).
    pub current_player: Option<usize>,
    pub current_round: u32,
    pub cards_dealt: u8,
    pub trump_card: Option<Card>,
    /// Suit index (0..4) of the trump card.
    pub trump_suit: Option<Suit>,
    /// Cumulative tricks won across the session.
    pub scores: SeatMap<u32>,
    /// Bids placed so far this round.
    pub bids: SeatMap<u8>,
    /// Tricks of this round as `[player, card]` pairs in play order.
    pub tricks: Vec<Vec<(PlayerId, Card)>>,
    /// The viewer's own hand, keyed by the viewer's id.
    pub hands: SeatMap<Vec<Card>>,
    pub phase: Phase,
    /// Tricks won this round.
    pub tricks_won: SeatMap<u8>,
    /// Winner of each completed trick this round.
    pub trick_winners: Vec<PlayerId>,
}

/// Project the caller-visible view of `state` for an optional viewer.
pub fn project(state: &GameState, viewer: Option<&str>) -> PublicGameView {
    let name = |seat: usize| state.players[seat].clone();

    let scores = state
        .players
        .iter()
        .cloned()
        .zip(state.scores_total.iter().copied())
        .collect();

    let bids = state
        .round
        .bids
        .iter()
        .enumerate()
        .filter_map(|(seat, bid)| bid.map(|b| (name(seat), b)))
        .collect();

    let tricks = state
        .round
        .tricks
        .iter()
        .map(|trick| trick.iter().map(|&(seat, card)| (name(seat), card)).collect())
        .collect();

    let tricks_won = state
        .players
        .iter()
        .cloned()
        .zip(state.round.tricks_won.iter().copied())
        .collect();

    let trick_winners = state.round.trick_winners.iter().map(|&s| name(s)).collect();

    let hands = viewer
        .and_then(|v| state.seat_of(v).map(|seat| (v.to_string(), state.hands[seat].clone())))
        .into_iter()
        .collect();

    PublicGameView {
        players: state.players.clone(),
        current_player: state.current_player(),
        current_round: state.round_no,
        cards_dealt: state.hand_size,
        trump_card: state.trump,
        trump_suit: state.trump_suit(),
        scores,
        bids,
        tricks,
        hands,
        phase: state.phase(),
        tricks_won,
        trick_winners,
    }
}
