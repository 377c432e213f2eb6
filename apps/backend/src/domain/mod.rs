//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_transition;
pub mod player_view;
pub mod rules;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, card_value};
pub use cards_types::{Card, Rank, Suit, RANKS, SUITS};
pub use dealing::{deal_hands, Deal};
pub use player_view::{PublicGameView, SeatMap};
pub use rules::{hand_size_for_round, valid_bid_range};
pub use state::{GameState, Phase, PlayerId, Seat};
