use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::bidding::{place_bid, BID_PLACED_MSG};
use crate::domain::tricks::{self, CARD_PLAYED_MSG};
use crate::errors::domain::DomainError;

impl GameFlowService {
    /// Record a bid for `player_id`.
    ///
    /// `is_restricted` marks the hook bidder, who may not bring the total to
    /// exactly the cards dealt. A rejected bid leaves the game unchanged.
    pub fn make_bid(
        &self,
        game_id: &str,
        player_id: &str,
        bid: i64,
        is_restricted: bool,
    ) -> Result<&'static str, DomainError> {
        debug!(game_id, player_id, bid, is_restricted, "Submitting bid");

        let outcome = self.registry.with_game(game_id, |state| {
            let placed = place_bid(state, player_id, bid, is_restricted)?;
            Ok((placed, state.bidding_closed(), state.bid_total()))
        });

        match outcome {
            Ok((placed, closed, total)) => {
                info!(
                    game_id,
                    player_id,
                    bid = placed.0,
                    bidding_closed = closed,
                    total,
                    "Bid placed"
                );
                Ok(BID_PLACED_MSG)
            }
            Err(e) => {
                debug!(game_id, player_id, bid, error = %e, "Bid rejected");
                Err(e)
            }
        }
    }

    /// Play card `card` (id `suit*13 + rank`) from `player_id`'s hand.
    ///
    /// Completing a trick resolves its winner and credits one point.
    pub fn play_card(
        &self,
        game_id: &str,
        player_id: &str,
        card: i64,
    ) -> Result<&'static str, DomainError> {
        debug!(game_id, player_id, card, "Playing card");

        let outcome = self.registry.with_game(game_id, |state| {
            let res = tricks::play_card(state, player_id, card)?;
            let winner = res.trick_winner.map(|seat| state.players[seat].clone());
            Ok((res, winner))
        });

        match outcome {
            Ok((res, winner)) => {
                if let Some(winner) = winner {
                    info!(
                        game_id,
                        player_id,
                        card,
                        %winner,
                        round_complete = res.round_complete,
                        "Trick won"
                    );
                } else {
                    debug!(game_id, player_id, card, "Card played");
                }
                Ok(CARD_PLAYED_MSG)
            }
            Err(e) => {
                debug!(game_id, player_id, card, error = %e, "Play rejected");
                Err(e)
            }
        }
    }
}
