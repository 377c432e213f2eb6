use crate::domain::rules::valid_bid_range;
use crate::domain::state::{GameState, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

pub const BID_PLACED_MSG: &str = "Bid placed successfully";
pub const BIDDING_CLOSED_MSG: &str = "All players have already bid";
pub const ALREADY_BID_MSG: &str = "Player has already bid this round";
pub const RESTRICTED_BID_MSG: &str =
    "Restricted player cannot make bid equal to number of cards dealt";
pub const TOTAL_BIDS_MSG: &str = "Total bids cannot equal number of cards dealt";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Bid(pub u8);

/// Bids `who` could place right now without being rejected.
///
/// Empty once bidding is closed or when the seat has already bid.
pub fn legal_bids(state: &GameState, who: Seat, is_restricted: bool) -> Vec<u8> {
    if state.bidding_closed() || state.round.bids.get(who).copied().flatten().is_some() {
        return Vec::new();
    }
    valid_bid_range(state.hand_size)
        .filter(|&b| check_total_rules(state, b, is_restricted).is_ok())
        .collect()
}

/// Validate and record a bid for `player`.
///
/// Checks run in a fixed order and the first failure wins. Nothing is written
/// unless every check passes, so a rejected bid never changes `bids`.
pub fn place_bid(
    state: &mut GameState,
    player: &str,
    bid: i64,
    is_restricted: bool,
) -> Result<Bid, DomainError> {
    let seat = state.require_seat(player)?;

    if state.bidding_closed() {
        return Err(DomainError::validation(
            ValidationKind::BiddingClosed,
            BIDDING_CLOSED_MSG,
        ));
    }

    if state.round.bids[seat].is_some() {
        return Err(DomainError::validation(
            ValidationKind::AlreadyBid,
            ALREADY_BID_MSG,
        ));
    }

    let range = valid_bid_range(state.hand_size);
    let bid = u8::try_from(bid)
        .ok()
        .filter(|b| range.contains(b))
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::BidOutOfRange,
                format!("Bid must be between {} and {}", range.start(), range.end()),
            )
        })?;

    check_total_rules(state, bid, is_restricted)?;

    state.round.bids[seat] = Some(bid);
    Ok(Bid(bid))
}

/// The two "no exact total" rules, evaluated against the bids already placed.
fn check_total_rules(state: &GameState, bid: u8, is_restricted: bool) -> Result<(), DomainError> {
    let cards_dealt = state.hand_size as u32;
    let proposed_total = state.bid_total() + bid as u32;

    if is_restricted && proposed_total == cards_dealt {
        return Err(DomainError::validation(
            ValidationKind::RestrictedBid,
            RESTRICTED_BID_MSG,
        ));
    }

    let closes_bidding = state.bid_count() + 1 == state.player_count();
    if closes_bidding && proposed_total == cards_dealt {
        return Err(DomainError::validation(
            ValidationKind::TotalBidsEqualCardsDealt,
            TOTAL_BIDS_MSG,
        ));
    }

    Ok(())
}
