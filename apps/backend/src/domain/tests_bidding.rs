use crate::domain::bidding::{
    legal_bids, place_bid, Bid, ALREADY_BID_MSG, BIDDING_CLOSED_MSG, RESTRICTED_BID_MSG,
    TOTAL_BIDS_MSG,
};
use crate::domain::state::{Phase, INVALID_PLAYER_MSG};
use crate::domain::test_state_helpers::{game_with_players, two_player_game};
use crate::errors::domain::{DomainError, ValidationKind};

fn assert_rejected(err: DomainError, kind: ValidationKind, msg: &str) {
    match err {
        DomainError::Validation(k, detail) => {
            assert_eq!(k, kind);
            assert_eq!(detail, msg);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn two_player_round_one_walkthrough() {
    let mut state = two_player_game(42);
    assert_eq!(state.hand_size, 1);

    assert_eq!(place_bid(&mut state, "alice", 0, false).unwrap(), Bid(0));

    // 0 + 1 == cards dealt
    let err = place_bid(&mut state, "AI_1", 1, true).unwrap_err();
    assert_rejected(err, ValidationKind::RestrictedBid, RESTRICTED_BID_MSG);
    assert_eq!(state.round.bids, vec![Some(0), None]);

    assert_eq!(place_bid(&mut state, "AI_1", 0, true).unwrap(), Bid(0));
    assert!(state.bidding_closed());
    assert_eq!(state.phase(), Phase::Playing);
}

#[test]
fn unknown_player_is_rejected_first() {
    let mut state = two_player_game(1);
    let err = place_bid(&mut state, "mallory", 99, true).unwrap_err();
    assert_rejected(err, ValidationKind::InvalidPlayer, INVALID_PLAYER_MSG);
}

#[test]
fn bids_after_everyone_has_bid_are_closed() {
    let mut state = two_player_game(2);
    place_bid(&mut state, "alice", 1, false).unwrap();
    place_bid(&mut state, "AI_1", 1, false).unwrap();

    // Closed takes precedence over range checks.
    let err = place_bid(&mut state, "alice", 50, false).unwrap_err();
    assert_rejected(err, ValidationKind::BiddingClosed, BIDDING_CLOSED_MSG);
}

#[test]
fn second_bid_from_same_player_is_rejected() {
    let mut state = game_with_players(3, 5);
    place_bid(&mut state, "alice", 1, false).unwrap();

    let err = place_bid(&mut state, "alice", 0, false).unwrap_err();
    assert_rejected(err, ValidationKind::AlreadyBid, ALREADY_BID_MSG);
    assert_eq!(state.round.bids[0], Some(1));
}

#[test]
fn out_of_range_bids_report_the_range() {
    let mut state = two_player_game(3);
    for bid in [-1, 2, 1_000] {
        let err = place_bid(&mut state, "alice", bid, false).unwrap_err();
        assert_rejected(err, ValidationKind::BidOutOfRange, "Bid must be between 0 and 1");
    }
    assert_eq!(state.bid_count(), 0);
}

#[test]
fn restricted_rule_applies_to_any_bidder_position() {
    // First bidder with nothing placed yet: bid == cards dealt is refused.
    let mut state = game_with_players(3, 9);
    let err = place_bid(&mut state, "alice", 1, true).unwrap_err();
    assert_rejected(err, ValidationKind::RestrictedBid, RESTRICTED_BID_MSG);

    // Same bid without the flag is fine for a non-closing bidder.
    assert!(place_bid(&mut state, "alice", 1, false).is_ok());
}

#[test]
fn closing_bid_cannot_make_total_equal_cards_dealt() {
    let mut state = game_with_players(3, 4);
    place_bid(&mut state, "alice", 0, false).unwrap();
    place_bid(&mut state, "AI_1", 0, false).unwrap();

    let err = place_bid(&mut state, "AI_2", 1, false).unwrap_err();
    assert_rejected(err, ValidationKind::TotalBidsEqualCardsDealt, TOTAL_BIDS_MSG);
    assert_eq!(state.round.bids, vec![Some(0), Some(0), None]);
    assert!(!state.bidding_closed());

    assert!(place_bid(&mut state, "AI_2", 0, false).is_ok());
    assert!(state.bidding_closed());
}

#[test]
fn restricted_rule_is_checked_before_closing_rule() {
    let mut state = two_player_game(8);
    place_bid(&mut state, "alice", 0, false).unwrap();

    // Both rules would fire; the restricted message wins.
    let err = place_bid(&mut state, "AI_1", 1, true).unwrap_err();
    assert_rejected(err, ValidationKind::RestrictedBid, RESTRICTED_BID_MSG);

    let err = place_bid(&mut state, "AI_1", 1, false).unwrap_err();
    assert_rejected(err, ValidationKind::TotalBidsEqualCardsDealt, TOTAL_BIDS_MSG);
}

#[test]
fn single_player_game_can_never_bid_exactly() {
    let mut state = game_with_players(1, 6);
    assert_eq!(state.hand_size, 1);
    assert_eq!(legal_bids(&state, 0, false), vec![0]);

    let err = place_bid(&mut state, "alice", 1, false).unwrap_err();
    assert_rejected(err, ValidationKind::TotalBidsEqualCardsDealt, TOTAL_BIDS_MSG);
    assert!(place_bid(&mut state, "alice", 0, false).is_ok());
}

#[test]
fn legal_bids_mirror_place_bid() {
    let mut state = game_with_players(3, 10);
    assert_eq!(legal_bids(&state, 0, false), vec![0, 1]);
    assert_eq!(legal_bids(&state, 0, true), vec![0]);

    place_bid(&mut state, "alice", 1, false).unwrap();
    assert!(legal_bids(&state, 0, false).is_empty());

    place_bid(&mut state, "AI_1", 1, false).unwrap();
    // Total is 2 > cards dealt, nothing can land exactly on 1.
    assert_eq!(legal_bids(&state, 2, false), vec![0, 1]);

    place_bid(&mut state, "AI_2", 0, false).unwrap();
    assert!(legal_bids(&state, 2, false).is_empty());
}
