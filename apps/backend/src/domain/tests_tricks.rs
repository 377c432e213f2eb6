use crate::domain::bidding::place_bid;
use crate::domain::state::{Phase, INVALID_PLAYER_MSG};
use crate::domain::test_state_helpers::{game_with_players, two_player_game, with_hands};
use crate::domain::tricks::{play_card, resolve_trick, PlayCardResult, CARD_NOT_IN_HAND_MSG};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

const fn c(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn id(card: Card) -> i64 {
    card.id() as i64
}

#[test]
fn highest_lead_suit_wins_without_trump() {
    use Rank::*;
    use Suit::*;
    let plays = [(0, c(Hearts, Ten)), (1, c(Hearts, King)), (2, c(Spades, Ace))];
    assert_eq!(resolve_trick(&plays, None), Some(1));
}

#[test]
fn any_trump_beats_lead_suit() {
    use Rank::*;
    use Suit::*;
    let plays = [(0, c(Hearts, Ace)), (1, c(Clubs, Two)), (2, c(Hearts, King))];
    assert_eq!(resolve_trick(&plays, Some(Clubs)), Some(1));

    let plays = [(0, c(Hearts, Ace)), (1, c(Clubs, Two)), (2, c(Clubs, Three))];
    assert_eq!(resolve_trick(&plays, Some(Clubs)), Some(2));
}

#[test]
fn lead_trump_suit_is_scored_as_trump() {
    use Rank::*;
    use Suit::*;
    let plays = [(0, c(Spades, Two)), (1, c(Spades, Ace)), (2, c(Hearts, Ace))];
    assert_eq!(resolve_trick(&plays, Some(Spades)), Some(1));
}

#[test]
fn all_off_suit_followers_leave_leader_winning() {
    use Rank::*;
    use Suit::*;
    let plays = [(2, c(Diamonds, Two)), (0, c(Clubs, Ace)), (1, c(Hearts, Ace))];
    assert_eq!(resolve_trick(&plays, Some(Spades)), Some(2));
}

#[test]
fn empty_trick_has_no_winner() {
    assert_eq!(resolve_trick(&[], None), None);
}

#[test]
fn play_removes_card_and_completes_trick() {
    use Rank::*;
    use Suit::*;
    let state = two_player_game(1);
    let mut state = with_hands(
        state,
        vec![vec![c(Hearts, Nine)], vec![c(Hearts, Queen)]],
        Some(c(Clubs, Four)),
    );
    place_bid(&mut state, "alice", 1, false).unwrap();
    place_bid(&mut state, "AI_1", 1, false).unwrap();

    let first = play_card(&mut state, "alice", id(c(Hearts, Nine))).unwrap();
    assert_eq!(
        first,
        PlayCardResult {
            trick_completed: false,
            trick_winner: None,
            round_complete: false,
        }
    );
    assert!(state.hands[0].is_empty());
    assert_eq!(state.current_player(), Some(1));

    let second = play_card(&mut state, "AI_1", id(c(Hearts, Queen))).unwrap();
    assert_eq!(
        second,
        PlayCardResult {
            trick_completed: true,
            trick_winner: Some(1),
            round_complete: true,
        }
    );
    assert_eq!(state.round.trick_winners, vec![1]);
    assert_eq!(state.round.tricks_won, vec![0, 1]);
    assert_eq!(state.scores_total, vec![0, 1]);
    assert_eq!(state.phase(), Phase::RoundComplete);
    assert_eq!(state.current_player(), None);
}

#[test]
fn next_card_after_full_trick_opens_a_new_one() {
    use Rank::*;
    use Suit::*;
    let state = two_player_game(2);
    let mut state = with_hands(
        state,
        vec![
            vec![c(Clubs, Ace), c(Diamonds, Two)],
            vec![c(Clubs, Three), c(Diamonds, Ace)],
        ],
        None,
    );

    play_card(&mut state, "alice", id(c(Clubs, Ace))).unwrap();
    play_card(&mut state, "AI_1", id(c(Clubs, Three))).unwrap();
    // Winner of the previous trick is expected to lead.
    assert_eq!(state.current_player(), Some(0));

    let res = play_card(&mut state, "alice", id(c(Diamonds, Two))).unwrap();
    assert!(!res.trick_completed);
    assert_eq!(state.round.tricks.len(), 2);
    assert_eq!(state.round.tricks[1], vec![(0, c(Diamonds, Two))]);

    let res = play_card(&mut state, "AI_1", id(c(Diamonds, Ace))).unwrap();
    assert_eq!(res.trick_winner, Some(1));
    assert!(res.round_complete);
    assert_eq!(state.round.tricks_won, vec![1, 1]);
    assert_eq!(state.scores_total, vec![1, 1]);
}

#[test]
fn card_not_in_hand_leaves_state_untouched() {
    use Rank::*;
    use Suit::*;
    let state = two_player_game(3);
    let mut state = with_hands(
        state,
        vec![vec![c(Hearts, Two)], vec![c(Spades, Two)]],
        None,
    );

    for bad in [id(c(Spades, Two)), 52, -1, 10_000] {
        let err = play_card(&mut state, "alice", bad).unwrap_err();
        match err {
            DomainError::Validation(ValidationKind::CardNotInHand, msg) => {
                assert_eq!(msg, CARD_NOT_IN_HAND_MSG)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(state.hands[0], vec![c(Hearts, Two)]);
    assert!(state.round.tricks.is_empty());
}

#[test]
fn unknown_player_cannot_play() {
    let mut state = game_with_players(3, 4);
    let card = state.hands[0][0];
    let err = play_card(&mut state, "mallory", id(card)).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::InvalidPlayer, msg) => {
            assert_eq!(msg, INVALID_PLAYER_MSG)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn play_is_allowed_before_bidding_completes() {
    let mut state = two_player_game(5);
    let card = state.hands[0][0];
    assert!(play_card(&mut state, "alice", id(card)).is_ok());
    assert_eq!(state.phase(), Phase::Playing);
}
