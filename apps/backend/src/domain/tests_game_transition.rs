use crate::domain::bidding::place_bid;
use crate::domain::game_transition::{start_new_round, RoundStarted};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{game_with_players, two_player_game};
use crate::domain::tricks::play_card;

fn play_out_round(state: &mut crate::domain::GameState) {
    while state.hands.iter().any(|h| !h.is_empty()) {
        for seat in 0..state.player_count() {
            let card = state.hands[seat][0];
            let player = state.players[seat].clone();
            play_card(state, &player, card.id() as i64).unwrap();
        }
    }
}

#[test]
fn new_round_keeps_scores_and_resets_round() {
    let mut state = two_player_game(21);
    place_bid(&mut state, "alice", 0, false).unwrap();
    place_bid(&mut state, "AI_1", 0, false).unwrap();
    play_out_round(&mut state);
    assert_eq!(state.phase(), Phase::RoundComplete);
    let scores = state.scores_total.clone();
    assert_eq!(scores.iter().sum::<u32>(), 1);

    let started = start_new_round(&mut state).unwrap();
    assert_eq!(
        started,
        RoundStarted {
            round_no: 2,
            hand_size: 2
        }
    );
    assert_eq!(state.scores_total, scores);
    assert_eq!(state.round.bids, vec![None, None]);
    assert!(state.round.tricks.is_empty());
    assert!(state.round.trick_winners.is_empty());
    assert_eq!(state.round.tricks_won, vec![0, 0]);
    assert!(state.hands.iter().all(|h| h.len() == 2));
    assert_eq!(state.phase(), Phase::Bidding);
    assert_eq!(state.current_player(), Some(0));
}

#[test]
fn new_round_does_not_require_finished_round() {
    let mut state = game_with_players(3, 5);
    place_bid(&mut state, "alice", 1, false).unwrap();
    start_new_round(&mut state).unwrap();
    assert_eq!(state.round_no, 2);
    assert_eq!(state.bid_count(), 0);
}

#[test]
fn rounds_deal_differently_but_reproducibly() {
    let mut a = game_with_players(4, 77);
    let mut b = game_with_players(4, 77);
    let round_one = a.hands.clone();

    start_new_round(&mut a).unwrap();
    start_new_round(&mut b).unwrap();
    assert_eq!(a.hands, b.hands);
    assert_eq!(a.trump, b.trump);
    assert_ne!(a.hands, round_one);
}

#[test]
fn hand_size_stops_growing_at_deck_limit() {
    // 26 players: at most 2 cards each, none left for trump.
    let mut state = game_with_players(26, 3);
    start_new_round(&mut state).unwrap();
    assert_eq!(state.hand_size, 2);
    assert_eq!(state.trump, None);

    let started = start_new_round(&mut state).unwrap();
    assert_eq!(started.hand_size, 2);
    assert_eq!(started.round_no, 3);
}
