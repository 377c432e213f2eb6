use proptest::prelude::*;

use crate::domain::state::Seat;
use crate::domain::tricks::resolve_trick;
use crate::domain::{test_gens, test_prelude, Card, Suit};

/// Independent winner computation: trumps first, then lead suit, earliest on ties.
fn oracle_winner(plays: &[(Seat, Card)], trump: Option<Suit>) -> Seat {
    let lead = plays[0].1.suit;
    let tier = |card: &Card| {
        if Some(card.suit) == trump {
            2
        } else if card.suit == lead {
            1
        } else {
            0
        }
    };
    let best_tier = plays.iter().map(|(_, c)| tier(c)).max().unwrap_or(0);
    if best_tier == 0 {
        return plays[0].0;
    }
    let mut candidates: Vec<_> = plays.iter().filter(|(_, c)| tier(c) == best_tier).collect();
    // Stable sort keeps play order among equals.
    candidates.sort_by(|a, b| b.1.rank.cmp(&a.1.rank));
    candidates[0].0
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// The resolved winner always agrees with the oracle.
    #[test]
    fn prop_trick_winner_matches_oracle(
        plays in test_gens::complete_trick(),
        trump in test_gens::trump(),
    ) {
        let winner = resolve_trick(&plays, trump);
        prop_assert_eq!(winner, Some(oracle_winner(&plays, trump)));
    }

    /// Without trump the winner holds the highest card of the lead suit.
    #[test]
    fn prop_no_trump_winner_follows_lead(plays in test_gens::complete_trick()) {
        let lead = plays[0].1.suit;
        let winner = resolve_trick(&plays, None).unwrap();
        let winner_card = plays.iter().find(|(s, _)| *s == winner).unwrap().1;

        prop_assert_eq!(winner_card.suit, lead);
        for (_, card) in plays.iter().filter(|(_, c)| c.suit == lead) {
            prop_assert!(winner_card.rank >= card.rank);
        }
    }

    /// Once a trump is played, the winner holds a trump.
    #[test]
    fn prop_trump_played_means_trump_wins(
        plays in test_gens::complete_trick(),
        trump in test_gens::suit(),
    ) {
        let winner = resolve_trick(&plays, Some(trump)).unwrap();
        let winner_card = plays.iter().find(|(s, _)| *s == winner).unwrap().1;
        if plays.iter().any(|(_, c)| c.suit == trump) {
            prop_assert_eq!(winner_card.suit, trump);
        }
    }
}
