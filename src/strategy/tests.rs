use super::tables;
use super::*;
use crate::card::{Rank, Suit};

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

fn hand(ranks: &[Rank]) -> Hand {
    Hand::with_cards(ranks.iter().map(|r| Card::new(*r, Suit::Hearts)).collect())
}

fn move_for(ranks: &[Rank], upcard: Rank) -> Action {
    optimal_move(&hand(ranks), card(upcard), &TableRules::default())
}

#[test]
fn test_dealer_key_buckets() {
    assert_eq!(dealer_key(card(Rank::Ace)), DealerKey::Ace);
    assert_eq!(dealer_key(card(Rank::Ten)), DealerKey::Ten);
    assert_eq!(dealer_key(card(Rank::Jack)), DealerKey::Ten);
    assert_eq!(dealer_key(card(Rank::Queen)), DealerKey::Ten);
    assert_eq!(dealer_key(card(Rank::King)), DealerKey::Ten);
    assert_eq!(dealer_key(card(Rank::Two)), DealerKey::Two);
    assert_eq!(dealer_key(card(Rank::Nine)), DealerKey::Nine);
}

#[test]
fn test_always_split_aces_and_eights() {
    for upcard in Rank::ALL {
        assert_eq!(move_for(&[Rank::Ace, Rank::Ace], upcard), Action::Split);
        assert_eq!(move_for(&[Rank::Eight, Rank::Eight], upcard), Action::Split);
    }
}

#[test]
fn test_never_split_tens() {
    for upcard in Rank::ALL {
        assert_eq!(move_for(&[Rank::Ten, Rank::Ten], upcard), Action::Stand);
        // K + 10 pairs by value and stands the same way
        assert_eq!(move_for(&[Rank::King, Rank::Ten], upcard), Action::Stand);
    }
}

#[test]
fn test_split_nines_except_seven_ten_ace() {
    assert_eq!(move_for(&[Rank::Nine, Rank::Nine], Rank::Six), Action::Split);
    assert_eq!(move_for(&[Rank::Nine, Rank::Nine], Rank::Eight), Action::Split);
    assert_eq!(move_for(&[Rank::Nine, Rank::Nine], Rank::Seven), Action::Stand);
    assert_eq!(move_for(&[Rank::Nine, Rank::Nine], Rank::King), Action::Stand);
    assert_eq!(move_for(&[Rank::Nine, Rank::Nine], Rank::Ace), Action::Stand);
}

#[test]
fn test_pair_of_fives_doubles_like_hard_ten() {
    assert_eq!(move_for(&[Rank::Five, Rank::Five], Rank::Six), Action::Double);
    assert_eq!(move_for(&[Rank::Five, Rank::Five], Rank::Nine), Action::Double);
    assert_eq!(move_for(&[Rank::Five, Rank::Five], Rank::Ten), Action::Hit);
    assert_eq!(move_for(&[Rank::Five, Rank::Five], Rank::Ace), Action::Hit);
}

#[test]
fn test_hard_sixteen_hits_strong_upcard() {
    assert_eq!(move_for(&[Rank::Nine, Rank::Seven], Rank::King), Action::Hit);
    assert_eq!(move_for(&[Rank::Nine, Rank::Seven], Rank::Six), Action::Stand);
}

#[test]
fn test_hard_twelve_edges() {
    assert_eq!(move_for(&[Rank::Ten, Rank::Two], Rank::Three), Action::Hit);
    assert_eq!(move_for(&[Rank::Ten, Rank::Two], Rank::Four), Action::Stand);
    assert_eq!(move_for(&[Rank::Ten, Rank::Two], Rank::Six), Action::Stand);
    assert_eq!(move_for(&[Rank::Ten, Rank::Two], Rank::Seven), Action::Hit);
}

#[test]
fn test_soft_eighteen_is_upcard_dependent() {
    assert_eq!(move_for(&[Rank::Ace, Rank::Seven], Rank::Six), Action::Double);
    assert_eq!(move_for(&[Rank::Ace, Rank::Seven], Rank::Seven), Action::Stand);
    assert_eq!(move_for(&[Rank::Ace, Rank::Seven], Rank::Eight), Action::Stand);
    assert_eq!(move_for(&[Rank::Ace, Rank::Seven], Rank::Nine), Action::Hit);
    assert_eq!(move_for(&[Rank::Ace, Rank::Seven], Rank::Ace), Action::Hit);
}

#[test]
fn test_soft_nineteen_doubles_only_against_six() {
    assert_eq!(move_for(&[Rank::Ace, Rank::Eight], Rank::Six), Action::Double);
    assert_eq!(move_for(&[Rank::Ace, Rank::Eight], Rank::Five), Action::Stand);
    assert_eq!(move_for(&[Rank::Ace, Rank::Eight], Rank::Ten), Action::Stand);
}

#[test]
fn test_hard_eleven_always_doubles() {
    for upcard in Rank::ALL {
        assert_eq!(move_for(&[Rank::Six, Rank::Five], upcard), Action::Double);
    }
}

#[test]
fn test_three_card_eleven_falls_back_to_hit() {
    // the rule says double, but doubling needs an untouched two-card hand
    assert_eq!(
        move_for(&[Rank::Five, Rank::Three, Rank::Three], Rank::Six),
        Action::Hit
    );
}

#[test]
fn test_three_card_soft_eighteen_falls_back_to_stand() {
    // soft 18 vs 4 doubles on two cards, stands otherwise
    assert_eq!(
        move_for(&[Rank::Ace, Rank::Three, Rank::Four], Rank::Four),
        Action::Stand
    );
}

#[test]
fn test_split_aces_cannot_double() {
    let rules = TableRules::default();
    let mut h = hand(&[Rank::Ace, Rank::Five]);
    h.from_split = true;
    h.split_from_aces = true;
    // soft 16 vs 4 would double on a normal hand
    assert_eq!(optimal_move(&h, card(Rank::Four), &rules), Action::Hit);

    let mut permissive = rules;
    permissive.double_on_split_aces = true;
    assert_eq!(optimal_move(&h, card(Rank::Four), &permissive), Action::Double);
}

#[test]
fn test_no_double_after_split_when_das_disabled() {
    let rules = TableRules {
        double_after_split: false,
        ..TableRules::default()
    };
    let mut h = hand(&[Rank::Six, Rank::Five]);
    h.from_split = true;
    assert_eq!(optimal_move(&h, card(Rank::Six), &rules), Action::Hit);
    assert_eq!(
        optimal_move(&h, card(Rank::Six), &TableRules::default()),
        Action::Double
    );
}

#[test]
fn test_split_hand_cannot_resplit() {
    let rules = TableRules::default();
    let mut h = hand(&[Rank::Eight, Rank::Eight]);
    h.from_split = true;
    // no resplit: the pair plays as a hard 16
    assert_eq!(optimal_move(&h, card(Rank::Six), &rules), Action::Stand);
    assert_eq!(optimal_move(&h, card(Rank::King), &rules), Action::Hit);
}

#[test]
fn test_tip_message_plain() {
    let rules = TableRules::default();
    let tip = tip_message(&hand(&[Rank::Eight, Rank::Eight]), card(Rank::Ten), &rules);
    assert_eq!(tip, "Always split eights.");
}

#[test]
fn test_tip_message_appends_fallback_clause() {
    let rules = TableRules::default();
    let tip = tip_message(
        &hand(&[Rank::Five, Rank::Three, Rank::Three]),
        card(Rank::Six),
        &rules,
    );
    assert!(tip.starts_with("Double your 11"));
    assert!(tip.ends_with("Doubling isn't available after drawing cards, so hit instead."));
}

#[test]
fn test_tip_message_split_aces_clause() {
    let rules = TableRules::default();
    let mut h = hand(&[Rank::Ace, Rank::Five]);
    h.from_split = true;
    h.split_from_aces = true;
    let tip = tip_message(&h, card(Rank::Four), &rules);
    assert!(tip.ends_with("Doubling isn't available on split aces, so hit instead."));
}

#[test]
fn test_feedback_message_follows_same_substitution() {
    let rules = TableRules::default();
    let plain = feedback_message(&hand(&[Rank::Six, Rank::Five]), card(Rank::Ace), &rules);
    assert!(!plain.contains("Doubling isn't available"));

    let substituted = feedback_message(
        &hand(&[Rank::Five, Rank::Three, Rank::Three]),
        card(Rank::Ace),
        &rules,
    );
    assert!(substituted.contains("Doubling isn't available"));
}

#[test]
fn test_every_two_card_hand_has_a_rule() {
    // exhaustive sweep: no decidable (hand, upcard) combination may fall
    // through to the default rule; a natural is terminal and exempt
    for first in Rank::ALL {
        for second in Rank::ALL {
            for upcard in Rank::ALL {
                let cards = [
                    Card::new(first, Suit::Spades),
                    Card::new(second, Suit::Hearts),
                ];
                if crate::hand::is_blackjack(&cards) {
                    continue;
                }
                let case = optimal_rule(&cards, card(upcard));
                assert!(
                    !std::ptr::eq(case, &tables::DEFAULT_CASE),
                    "default rule hit for {:?}+{:?} vs {:?}",
                    first,
                    second,
                    upcard
                );
            }
        }
    }
}

#[test]
fn test_multi_card_hard_totals_have_rules() {
    // hard 21 is only reachable with three or more cards
    let cards = [card(Rank::Seven), card(Rank::Seven), card(Rank::Seven)];
    for upcard in Rank::ALL {
        let case = optimal_rule(&cards, card(upcard));
        assert_eq!(case.action, Action::Stand);
    }
}

#[test]
fn test_soft_blackjack_total_uses_default_rule() {
    // soft 21 on two cards is a terminal natural; the tables stop at soft
    // 20 and the designed default takes over
    let cards = [card(Rank::Ace), card(Rank::King)];
    let case = optimal_rule(&cards, card(Rank::Six));
    assert!(std::ptr::eq(case, &tables::DEFAULT_CASE));
}

#[test]
fn test_actions_never_resolve_to_unavailable_double() {
    let rules = TableRules::default();
    for first in Rank::ALL {
        for second in Rank::ALL {
            for third in Rank::ALL {
                let h = hand(&[first, second, third]);
                if h.is_busted() {
                    continue;
                }
                for upcard in Rank::ALL {
                    let action = optimal_move(&h, card(upcard), &rules);
                    assert_ne!(
                        action,
                        Action::Double,
                        "double resolved for a three-card hand {:?}+{:?}+{:?}",
                        first,
                        second,
                        third
                    );
                }
            }
        }
    }
}
