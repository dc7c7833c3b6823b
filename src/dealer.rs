use crate::card::Card;
use crate::hand::evaluate_hand;
use crate::rules::TableRules;
use crate::shoe::Shoe;

/// Deterministic dealer hit/stand decision: draw below 17, stand above,
/// and on exactly 17 hit only a soft 17 at an H17 table.
pub fn dealer_should_hit(cards: &[Card], rules: &TableRules) -> bool {
    let value = evaluate_hand(cards);
    if value.total < 17 {
        true
    } else if value.total > 17 {
        false
    } else {
        value.is_soft && rules.dealer_hits_soft_17
    }
}

/// Play the dealer hand out: one card at a time, re-evaluating after each
/// draw, until the policy stands or the hand busts.
pub fn play_dealer(shoe: &mut Shoe, dealer: &mut Vec<Card>, rules: &TableRules) {
    while dealer_should_hit(dealer, rules) {
        dealer.push(shoe.draw());
    }
}
