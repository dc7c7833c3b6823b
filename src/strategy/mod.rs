mod tables;
#[cfg(test)]
mod tests;

use crate::card::Card;
use crate::hand::{evaluate_hand, is_pair_hand, Hand};
use crate::rules::TableRules;
use serde::{Deserialize, Serialize};

/// A basic-strategy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Double => "double down",
            Action::Split => "split",
        }
    }
}

/// Bucketed representation of the dealer's visible card: 10/J/Q/K collapse
/// to Ten, the ace stays distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerKey {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Ace,
}

pub fn dealer_key(upcard: Card) -> DealerKey {
    match upcard.value() {
        11 => DealerKey::Ace,
        10 => DealerKey::Ten,
        9 => DealerKey::Nine,
        8 => DealerKey::Eight,
        7 => DealerKey::Seven,
        6 => DealerKey::Six,
        5 => DealerKey::Five,
        4 => DealerKey::Four,
        3 => DealerKey::Three,
        _ => DealerKey::Two,
    }
}

/// Which dealer upcards a rule case applies to. Explicit-upcard cases are
/// listed before the `Any` catch-all and matched first-wins in declaration
/// order.
#[derive(Debug, Clone, Copy)]
pub enum DealerMatch {
    Any,
    Upcards(&'static [DealerKey]),
}

impl DealerMatch {
    fn matches(&self, key: DealerKey) -> bool {
        match self {
            DealerMatch::Any => true,
            DealerMatch::Upcards(keys) => keys.contains(&key),
        }
    }
}

/// One entry of the strategy tables: the optimal action, the action to
/// substitute when doubling is structurally unavailable, and the advisory
/// text shown to the player.
#[derive(Debug, Clone, Copy)]
pub struct RuleCase {
    pub dealers: DealerMatch,
    pub action: Action,
    pub fallback: Option<Action>,
    pub tip: &'static str,
    pub why: &'static str,
}

fn first_match(cases: &'static [RuleCase], key: DealerKey) -> Option<&'static RuleCase> {
    cases.iter().find(|case| case.dealers.matches(key))
}

/// Look up the strategy rule for a hand against a dealer upcard.
///
/// Classification order: pair (exactly two equal-value cards), then soft,
/// then hard with the lookup total capped at 21. A lookup that matches no
/// table entry resolves to the designed default rule (hit) and is logged,
/// since full coverage should make that unreachable.
pub fn optimal_rule(cards: &[Card], dealer_upcard: Card) -> &'static RuleCase {
    lookup_rule(cards, dealer_upcard, true)
}

fn lookup_rule(cards: &[Card], dealer_upcard: Card, pair_eligible: bool) -> &'static RuleCase {
    let key = dealer_key(dealer_upcard);

    if pair_eligible && is_pair_hand(cards) {
        if let Some(case) = tables::pair_cases(cards[0].value()).and_then(|c| first_match(c, key))
        {
            return case;
        }
    }

    let value = evaluate_hand(cards);
    let cases = if value.is_soft {
        tables::soft_cases(value.total)
    } else {
        tables::hard_cases(value.total.min(21))
    };

    match cases.and_then(|c| first_match(c, key)) {
        Some(case) => case,
        None => {
            log::warn!(
                "no strategy rule for total {} (soft: {}) vs {:?}; using the default rule",
                value.total,
                value.is_soft,
                key
            );
            &tables::DEFAULT_CASE
        }
    }
}

/// Doubling is structurally available: an untouched two-card hand, and not
/// barred by the split rules.
pub fn can_double(hand: &Hand, rules: &TableRules) -> bool {
    hand.cards.len() == 2
        && !hand.doubled
        && (!hand.from_split || rules.double_after_split)
        && (!hand.split_from_aces || rules.double_on_split_aces)
}

/// One split per round: a hand that already came out of a split cannot be
/// resplit.
pub fn can_split(hand: &Hand) -> bool {
    hand.is_pair() && !hand.from_split
}

struct Resolved {
    case: &'static RuleCase,
    action: Action,
    substituted: bool,
}

fn resolve(hand: &Hand, dealer_upcard: Card, rules: &TableRules) -> Resolved {
    let case = lookup_rule(&hand.cards, dealer_upcard, can_split(hand));
    if case.action == Action::Double && !can_double(hand, rules) {
        // never fall back to another double
        let fallback = case.fallback.unwrap_or(Action::Hit);
        Resolved {
            case,
            action: fallback,
            substituted: true,
        }
    } else {
        Resolved {
            case,
            action: case.action,
            substituted: false,
        }
    }
}

/// The actionable optimal move for the hand: the matched rule's action with
/// the declared fallback substituted when doubling cannot apply (hand size
/// is not two, or split-hand restrictions bar it).
pub fn optimal_move(hand: &Hand, dealer_upcard: Card, rules: &TableRules) -> Action {
    resolve(hand, dealer_upcard, rules).action
}

fn substitution_clause(hand: &Hand, fallback: Action) -> String {
    let reason = if hand.cards.len() != 2 {
        "after drawing cards"
    } else if hand.split_from_aces {
        "on split aces"
    } else {
        "after splitting"
    };
    format!("Doubling isn't available {}, so {} instead.", reason, fallback.label())
}

/// Advisory shown before the player acts.
pub fn tip_message(hand: &Hand, dealer_upcard: Card, rules: &TableRules) -> String {
    let resolved = resolve(hand, dealer_upcard, rules);
    if resolved.substituted {
        format!(
            "{} {}",
            resolved.case.tip,
            substitution_clause(hand, resolved.action)
        )
    } else {
        resolved.case.tip.to_string()
    }
}

/// Explanation shown after the player acts, teaching why the optimal move
/// is what it is.
pub fn feedback_message(hand: &Hand, dealer_upcard: Card, rules: &TableRules) -> String {
    let resolved = resolve(hand, dealer_upcard, rules);
    if resolved.substituted {
        format!(
            "{} {}",
            resolved.case.why,
            substitution_clause(hand, resolved.action)
        )
    } else {
        resolved.case.why.to_string()
    }
}
