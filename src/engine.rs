use crate::card::Card;
use crate::hand::{evaluate_hand, is_blackjack, Outcome};
use crate::leveling::xp_per_win;
use crate::rules::TableRules;
use crate::settlement::{round_to_cents, settle, settle_with_payout};
use serde::{Deserialize, Serialize};

/// Terminal record of one round: the monetary outcome plus the stat deltas
/// the persistence layer applies to the player's row. Constructed once per
/// terminal round state and handed to the caller; nothing here is stored by
/// the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Per-hand outcome in hand order; a single-hand round has one entry.
    pub outcomes: Vec<Outcome>,
    /// Human-readable result line.
    pub message: String,
    /// Amount returned to the player, stake included.
    pub payout: f64,
    /// Total amount wagered across all hands.
    pub total_bet: f64,
    /// Net result: payout minus total wagered.
    pub win_amount: f64,
    pub wins_delta: u32,
    pub losses_delta: u32,
    pub correct_moves_delta: u32,
    pub total_moves_delta: u32,
    pub hands_played_delta: u32,
    pub xp_gained: u32,
}

/// Compare a finished player hand against the dealer. A busted player hand
/// is a loss before the dealer's total is even considered; bust-vs-bust is
/// always a player loss, never a push.
pub fn compare_hands(player: &[Card], dealer: &[Card]) -> Outcome {
    let player_total = evaluate_hand(player).total;
    if player_total > 21 {
        return Outcome::Loss;
    }
    let dealer_total = evaluate_hand(dealer).total;
    if dealer_total > 21 || player_total > dealer_total {
        Outcome::Win
    } else if player_total < dealer_total {
        Outcome::Loss
    } else {
        Outcome::Push
    }
}

fn single_hand_message(player: &[Card], dealer: &[Card], outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => {
            if evaluate_hand(dealer).total > 21 {
                "Dealer Busts! You Win"
            } else {
                "You Win!"
            }
        }
        Outcome::Loss => {
            if evaluate_hand(player).total > 21 {
                "Bust! Dealer Wins"
            } else {
                "Dealer Wins"
            }
        }
        Outcome::Push => "Push! It's A Tie",
    }
}

/// Resolve one finished player hand against the finished dealer hand.
pub fn resolve_single_hand(
    player: &[Card],
    dealer: &[Card],
    bet: f64,
    doubled: bool,
    level: u32,
) -> Resolution {
    let outcome = compare_hands(player, dealer);
    let payout = settle(outcome, bet, doubled, false);
    let total_bet = if doubled { bet * 2.0 } else { bet };
    let wins_delta = u32::from(outcome == Outcome::Win);
    let losses_delta = u32::from(outcome == Outcome::Loss);
    let total_moves_delta = u32::from(outcome != Outcome::Push);
    let xp_gained = if outcome == Outcome::Win {
        xp_per_win(level, total_bet)
    } else {
        0
    };

    Resolution {
        outcomes: vec![outcome],
        message: single_hand_message(player, dealer, outcome).to_string(),
        payout,
        total_bet,
        win_amount: round_to_cents(payout - total_bet),
        wins_delta,
        losses_delta,
        correct_moves_delta: wins_delta,
        total_moves_delta,
        hands_played_delta: 1,
        xp_gained,
    }
}

/// Resolve both branches of a split round against the single dealer hand.
/// Each hand settles independently; pushes drop out of the accuracy
/// denominator, and each won hand earns its XP on its own.
pub fn resolve_split_hands(
    hand1: &[Card],
    hand2: &[Card],
    dealer: &[Card],
    bet_per_hand: f64,
    level: u32,
) -> Resolution {
    let mut outcomes = Vec::with_capacity(2);
    let mut labels = Vec::with_capacity(2);
    let mut payout = 0.0;
    let mut wins_delta = 0;
    let mut losses_delta = 0;
    let mut total_moves_delta = 2;

    for (index, hand) in [hand1, hand2].into_iter().enumerate() {
        let outcome = compare_hands(hand, dealer);
        payout += settle(outcome, bet_per_hand, false, false);
        match outcome {
            Outcome::Win => wins_delta += 1,
            Outcome::Loss => losses_delta += 1,
            Outcome::Push => total_moves_delta -= 1,
        }
        labels.push(format!("Hand {}: {}", index + 1, outcome.label()));
        outcomes.push(outcome);
    }

    let total_bet = bet_per_hand * 2.0;
    let payout = round_to_cents(payout);

    Resolution {
        outcomes,
        message: labels.join(" | "),
        payout,
        total_bet,
        win_amount: round_to_cents(payout - total_bet),
        wins_delta,
        losses_delta,
        correct_moves_delta: wins_delta,
        total_moves_delta,
        hands_played_delta: 1,
        xp_gained: wins_delta * xp_per_win(level, bet_per_hand),
    }
}

/// The once-per-round natural check after the initial four-card deal,
/// before any player action. The dealer's hole card is only consulted when
/// the upcard is ten-valued or an ace and the table peeks; behind any other
/// upcard a dealer natural stays hidden until the normal showdown.
pub fn resolve_naturals(
    player: &[Card],
    dealer: &[Card],
    bet: f64,
    level: u32,
    rules: &TableRules,
) -> Option<Resolution> {
    let player_blackjack = is_blackjack(player);
    let peeked = rules.dealer_peeks
        && dealer.first().map(|up| up.value() >= 10).unwrap_or(false);
    let dealer_blackjack = peeked && is_blackjack(dealer);

    if !player_blackjack && !dealer_blackjack {
        return None;
    }

    let resolution = if player_blackjack && dealer_blackjack {
        let payout = settle_with_payout(Outcome::Push, bet, false, true, rules.blackjack_payout);
        Resolution {
            outcomes: vec![Outcome::Push],
            message: "Push! Both Have Blackjack".to_string(),
            payout,
            total_bet: bet,
            win_amount: round_to_cents(payout - bet),
            wins_delta: 0,
            losses_delta: 0,
            correct_moves_delta: 0,
            total_moves_delta: 0,
            hands_played_delta: 1,
            xp_gained: 0,
        }
    } else if dealer_blackjack {
        Resolution {
            outcomes: vec![Outcome::Loss],
            message: "Dealer Has Blackjack".to_string(),
            payout: 0.0,
            total_bet: bet,
            win_amount: round_to_cents(-bet),
            wins_delta: 0,
            losses_delta: 1,
            correct_moves_delta: 0,
            total_moves_delta: 1,
            hands_played_delta: 1,
            xp_gained: 0,
        }
    } else {
        let payout = settle_with_payout(Outcome::Win, bet, false, true, rules.blackjack_payout);
        Resolution {
            outcomes: vec![Outcome::Win],
            message: "Blackjack! You Win".to_string(),
            payout,
            total_bet: bet,
            win_amount: round_to_cents(payout - bet),
            wins_delta: 1,
            losses_delta: 0,
            correct_moves_delta: 1,
            total_moves_delta: 1,
            hands_played_delta: 1,
            xp_gained: xp_per_win(level, bet),
        }
    };

    Some(resolution)
}
