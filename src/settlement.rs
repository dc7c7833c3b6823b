use crate::hand::Outcome;
use crate::rules::PayoutRatio;

/// Round a monetary amount to cents.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Map a settled outcome to the amount paid back to the player, stake
/// included. Pure arithmetic; win/loss/push classification is the
/// resolution engine's job.
///
/// A blackjack win pays the standard 3:2 regardless of the doubled flag
/// (a natural cannot be doubled). A plain win pays 2x the wager, a push
/// returns the wager, a loss pays nothing. Non-positive bets settle to
/// zero for every outcome rather than erroring.
pub fn settle(outcome: Outcome, base_bet: f64, doubled: bool, blackjack: bool) -> f64 {
    settle_with_payout(outcome, base_bet, doubled, blackjack, PayoutRatio::THREE_TO_TWO)
}

/// Same as [`settle`] with an explicit blackjack payout ratio from the
/// table rules.
pub fn settle_with_payout(
    outcome: Outcome,
    base_bet: f64,
    doubled: bool,
    blackjack: bool,
    blackjack_payout: PayoutRatio,
) -> f64 {
    if base_bet <= 0.0 {
        return 0.0;
    }

    let wager = if doubled { base_bet * 2.0 } else { base_bet };
    let payout = match outcome {
        Outcome::Win if blackjack => base_bet + blackjack_payout.winnings(base_bet),
        Outcome::Win => wager * 2.0,
        Outcome::Push => wager,
        Outcome::Loss => 0.0,
    };
    round_to_cents(payout)
}
