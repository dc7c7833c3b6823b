// TODO: Add insurance offers when the dealer shows an ace
mod card;
mod dealer;
mod engine;
mod hand;
mod leveling;
mod round;
mod rules;
mod settlement;
mod shoe;
mod strategy;

pub use card::{Card, Rank, Suit};
pub use dealer::{dealer_should_hit, play_dealer};
pub use engine::{
    compare_hands, resolve_naturals, resolve_single_hand, resolve_split_hands, Resolution,
};
pub use hand::{
    evaluate_hand, is_blackjack, is_busted, is_pair_hand, is_soft_hand, Hand, HandValue, Outcome,
};
pub use leveling::xp_per_win;
pub use round::{Round, RoundError, RoundPhase};
pub use rules::{PayoutRatio, TableRules};
pub use settlement::{round_to_cents, settle, settle_with_payout};
pub use shoe::Shoe;
pub use strategy::{
    can_double, can_split, dealer_key, feedback_message, optimal_move, optimal_rule, tip_message,
    Action, DealerKey, DealerMatch, RuleCase,
};
