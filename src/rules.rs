use serde::{Deserialize, Serialize};

/// Blackjack payout multiplier as a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    pub fn new(numerator: u16, denominator: u16) -> Result<Self, &'static str> {
        if denominator == 0 {
            return Err("Denominator cannot be zero");
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Winnings on top of the returned stake for the given bet.
    pub fn winnings(&self, bet: f64) -> f64 {
        bet * self.numerator as f64 / self.denominator as f64
    }
}

/// Configurable table rules injected into the strategy resolver, the dealer
/// play policy, and the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableRules {
    /// Dealer hits soft 17 (H17). When false the dealer stands on all 17s.
    pub dealer_hits_soft_17: bool,

    /// Allow doubling a hand that came out of a split (DAS).
    pub double_after_split: bool,

    /// Allow doubling a hand that came out of splitting aces.
    pub double_on_split_aces: bool,

    /// Allow surrender. Disabled at the production tables.
    pub allow_surrender: bool,

    /// Dealer peeks for blackjack with an ace or ten-value card up.
    pub dealer_peeks: bool,

    /// Blackjack payout multiplier (3:2 at the production tables).
    pub blackjack_payout: PayoutRatio,

    /// Number of decks in the shoe.
    pub num_decks: u8,
}

impl Default for TableRules {
    fn default() -> Self {
        // production trainer configuration
        Self {
            dealer_hits_soft_17: true,
            double_after_split: true,
            double_on_split_aces: false,
            allow_surrender: false,
            dealer_peeks: true,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
            num_decks: 6,
        }
    }
}

impl TableRules {
    /// S17 variant: dealer stands on all 17s, everything else unchanged.
    pub fn stand_on_all_17s() -> Self {
        Self {
            dealer_hits_soft_17: false,
            ..Self::default()
        }
    }
}
