use crate::Card;
use serde::{Deserialize, Serialize};

/// Result of a settled hand relative to the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

impl Outcome {
    /// Short label used when reporting split hands ("Hand 1: Win | ...").
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Lose",
            Outcome::Push => "Push",
        }
    }
}

/// Evaluated value of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    /// Best total with aces demoted only as needed to avoid busting.
    pub total: u8,
    /// At least one ace is still counted as 11 in `total`.
    pub is_soft: bool,
    /// Total with every ace counted as 1.
    pub hard_value: u8,
}

/// Evaluate a blackjack hand.
///
/// Every ace starts at 11; while the total exceeds 21, aces are demoted to 1
/// one at a time. The hand is soft iff an ace survives at 11. An empty hand
/// evaluates to zero and is not soft.
pub fn evaluate_hand(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut aces_at_eleven: u8 = 0;

    for card in cards {
        let value = card.value();
        if value == 11 {
            aces_at_eleven += 1;
        }
        total += value;
    }

    while total > 21 && aces_at_eleven > 0 {
        total -= 10;
        aces_at_eleven -= 1;
    }

    HandValue {
        total,
        is_soft: aces_at_eleven > 0,
        hard_value: total - 10 * aces_at_eleven,
    }
}

/// Check if a hand is soft (has an ace counted as 11).
pub fn is_soft_hand(cards: &[Card]) -> bool {
    evaluate_hand(cards).is_soft
}

/// Check if a hand is busted.
pub fn is_busted(cards: &[Card]) -> bool {
    evaluate_hand(cards).total > 21
}

/// Check if a hand is a natural: 21 on exactly two cards.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate_hand(cards).total == 21
}

/// Check if a hand is a splittable pair: exactly two cards of equal
/// blackjack value. A king and a ten count as a pair of tens.
pub fn is_pair_hand(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].value() == cards[1].value()
}

/// One player hand, or one branch of a split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub doubled: bool,
    pub stood: bool,
    /// This hand came out of a split.
    pub from_split: bool,
    /// This hand came out of splitting aces, which restricts doubling and
    /// (under production rules) locks the hand after one drawn card.
    pub split_from_aces: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            doubled: false,
            stood: false,
            from_split: false,
            split_from_aces: false,
        }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::new()
        }
    }

    pub fn value(&self) -> HandValue {
        evaluate_hand(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        // a 21 assembled from a split pair is not a natural
        !self.from_split && is_blackjack(&self.cards)
    }

    pub fn is_pair(&self) -> bool {
        is_pair_hand(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The hand takes no further cards: stood, doubled down, or busted.
    pub fn is_finished(&self) -> bool {
        self.stood || self.doubled || self.is_busted()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
