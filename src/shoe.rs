use crate::card::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const CARDS_PER_DECK: usize = 52;

/// The working stack of cards drawn from during play. Six standard decks
/// under production rules, Fisher-Yates shuffled, drawn from the top (the
/// end of the vector).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
    num_decks: u8,
}

impl Shoe {
    /// A freshly shuffled shoe using the platform's default randomness.
    pub fn new(num_decks: u8) -> Self {
        Self::shuffled_with(num_decks, &mut rand::thread_rng())
    }

    /// A freshly shuffled shoe using the given rng. Tests seed this with a
    /// deterministic generator.
    pub fn shuffled_with<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let num_decks = num_decks.max(1);
        let mut cards = Self::unshuffled_cards(num_decks);
        cards.shuffle(rng);
        Self { cards, num_decks }
    }

    fn unshuffled_cards(num_decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(num_decks as usize * CARDS_PER_DECK);
        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }

    /// Draw the top card. An exhausted shoe is replaced by a freshly
    /// shuffled one rather than failing the deal; sustained play therefore
    /// reshuffles mid-round now and then.
    pub fn draw(&mut self) -> Card {
        match self.cards.pop() {
            Some(card) => card,
            None => {
                log::warn!("shoe exhausted mid-deal, bringing in a fresh shoe");
                let mut cards = Self::unshuffled_cards(self.num_decks);
                cards.shuffle(&mut rand::thread_rng());
                self.cards = cards;
                // num_decks is clamped to at least 1, so a fresh fill is
                // never empty
                self.cards.pop().expect("freshly filled shoe")
            }
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Shoe with a known card order; `cards` are drawn from the end.
    #[cfg(test)]
    pub(crate) fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards,
            num_decks: 6,
        }
    }

    pub fn num_decks(&self) -> u8 {
        self.num_decks
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new(6)
    }
}
