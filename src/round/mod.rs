
use crate::card::Card;
use crate::dealer;
use crate::engine::{resolve_naturals, resolve_single_hand, resolve_split_hands, Resolution};
use crate::hand::Hand;
use crate::rules::TableRules;
use crate::shoe::Shoe;
use crate::strategy::{self, Action};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phase of the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Betting,
    PlayerTurn,
    DealerTurn,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("action not available in the {0:?} phase")]
    WrongPhase(RoundPhase),
    #[error("bet must be positive")]
    InvalidBet,
    #[error("doubling needs an untouched two-card hand")]
    CannotDouble,
    #[error("only an unsplit two-card pair can be split")]
    CannotSplit,
}

/// One round of play as an explicit state machine: betting, the player's
/// hands in order, the dealer play-out, and the terminal resolution. The
/// round owns the shoe; `reset` carries it into the next round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    shoe: Shoe,
    rules: TableRules,
    level: u32,
    bet: f64,
    hands: Vec<Hand>,
    active: usize,
    dealer: Vec<Card>,
    phase: RoundPhase,
    resolution: Option<Resolution>,
}

impl Round {
    pub fn new(rules: TableRules, level: u32) -> Self {
        let shoe = Shoe::new(rules.num_decks);
        Self::with_shoe(shoe, rules, level)
    }

    pub fn with_shoe(shoe: Shoe, rules: TableRules, level: u32) -> Self {
        Self {
            shoe,
            rules,
            level,
            bet: 0.0,
            hands: Vec::new(),
            active: 0,
            dealer: Vec::new(),
            phase: RoundPhase::Betting,
            resolution: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn bet(&self) -> f64 {
        self.bet
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer
    }

    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.first().copied()
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Place the bet and deal the initial four cards. Resolves immediately
    /// when the natural check ends the round before any player action.
    pub fn deal(&mut self, bet: f64) -> Result<(), RoundError> {
        if self.phase != RoundPhase::Betting {
            return Err(RoundError::WrongPhase(self.phase));
        }
        if !(bet > 0.0) {
            return Err(RoundError::InvalidBet);
        }

        self.bet = bet;
        let mut hand = Hand::new();
        let mut dealer = Vec::with_capacity(2);
        hand.add_card(self.shoe.draw());
        dealer.push(self.shoe.draw());
        hand.add_card(self.shoe.draw());
        dealer.push(self.shoe.draw());
        self.hands = vec![hand];
        self.dealer = dealer;
        self.active = 0;

        match resolve_naturals(
            &self.hands[0].cards,
            &self.dealer,
            bet,
            self.level,
            &self.rules,
        ) {
            Some(resolution) => self.finish(resolution),
            None => self.phase = RoundPhase::PlayerTurn,
        }
        Ok(())
    }

    /// Draw one card on the active hand. Busting the last live hand ends
    /// the round on the spot; the dealer never plays against all-bust.
    pub fn hit(&mut self) -> Result<(), RoundError> {
        self.require_player_turn()?;
        let card = self.shoe.draw();
        self.hands[self.active].add_card(card);
        if self.hands[self.active].is_busted() {
            self.advance();
        }
        Ok(())
    }

    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.require_player_turn()?;
        self.hands[self.active].stood = true;
        self.advance();
        Ok(())
    }

    /// Double the bet on the active hand, draw exactly one card, and end
    /// the hand.
    pub fn double(&mut self) -> Result<(), RoundError> {
        self.require_player_turn()?;
        if !strategy::can_double(&self.hands[self.active], &self.rules) {
            return Err(RoundError::CannotDouble);
        }
        let card = self.shoe.draw();
        let hand = &mut self.hands[self.active];
        hand.add_card(card);
        hand.doubled = true;
        self.advance();
        Ok(())
    }

    /// Split the opening pair into two hands, one card dealt to each. At
    /// most one split per round. Split aces take their one card and stand.
    pub fn split(&mut self) -> Result<(), RoundError> {
        self.require_player_turn()?;
        if self.hands.len() != 1 || !strategy::can_split(&self.hands[0]) {
            return Err(RoundError::CannotSplit);
        }

        let aces = self.hands[0].cards[0].is_ace();
        let second = self.hands[0].cards.pop().ok_or(RoundError::CannotSplit)?;
        self.hands[0].from_split = true;
        self.hands[0].split_from_aces = aces;

        let mut branch = Hand::new();
        branch.add_card(second);
        branch.from_split = true;
        branch.split_from_aces = aces;
        self.hands.push(branch);

        let first_draw = self.shoe.draw();
        self.hands[0].add_card(first_draw);
        let second_draw = self.shoe.draw();
        self.hands[1].add_card(second_draw);

        if aces {
            self.hands[0].stood = true;
            self.hands[1].stood = true;
            self.advance();
        }
        Ok(())
    }

    /// Play the dealer hand out and settle the round.
    pub fn play_dealer(&mut self) -> Result<&Resolution, RoundError> {
        if self.phase != RoundPhase::DealerTurn {
            return Err(RoundError::WrongPhase(self.phase));
        }
        dealer::play_dealer(&mut self.shoe, &mut self.dealer, &self.rules);
        self.resolve_now();
        match self.resolution.as_ref() {
            Some(resolution) => Ok(resolution),
            // finish() just set it
            None => Err(RoundError::WrongPhase(self.phase)),
        }
    }

    /// Start the next round at the same table, keeping the shoe.
    pub fn reset(&mut self) {
        self.bet = 0.0;
        self.hands.clear();
        self.active = 0;
        self.dealer.clear();
        self.phase = RoundPhase::Betting;
        self.resolution = None;
    }

    /// Doubling availability for the active hand, for the action bar.
    pub fn can_double_current_hand(&self) -> bool {
        self.phase == RoundPhase::PlayerTurn
            && strategy::can_double(&self.hands[self.active], &self.rules)
    }

    /// Split availability, for the action bar.
    pub fn can_split_current_hand(&self) -> bool {
        self.phase == RoundPhase::PlayerTurn
            && self.hands.len() == 1
            && strategy::can_split(&self.hands[0])
    }

    /// The chart move for the active hand, for the coaching overlay.
    pub fn recommended_action(&self) -> Option<Action> {
        if self.phase != RoundPhase::PlayerTurn {
            return None;
        }
        self.dealer_upcard()
            .map(|up| strategy::optimal_move(&self.hands[self.active], up, &self.rules))
    }

    /// The coaching tip for the active hand.
    pub fn coach_tip(&self) -> Option<String> {
        if self.phase != RoundPhase::PlayerTurn {
            return None;
        }
        self.dealer_upcard()
            .map(|up| strategy::tip_message(&self.hands[self.active], up, &self.rules))
    }

    fn require_player_turn(&self) -> Result<(), RoundError> {
        if self.phase == RoundPhase::PlayerTurn {
            Ok(())
        } else {
            Err(RoundError::WrongPhase(self.phase))
        }
    }

    /// Move to the next unfinished hand, or hand the round to the dealer.
    /// All hands busted settles immediately without dealer play.
    fn advance(&mut self) {
        if let Some(next) = self.hands.iter().position(|h| !h.is_finished()) {
            self.active = next;
            return;
        }
        if self.hands.iter().all(|h| h.is_busted()) {
            self.resolve_now();
        } else {
            self.phase = RoundPhase::DealerTurn;
        }
    }

    fn resolve_now(&mut self) {
        let resolution = if self.hands.len() == 2 {
            resolve_split_hands(
                &self.hands[0].cards,
                &self.hands[1].cards,
                &self.dealer,
                self.bet,
                self.level,
            )
        } else {
            resolve_single_hand(
                &self.hands[0].cards,
                &self.dealer,
                self.bet,
                self.hands[0].doubled,
                self.level,
            )
        };
        self.finish(resolution);
    }

    fn finish(&mut self, resolution: Resolution) {
        self.resolution = Some(resolution);
        self.phase = RoundPhase::Finished;
    }
}
