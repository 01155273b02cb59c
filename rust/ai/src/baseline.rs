//! Baseline AI implementation for table play.
//!
//! Sorts the seat's holding into weak, medium or strong, then rolls a seeded
//! die against the thresholds in [`AiConfig`] to pick an action.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use holdem_engine::cards::{Card, Rank};
use holdem_engine::errors::GameError;
use holdem_engine::hand::{evaluate_best, Category};
use holdem_engine::player::Action;
use holdem_engine::provider::ActionProvider;
use holdem_engine::rules::LegalActions;
use holdem_engine::table::TableState;

/// Coarse hand class used by the baseline strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

/// Probabilities and sizes for [`BaselineAI`].
///
/// Each probability is compared against one uniform roll per decision, so
/// `strong_call` and `strong_raise` partition the same roll: below
/// `strong_call` calls, between the two raises, above both calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Opening bets are drawn from `bet_unit..=3 * bet_unit`.
    pub bet_unit: u32,
    pub weak_call: f64,
    pub strong_call: f64,
    pub strong_raise: f64,
    pub medium_call: f64,
    pub open_bet: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            bet_unit: 10,
            weak_call: 0.3,
            strong_call: 0.6,
            strong_raise: 0.85,
            medium_call: 0.7,
            open_bet: 0.5,
        }
    }
}

impl AiConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.bet_unit == 0 {
            return Err(GameError::InvalidConfig("bet_unit must be >0".into()));
        }
        let probs = [
            self.weak_call,
            self.strong_call,
            self.strong_raise,
            self.medium_call,
            self.open_bet,
        ];
        if probs.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(GameError::InvalidConfig(
                "probabilities must be within 0..=1".into(),
            ));
        }
        Ok(())
    }
}

/// Hole-card class before the flop.
///
/// Pairs and anything Queen-high or better are strong; no card above nine is weak.
pub fn preflop_strength(a: Card, b: Card) -> Strength {
    let high = a.rank.max(b.rank);
    let pair = a.rank == b.rank;
    if high < Rank::Ten && !pair {
        Strength::Weak
    } else if high >= Rank::Queen || pair {
        Strength::Strong
    } else {
        Strength::Medium
    }
}

/// Class of the holding given the visible board.
///
/// With three or more board cards the made hand decides: two pair or better is
/// strong, one pair medium. With nothing made the preflop class applies, capped
/// at medium.
pub fn hand_strength(hole: [Card; 2], board: &[Card]) -> Strength {
    let pre = preflop_strength(hole[0], hole[1]);
    if board.len() < 3 {
        return pre;
    }
    let mut cards = hole.to_vec();
    cards.extend_from_slice(board);
    match evaluate_best(&cards) {
        Ok(score) if score.category >= Category::TwoPair => Strength::Strong,
        Ok(score) if score.category == Category::OnePair => Strength::Medium,
        Ok(_) => pre.min(Strength::Medium),
        Err(_) => pre,
    }
}

/// Rule-based opponent with a seeded random stream.
///
/// Always answers with an action the engine will accept.
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineAI;
///
/// let ai = BaselineAI::new(42);
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone)]
pub struct BaselineAI {
    config: AiConfig,
    rng: ChaCha20Rng,
}

impl BaselineAI {
    pub fn new(seed: u64) -> Self {
        Self::with_config(AiConfig::default(), seed)
    }

    pub fn with_config(config: AiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn name(&self) -> &str {
        "BaselineAI"
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Picks an action for a holding of `strength` given one roll in `0..1`.
    fn choose(&mut self, strength: Strength, legal: &LegalActions, roll: f64) -> Action {
        let c = &self.config;
        let facing_bet = legal.to_call > 0;
        match strength {
            Strength::Weak if !facing_bet => Action::CheckOrCall,
            Strength::Weak if legal.to_call > c.bet_unit => Action::Fold,
            Strength::Weak if roll < c.weak_call => Action::CheckOrCall,
            Strength::Weak => Action::Fold,

            Strength::Medium if !facing_bet => Action::CheckOrCall,
            Strength::Medium if roll < c.medium_call => Action::CheckOrCall,
            Strength::Medium => Action::Fold,

            Strength::Strong if facing_bet => {
                if roll < c.strong_call || !legal.can_raise() || roll >= c.strong_raise {
                    Action::CheckOrCall
                } else {
                    self.raise(legal)
                }
            }
            Strength::Strong => {
                if roll < c.open_bet && legal.can_bet() {
                    let unit = c.bet_unit;
                    let amount = self.rng.random_range(unit..=unit.saturating_mul(3));
                    Action::Bet(amount.min(legal.stack).max(1))
                } else {
                    Action::CheckOrCall
                }
            }
        }
    }

    /// Raise to two or three times the current bet, kept within what is legal.
    fn raise(&mut self, legal: &LegalActions) -> Action {
        let lo = legal.current_bet.saturating_mul(2).max(legal.min_raise_to);
        let hi = legal.current_bet.saturating_mul(3).min(legal.max_to());
        if lo > legal.max_to() {
            Action::AllIn
        } else if lo >= hi {
            Action::Raise(lo)
        } else {
            Action::Raise(self.rng.random_range(lo..=hi))
        }
    }
}

impl ActionProvider for BaselineAI {
    fn decide(
        &mut self,
        seat: usize,
        table: &TableState,
        legal: &LegalActions,
    ) -> Result<Action, GameError> {
        let hole = table.seats[seat].hole_cards();
        let (Some(a), Some(b)) = (hole[0], hole[1]) else {
            return Ok(if legal.can_check() {
                Action::CheckOrCall
            } else {
                Action::Fold
            });
        };
        let strength = hand_strength([a, b], &table.board());
        let roll: f64 = self.rng.random();
        let mut action = self.choose(strength, legal, roll);
        if !legal.permits(&action) {
            action = if legal.can_check_or_call() {
                Action::CheckOrCall
            } else {
                Action::Fold
            };
        }
        debug!("seat {} {:?} roll {:.2}: {}", seat, strength, roll, action);
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::Suit;
    use holdem_engine::player::Player;

    fn c(r: Rank, s: Suit) -> Card {
        Card::new(r, s)
    }

    fn legal(stack: u32, current_bet: u32, committed: u32) -> LegalActions {
        LegalActions {
            seat: 0,
            stack,
            current_bet,
            committed,
            to_call: current_bet - committed,
            min_raise_to: current_bet + 10,
        }
    }

    #[test]
    fn test_baseline_ai_creation() {
        let ai = BaselineAI::new(1);
        assert_eq!(ai.name(), "BaselineAI");
        assert_eq!(ai.config(), &AiConfig::default());
    }

    #[test]
    fn test_preflop_classes() {
        assert_eq!(
            preflop_strength(c(Rank::Seven, Suit::Hearts), c(Rank::Two, Suit::Spades)),
            Strength::Weak
        );
        assert_eq!(
            preflop_strength(c(Rank::Three, Suit::Hearts), c(Rank::Three, Suit::Spades)),
            Strength::Strong
        );
        assert_eq!(
            preflop_strength(c(Rank::Jack, Suit::Hearts), c(Rank::Four, Suit::Spades)),
            Strength::Medium
        );
        assert_eq!(
            preflop_strength(c(Rank::Queen, Suit::Hearts), c(Rank::Four, Suit::Spades)),
            Strength::Strong
        );
    }

    #[test]
    fn test_postflop_made_hands() {
        let hole = [c(Rank::Seven, Suit::Hearts), c(Rank::Two, Suit::Spades)];
        let two_pair = [
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Two, Suit::Diamonds),
            c(Rank::King, Suit::Hearts),
        ];
        assert_eq!(hand_strength(hole, &two_pair), Strength::Strong);

        let nothing = [
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Nine, Suit::Diamonds),
            c(Rank::King, Suit::Hearts),
        ];
        assert_eq!(hand_strength(hole, &nothing), Strength::Weak);

        let high = [c(Rank::Queen, Suit::Hearts), c(Rank::Four, Suit::Spades)];
        assert_eq!(hand_strength(high, &nothing), Strength::Medium);
    }

    #[test]
    fn test_weak_hand_folds_to_large_bet() {
        let mut ai = BaselineAI::new(3);
        for roll in [0.0, 0.5, 0.99] {
            assert_eq!(ai.choose(Strength::Weak, &legal(500, 100, 0), roll), Action::Fold);
        }
        assert_eq!(
            ai.choose(Strength::Weak, &legal(500, 10, 0), 0.1),
            Action::CheckOrCall
        );
        assert_eq!(
            ai.choose(Strength::Weak, &legal(500, 0, 0), 0.9),
            Action::CheckOrCall
        );
    }

    #[test]
    fn test_strong_hand_raises_two_to_three_times() {
        let mut ai = BaselineAI::new(4);
        for _ in 0..50 {
            match ai.choose(Strength::Strong, &legal(1_000, 40, 0), 0.7) {
                Action::Raise(to) => assert!((80..=120).contains(&to), "raise to {}", to),
                other => panic!("expected raise, got {:?}", other),
            }
        }
        assert_eq!(
            ai.choose(Strength::Strong, &legal(1_000, 40, 0), 0.9),
            Action::CheckOrCall
        );
        assert_eq!(
            ai.choose(Strength::Strong, &legal(60, 40, 0), 0.7),
            Action::AllIn
        );
    }

    #[test]
    fn test_strong_hand_opens_within_three_units() {
        let mut ai = BaselineAI::new(5);
        for _ in 0..50 {
            match ai.choose(Strength::Strong, &legal(1_000, 0, 0), 0.2) {
                Action::Bet(a) => assert!((10..=30).contains(&a)),
                other => panic!("expected bet, got {:?}", other),
            }
        }
        assert!(matches!(
            ai.choose(Strength::Strong, &legal(15, 0, 0), 0.2),
            Action::Bet(a) if a <= 15
        ));
    }

    #[test]
    fn test_decisions_are_always_legal() {
        let seats = (0..3).map(|i| Player::new(format!("p{}", i), 100)).collect();
        let mut table = TableState::new(seats, 0).unwrap();
        for p in &mut table.seats {
            p.reset_for_hand();
        }
        table.seats[0].give_card(c(Rank::Ace, Suit::Hearts)).unwrap();
        table.seats[0].give_card(c(Rank::Ace, Suit::Spades)).unwrap();
        let mut ai = BaselineAI::new(9);
        for (stack, bet, committed) in [(100, 0, 0), (100, 30, 0), (25, 30, 0), (100, 90, 60)] {
            let l = legal(stack, bet, committed);
            for _ in 0..40 {
                let a = ai.decide(0, &table, &l).unwrap();
                assert!(l.permits(&a), "{:?} not legal for {:?}", a, l);
            }
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let table = {
            let seats = (0..2).map(|i| Player::new(format!("p{}", i), 100)).collect();
            let mut t = TableState::new(seats, 0).unwrap();
            t.seats[0].reset_for_hand();
            t.seats[0].give_card(c(Rank::King, Suit::Hearts)).unwrap();
            t.seats[0].give_card(c(Rank::Queen, Suit::Hearts)).unwrap();
            t
        };
        let l = legal(100, 20, 0);
        let mut a = BaselineAI::new(77);
        let mut b = BaselineAI::new(77);
        let xs: Vec<Action> = (0..20).map(|_| a.decide(0, &table, &l).unwrap()).collect();
        let ys: Vec<Action> = (0..20).map(|_| b.decide(0, &table, &l).unwrap()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_config_validation() {
        assert!(AiConfig::default().validate().is_ok());
        let bad = AiConfig {
            weak_call: 1.5,
            ..AiConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
