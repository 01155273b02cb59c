//! # holdem-ai: Computer opponents
//!
//! AI seats for the table engine. Every opponent implements
//! [`holdem_engine::provider::ActionProvider`], so the engine treats it exactly
//! like a human seat.
//!
//! ## Core Components
//!
//! - [`baseline`] - Hand-class heuristic with seeded randomness
//! - [`PassiveAI`] - Checks or calls every time
//! - [`create_ai`] - Factory for boxed opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, AiKind};
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::engine::Engine;
//! use holdem_engine::provider::{ActionProvider, NullPresenter};
//!
//! let names = (0..6).map(|i| format!("Bot {}", i)).collect();
//! let mut engine = Engine::new(names, TableConfig::default(), Some(42)).unwrap();
//! let mut seats: Vec<Box<dyn ActionProvider>> =
//!     (0..6).map(|i| create_ai(AiKind::Baseline, i)).collect();
//!
//! let summary = engine.run(&mut seats, &mut NullPresenter, Some(10)).unwrap();
//! assert!(summary.hands_played <= 10);
//! ```

use std::fmt;
use std::str::FromStr;

use holdem_engine::errors::GameError;
use holdem_engine::player::Action;
use holdem_engine::provider::ActionProvider;
use holdem_engine::rules::LegalActions;
use holdem_engine::table::TableState;

pub mod baseline;

/// Opponent that never folds or raises: checks when it can, calls otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAI;

impl ActionProvider for PassiveAI {
    fn decide(
        &mut self,
        _seat: usize,
        _table: &TableState,
        legal: &LegalActions,
    ) -> Result<Action, GameError> {
        Ok(if legal.can_check_or_call() {
            Action::CheckOrCall
        } else {
            Action::Fold
        })
    }
}

/// Available opponent strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiKind {
    Baseline,
    Passive,
}

impl AiKind {
    pub fn name(self) -> &'static str {
        match self {
            AiKind::Baseline => "baseline",
            AiKind::Passive => "passive",
        }
    }
}

impl fmt::Display for AiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AiKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" => Ok(AiKind::Baseline),
            "passive" => Ok(AiKind::Passive),
            other => Err(format!("Unknown AI type: {}", other)),
        }
    }
}

/// Creates a boxed opponent. `seed` only matters for strategies that roll dice.
///
/// ```rust
/// use holdem_ai::{create_ai, AiKind};
///
/// let ai = create_ai("passive".parse::<AiKind>().unwrap(), 0);
/// # let _ = ai;
/// ```
pub fn create_ai(kind: AiKind, seed: u64) -> Box<dyn ActionProvider> {
    match kind {
        AiKind::Baseline => Box::new(baseline::BaselineAI::new(seed)),
        AiKind::Passive => Box::new(PassiveAI),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Baseline".parse::<AiKind>(), Ok(AiKind::Baseline));
        assert_eq!(" passive ".parse::<AiKind>(), Ok(AiKind::Passive));
        assert!("shark".parse::<AiKind>().is_err());
    }

    #[test]
    fn passive_always_checks_or_calls() {
        let legal = LegalActions {
            seat: 0,
            stack: 5,
            current_bet: 50,
            committed: 0,
            to_call: 50,
            min_raise_to: 60,
        };
        let seats = vec![
            holdem_engine::player::Player::new("a", 5),
            holdem_engine::player::Player::new("b", 5),
        ];
        let table = TableState::new(seats, 0).unwrap();
        assert_eq!(
            PassiveAI.decide(0, &table, &legal).unwrap(),
            Action::CheckOrCall
        );
    }
}
