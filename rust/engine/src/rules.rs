use serde::Serialize;

use crate::errors::GameError;
use crate::player::Action as A;
use crate::table::TableState;

/// An action that has passed validation, carrying the chips it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to pay, already clamped to the stack.
    Call(u32),
    Bet(u32),
    /// Street total to reach; may be capped by the stack when applied.
    Raise(u32),
    /// Whole remaining stack.
    AllIn(u32),
}

/// What the seat to act may do, computed by the engine before each decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegalActions {
    pub seat: usize,
    pub stack: u32,
    pub current_bet: u32,
    pub committed: u32,
    pub to_call: u32,
    /// Smallest street total a `Raise` may name.
    pub min_raise_to: u32,
}

impl LegalActions {
    pub fn for_seat(table: &TableState, seat: usize, min_increment: u32) -> Self {
        let p = &table.seats[seat];
        Self {
            seat,
            stack: p.stack(),
            current_bet: table.current_bet,
            committed: p.committed(),
            to_call: table.to_call(seat),
            min_raise_to: table.current_bet.saturating_add(min_increment),
        }
    }

    pub fn can_check(&self) -> bool {
        self.to_call == 0
    }
    pub fn can_check_or_call(&self) -> bool {
        self.to_call == 0 || self.stack > 0
    }
    pub fn can_bet(&self) -> bool {
        self.current_bet == 0 && self.stack > 0
    }
    pub fn can_raise(&self) -> bool {
        self.current_bet > 0 && self.stack > self.to_call
    }
    pub fn can_all_in(&self) -> bool {
        self.stack > 0
    }

    /// Largest street total this seat can reach.
    pub fn max_to(&self) -> u32 {
        self.committed.saturating_add(self.stack)
    }

    pub fn permits(&self, action: &A) -> bool {
        validate_action(self, *action).is_ok()
    }

    /// Short labels for prompts, in button order.
    pub fn labels(&self) -> Vec<String> {
        let mut v = vec!["fold".to_string()];
        if self.can_check() {
            v.push("check".into());
        } else if self.can_check_or_call() {
            v.push(format!("call {}", self.to_call.min(self.stack)));
        }
        if self.can_bet() {
            v.push(format!("bet 1..{}", self.stack));
        }
        if self.can_raise() {
            v.push(format!("raise {}..{}", self.min_raise_to, self.max_to()));
        }
        if self.can_all_in() {
            v.push(format!("all-in {}", self.stack));
        }
        v
    }
}

/// Validates a requested action against the seat's legal options.
///
/// Converts an [`A`] into a [`ValidatedAction`] or explains why it is refused.
/// A refused action leaves the table untouched and the seat is asked again.
///
/// # Errors
///
/// - [`GameError::IllegalAction`] - the kind of action is not available now
/// - [`GameError::InvalidBetAmount`] - a bet of zero or a raise below the minimum
/// - [`GameError::InsufficientChips`] - a bet larger than the stack
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, LegalActions, ValidatedAction};
/// use holdem_engine::player::Action;
///
/// let legal = LegalActions {
///     seat: 0,
///     stack: 5,
///     current_bet: 20,
///     committed: 0,
///     to_call: 20,
///     min_raise_to: 30,
/// };
/// // A short call is clamped to what the seat has.
/// assert_eq!(validate_action(&legal, Action::CheckOrCall), Ok(ValidatedAction::Call(5)));
/// ```
pub fn validate_action(legal: &LegalActions, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::CheckOrCall => {
            if legal.can_check() {
                Ok(ValidatedAction::Check)
            } else if legal.stack == 0 {
                Err(GameError::InsufficientChips)
            } else {
                Ok(ValidatedAction::Call(legal.to_call.min(legal.stack)))
            }
        }
        A::Bet(amount) => {
            if !legal.can_bet() {
                return Err(GameError::IllegalAction(
                    "bet is only possible while nobody has bet".into(),
                ));
            }
            if amount == 0 {
                return Err(GameError::InvalidBetAmount { amount, minimum: 1 });
            }
            if amount > legal.stack {
                return Err(GameError::InsufficientChips);
            }
            Ok(ValidatedAction::Bet(amount))
        }
        A::Raise(to) => {
            if !legal.can_raise() {
                return Err(GameError::IllegalAction(
                    "raise needs an open bet and more chips than the call".into(),
                ));
            }
            if to < legal.min_raise_to {
                return Err(GameError::InvalidBetAmount {
                    amount: to,
                    minimum: legal.min_raise_to,
                });
            }
            Ok(ValidatedAction::Raise(to))
        }
        A::AllIn => {
            if legal.stack == 0 {
                Err(GameError::InsufficientChips)
            } else {
                Ok(ValidatedAction::AllIn(legal.stack))
            }
        }
    }
}
