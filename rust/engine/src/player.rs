use std::fmt;

use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// What a seat asks to do when it is its turn.
///
/// `Raise` carries the street total the seat wants to reach, not the increment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    CheckOrCall,
    Bet(u32),
    Raise(u32),
    AllIn,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::CheckOrCall => write!(f, "check/call"),
            Action::Bet(amount) => write!(f, "bet {}", amount),
            Action::Raise(to) => write!(f, "raise to {}", to),
            Action::AllIn => write!(f, "all-in"),
        }
    }
}

/// Per-street state of a seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum SeatStatus {
    /// Still owes a decision on this street.
    Waiting,
    /// Has matched the current bet (or checked) and is done unless someone reopens.
    ActedMatched,
    /// Out of the hand.
    Folded,
    /// No chips left; contests the pot but never acts again this hand.
    AllIn,
}

/// Default starting stack for each seat in chips
pub const STARTING_STACK: u32 = 1_000;

/// A seated player. Persists across hands; only `stack` carries over.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    name: String,
    stack: u32,
    hole: [Option<Card>; 2],
    status: SeatStatus,
    /// Dealt into the current hand.
    active: bool,
    /// Chips put in on the current street.
    committed: u32,
    /// Chips put in during the whole hand.
    contributed: u32,
    last_action: Option<Action>,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            hole: [None, None],
            status: SeatStatus::Folded,
            active: false,
            committed: 0,
            contributed: 0,
            last_action: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn status(&self) -> SeatStatus {
        self.status
    }
    pub fn set_status(&mut self, status: SeatStatus) {
        self.status = status;
    }
    pub fn is_active(&self) -> bool {
        self.active
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn contributed(&self) -> u32 {
        self.contributed
    }
    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }
    pub fn set_last_action(&mut self, action: Action) {
        self.last_action = Some(action);
    }

    /// Still contesting the pot.
    pub fn in_hand(&self) -> bool {
        self.active && self.status != SeatStatus::Folded
    }

    /// In the hand and still able to make decisions.
    pub fn can_act(&self) -> bool {
        self.in_hand() && self.status != SeatStatus::AllIn
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), String> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err("Hole cards already full".to_string())
        }
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Moves up to `amount` chips from the stack into this seat's commitment and
    /// returns what was actually paid. A seat that empties its stack is all-in.
    pub fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.committed += paid;
        self.contributed += paid;
        if self.stack == 0 && self.in_hand() {
            self.status = SeatStatus::AllIn;
        }
        paid
    }

    /// Returns everything put in this hand; used when a hand is aborted.
    pub fn refund(&mut self) -> u32 {
        let back = self.contributed;
        self.stack = self.stack.saturating_add(back);
        self.contributed = 0;
        self.committed = 0;
        back
    }

    pub fn reset_for_hand(&mut self) {
        self.active = self.stack > 0;
        self.status = if self.active {
            SeatStatus::Waiting
        } else {
            SeatStatus::Folded
        };
        self.committed = 0;
        self.contributed = 0;
        self.last_action = None;
        self.clear_cards();
    }

    pub fn reset_for_street(&mut self) {
        self.committed = 0;
        self.last_action = None;
        if self.status == SeatStatus::ActedMatched {
            self.status = SeatStatus::Waiting;
        }
    }
}
