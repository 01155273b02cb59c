use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::STARTING_STACK;

/// Table rules that are fixed for a whole session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub starting_stack: u32,
    /// Forced preflop bet posted left of the button. Zero disables it.
    pub blind: u32,
    /// Smallest raise increment accepted over the current bet.
    pub min_raise: u32,
    /// Consecutive rejected actions after which a seat is folded.
    pub max_invalid_actions: u32,
    /// Burn one card before the flop, turn and river.
    pub burn_cards: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            blind: 20,
            min_raise: 10,
            max_invalid_actions: 3,
            burn_cards: true,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig(
                "starting_stack must be >0".into(),
            ));
        }
        if self.min_raise == 0 {
            return Err(GameError::InvalidConfig("min_raise must be >0".into()));
        }
        if self.max_invalid_actions == 0 {
            return Err(GameError::InvalidConfig(
                "max_invalid_actions must be >0".into(),
            ));
        }
        Ok(())
    }
}
