use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, minimum: {minimum}")]
    InvalidBetAmount { amount: u32, minimum: u32 },
    #[error("Insufficient chips for action")]
    InsufficientChips,
    #[error("Illegal action: {0}")]
    IllegalAction(String),
    #[error("At least two seats with chips are required")]
    NotEnoughPlayers,
    #[error("Deck exhausted during a hand")]
    DeckExhausted,
    #[error("Malformed hand: {0}")]
    MalformedHand(String),
    #[error("Chip invariant violated: {0}")]
    ChipInvariant(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Cancelled by user")]
    Cancelled,
}
