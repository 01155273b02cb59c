use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::Player;

/// Most seats a table holds.
pub const MAX_SEATS: usize = 6;

/// A betting street in Texas Hold'em.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Hole cards dealt, no board
    Preflop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
}

/// Everything on the table for the current hand.
///
/// Owned by the engine; a betting round borrows it mutably for one street, and
/// providers and presenters only ever see `&TableState`.
#[derive(Debug, Clone, Serialize)]
pub struct TableState {
    pub seats: Vec<Player>,
    pub community: [Option<Card>; 5],
    pub pot: u32,
    /// Street total every live seat must match.
    pub current_bet: u32,
    pub button: usize,
}

impl TableState {
    pub fn new(seats: Vec<Player>, button: usize) -> Result<Self, GameError> {
        if seats.len() < 2 || seats.len() > MAX_SEATS {
            return Err(GameError::InvalidConfig(format!(
                "a table seats 2 to {} players, got {}",
                MAX_SEATS,
                seats.len()
            )));
        }
        if button >= seats.len() {
            return Err(GameError::InvalidConfig(format!(
                "button {} is not a seat",
                button
            )));
        }
        Ok(Self {
            seats,
            community: [None; 5],
            pot: 0,
            current_bet: 0,
            button,
        })
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Revealed community cards in deal order.
    pub fn board(&self) -> Vec<Card> {
        self.community.iter().flatten().copied().collect()
    }

    pub fn clear_board(&mut self) {
        self.community = [None; 5];
    }

    /// Places `card` in the first empty community slot.
    pub fn reveal(&mut self, card: Card) -> Result<(), GameError> {
        let slot = self
            .community
            .iter_mut()
            .find(|s| s.is_none())
            .ok_or_else(|| GameError::MalformedHand("board already has five cards".into()))?;
        *slot = Some(card);
        Ok(())
    }

    pub fn to_call(&self, seat: usize) -> u32 {
        self.current_bet.saturating_sub(self.seats[seat].committed())
    }

    pub fn in_hand_count(&self) -> usize {
        self.seats.iter().filter(|p| p.in_hand()).count()
    }

    /// Seats that still hold chips, whether or not they are in the current hand.
    pub fn funded_count(&self) -> usize {
        self.seats.iter().filter(|p| p.stack() > 0).count()
    }

    /// First seat after `from` (exclusive, wrapping, `from` itself last) matching `pred`.
    pub fn next_seat(&self, from: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&i| pred(&self.seats[i]))
    }

    /// Seat indices in order starting left of the button.
    pub fn order_from_button(&self) -> Vec<usize> {
        let n = self.seats.len();
        (1..=n).map(|step| (self.button + step) % n).collect()
    }

    /// Chips on the table: every stack plus the pot.
    pub fn total_chips(&self) -> u64 {
        self.seats.iter().map(|p| p.stack() as u64).sum::<u64>() + self.pot as u64
    }

    /// Verifies that the pot holds exactly what the seats put in this hand.
    pub fn check_pot(&self) -> Result<(), GameError> {
        let contributed: u64 = self.seats.iter().map(|p| p.contributed() as u64).sum();
        if contributed != self.pot as u64 {
            return Err(GameError::ChipInvariant(format!(
                "pot {} != contributions {}",
                self.pot, contributed
            )));
        }
        Ok(())
    }

    /// Moves `amount` from the seat's stack into the pot, clamped to the stack.
    pub fn collect(&mut self, seat: usize, amount: u32) -> u32 {
        let paid = self.seats[seat].pay(amount);
        self.pot += paid;
        paid
    }

    /// Returns every contribution to its seat and empties the pot.
    pub fn refund_all(&mut self) {
        for p in &mut self.seats {
            p.refund();
        }
        self.pot = 0;
        self.current_bet = 0;
    }

    pub fn start_street(&mut self) {
        self.current_bet = 0;
        for p in &mut self.seats {
            p.reset_for_street();
        }
    }
}
