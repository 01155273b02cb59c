use log::{debug, warn};

use crate::config::TableConfig;
use crate::errors::GameError;
use crate::logger::ActionRecord;
use crate::player::{Action, SeatStatus};
use crate::provider::{ActionProvider, Presenter};
use crate::rules::{validate_action, LegalActions, ValidatedAction};
use crate::table::{Street, TableState};

/// How a street ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every live seat matched the bet, checked, or is all-in.
    Settled,
    /// Everyone else folded.
    OneLeft(usize),
}

/// State machine for a single betting street.
///
/// Seats act in seating order from a cursor. The next actor is always the
/// first `Waiting` seat after the previous one, so a bet or full raise simply
/// flips the other seats back to `Waiting` and the same walk continues.
#[derive(Debug, Clone)]
pub struct BettingRound {
    street: Street,
    /// Seat that acted last; the walk resumes after it.
    cursor: usize,
    /// Size of the last full bet or raise.
    raise_size: u32,
    min_raise: u32,
    last_raiser: Option<usize>,
    max_invalid: u32,
    requests: u32,
    actions: Vec<ActionRecord>,
}

impl BettingRound {
    /// Starts a street whose first actor is the seat after `cursor`.
    pub fn new(street: Street, cursor: usize, config: &TableConfig) -> Self {
        Self {
            street,
            cursor,
            raise_size: 0,
            min_raise: config.min_raise,
            last_raiser: None,
            max_invalid: config.max_invalid_actions.max(1),
            requests: 0,
            actions: Vec::new(),
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn last_raiser(&self) -> Option<usize> {
        self.last_raiser
    }
    /// Decisions requested from providers so far, rejected ones included.
    pub fn requests(&self) -> u32 {
        self.requests
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
    pub fn into_actions(self) -> Vec<ActionRecord> {
        self.actions
    }

    /// Smallest step a raise must add over the current bet.
    pub fn min_increment(&self) -> u32 {
        self.raise_size.max(self.min_raise)
    }

    pub fn legal_actions(&self, table: &TableState, seat: usize) -> LegalActions {
        LegalActions::for_seat(table, seat, self.min_increment())
    }

    /// Forces `seat` to put in the blind. The poster counts as having acted.
    pub fn post_blind(&mut self, table: &mut TableState, seat: usize, amount: u32) -> String {
        let paid = table.collect(seat, amount);
        let p = &mut table.seats[seat];
        if p.status() != SeatStatus::AllIn {
            p.set_status(SeatStatus::ActedMatched);
        }
        p.set_last_action(Action::Bet(paid));
        table.current_bet = table.current_bet.max(p.committed());
        self.raise_size = paid;
        self.last_raiser = Some(seat);
        self.cursor = seat;
        self.record(seat, Action::Bet(paid), paid);
        format!("{} posts blind ${}", table.seats[seat].name(), paid)
    }

    pub fn next_to_act(&self, table: &TableState) -> Option<usize> {
        table.next_seat(self.cursor, |p| {
            p.can_act() && p.status() == SeatStatus::Waiting
        })
    }

    pub fn is_settled(&self, table: &TableState) -> bool {
        if table.in_hand_count() <= 1 {
            return true;
        }
        if !table
            .seats
            .iter()
            .any(|p| p.in_hand() && p.status() == SeatStatus::Waiting)
        {
            return true;
        }
        let mut actors = table.seats.iter().filter(|p| p.can_act());
        match (actors.next(), actors.next()) {
            (Some(only), None) => only.committed() >= table.current_bet,
            _ => false,
        }
    }

    /// Applies an already validated action and returns a line describing it.
    pub fn apply(&mut self, table: &mut TableState, seat: usize, action: ValidatedAction) -> String {
        let name = table.seats[seat].name().to_string();
        let before = table.current_bet;
        let (requested, paid, message) = match action {
            ValidatedAction::Fold => {
                table.seats[seat].set_status(SeatStatus::Folded);
                (Action::Fold, 0, format!("{} folds", name))
            }
            ValidatedAction::Check => {
                table.seats[seat].set_status(SeatStatus::ActedMatched);
                (Action::CheckOrCall, 0, format!("{} checks", name))
            }
            ValidatedAction::Call(amount) => {
                let paid = table.collect(seat, amount);
                self.mark_matched(table, seat);
                let msg = if table.seats[seat].status() == SeatStatus::AllIn {
                    format!("{} calls ${} and is all-in", name, paid)
                } else {
                    format!("{} calls ${}", name, paid)
                };
                (Action::CheckOrCall, paid, msg)
            }
            ValidatedAction::Bet(amount) => {
                let paid = table.collect(seat, amount);
                table.current_bet = table.seats[seat].committed();
                self.raise_size = paid;
                self.reopen(table, seat);
                self.mark_matched(table, seat);
                (Action::Bet(amount), paid, format!("{} bets ${}", name, paid))
            }
            ValidatedAction::Raise(to) => {
                let owed = to.saturating_sub(table.seats[seat].committed());
                let paid = table.collect(seat, owed);
                let reached = table.seats[seat].committed();
                if reached >= to {
                    self.raise_size = to - before;
                    table.current_bet = to;
                    self.reopen(table, seat);
                    self.mark_matched(table, seat);
                    (Action::Raise(to), paid, format!("{} raises to ${}", name, to))
                } else {
                    // Stack ran out short of the target. Only a full increment reopens.
                    if reached > before && reached - before >= self.min_increment() {
                        self.raise_size = reached - before;
                        table.current_bet = reached;
                        self.reopen(table, seat);
                    } else {
                        table.current_bet = table.current_bet.max(reached);
                    }
                    (
                        Action::Raise(to),
                        paid,
                        format!("{} raises all-in to ${}", name, reached),
                    )
                }
            }
            ValidatedAction::AllIn(amount) => {
                let paid = table.collect(seat, amount);
                let reached = table.seats[seat].committed();
                if reached > before {
                    if reached - before >= self.min_increment() {
                        self.raise_size = reached - before;
                    }
                    table.current_bet = reached;
                    self.reopen(table, seat);
                }
                (
                    Action::AllIn,
                    paid,
                    format!("{} is all-in for ${}", name, paid),
                )
            }
        };
        table.seats[seat].set_last_action(requested);
        self.cursor = seat;
        self.record(seat, requested, paid);
        message
    }

    /// Asks providers for decisions until the street is settled.
    ///
    /// A refused action is reported to its provider and requested again; after
    /// too many consecutive refusals the seat is folded. An `Err` from a
    /// provider ends the street immediately with the table as it stands.
    pub fn run(
        &mut self,
        table: &mut TableState,
        providers: &mut [Box<dyn ActionProvider + '_>],
        presenter: &mut dyn Presenter,
    ) -> Result<RoundOutcome, GameError> {
        while !self.is_settled(table) {
            let Some(seat) = self.next_to_act(table) else {
                break;
            };
            let legal = self.legal_actions(table, seat);
            let provider = providers.get_mut(seat).ok_or_else(|| {
                GameError::InvalidConfig(format!("no action provider for seat {}", seat))
            })?;
            let mut strikes = 0;
            let action = loop {
                let requested = provider.decide(seat, table, &legal)?;
                self.requests += 1;
                match validate_action(&legal, requested) {
                    Ok(v) => break v,
                    Err(err) => {
                        strikes += 1;
                        warn!("seat {} {:?}: {} rejected: {}", seat, self.street, requested, err);
                        provider.rejected(seat, &err);
                        if strikes >= self.max_invalid {
                            warn!("seat {} folded after {} invalid actions", seat, strikes);
                            break ValidatedAction::Fold;
                        }
                    }
                }
            };
            let message = self.apply(table, seat, action);
            debug!("{:?}: {}", self.street, message);
            presenter.present(table, &message);
        }
        let mut live = table.seats.iter().enumerate().filter(|(_, p)| p.in_hand());
        Ok(match (live.next(), live.next()) {
            (Some((seat, _)), None) => RoundOutcome::OneLeft(seat),
            _ => RoundOutcome::Settled,
        })
    }

    fn mark_matched(&self, table: &mut TableState, seat: usize) {
        let p = &mut table.seats[seat];
        if p.status() != SeatStatus::AllIn {
            p.set_status(SeatStatus::ActedMatched);
        }
    }

    fn reopen(&mut self, table: &mut TableState, raiser: usize) {
        self.last_raiser = Some(raiser);
        for (i, p) in table.seats.iter_mut().enumerate() {
            if i != raiser && p.in_hand() && p.status() == SeatStatus::ActedMatched {
                p.set_status(SeatStatus::Waiting);
            }
        }
    }

    fn record(&mut self, seat: usize, action: Action, paid: u32) {
        self.actions.push(ActionRecord {
            seat,
            street: self.street,
            action,
            paid,
        });
    }
}
