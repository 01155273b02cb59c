use log::{debug, info, warn};
use serde::Serialize;

use crate::betting::{BettingRound, RoundOutcome};
use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_best, HandScore};
use crate::logger::{ActionRecord, HandRecord, ShowdownInfo};
use crate::player::Player;
use crate::pot::split_pot;
use crate::provider::{ActionProvider, Presenter};
use crate::table::{Street, TableState};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Where the current hand stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Dealt,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Payout,
}

/// Result of one completed hand.
#[derive(Debug, Clone)]
pub struct HandOutcome {
    pub hand_no: u32,
    /// Seats that shared the pot, starting left of the button.
    pub winners: Vec<usize>,
    pub payouts: Vec<(usize, u32)>,
    /// Winning score; `None` when everyone else folded.
    pub best: Option<HandScore>,
    pub pot: u32,
    pub showdown: bool,
    pub record: HandRecord,
}

/// What a session of hands ended with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub hands_played: u32,
    pub stacks: Vec<(String, u32)>,
    /// A provider cancelled; the interrupted hand was refunded.
    pub cancelled: bool,
}

/// Drives hands at one table: dealing, the four betting streets, showdown and payout.
///
/// # Examples
///
/// ```
/// use holdem_engine::config::TableConfig;
/// use holdem_engine::engine::Engine;
/// use holdem_engine::provider::{ActionProvider, NullPresenter, ScriptedProvider};
///
/// let names = ["Ann", "Bo", "Cy"].map(String::from).to_vec();
/// let mut engine = Engine::new(names, TableConfig::default(), Some(7)).unwrap();
/// let mut seats: Vec<Box<dyn ActionProvider>> = (0..3)
///     .map(|_| Box::new(ScriptedProvider::default()) as Box<dyn ActionProvider>)
///     .collect();
///
/// let outcome = engine.play_hand(&mut seats, &mut NullPresenter).unwrap();
/// assert!(outcome.showdown);
/// assert_eq!(engine.table().total_chips(), 3_000);
/// ```
#[derive(Debug)]
pub struct Engine {
    config: TableConfig,
    table: TableState,
    deck: Deck,
    phase: Phase,
    hand_no: u32,
    seed: Option<u64>,
}

impl Engine {
    /// Seats `names` with the configured starting stack, button on seat 0.
    pub fn new(
        names: Vec<String>,
        config: TableConfig,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let seats = names
            .into_iter()
            .map(|n| Player::new(n, config.starting_stack))
            .collect();
        let table = TableState::new(seats, 0)?;
        let deck = Deck::new_with_seed(seed.unwrap_or(DEFAULT_SEED));
        Ok(Self {
            config,
            table,
            deck,
            phase: Phase::Idle,
            hand_no: 0,
            seed: Some(seed.unwrap_or(DEFAULT_SEED)),
        })
    }

    /// Uses a prepared table and deck, e.g. uneven stacks or a fixed card order.
    pub fn with_table(
        table: TableState,
        config: TableConfig,
        deck: Deck,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            table,
            deck,
            phase: Phase::Idle,
            hand_no: 0,
            seed: None,
        })
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn hand_no(&self) -> u32 {
        self.hand_no
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Plays hands until fewer than two seats have chips, `max_hands` is
    /// reached, or a provider cancels.
    pub fn run(
        &mut self,
        providers: &mut [Box<dyn ActionProvider + '_>],
        presenter: &mut dyn Presenter,
        max_hands: Option<u32>,
    ) -> Result<SessionSummary, GameError> {
        self.run_while(providers, presenter, max_hands, |_| true)
    }

    /// Like [`Engine::run`], but also stops before any hand for which
    /// `keep_going` returns false.
    pub fn run_while(
        &mut self,
        providers: &mut [Box<dyn ActionProvider + '_>],
        presenter: &mut dyn Presenter,
        max_hands: Option<u32>,
        keep_going: impl Fn(&TableState) -> bool,
    ) -> Result<SessionSummary, GameError> {
        let mut played = 0;
        let mut cancelled = false;
        while self.table.funded_count() >= 2
            && max_hands.is_none_or(|m| played < m)
            && keep_going(&self.table)
        {
            match self.play_hand(providers, presenter) {
                Ok(_) => played += 1,
                Err(GameError::Cancelled) => {
                    cancelled = true;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        info!("session over after {} hands", played);
        Ok(SessionSummary {
            hands_played: played,
            stacks: self
                .table
                .seats
                .iter()
                .map(|p| (p.name().to_string(), p.stack()))
                .collect(),
            cancelled,
        })
    }

    /// Plays one hand from deal to payout.
    ///
    /// On any error, including [`GameError::Cancelled`], every contribution is
    /// returned to its seat and the engine goes back to [`Phase::Idle`].
    pub fn play_hand(
        &mut self,
        providers: &mut [Box<dyn ActionProvider + '_>],
        presenter: &mut dyn Presenter,
    ) -> Result<HandOutcome, GameError> {
        if providers.len() != self.table.len() {
            return Err(GameError::InvalidConfig(format!(
                "{} providers for {} seats",
                providers.len(),
                self.table.len()
            )));
        }
        let result = self.run_hand(providers, presenter);
        if let Err(err) = &result {
            warn!("hand {} aborted: {}", self.hand_no, err);
            // Nothing to return before the deal or once the pot has been paid out.
            if !matches!(self.phase, Phase::Idle | Phase::Payout) {
                self.table.refund_all();
                presenter.present(&self.table, "Hand aborted, all bets returned");
            }
        }
        self.phase = Phase::Idle;
        result
    }

    fn run_hand(
        &mut self,
        providers: &mut [Box<dyn ActionProvider + '_>],
        presenter: &mut dyn Presenter,
    ) -> Result<HandOutcome, GameError> {
        if self.table.funded_count() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        if self.table.seats[self.table.button].stack() == 0 {
            if let Some(b) = self.table.next_seat(self.table.button, |p| p.stack() > 0) {
                self.table.button = b;
            }
        }
        let chips_before = self.table.total_chips();
        self.hand_no += 1;
        self.deal()?;
        presenter.present(
            &self.table,
            &format!("Hand #{}: cards dealt", self.hand_no),
        );

        let mut actions: Vec<ActionRecord> = Vec::new();
        let mut lone = None;
        for street in [Street::Preflop, Street::Flop, Street::Turn, Street::River] {
            self.phase = phase_of(street);
            self.table.start_street();
            if street != Street::Preflop {
                self.reveal(street)?;
                let board = self.table.board();
                presenter.present(&self.table, &format!("{:?}: {}", street, show(&board)));
            }
            let mut round = BettingRound::new(street, self.table.button, &self.config);
            if street == Street::Preflop && self.config.blind > 0 {
                if let Some(poster) = self.table.next_seat(self.table.button, |p| p.can_act()) {
                    let msg = round.post_blind(&mut self.table, poster, self.config.blind);
                    debug!("{}", msg);
                    presenter.present(&self.table, &msg);
                }
            }
            let outcome = round.run(&mut self.table, providers, presenter);
            actions.extend(round.into_actions());
            let outcome = outcome?;
            self.table.check_pot()?;
            if let RoundOutcome::OneLeft(seat) = outcome {
                lone = Some(seat);
                break;
            }
        }

        let pot = self.table.pot;
        let (winners, best) = match lone {
            Some(seat) => (vec![seat], None),
            None => {
                self.phase = Phase::Showdown;
                let (w, s) = self.showdown()?;
                (w, Some(s))
            }
        };

        self.phase = Phase::Payout;
        let payouts = split_pot(pot, &winners);
        for &(seat, amount) in &payouts {
            self.table.seats[seat].add_chips(amount);
        }
        self.table.pot = 0;
        self.table.current_bet = 0;
        if self.table.total_chips() != chips_before {
            return Err(GameError::ChipInvariant(format!(
                "table held {} chips before the hand and {} after",
                chips_before,
                self.table.total_chips()
            )));
        }

        let result = payouts
            .iter()
            .map(|(s, a)| format!("{} wins ${}", self.table.seats[*s].name(), a))
            .collect::<Vec<_>>()
            .join(", ");
        info!("hand {}: {}", self.hand_no, result);
        presenter.present(&self.table, &result);

        let record = HandRecord {
            hand_id: String::new(),
            seed: self.seed,
            button: self.table.button,
            actions,
            board: self.table.board(),
            result: Some(result),
            ts: None,
            meta: None,
            showdown: best.map(|s| ShowdownInfo {
                winners: winners.clone(),
                notes: Some(if winners.len() > 1 {
                    format!("split pot, {}", s.describe())
                } else {
                    s.describe()
                }),
            }),
            payouts: payouts.clone(),
        };

        if let Some(b) = self.table.next_seat(self.table.button, |p| p.stack() > 0) {
            self.table.button = b;
        }

        Ok(HandOutcome {
            hand_no: self.hand_no,
            winners,
            payouts,
            best,
            pot,
            showdown: lone.is_none(),
            record,
        })
    }

    fn deal(&mut self) -> Result<(), GameError> {
        self.phase = Phase::Dealt;
        for p in &mut self.table.seats {
            p.reset_for_hand();
        }
        self.table.clear_board();
        self.table.pot = 0;
        self.table.current_bet = 0;
        self.deck.shuffle();
        let order = self.table.order_from_button();
        for _ in 0..2 {
            for &seat in &order {
                if !self.table.seats[seat].is_active() {
                    continue;
                }
                let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
                self.table.seats[seat]
                    .give_card(c)
                    .map_err(GameError::MalformedHand)?;
            }
        }
        debug!("hand {} dealt, button {}", self.hand_no, self.table.button);
        Ok(())
    }

    fn reveal(&mut self, street: Street) -> Result<(), GameError> {
        if self.config.burn_cards {
            self.deck.burn_card().ok_or(GameError::DeckExhausted)?;
        }
        let n = if street == Street::Flop { 3 } else { 1 };
        for _ in 0..n {
            let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
            self.table.reveal(c)?;
        }
        Ok(())
    }

    /// Scores every seat still in the hand and returns the tied best seats in
    /// order from the button.
    fn showdown(&self) -> Result<(Vec<usize>, HandScore), GameError> {
        let board = self.table.board();
        let mut scored = Vec::new();
        for seat in self.table.order_from_button() {
            let p = &self.table.seats[seat];
            if !p.in_hand() {
                continue;
            }
            let mut cards: Vec<Card> = p.hole_cards().iter().flatten().copied().collect();
            cards.extend_from_slice(&board);
            let score = evaluate_best(&cards)?;
            debug!("seat {} shows {}", seat, score.describe());
            scored.push((seat, score));
        }
        let best = scored
            .iter()
            .map(|(_, s)| *s)
            .max()
            .ok_or_else(|| GameError::MalformedHand("no seat reached showdown".into()))?;
        let winners = scored
            .into_iter()
            .filter(|(_, s)| *s == best)
            .map(|(seat, _)| seat)
            .collect();
        Ok((winners, best))
    }
}

fn phase_of(street: Street) -> Phase {
    match street {
        Street::Preflop => Phase::Preflop,
        Street::Flop => Phase::Flop,
        Street::Turn => Phase::Turn,
        Street::River => Phase::River,
    }
}

fn show(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
