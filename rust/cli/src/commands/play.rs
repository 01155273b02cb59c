//! `play`: one human seat against computer opponents.
//!
//! The human types actions on stdin. Prompts and rejections go to the error
//! stream so the table log on the output stream stays clean. `q` ends the
//! session after refunding the hand in progress; closing stdin does the same
//! but exits as interrupted.

use std::cell::Cell;
use std::io::{BufRead, Write};

use holdem_ai::{AiKind, create_ai};
use holdem_engine::engine::{Engine, SessionSummary};
use holdem_engine::errors::GameError;
use holdem_engine::player::Action;
use holdem_engine::provider::ActionProvider;
use holdem_engine::rules::LegalActions;
use holdem_engine::table::TableState;
use log::info;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_hole};
use crate::io_utils::read_stdin_line;
use crate::ui::{self, ConsolePresenter};
use crate::validation::{ParseResult, parse_player_action, validate_name, validate_seat};

#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// `None` plays until the human quits or only one seat has chips.
    pub hands: Option<u32>,
    pub seed: Option<u64>,
    pub name: Option<String>,
    pub seat: Option<usize>,
    pub players: usize,
    pub opponent: AiKind,
}

/// Seat driven by a person typing at the terminal.
pub struct HumanProvider<'a> {
    input: &'a mut dyn BufRead,
    prompt: &'a mut dyn Write,
    closed: &'a Cell<bool>,
}

impl<'a> HumanProvider<'a> {
    /// `closed` is set when input runs out, so the caller can tell that apart from `q`.
    pub fn new(input: &'a mut dyn BufRead, prompt: &'a mut dyn Write, closed: &'a Cell<bool>) -> Self {
        Self {
            input,
            prompt,
            closed,
        }
    }
}

impl ActionProvider for HumanProvider<'_> {
    fn decide(
        &mut self,
        seat: usize,
        table: &TableState,
        legal: &LegalActions,
    ) -> Result<Action, GameError> {
        let me = &table.seats[seat];
        let _ = writeln!(
            self.prompt,
            "{}: {} board {} pot ${} to call ${}",
            me.name(),
            format_hole(&me.hole_cards(), true),
            format_board(&table.board()),
            table.pot,
            legal.to_call
        );
        let _ = writeln!(self.prompt, "Options: {}", legal.labels().join(" | "));
        loop {
            let _ = write!(self.prompt, "> ");
            let _ = self.prompt.flush();
            let Some(line) = read_stdin_line(self.input) else {
                self.closed.set(true);
                return Err(GameError::Cancelled);
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => return Ok(action),
                ParseResult::Quit => return Err(GameError::Cancelled),
                ParseResult::Invalid(msg) => {
                    let _ = ui::write_error(self.prompt, &msg);
                }
            }
        }
    }

    fn rejected(&mut self, _seat: usize, err: &GameError) {
        let _ = ui::write_error(self.prompt, &err.to_string());
    }
}

pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    if opts.hands == Some(0) {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let seat = opts.seat.unwrap_or(0);
    validate_seat(seat, opts.players).map_err(CliError::InvalidInput)?;
    let name = validate_name(opts.name.as_deref().unwrap_or("You")).map_err(CliError::InvalidInput)?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let names: Vec<String> = (0..opts.players)
        .map(|i| {
            if i == seat {
                name.clone()
            } else {
                format!("Bot {}", i)
            }
        })
        .collect();
    let mut engine = Engine::new(names, cfg.table_config(), Some(seed))?;

    writeln!(
        out,
        "play: players={} ai={} seed={}",
        opts.players, opts.opponent, seed
    )?;
    writeln!(out, "You are {} in seat {}. Type q to leave.", name, seat)?;

    let closed = Cell::new(false);
    let mut providers: Vec<Box<dyn ActionProvider + '_>> = Vec::with_capacity(opts.players);
    for i in (0..opts.players).filter(|&i| i != seat) {
        providers.push(create_ai(opts.opponent, seed.wrapping_add(i as u64)));
    }
    providers.insert(seat, Box::new(HumanProvider::new(stdin, err, &closed)));
    let summary = play_session(&mut engine, &mut providers, seat, opts.hands, out)?;

    if summary.cancelled {
        if closed.get() {
            return Err(CliError::Interrupted("input closed".to_string()));
        }
        writeln!(out, "Left the table.")?;
    }
    Ok(())
}

/// Plays until the hand limit, a quit, one funded seat, or the human seat
/// running out of chips, then prints the final stacks.
fn play_session(
    engine: &mut Engine,
    providers: &mut [Box<dyn ActionProvider + '_>],
    seat: usize,
    hands: Option<u32>,
    out: &mut dyn Write,
) -> Result<SessionSummary, CliError> {
    let summary = {
        let mut presenter = ConsolePresenter::new(&mut *out, Some(seat));
        engine.run_while(providers, &mut presenter, hands, |t| {
            t.seats[seat].stack() > 0
        })?
    };
    info!("play session ended after {} hands", summary.hands_played);

    write_summary(&summary, out)?;
    if !summary.cancelled && engine.table().seats[seat].stack() == 0 {
        writeln!(out, "Game over - you ran out of chips.")?;
    }
    Ok(summary)
}

fn write_summary(summary: &SessionSummary, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Hands played: {}", summary.hands_played)?;
    for (name, stack) in &summary.stacks {
        writeln!(out, "  {:<12} ${}", name, stack)?;
    }
    Ok(())
}
