//! `sim`: computer players only, optionally recording every hand as JSONL.
//!
//! Each opponent gets its own seed derived from the session seed, so a run
//! is reproducible from the seed printed in its first line of output.

use std::io::Write;
use std::time::Instant;

use holdem_ai::{AiKind, create_ai};
use holdem_engine::engine::Engine;
use holdem_engine::logger::HandLogger;
use holdem_engine::provider::{ActionProvider, NullPresenter};
use log::{debug, info};

use crate::config;
use crate::error::CliError;
use crate::ui;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub hands: u32,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub players: usize,
    pub opponent: AiKind,
}

pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load_with_sources()?.config;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let names = (0..opts.players).map(|i| format!("Bot {}", i)).collect();
    let mut engine = Engine::new(names, cfg.table_config(), Some(seed))?;
    let mut providers: Vec<Box<dyn ActionProvider>> = (0..opts.players)
        .map(|i| create_ai(opts.opponent, seed.wrapping_add(i as u64)))
        .collect();
    let mut logger = match &opts.output {
        Some(path) => Some(HandLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: players={} ai={} hands={} seed={}",
        opts.players, opts.opponent, opts.hands, seed
    )?;

    let started = Instant::now();
    let mut played = 0u32;
    let mut showdowns = 0u32;
    while played < opts.hands {
        if engine.table().funded_count() < 2 {
            ui::display_warning(
                err,
                &format!("stopped after {} hands: one seat holds every chip", played),
            )?;
            break;
        }
        let outcome = engine.play_hand(&mut providers, &mut NullPresenter)?;
        if outcome.showdown {
            showdowns += 1;
        }
        if let Some(logger) = logger.as_mut() {
            let id = logger.write(&outcome.record)?;
            debug!("recorded hand {}", id);
        }
        played += 1;
    }
    info!(
        "simulated {} hands in {:.2?}",
        played,
        started.elapsed()
    );

    writeln!(out, "Simulated: {} hands", played)?;
    writeln!(out, "Showdowns: {}", showdowns)?;
    for p in &engine.table().seats {
        writeln!(out, "  {:<12} ${}", p.name(), p.stack())?;
    }
    if let Some(path) = &opts.output {
        writeln!(out, "Hand histories: {}", path)?;
    }
    Ok(())
}
