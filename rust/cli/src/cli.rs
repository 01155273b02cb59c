//! Command-line argument types.

use clap::{Parser, Subcommand, ValueEnum};
use holdem_ai::AiKind;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Six-seat Texas Hold'em at the terminal"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play against computer opponents, entering your actions on stdin
    Play {
        /// Hands to play before the session ends
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Your name at the table
        #[arg(long)]
        name: Option<String>,
        /// Seat index to sit in (0-based)
        #[arg(long)]
        seat: Option<usize>,
        /// Seats at the table, including yours
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=6))]
        players: u8,
        #[arg(long, value_enum, default_value_t = Opponent::Baseline)]
        ai: Opponent,
    },
    /// Let computer players play each other and optionally record the hands
    Sim {
        #[arg(long)]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// JSONL file for hand histories
        #[arg(long)]
        output: Option<String>,
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=6))]
        players: u8,
        #[arg(long, value_enum, default_value_t = Opponent::Baseline)]
        ai: Opponent,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

/// Strategy for computer seats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// Hand-class heuristic with seeded randomness
    Baseline,
    /// Always checks or calls
    Passive,
}

impl Opponent {
    pub fn kind(&self) -> AiKind {
        match self {
            Opponent::Baseline => AiKind::Baseline,
            Opponent::Passive => AiKind::Passive,
        }
    }
}
