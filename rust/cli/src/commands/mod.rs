//! One module per subcommand.
//!
//! Each exposes `handle_<name>_command`, takes its output streams as
//! `&mut dyn Write`, and reports failure as [`CliError`](crate::error::CliError).

mod cfg;
mod play;
mod sim;

pub use cfg::handle_cfg_command;
pub use play::{HumanProvider, PlayOptions, handle_play_command};
pub use sim::{SimOptions, handle_sim_command};
