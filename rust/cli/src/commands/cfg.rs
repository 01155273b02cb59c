//! `cfg`: prints the resolved configuration with the source of every value.
//!
//! ```json
//! {
//!   "blind": { "source": "env", "value": 50 },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "blind": {
            "value": config.blind,
            "source": sources.blind,
        },
        "min_raise": {
            "value": config.min_raise,
            "source": sources.min_raise,
        },
        "max_invalid_actions": {
            "value": config.max_invalid_actions,
            "source": sources.max_invalid_actions,
        },
        "burn_cards": {
            "value": config.burn_cards,
            "source": sources.burn_cards,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
